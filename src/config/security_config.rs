use crate::error::ApiError;
use crate::models::AppState;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use http::HeaderMap;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

/// Claims minted by the external identity provider. This service only
/// verifies and consumes them; it never issues tokens.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub exp: usize,  // expiration time
    pub iat: usize,  // issued at
}

/// Resolve the authenticated principal id from verified claims.
pub fn current_user_id(claims: &Claims) -> Result<Uuid, ApiError> {
    Uuid::parse_str(&claims.sub).map_err(|e| ApiError::Auth(format!("Invalid user ID: {}", e)))
}

#[derive(Debug)]
pub enum AuthError {
    MissingHeader,
    InvalidFormat,
    InvalidToken(String),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::MissingHeader => write!(f, "Authorization header required"),
            AuthError::InvalidFormat => write!(f, "Invalid Authorization format"),
            AuthError::InvalidToken(msg) => write!(f, "Invalid token: {}", msg),
        }
    }
}

impl From<AuthError> for (StatusCode, String) {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingHeader => (
                StatusCode::UNAUTHORIZED,
                "Authorization header required".to_string(),
            ),
            AuthError::InvalidFormat => (
                StatusCode::BAD_REQUEST,
                "Invalid Authorization format".to_string(),
            ),
            AuthError::InvalidToken(msg) => {
                (StatusCode::UNAUTHORIZED, format!("Invalid token: {}", msg))
            }
        }
    }
}

fn extract_bearer_token(headers: &HeaderMap) -> Result<String, AuthError> {
    let auth_header = headers
        .get("Authorization")
        .ok_or(AuthError::MissingHeader)?
        .to_str()
        .map_err(|_| AuthError::InvalidFormat)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidFormat)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::InvalidFormat);
    }

    Ok(token.to_string())
}

pub fn verify_token(state: &AppState, token: &str) -> Result<Claims, String> {
    let validation = Validation::new(Algorithm::HS256);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(state.jwt_secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| format!("JWT verification error: {}", e))
}

pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = match extract_bearer_token(req.headers()) {
        Ok(token) => token,
        Err(error) => {
            let (status, message) = error.into();
            return Err((status, message).into_response());
        }
    };

    let claims = match verify_token(&state, &token) {
        Ok(claims) => claims,
        Err(e) => {
            warn!(
                "JWT verification failed for token ending in ...{}: {}",
                token.chars().rev().take(8).collect::<String>(),
                e
            );
            let error = AuthError::InvalidToken("Token verification failed".to_string());
            let (status, message) = error.into();
            return Err((status, message).into_response());
        }
    };

    let now = Utc::now().timestamp() as usize;
    if claims.exp < now {
        warn!("Token expired for user {}", claims.sub);
        let error = AuthError::InvalidToken("Token expired".to_string());
        let (status, message) = error.into();
        return Err((status, message).into_response());
    }

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
