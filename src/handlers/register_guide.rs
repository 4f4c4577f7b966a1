use crate::config::security_config::{current_user_id, Claims};
use crate::error::ApiError;
use crate::models::dtos::RegisterGuideRequest;
use crate::models::entities::Guide;
use crate::models::AppState;
use crate::services::guide_service::GuideService;
use axum::{extract::State, Extension, Json};
use http::StatusCode;
use std::sync::Arc;
use tracing::{error, info};
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/guides/register",
    request_body = RegisterGuideRequest,
    responses(
        (status = 201, description = "Guide registered", body = Guide),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Guide already registered"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Guides"
)]
pub async fn register_guide(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<RegisterGuideRequest>,
) -> Result<(StatusCode, Json<Guide>), (StatusCode, String)> {
    info!("Guide registration request from {}", claims.sub);

    // Validation errors are reported before any write lands.
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let user_id = current_user_id(&claims)?;

    let conn = &mut state.db.get().map_err(|e| {
        error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let guide = GuideService::register(conn, user_id, &req)?;

    Ok((StatusCode::CREATED, Json(guide)))
}
