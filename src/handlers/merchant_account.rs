use crate::config::security_config::{current_user_id, Claims};
use crate::error::ApiError;
use crate::models::dtos::CreateMerchantAccountRequest;
use crate::models::entities::MerchantAccount;
use crate::models::AppState;
use crate::services::guide_service::GuideService;
use crate::services::merchant_service::MerchantService;
use axum::{extract::State, Extension, Json};
use http::StatusCode;
use std::sync::Arc;
use tracing::{error, info};
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/merchant_account",
    request_body = CreateMerchantAccountRequest,
    responses(
        (status = 201, description = "Merchant account created, verification pending", body = MerchantAccount),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No guide registration for this principal"),
        (status = 409, description = "Merchant account already exists"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Payouts"
)]
pub async fn create_merchant_account(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateMerchantAccountRequest>,
) -> Result<(StatusCode, Json<MerchantAccount>), (StatusCode, String)> {
    info!("Merchant account request from {}", claims.sub);

    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let user_id = current_user_id(&claims)?;

    let conn = &mut state.db.get().map_err(|e| {
        error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let guide = GuideService::for_profile(conn, user_id)?
        .ok_or_else(|| ApiError::NotFound("No guide registration for this profile".to_string()))?;

    let account = MerchantService::create_account(conn, guide.id, &req)?;

    Ok((StatusCode::CREATED, Json(account)))
}

#[utoipa::path(
    get,
    path = "/api/merchant_account",
    responses(
        (status = 200, description = "The principal's merchant account", body = MerchantAccount),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No guide registration or merchant account"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Payouts"
)]
pub async fn merchant_account_details(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<MerchantAccount>, (StatusCode, String)> {
    let user_id = current_user_id(&claims)?;

    let conn = &mut state.db.get().map_err(|e| {
        error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let guide = GuideService::for_profile(conn, user_id)?
        .ok_or_else(|| ApiError::NotFound("No guide registration for this profile".to_string()))?;

    let account = MerchantService::account_for(conn, guide.id)?;

    Ok(Json(account))
}
