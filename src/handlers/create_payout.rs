use crate::config::security_config::{current_user_id, Claims};
use crate::error::ApiError;
use crate::models::dtos::CreatePayoutRequest;
use crate::models::entities::Payout;
use crate::models::AppState;
use crate::services::guide_service::GuideService;
use crate::services::payout_service::PayoutService;
use axum::{extract::State, Extension, Json};
use http::StatusCode;
use std::sync::Arc;
use tracing::{error, info};
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/payouts",
    request_body = CreatePayoutRequest,
    responses(
        (status = 201, description = "Payout created for the settled transactions", body = Payout),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Guide, merchant account or transaction not found"),
        (status = 409, description = "Unverified account or transactions already paid out"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Payouts"
)]
pub async fn create_payout(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreatePayoutRequest>,
) -> Result<(StatusCode, Json<Payout>), (StatusCode, String)> {
    info!(
        "Payout request from {} covering {} transaction(s)",
        claims.sub,
        req.transaction_ids.len()
    );

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

    let payout = PayoutService::create_payout(conn, guide.id, &req)?;

    Ok((StatusCode::CREATED, Json(payout)))
}
