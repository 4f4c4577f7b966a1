use crate::config::security_config::{current_user_id, Claims};
use crate::error::ApiError;
use crate::models::entities::Payout;
use crate::models::AppState;
use crate::services::guide_service::GuideService;
use crate::services::payout_service::PayoutService;
use axum::{extract::State, Extension, Json};
use http::StatusCode;
use serde::Serialize;
use std::sync::Arc;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct PayoutsResponse {
    pub payouts: Vec<Payout>,
}

#[utoipa::path(
    get,
    path = "/api/payouts",
    responses(
        (status = 200, description = "Payouts of the principal's guide listing, newest first", body = PayoutsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No guide registration for this principal"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Payouts"
)]
pub async fn user_payouts(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<PayoutsResponse>, (StatusCode, String)> {
    let user_id = current_user_id(&claims)?;

    let conn = &mut state.db.get().map_err(|e| {
        error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let guide = GuideService::for_profile(conn, user_id)?
        .ok_or_else(|| ApiError::NotFound("No guide registration for this profile".to_string()))?;

    let payouts = PayoutService::payouts_for(conn, guide.id)?;

    Ok(Json(PayoutsResponse { payouts }))
}
