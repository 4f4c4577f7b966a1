use crate::config::security_config::{current_user_id, Claims};
use crate::error::ApiError;
use crate::models::dtos::EarningsResponse;
use crate::models::AppState;
use crate::services::guide_service::GuideService;
use crate::services::ledger_service::LedgerService;
use axum::{extract::State, Extension, Json};
use http::StatusCode;
use std::sync::Arc;
use tracing::error;

#[utoipa::path(
    get,
    path = "/api/earnings",
    responses(
        (status = 200, description = "Total settled earnings of the principal's guide listing", body = EarningsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No guide registration for this principal"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Ledger"
)]
pub async fn guide_earnings(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<EarningsResponse>, (StatusCode, String)> {
    let user_id = current_user_id(&claims)?;

    let conn = &mut state.db.get().map_err(|e| {
        error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let guide = GuideService::for_profile(conn, user_id)?
        .ok_or_else(|| ApiError::NotFound("No guide registration for this profile".to_string()))?;

    let total_earnings = LedgerService::aggregate_earnings(conn, guide.id)?;

    Ok(Json(EarningsResponse {
        guide_id: guide.id,
        total_earnings,
        currency: "INR".to_string(),
    }))
}
