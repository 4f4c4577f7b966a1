use crate::config::security_config::{current_user_id, Claims};
use crate::error::ApiError;
use crate::models::AppState;
use crate::services::payment_method_service::PaymentMethodService;
use axum::extract::{Path, State};
use axum::Extension;
use http::StatusCode;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[utoipa::path(
    delete,
    path = "/api/payment_methods/{method_id}",
    params(("method_id" = Uuid, Path, description = "Payment method id")),
    responses(
        (status = 204, description = "Payment method removed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Method not found for this user"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "PaymentMethods"
)]
pub async fn remove_payment_method(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(method_id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    info!(
        "Remove payment method: user = {}, method = {}",
        claims.sub, method_id
    );

    let user_id = current_user_id(&claims)?;

    let conn = &mut state.db.get().map_err(|e| {
        error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    PaymentMethodService::remove(conn, user_id, method_id)?;

    Ok(StatusCode::NO_CONTENT)
}
