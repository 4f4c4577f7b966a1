use crate::config::security_config::{current_user_id, Claims};
use crate::error::ApiError;
use crate::models::entities::PaymentMethod;
use crate::models::AppState;
use crate::services::payment_method_service::PaymentMethodService;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use http::StatusCode;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/payment_methods/{method_id}/default",
    params(("method_id" = Uuid, Path, description = "Payment method id")),
    responses(
        (status = 200, description = "The method now marked default", body = PaymentMethod),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Method not found for this user"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "PaymentMethods"
)]
pub async fn set_default_method(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(method_id): Path<Uuid>,
) -> Result<Json<PaymentMethod>, (StatusCode, String)> {
    info!(
        "Set default payment method: user = {}, method = {}",
        claims.sub, method_id
    );

    let user_id = current_user_id(&claims)?;

    let conn = &mut state.db.get().map_err(|e| {
        error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let method = PaymentMethodService::set_default(conn, user_id, method_id)?;

    Ok(Json(method))
}
