use crate::config::security_config::{current_user_id, Claims};
use crate::error::ApiError;
use crate::models::dtos::AddPaymentMethodRequest;
use crate::models::entities::PaymentMethod;
use crate::models::AppState;
use crate::services::payment_method_service::PaymentMethodService;
use axum::{extract::State, Extension, Json};
use http::StatusCode;
use std::sync::Arc;
use tracing::{error, info};
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/payment_methods",
    request_body = AddPaymentMethodRequest,
    responses(
        (status = 201, description = "Payment method stored; first method becomes default", body = PaymentMethod),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "PaymentMethods"
)]
pub async fn add_payment_method(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<AddPaymentMethodRequest>,
) -> Result<(StatusCode, Json<PaymentMethod>), (StatusCode, String)> {
    info!("Add payment method: user = {}", claims.sub);

    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let user_id = current_user_id(&claims)?;

    let conn = &mut state.db.get().map_err(|e| {
        error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let method = PaymentMethodService::add(conn, user_id, &req)?;

    Ok((StatusCode::CREATED, Json(method)))
}
