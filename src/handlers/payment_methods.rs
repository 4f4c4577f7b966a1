use crate::config::security_config::{current_user_id, Claims};
use crate::error::ApiError;
use crate::models::entities::PaymentMethod;
use crate::models::AppState;
use crate::services::payment_method_service::PaymentMethodService;
use axum::{extract::State, Extension, Json};
use http::StatusCode;
use serde::Serialize;
use std::sync::Arc;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct PaymentMethodsResponse {
    pub payment_methods: Vec<PaymentMethod>,
}

#[utoipa::path(
    get,
    path = "/api/payment_methods",
    responses(
        (status = 200, description = "The principal's payment methods, default first", body = PaymentMethodsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "PaymentMethods"
)]
pub async fn payment_methods(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<PaymentMethodsResponse>, (StatusCode, String)> {
    let user_id = current_user_id(&claims)?;

    let conn = &mut state.db.get().map_err(|e| {
        error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let methods = PaymentMethodService::list(conn, user_id)?;

    Ok(Json(PaymentMethodsResponse {
        payment_methods: methods,
    }))
}
