use crate::config::security_config::{current_user_id, Claims};
use crate::error::ApiError;
use crate::models::dtos::RecordTransactionRequest;
use crate::models::entities::Transaction;
use crate::models::AppState;
use crate::services::ledger_service::LedgerService;
use axum::{extract::State, Extension, Json};
use http::StatusCode;
use std::sync::Arc;
use tracing::{error, info};
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/transactions",
    request_body = RecordTransactionRequest,
    responses(
        (status = 201, description = "Pending ledger entry recorded", body = Transaction),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Payee or booking not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Ledger"
)]
pub async fn record_transaction(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<RecordTransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>), (StatusCode, String)> {
    info!(
        "Record transaction: payer = {}, payee = {}, type = {}, amount = {}",
        claims.sub, req.payee_id, req.transaction_type, req.amount
    );

    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let payer_id = current_user_id(&claims)?;

    let conn = &mut state.db.get().map_err(|e| {
        error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let transaction = LedgerService::record(conn, payer_id, &req)?;

    Ok((StatusCode::CREATED, Json(transaction)))
}
