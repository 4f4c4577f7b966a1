use crate::config::security_config::Claims;
use crate::error::ApiError;
use crate::models::entities::Transaction;
use crate::models::AppState;
use crate::services::ledger_service::LedgerService;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use http::StatusCode;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/transactions/{transaction_id}/settle",
    params(("transaction_id" = Uuid, Path, description = "Transaction id")),
    responses(
        (status = 200, description = "Settled transaction with fees and net_amount", body = Transaction),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Transaction not found"),
        (status = 409, description = "Transaction not settleable"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Ledger"
)]
pub async fn settle_transaction(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(transaction_id): Path<Uuid>,
) -> Result<Json<Transaction>, (StatusCode, String)> {
    info!(
        "Settle transaction: id = {}, actor = {}",
        transaction_id, claims.sub
    );

    let conn = &mut state.db.get().map_err(|e| {
        error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let transaction = LedgerService::settle(conn, transaction_id)?;

    Ok(Json(transaction))
}
