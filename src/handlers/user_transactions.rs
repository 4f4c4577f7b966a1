use crate::config::security_config::{current_user_id, Claims};
use crate::error::ApiError;
use crate::models::entities::Transaction;
use crate::models::AppState;
use crate::services::ledger_service::LedgerService;
use axum::{extract::State, Extension, Json};
use http::StatusCode;
use serde::Serialize;
use std::sync::Arc;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
}

#[utoipa::path(
    get,
    path = "/api/transactions",
    responses(
        (status = 200, description = "Ledger entries where the principal is payer or payee", body = TransactionsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Ledger"
)]
pub async fn user_transactions(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<TransactionsResponse>, (StatusCode, String)> {
    let user_id = current_user_id(&claims)?;

    let conn = &mut state.db.get().map_err(|e| {
        error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let transactions = LedgerService::transactions_for(conn, user_id)?;

    Ok(Json(TransactionsResponse { transactions }))
}
