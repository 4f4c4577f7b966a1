use crate::error::ApiError;
use crate::models::dtos::RecordTransactionRequest;
use crate::models::entities::{NewTransaction, Transaction};
use crate::models::enums::{TransactionStatus, TransactionType};
use crate::schema::{bookings, profiles, transactions};
use crate::services::fee_policy;
use crate::services::guide_service::GuideService;
use chrono::Utc;
use diesel::prelude::*;
use tracing::{error, info};
use uuid::Uuid;

pub struct LedgerService;

impl LedgerService {
    /// Append a ledger entry in status pending. Fees and net_amount stay
    /// unset until settlement.
    pub fn record(
        conn: &mut PgConnection,
        payer_id: Uuid,
        req: &RecordTransactionRequest,
    ) -> Result<Transaction, ApiError> {
        let payee_exists = profiles::table
            .find(req.payee_id)
            .select(profiles::id)
            .first::<Uuid>(conn)
            .optional()
            .map_err(ApiError::Database)?;

        if payee_exists.is_none() {
            return Err(ApiError::NotFound(format!("Payee {}", req.payee_id)));
        }

        if let Some(booking_id) = req.booking_id {
            let booking_exists = bookings::table
                .find(booking_id)
                .select(bookings::id)
                .first::<Uuid>(conn)
                .optional()
                .map_err(ApiError::Database)?;

            if booking_exists.is_none() {
                return Err(ApiError::NotFound(format!("Booking {}", booking_id)));
            }
        }

        let transaction = diesel::insert_into(transactions::table)
            .values(NewTransaction {
                booking_id: req.booking_id,
                payer_id,
                payee_id: req.payee_id,
                payment_method_id: req.payment_method_id,
                amount: req.amount,
                currency: "INR".to_string(),
                transaction_type: req.transaction_type.to_string(),
                status: TransactionStatus::Pending.to_string(),
                gateway: None,
                gateway_transaction_id: None,
                description: req.description.clone(),
                fees: 0,
            })
            .returning(Transaction::as_returning())
            .get_result::<Transaction>(conn)
            .map_err(|e| {
                error!("Transaction insert failed: {}", e);
                ApiError::Database(e)
            })?;

        info!(
            "Transaction recorded: id={}, type={}, amount={}",
            transaction.id, transaction.transaction_type, transaction.amount
        );
        Ok(transaction)
    }

    /// Settle a pending/processing transaction: compute fees from the
    /// platform policy, set net_amount = amount - fees, stamp processed_at.
    /// Compare-and-swap on status, so a concurrent settle/fail loses.
    pub fn settle(
        conn: &mut PgConnection,
        transaction_id: Uuid,
    ) -> Result<Transaction, ApiError> {
        let tx = Self::fetch(conn, transaction_id)?;

        let status = TransactionStatus::parse(&tx.status)?;
        if !status.is_settleable() {
            return Err(ApiError::InvalidTransition {
                from: status.to_string(),
                to: TransactionStatus::Completed.to_string(),
            });
        }

        let tx_type = TransactionType::parse(&tx.transaction_type)?;
        let fees = fee_policy::fees_for(tx_type, tx.amount);
        let net_amount = tx.amount - fees;

        let settled = diesel::update(
            transactions::table.find(transaction_id).filter(
                transactions::status.eq_any(vec![
                    TransactionStatus::Pending.to_string(),
                    TransactionStatus::Processing.to_string(),
                ]),
            ),
        )
        .set((
            transactions::status.eq(TransactionStatus::Completed.to_string()),
            transactions::fees.eq(fees),
            transactions::net_amount.eq(Some(net_amount)),
            transactions::processed_at.eq(Some(Utc::now())),
            transactions::updated_at.eq(Utc::now()),
        ))
        .returning(Transaction::as_returning())
        .get_result::<Transaction>(conn)
        .optional()
        .map_err(ApiError::Database)?
        .ok_or_else(|| {
            ApiError::Conflict("Transaction was settled or failed concurrently".to_string())
        })?;

        info!(
            "Transaction settled: id={}, amount={}, fees={}, net={}",
            settled.id, settled.amount, fees, net_amount
        );
        Ok(settled)
    }

    /// pending/processing -> failed, terminal.
    pub fn mark_failed(
        conn: &mut PgConnection,
        transaction_id: Uuid,
    ) -> Result<Transaction, ApiError> {
        let tx = Self::fetch(conn, transaction_id)?;

        let status = TransactionStatus::parse(&tx.status)?;
        if !status.is_settleable() {
            return Err(ApiError::InvalidTransition {
                from: status.to_string(),
                to: TransactionStatus::Failed.to_string(),
            });
        }

        diesel::update(
            transactions::table.find(transaction_id).filter(
                transactions::status.eq_any(vec![
                    TransactionStatus::Pending.to_string(),
                    TransactionStatus::Processing.to_string(),
                ]),
            ),
        )
        .set((
            transactions::status.eq(TransactionStatus::Failed.to_string()),
            transactions::updated_at.eq(Utc::now()),
        ))
        .returning(Transaction::as_returning())
        .get_result::<Transaction>(conn)
        .optional()
        .map_err(ApiError::Database)?
        .ok_or_else(|| {
            ApiError::Conflict("Transaction was settled or failed concurrently".to_string())
        })
    }

    pub fn fetch(
        conn: &mut PgConnection,
        transaction_id: Uuid,
    ) -> Result<Transaction, ApiError> {
        transactions::table
            .find(transaction_id)
            .select(Transaction::as_select())
            .first(conn)
            .optional()
            .map_err(ApiError::Database)?
            .ok_or_else(|| ApiError::NotFound(format!("Transaction {}", transaction_id)))
    }

    /// Total earnings of a guide: the sum of net_amount over completed
    /// transactions paying the guide's owning profile. Re-derived from the
    /// transaction log on every call; no cached total exists to go stale.
    pub fn aggregate_earnings(
        conn: &mut PgConnection,
        guide_id: Uuid,
    ) -> Result<i64, ApiError> {
        let guide = GuideService::fetch(conn, guide_id)?;

        let nets: Vec<Option<i64>> = transactions::table
            .filter(transactions::payee_id.eq(guide.user_id))
            .filter(transactions::status.eq(TransactionStatus::Completed.to_string()))
            .select(transactions::net_amount)
            .load(conn)
            .map_err(ApiError::Database)?;

        Ok(nets.into_iter().flatten().sum())
    }

    /// Ledger entries where the principal is payer or payee, newest first.
    pub fn transactions_for(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Vec<Transaction>, ApiError> {
        transactions::table
            .filter(
                transactions::payer_id
                    .eq(user_id)
                    .or(transactions::payee_id.eq(user_id)),
            )
            .order(transactions::created_at.desc())
            .select(Transaction::as_select())
            .load(conn)
            .map_err(ApiError::Database)
    }
}
