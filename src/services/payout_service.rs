use crate::error::ApiError;
use crate::models::dtos::CreatePayoutRequest;
use crate::models::entities::{MerchantAccount, NewPayout, Payout, Transaction};
use crate::models::enums::{PayoutStatus, TransactionStatus, VerificationStatus};
use crate::schema::{merchant_accounts, payouts, transactions};
use crate::services::guide_service::GuideService;
use diesel::prelude::*;
use std::collections::HashSet;
use tracing::{error, info};
use uuid::Uuid;

/// Requested ids already covered by a prior payout. Failed payouts do not
/// count: their transactions may be retried.
pub fn already_paid_ids(requested: &[Uuid], prior: &[Vec<Uuid>]) -> Vec<Uuid> {
    let paid: HashSet<Uuid> = prior.iter().flatten().copied().collect();
    requested
        .iter()
        .copied()
        .filter(|id| paid.contains(id))
        .collect()
}

pub struct PayoutService;

impl PayoutService {
    /// Disburse a set of settled transactions to the guide's merchant
    /// account. Fails if the account is unverified, if any transaction is
    /// already covered by a non-failed payout, or if any referenced
    /// transaction is not a completed payment to this guide.
    pub fn create_payout(
        conn: &mut PgConnection,
        guide_id: Uuid,
        req: &CreatePayoutRequest,
    ) -> Result<Payout, ApiError> {
        let guide = GuideService::fetch(conn, guide_id)?;

        let unique: HashSet<Uuid> = req.transaction_ids.iter().copied().collect();
        if unique.len() != req.transaction_ids.len() {
            return Err(ApiError::Policy(
                "Duplicate transaction ids in payout request".to_string(),
            ));
        }

        // The prior-payout scan and the insert must observe the same payout
        // set. Locking the guide's unique merchant-account row serializes
        // concurrent payout attempts for that guide, so two requests naming
        // the same transaction cannot both pass the scan.
        let payout = conn.transaction(|conn| {
            let account = merchant_accounts::table
                .filter(merchant_accounts::guide_id.eq(guide_id))
                .for_update()
                .first::<MerchantAccount>(conn)
                .optional()
                .map_err(ApiError::Database)?
                .ok_or_else(|| {
                    ApiError::NotFound(format!("Merchant account for guide {}", guide_id))
                })?;

            let verification = VerificationStatus::parse(&account.verification_status)?;
            if verification != VerificationStatus::Verified {
                return Err(ApiError::Conflict(
                    "Merchant account is not verified".to_string(),
                ));
            }

            let prior: Vec<Vec<Uuid>> = payouts::table
                .filter(payouts::guide_id.eq(guide_id))
                .filter(payouts::status.ne(PayoutStatus::Failed.to_string()))
                .select(payouts::transaction_ids)
                .load(conn)
                .map_err(ApiError::Database)?;

            let dupes = already_paid_ids(&req.transaction_ids, &prior);
            if !dupes.is_empty() {
                error!(
                    "Double payout attempt for guide {}: {} transaction(s) already paid",
                    guide_id,
                    dupes.len()
                );
                return Err(ApiError::Conflict(format!(
                    "{} transaction(s) already included in a prior payout",
                    dupes.len()
                )));
            }

            let txs: Vec<Transaction> = transactions::table
                .filter(transactions::id.eq_any(&req.transaction_ids))
                .select(Transaction::as_select())
                .load(conn)
                .map_err(ApiError::Database)?;

            if txs.len() != req.transaction_ids.len() {
                return Err(ApiError::NotFound(
                    "One or more transactions do not exist".to_string(),
                ));
            }

            let mut amount: i64 = 0;
            for tx in &txs {
                if TransactionStatus::parse(&tx.status)? != TransactionStatus::Completed {
                    return Err(ApiError::Policy(format!(
                        "Transaction {} is not completed and cannot be paid out",
                        tx.id
                    )));
                }
                if tx.payee_id != guide.user_id {
                    return Err(ApiError::Policy(format!(
                        "Transaction {} does not belong to this guide",
                        tx.id
                    )));
                }
                let net = tx.net_amount.ok_or_else(|| {
                    ApiError::Internal(format!(
                        "Completed transaction {} has no net_amount",
                        tx.id
                    ))
                })?;
                amount += net;
            }

            diesel::insert_into(payouts::table)
                .values(NewPayout {
                    guide_id,
                    merchant_account_id: account.id,
                    amount,
                    currency: "INR".to_string(),
                    status: PayoutStatus::Pending.to_string(),
                    transaction_ids: req.transaction_ids.clone(),
                })
                .returning(Payout::as_returning())
                .get_result::<Payout>(conn)
                .map_err(|e| {
                    error!("Payout insert failed: {}", e);
                    ApiError::Database(e)
                })
        })?;

        info!(
            "Payout created: id={}, guide={}, amount={}, transactions={}",
            payout.id,
            guide_id,
            payout.amount,
            req.transaction_ids.len()
        );
        Ok(payout)
    }

    pub fn payouts_for(
        conn: &mut PgConnection,
        guide_id: Uuid,
    ) -> Result<Vec<Payout>, ApiError> {
        payouts::table
            .filter(payouts::guide_id.eq(guide_id))
            .order(payouts::created_at.desc())
            .select(Payout::as_select())
            .load(conn)
            .map_err(ApiError::Database)
    }
}
