use crate::error::ApiError;
use crate::models::dtos::CreateMerchantAccountRequest;
use crate::models::entities::{MerchantAccount, NewMerchantAccount};
use crate::models::enums::{AccountType, VerificationStatus};
use crate::schema::merchant_accounts;
use crate::services::guide_service::GuideService;
use diesel::prelude::*;
use tracing::{error, info};
use uuid::Uuid;

pub struct MerchantService;

impl MerchantService {
    /// Register the payout destination for a guide. One account per guide;
    /// verification starts pending and is flipped by an external reviewer.
    pub fn create_account(
        conn: &mut PgConnection,
        guide_id: Uuid,
        req: &CreateMerchantAccountRequest,
    ) -> Result<MerchantAccount, ApiError> {
        GuideService::fetch(conn, guide_id)?;

        match req.account_type {
            AccountType::BankAccount => {
                let complete = req.bank_name.is_some()
                    && req.account_number.is_some()
                    && req.ifsc_code.is_some()
                    && req.account_holder_name.is_some();
                if !complete {
                    return Err(ApiError::Policy(
                        "Bank accounts require bank_name, account_number, ifsc_code and account_holder_name"
                            .to_string(),
                    ));
                }
            }
            AccountType::Upi => {
                if req.upi_id.is_none() {
                    return Err(ApiError::Policy("UPI accounts require upi_id".to_string()));
                }
            }
            AccountType::Wallet => {}
        }

        let existing = merchant_accounts::table
            .filter(merchant_accounts::guide_id.eq(guide_id))
            .select(merchant_accounts::id)
            .first::<Uuid>(conn)
            .optional()
            .map_err(ApiError::Database)?;

        if existing.is_some() {
            return Err(ApiError::Conflict(
                "A merchant account already exists for this guide".to_string(),
            ));
        }

        let account = diesel::insert_into(merchant_accounts::table)
            .values(NewMerchantAccount {
                guide_id,
                account_type: req.account_type.to_string(),
                bank_name: req.bank_name.clone(),
                account_number: req.account_number.clone(),
                ifsc_code: req.ifsc_code.clone(),
                account_holder_name: req.account_holder_name.clone(),
                upi_id: req.upi_id.clone(),
                is_verified: false,
                verification_status: VerificationStatus::Pending.to_string(),
            })
            .returning(MerchantAccount::as_returning())
            .get_result::<MerchantAccount>(conn)
            .map_err(|e| {
                error!("Merchant account insert failed: {}", e);
                ApiError::Database(e)
            })?;

        info!(
            "Merchant account created: id={}, guide={}, type={}",
            account.id, guide_id, account.account_type
        );
        Ok(account)
    }

    pub fn account_for(
        conn: &mut PgConnection,
        guide_id: Uuid,
    ) -> Result<MerchantAccount, ApiError> {
        merchant_accounts::table
            .filter(merchant_accounts::guide_id.eq(guide_id))
            .select(MerchantAccount::as_select())
            .first(conn)
            .optional()
            .map_err(ApiError::Database)?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Merchant account for guide {}", guide_id))
            })
    }
}
