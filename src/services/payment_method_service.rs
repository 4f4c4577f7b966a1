use crate::error::ApiError;
use crate::models::dtos::AddPaymentMethodRequest;
use crate::models::entities::{NewPaymentMethod, PaymentMethod};
use crate::models::enums::MethodType;
use crate::schema::payment_methods;
use chrono::Utc;
use diesel::prelude::*;
use tracing::{error, info};
use uuid::Uuid;

pub struct PaymentMethodService;

impl PaymentMethodService {
    pub fn list(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Vec<PaymentMethod>, ApiError> {
        payment_methods::table
            .filter(payment_methods::user_id.eq(user_id))
            .order((
                payment_methods::is_default.desc(),
                payment_methods::created_at.asc(),
            ))
            .select(PaymentMethod::as_select())
            .load(conn)
            .map_err(ApiError::Database)
    }

    /// The user's first method becomes the default; later ones do not.
    /// Two concurrent first inserts both see count 0, but the partial
    /// unique index on (user_id) WHERE is_default rejects the second
    /// insert, which surfaces as Conflict.
    pub fn add(
        conn: &mut PgConnection,
        user_id: Uuid,
        req: &AddPaymentMethodRequest,
    ) -> Result<PaymentMethod, ApiError> {
        match req.method_type {
            MethodType::Card => {
                if req.last_four.is_none() {
                    return Err(ApiError::Policy("Card methods require last_four".to_string()));
                }
            }
            MethodType::Upi => {
                if req.upi_id.is_none() {
                    return Err(ApiError::Policy("UPI methods require upi_id".to_string()));
                }
            }
            MethodType::Netbanking | MethodType::Wallet => {}
        }

        let method = conn.transaction(|conn| {
            let existing: i64 = payment_methods::table
                .filter(payment_methods::user_id.eq(user_id))
                .count()
                .get_result(conn)
                .map_err(ApiError::Database)?;

            diesel::insert_into(payment_methods::table)
                .values(NewPaymentMethod {
                    user_id,
                    method_type: req.method_type.to_string(),
                    provider: req.provider.clone(),
                    last_four: req.last_four.clone(),
                    upi_id: req.upi_id.clone(),
                    is_default: existing == 0,
                })
                .returning(PaymentMethod::as_returning())
                .get_result::<PaymentMethod>(conn)
                .map_err(ApiError::Database)
        })?;

        info!(
            "Payment method added: id={}, user={}, default={}",
            method.id, user_id, method.is_default
        );
        Ok(method)
    }

    /// Clear-then-set inside one transaction, both statements scoped by
    /// user id, so no observer sees two defaults or none.
    pub fn set_default(
        conn: &mut PgConnection,
        user_id: Uuid,
        method_id: Uuid,
    ) -> Result<PaymentMethod, ApiError> {
        conn.transaction(|conn| {
            diesel::update(
                payment_methods::table
                    .filter(payment_methods::user_id.eq(user_id))
                    .filter(payment_methods::id.ne(method_id)),
            )
            .set((
                payment_methods::is_default.eq(false),
                payment_methods::updated_at.eq(Utc::now()),
            ))
            .execute(conn)
            .map_err(ApiError::Database)?;

            diesel::update(
                payment_methods::table
                    .filter(payment_methods::id.eq(method_id))
                    .filter(payment_methods::user_id.eq(user_id)),
            )
            .set((
                payment_methods::is_default.eq(true),
                payment_methods::updated_at.eq(Utc::now()),
            ))
            .returning(PaymentMethod::as_returning())
            .get_result::<PaymentMethod>(conn)
            .optional()
            .map_err(ApiError::Database)?
            .ok_or_else(|| {
                error!("set_default on unknown method {} for user {}", method_id, user_id);
                ApiError::NotFound(format!("Payment method {}", method_id))
            })
        })
    }

    /// Removing the default promotes the oldest remaining method so the
    /// "exactly one default while any exist" invariant holds.
    pub fn remove(
        conn: &mut PgConnection,
        user_id: Uuid,
        method_id: Uuid,
    ) -> Result<(), ApiError> {
        conn.transaction(|conn| {
            let removed = diesel::delete(
                payment_methods::table
                    .filter(payment_methods::id.eq(method_id))
                    .filter(payment_methods::user_id.eq(user_id)),
            )
            .returning(PaymentMethod::as_returning())
            .get_result::<PaymentMethod>(conn)
            .optional()
            .map_err(ApiError::Database)?
            .ok_or_else(|| ApiError::NotFound(format!("Payment method {}", method_id)))?;

            if removed.is_default {
                let oldest = payment_methods::table
                    .filter(payment_methods::user_id.eq(user_id))
                    .order(payment_methods::created_at.asc())
                    .select(payment_methods::id)
                    .first::<Uuid>(conn)
                    .optional()
                    .map_err(ApiError::Database)?;

                if let Some(oldest_id) = oldest {
                    diesel::update(payment_methods::table.find(oldest_id))
                        .set((
                            payment_methods::is_default.eq(true),
                            payment_methods::updated_at.eq(Utc::now()),
                        ))
                        .execute(conn)
                        .map_err(ApiError::Database)?;
                }
            }

            Ok::<(), ApiError>(())
        })
    }
}
