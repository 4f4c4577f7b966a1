use crate::models::enums::TransactionType;

/// Traveler-side service fee taken on booking payments: 10% of the base
/// booking price, rounded half up.
pub const SERVICE_FEE_PERCENT: i64 = 10;

/// Flat disbursement fee slabs for payouts, in paise.
const PAYOUT_FEE_SMALL: i64 = 5_000; // ₹50 below the threshold
const PAYOUT_FEE_LARGE: i64 = 10_000; // ₹100 at or above
const PAYOUT_FEE_THRESHOLD: i64 = 500_000; // ₹5,000

pub fn service_fee(amount: i64) -> i64 {
    // Widen before the multiply: 10 * i64::MAX does not fit in i64.
    ((amount as i128 * SERVICE_FEE_PERCENT as i128 + 50) / 100) as i64
}

pub fn payout_fee(amount: i64) -> i64 {
    if amount < PAYOUT_FEE_THRESHOLD {
        PAYOUT_FEE_SMALL
    } else {
        PAYOUT_FEE_LARGE
    }
}

/// Fee charged when a transaction of the given type settles. Refunds and
/// platform-fee entries settle at face value.
pub fn fees_for(transaction_type: TransactionType, amount: i64) -> i64 {
    match transaction_type {
        TransactionType::BookingPayment => service_fee(amount),
        TransactionType::Payout => payout_fee(amount),
        TransactionType::Refund | TransactionType::Fee => 0,
    }
}
