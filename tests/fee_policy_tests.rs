use villagestay::models::enums::TransactionType;
use villagestay::services::fee_policy::{fees_for, payout_fee, service_fee};

#[test]
fn test_service_fee_is_ten_percent() {
    // ₹1200 booking -> ₹120 fee
    assert_eq!(service_fee(120_000), 12_000);
    // ₹500 booking -> ₹50 fee
    assert_eq!(service_fee(50_000), 5_000);
}

#[test]
fn test_service_fee_rounds_half_up() {
    // 10% of 25 paise is 2.5 paise, rounds to 3
    assert_eq!(service_fee(25), 3);
    // 10% of 24 paise is 2.4 paise, rounds to 2
    assert_eq!(service_fee(24), 2);
    assert_eq!(service_fee(0), 0);
}

#[test]
fn test_payout_fee_slabs() {
    // below ₹5,000 the flat fee is ₹50
    assert_eq!(payout_fee(100_000), 5_000);
    assert_eq!(payout_fee(499_999), 5_000);
    // at or above ₹5,000 it is ₹100
    assert_eq!(payout_fee(500_000), 10_000);
    assert_eq!(payout_fee(2_000_000), 10_000);
}

#[test]
fn test_fees_by_transaction_type() {
    assert_eq!(fees_for(TransactionType::BookingPayment, 120_000), 12_000);
    assert_eq!(fees_for(TransactionType::Payout, 120_000), 5_000);
    assert_eq!(fees_for(TransactionType::Payout, 600_000), 10_000);
    assert_eq!(fees_for(TransactionType::Refund, 120_000), 0);
    assert_eq!(fees_for(TransactionType::Fee, 120_000), 0);
}

#[test]
fn test_service_fee_never_overflows_on_large_amounts() {
    let fee = fees_for(TransactionType::BookingPayment, i64::MAX / 5);
    assert!(fee >= 0);
    // i64::MAX ends in 7, so the half-up rounding adds one.
    assert_eq!(service_fee(i64::MAX), i64::MAX / 10 + 1);
}

#[test]
fn test_net_amount_after_booking_fee() {
    let amount = 120_000i64;
    let fees = fees_for(TransactionType::BookingPayment, amount);
    assert_eq!(amount - fees, 108_000);
}
