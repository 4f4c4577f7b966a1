mod common;

use common::sample_transaction;
use uuid::Uuid;
use validator::Validate;
use villagestay::models::dtos::{RecordTransactionRequest, MAX_TRANSACTION_AMOUNT};
use villagestay::models::enums::{TransactionStatus, TransactionType};
use villagestay::services::fee_policy::fees_for;

#[test]
fn test_only_pending_and_processing_settle() {
    assert!(TransactionStatus::Pending.is_settleable());
    assert!(TransactionStatus::Processing.is_settleable());

    assert!(!TransactionStatus::Completed.is_settleable());
    assert!(!TransactionStatus::Failed.is_settleable());
    assert!(!TransactionStatus::Cancelled.is_settleable());
    assert!(!TransactionStatus::Refunded.is_settleable());
}

#[test]
fn test_fail_gate_mirrors_settle_gate() {
    // Marking failed shares the settle precondition: only pending or
    // processing entries may move, and failed is terminal.
    for status in [TransactionStatus::Pending, TransactionStatus::Processing] {
        assert!(status.is_settleable());
    }
    assert!(!TransactionStatus::Failed.is_settleable());
    assert_eq!(
        TransactionStatus::parse("failed").unwrap(),
        TransactionStatus::Failed
    );
}

#[test]
fn test_transaction_status_storage_forms() {
    assert_eq!(TransactionStatus::Pending.to_string(), "pending");
    assert_eq!(TransactionStatus::Processing.to_string(), "processing");
    assert_eq!(TransactionStatus::Completed.to_string(), "completed");
    assert_eq!(TransactionStatus::Failed.to_string(), "failed");
    assert_eq!(TransactionStatus::Refunded.to_string(), "refunded");
    assert!(TransactionStatus::parse("settled").is_err());
}

#[test]
fn test_transaction_type_storage_forms() {
    assert_eq!(TransactionType::BookingPayment.to_string(), "booking_payment");
    assert_eq!(TransactionType::Refund.to_string(), "refund");
    assert_eq!(TransactionType::Payout.to_string(), "payout");
    assert_eq!(TransactionType::Fee.to_string(), "fee");
    assert_eq!(
        TransactionType::parse("booking_payment").unwrap(),
        TransactionType::BookingPayment
    );
}

#[test]
fn test_settlement_math_on_booking_payment() {
    let amount = 120_000i64;
    let fees = fees_for(TransactionType::BookingPayment, amount);
    let net = amount - fees;

    let payee = Uuid::new_v4();
    let tx = sample_transaction(payee, amount, TransactionStatus::Completed, Some(net));

    assert_eq!(tx.fees, 12_000);
    assert_eq!(tx.net_amount, Some(108_000));
    assert_eq!(tx.amount, tx.fees + tx.net_amount.unwrap());
}

#[test]
fn test_earnings_fold_skips_unsettled_entries() {
    // Mirrors the aggregation over loaded net_amount columns: completed
    // rows carry Some(net), everything else contributes nothing.
    let net_amounts: Vec<Option<i64>> = vec![Some(108_000), None, Some(45_000), None];
    let total: i64 = net_amounts.into_iter().flatten().sum();
    assert_eq!(total, 153_000);
}

#[test]
fn test_recorded_amount_is_bounded() {
    let request = |amount: i64| RecordTransactionRequest {
        transaction_type: TransactionType::BookingPayment,
        payee_id: Uuid::new_v4(),
        amount,
        booking_id: None,
        payment_method_id: None,
        description: None,
    };

    assert!(request(1).validate().is_ok());
    assert!(request(MAX_TRANSACTION_AMOUNT).validate().is_ok());

    let errs = request(0).validate().unwrap_err();
    assert!(errs.field_errors().contains_key("amount"));

    let errs = request(MAX_TRANSACTION_AMOUNT + 1).validate().unwrap_err();
    assert!(errs.field_errors().contains_key("amount"));

    let errs = request(i64::MAX).validate().unwrap_err();
    assert!(errs.field_errors().contains_key("amount"));
}

#[test]
fn test_earnings_fold_empty_is_zero() {
    let net_amounts: Vec<Option<i64>> = vec![];
    let total: i64 = net_amounts.into_iter().flatten().sum();
    assert_eq!(total, 0);
}
