use validator::Validate;
use villagestay::models::dtos::{AddPaymentMethodRequest, CreateBookingRequest, CreatePayoutRequest};
use villagestay::models::enums::MethodType;

#[test]
fn test_card_with_four_digit_suffix_passes() {
    let req = AddPaymentMethodRequest {
        method_type: MethodType::Card,
        provider: Some("visa".to_string()),
        last_four: Some("4242".to_string()),
        upi_id: None,
    };
    assert!(req.validate().is_ok());
}

#[test]
fn test_last_four_must_be_exactly_four_characters() {
    let req = AddPaymentMethodRequest {
        method_type: MethodType::Card,
        provider: Some("visa".to_string()),
        last_four: Some("42424".to_string()),
        upi_id: None,
    };
    let errs = req.validate().unwrap_err();
    assert!(errs.field_errors().contains_key("last_four"));
}

#[test]
fn test_method_type_wire_forms() {
    assert_eq!(MethodType::Card.to_string(), "card");
    assert_eq!(MethodType::Upi.to_string(), "upi");
    assert_eq!(MethodType::Netbanking.to_string(), "netbanking");
    assert_eq!(MethodType::Wallet.to_string(), "wallet");

    let parsed: MethodType = serde_json::from_str("\"upi\"").unwrap();
    assert_eq!(parsed, MethodType::Upi);
}

#[test]
fn test_payout_request_needs_at_least_one_transaction() {
    let req = CreatePayoutRequest {
        transaction_ids: vec![],
    };
    let errs = req.validate().unwrap_err();
    assert!(errs.field_errors().contains_key("transaction_ids"));
}

#[test]
fn test_booking_duration_and_guest_bounds() {
    let base = serde_json::json!({
        "guide_id": "7b3f3f1e-9f1a-4c58-b7ff-1f2a3b4c5d6e",
        "booking_date": "2027-03-14",
        "booking_time": "10:00:00",
        "duration_hours": 3,
        "number_of_guests": 2
    });
    let req: CreateBookingRequest = serde_json::from_value(base.clone()).unwrap();
    assert!(req.validate().is_ok());

    let mut too_short = base.clone();
    too_short["duration_hours"] = serde_json::json!(1);
    let req: CreateBookingRequest = serde_json::from_value(too_short).unwrap();
    let errs = req.validate().unwrap_err();
    assert!(errs.field_errors().contains_key("duration_hours"));

    let mut too_many = base;
    too_many["number_of_guests"] = serde_json::json!(7);
    let req: CreateBookingRequest = serde_json::from_value(too_many).unwrap();
    let errs = req.validate().unwrap_err();
    assert!(errs.field_errors().contains_key("number_of_guests"));
}
