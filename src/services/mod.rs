pub mod booking_service;
pub mod fee_policy;
pub mod guide_service;
pub mod ledger_service;
pub mod merchant_service;
pub mod payment_method_service;
pub mod payout_service;
