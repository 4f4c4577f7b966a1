pub mod add_payment_method;
pub mod create_booking;
pub mod create_payout;
pub mod current_user;
pub mod earnings;
pub mod fail_transaction;
pub mod get_guide;
pub mod health;
pub mod merchant_account;
pub mod payment_methods;
pub mod record_transaction;
pub mod register_guide;
pub mod remove_payment_method;
pub mod search_guides;
pub mod set_default_method;
pub mod settle_transaction;
pub mod transition_booking;
pub mod user_bookings;
pub mod user_payouts;
pub mod user_transactions;
