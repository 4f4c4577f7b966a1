use crate::handlers::health::HealthResponse;
use crate::handlers::payment_methods::PaymentMethodsResponse;
use crate::handlers::user_bookings::BookingsResponse;
use crate::handlers::user_payouts::PayoutsResponse;
use crate::handlers::user_transactions::TransactionsResponse;
use crate::handlers::{
    add_payment_method::__path_add_payment_method, create_booking::__path_create_booking,
    create_payout::__path_create_payout, current_user::__path_current_user_details,
    earnings::__path_guide_earnings, fail_transaction::__path_fail_transaction,
    get_guide::__path_get_guide, health::__path_health,
    merchant_account::__path_create_merchant_account,
    merchant_account::__path_merchant_account_details,
    payment_methods::__path_payment_methods, record_transaction::__path_record_transaction,
    register_guide::__path_register_guide,
    remove_payment_method::__path_remove_payment_method, search_guides::__path_search_guides,
    set_default_method::__path_set_default_method,
    settle_transaction::__path_settle_transaction,
    transition_booking::__path_transition_booking, user_bookings::__path_user_bookings,
    user_payouts::__path_user_payouts, user_transactions::__path_user_transactions,
};
use crate::models::dtos::*;
use crate::models::entities::{
    Booking, Guide, MerchantAccount, PaymentMethod, Payout, Profile, Transaction,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        health, current_user_details, search_guides, get_guide, register_guide,
        create_booking, user_bookings, transition_booking,
        record_transaction, settle_transaction, fail_transaction, user_transactions,
        guide_earnings,
        create_merchant_account, merchant_account_details, create_payout, user_payouts,
        payment_methods, add_payment_method, set_default_method, remove_payment_method
    ),
    components(schemas(
        Profile, Guide, Booking, Transaction, MerchantAccount, Payout, PaymentMethod,
        RegisterGuideRequest, CreateBookingRequest, TransitionBookingRequest,
        RecordTransactionRequest, CreateMerchantAccountRequest, CreatePayoutRequest,
        AddPaymentMethodRequest, CurrentUserResponse, EarningsResponse, GuideListResponse,
        ErrorResponse, HealthResponse, BookingsResponse, TransactionsResponse,
        PayoutsResponse, PaymentMethodsResponse
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Identity", description = "Principal resolution"),
        (name = "Guides", description = "Guide directory and onboarding"),
        (name = "Bookings", description = "Booking creation and state transitions"),
        (name = "Ledger", description = "Transactions, settlement and earnings"),
        (name = "Payouts", description = "Merchant accounts and disbursements"),
        (name = "PaymentMethods", description = "Stored payment instruments")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.security_schemes.insert(
                "bearerAuth".to_string(),
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
