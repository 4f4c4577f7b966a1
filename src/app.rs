use axum::{middleware, Router};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::security_config::auth_middleware;
use crate::config::swagger_config::ApiDoc;
use crate::handlers::{
    add_payment_method::add_payment_method, create_booking::create_booking,
    create_payout::create_payout, current_user::current_user_details,
    earnings::guide_earnings, fail_transaction::fail_transaction, get_guide::get_guide,
    health::health,
    merchant_account::{create_merchant_account, merchant_account_details},
    payment_methods::payment_methods, record_transaction::record_transaction,
    register_guide::register_guide, remove_payment_method::remove_payment_method,
    search_guides::search_guides, set_default_method::set_default_method,
    settle_transaction::settle_transaction, transition_booking::transition_booking,
    user_bookings::user_bookings, user_payouts::user_payouts,
    user_transactions::user_transactions,
};
use crate::models::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Public routes (no authentication)
    let public_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/health", axum::routing::get(health))
        .route("/api/guides", axum::routing::get(search_guides))
        .route("/api/guides/{guide_id}", axum::routing::get(get_guide));

    // Protected routes (require JWT authentication)
    let protected_router = Router::new()
        .route("/api/current_user", axum::routing::get(current_user_details))
        .route("/api/guides/register", axum::routing::post(register_guide))
        .route(
            "/api/bookings",
            axum::routing::post(create_booking).get(user_bookings),
        )
        .route(
            "/api/bookings/{booking_id}/status",
            axum::routing::post(transition_booking),
        )
        .route(
            "/api/transactions",
            axum::routing::post(record_transaction).get(user_transactions),
        )
        .route(
            "/api/transactions/{transaction_id}/settle",
            axum::routing::post(settle_transaction),
        )
        .route(
            "/api/transactions/{transaction_id}/fail",
            axum::routing::post(fail_transaction),
        )
        .route("/api/earnings", axum::routing::get(guide_earnings))
        .route(
            "/api/merchant_account",
            axum::routing::post(create_merchant_account).get(merchant_account_details),
        )
        .route(
            "/api/payouts",
            axum::routing::post(create_payout).get(user_payouts),
        )
        .route(
            "/api/payment_methods",
            axum::routing::post(add_payment_method).get(payment_methods),
        )
        .route(
            "/api/payment_methods/{method_id}/default",
            axum::routing::post(set_default_method),
        )
        .route(
            "/api/payment_methods/{method_id}",
            axum::routing::delete(remove_payment_method),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_router)
        .merge(protected_router)
        .with_state(state)
}
