use crate::config::security_config::{current_user_id, Claims};
use crate::error::ApiError;
use crate::models::dtos::CreateBookingRequest;
use crate::models::entities::Booking;
use crate::models::AppState;
use crate::services::booking_service::BookingService;
use axum::{extract::State, Extension, Json};
use http::StatusCode;
use std::sync::Arc;
use tracing::{error, info};
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created with a frozen price", body = Booking),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Guide not found"),
        (status = 409, description = "Guide inactive or slot already booked"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Bookings"
)]
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), (StatusCode, String)> {
    info!(
        "Booking request: traveler = {}, guide = {}, date = {}",
        claims.sub, req.guide_id, req.booking_date
    );

    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let traveler_id = current_user_id(&claims)?;

    let conn = &mut state.db.get().map_err(|e| {
        error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let booking = BookingService::create_booking(conn, traveler_id, &req)?;

    Ok((StatusCode::CREATED, Json(booking)))
}
