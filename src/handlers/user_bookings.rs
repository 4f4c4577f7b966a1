use crate::config::security_config::{current_user_id, Claims};
use crate::error::ApiError;
use crate::models::entities::Booking;
use crate::models::AppState;
use crate::services::booking_service::BookingService;
use axum::{extract::State, Extension, Json};
use http::StatusCode;
use serde::Serialize;
use std::sync::Arc;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct BookingsResponse {
    pub bookings: Vec<Booking>,
}

#[utoipa::path(
    get,
    path = "/api/bookings",
    responses(
        (status = 200, description = "Bookings where the principal is traveler or guide", body = BookingsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Bookings"
)]
pub async fn user_bookings(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<BookingsResponse>, (StatusCode, String)> {
    let user_id = current_user_id(&claims)?;

    let conn = &mut state.db.get().map_err(|e| {
        error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let bookings = BookingService::bookings_for(conn, user_id)?;

    Ok(Json(BookingsResponse { bookings }))
}
