use crate::config::security_config::{current_user_id, Claims};
use crate::error::ApiError;
use crate::models::dtos::TransitionBookingRequest;
use crate::models::entities::Booking;
use crate::models::AppState;
use crate::services::booking_service::BookingService;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use http::StatusCode;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/bookings/{booking_id}/status",
    params(("booking_id" = Uuid, Path, description = "Booking id")),
    request_body = TransitionBookingRequest,
    responses(
        (status = 200, description = "Booking after the transition", body = Booking),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Actor may not perform this transition"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Transition not reachable or lost a concurrent race"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearerAuth" = [])),
    tag = "Bookings"
)]
pub async fn transition_booking(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(booking_id): Path<Uuid>,
    Json(req): Json<TransitionBookingRequest>,
) -> Result<Json<Booking>, (StatusCode, String)> {
    info!(
        "Transition request: booking = {}, to = {}, actor = {}",
        booking_id, req.status, claims.sub
    );

    let actor_id = current_user_id(&claims)?;

    let conn = &mut state.db.get().map_err(|e| {
        error!("Database connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let booking = BookingService::transition(conn, booking_id, req.status, actor_id)?;

    Ok(Json(booking))
}
