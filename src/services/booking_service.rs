use crate::error::ApiError;
use crate::models::dtos::CreateBookingRequest;
use crate::models::entities::{Booking, Guide, NewBooking, NewTransaction};
use crate::models::enums::{BookingRole, BookingStatus, TransactionStatus, TransactionType};
use crate::schema::{bookings, guides, transactions};
use crate::services::guide_service::GuideService;
use chrono::{NaiveTime, Timelike, Utc};
use diesel::prelude::*;
use tracing::{error, info};
use uuid::Uuid;

/// Half-open time windows on the same day: [start, start + hours).
pub fn windows_overlap(
    start_a: NaiveTime,
    hours_a: i32,
    start_b: NaiveTime,
    hours_b: i32,
) -> bool {
    let a0 = start_a.num_seconds_from_midnight() as i64;
    let a1 = a0 + hours_a as i64 * 3600;
    let b0 = start_b.num_seconds_from_midnight() as i64;
    let b1 = b0 + hours_b as i64 * 3600;
    a0 < b1 && b0 < a1
}

pub struct BookingService;

impl BookingService {
    /// Create a reservation with the price frozen at the guide's current
    /// rate. Rejects past dates (date-only comparison), experience types
    /// the guide does not offer, inactive guides, self-booking, and slots
    /// overlapping a pending/confirmed booking for the same guide.
    pub fn create_booking(
        conn: &mut PgConnection,
        traveler_id: Uuid,
        req: &CreateBookingRequest,
    ) -> Result<Booking, ApiError> {
        let guide = GuideService::fetch(conn, req.guide_id)?;

        if !guide.is_active {
            return Err(ApiError::Conflict(
                "Guide is not currently accepting bookings".to_string(),
            ));
        }

        if guide.user_id == traveler_id {
            error!("Self-booking attempted: traveler_id = {}", traveler_id);
            return Err(ApiError::Policy(
                "Cannot book your own guide listing".to_string(),
            ));
        }

        // Date-only comparison: a same-day booking with a past time-of-day
        // is accepted.
        let today = Utc::now().date_naive();
        if req.booking_date < today {
            return Err(ApiError::Policy(
                "Booking date cannot be in the past".to_string(),
            ));
        }

        if let Some(experience) = req
            .experience_type
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            if !guide.specialties.iter().any(|s| s == experience) {
                return Err(ApiError::Policy(format!(
                    "Experience '{}' is not offered by this guide",
                    experience
                )));
            }
        }

        // Snapshot, never recomputed from the guide's later rate.
        let total_amount = guide.hourly_rate * req.duration_hours as i64;

        // Overlap scan and insert run under a lock on the guide row so two
        // travelers racing for the same slot serialize: the loser re-scans
        // against the winner's booking and gets the Conflict.
        let booking = conn.transaction(|conn| {
            guides::table
                .find(guide.id)
                .select(guides::id)
                .for_update()
                .first::<Uuid>(conn)
                .map_err(ApiError::Database)?;

            let held: Vec<(NaiveTime, i32)> = bookings::table
                .filter(bookings::guide_id.eq(guide.id))
                .filter(bookings::booking_date.eq(req.booking_date))
                .filter(bookings::status.eq_any(vec![
                    BookingStatus::Pending.to_string(),
                    BookingStatus::Confirmed.to_string(),
                ]))
                .select((bookings::booking_time, bookings::duration_hours))
                .load(conn)
                .map_err(ApiError::Database)?;

            if held.iter().any(|(time, hours)| {
                windows_overlap(req.booking_time, req.duration_hours, *time, *hours)
            }) {
                return Err(ApiError::Conflict(
                    "Guide already has a booking overlapping this time slot".to_string(),
                ));
            }

            diesel::insert_into(bookings::table)
                .values(NewBooking {
                    traveler_id,
                    guide_id: guide.id,
                    booking_date: req.booking_date,
                    booking_time: req.booking_time,
                    duration_hours: req.duration_hours,
                    number_of_guests: req.number_of_guests,
                    experience_type: req.experience_type.clone(),
                    special_requests: req.special_requests.clone(),
                    total_amount,
                    status: BookingStatus::Pending.to_string(),
                })
                .returning(Booking::as_returning())
                .get_result::<Booking>(conn)
                .map_err(|e| {
                    error!("Booking insert failed: {}", e);
                    ApiError::Database(e)
                })
        })?;

        info!(
            "Booking created: id={}, guide={}, traveler={}, total_amount={}",
            booking.id, guide.id, traveler_id, total_amount
        );
        Ok(booking)
    }

    /// Status transition, applied as compare-and-swap on the observed
    /// status so a concurrent transition fails instead of overwriting.
    /// Completing a booking records the booking_payment ledger entry and
    /// bumps the guide's booking counter in the same database transaction.
    pub fn transition(
        conn: &mut PgConnection,
        booking_id: Uuid,
        new_status: BookingStatus,
        actor_id: Uuid,
    ) -> Result<Booking, ApiError> {
        let booking = bookings::table
            .find(booking_id)
            .select(Booking::as_select())
            .first(conn)
            .optional()
            .map_err(ApiError::Database)?
            .ok_or_else(|| ApiError::NotFound(format!("Booking {}", booking_id)))?;

        let guide: Guide = guides::table
            .find(booking.guide_id)
            .select(Guide::as_select())
            .first(conn)
            .map_err(ApiError::Database)?;

        let role = if actor_id == booking.traveler_id {
            BookingRole::Traveler
        } else if actor_id == guide.user_id {
            BookingRole::Guide
        } else {
            error!(
                "Unauthorized transition attempt on booking {} by {}",
                booking_id, actor_id
            );
            return Err(ApiError::Unauthorized(
                "Actor is neither the traveler nor the guide of this booking".to_string(),
            ));
        };

        let current = BookingStatus::parse(&booking.status)?;

        if !current.can_transition_to(new_status) {
            return Err(ApiError::InvalidTransition {
                from: current.to_string(),
                to: new_status.to_string(),
            });
        }

        if !current.actor_allowed(new_status, role) {
            return Err(ApiError::Unauthorized(
                "Only the guide may confirm or complete a booking".to_string(),
            ));
        }

        let updated = conn.transaction(|conn| {
            let updated = diesel::update(
                bookings::table
                    .find(booking_id)
                    .filter(bookings::status.eq(current.to_string())),
            )
            .set((
                bookings::status.eq(new_status.to_string()),
                bookings::updated_at.eq(Utc::now()),
            ))
            .returning(Booking::as_returning())
            .get_result::<Booking>(conn)
            .optional()
            .map_err(ApiError::Database)?
            .ok_or_else(|| {
                ApiError::Conflict("Booking status was changed concurrently".to_string())
            })?;

            if new_status == BookingStatus::Completed {
                diesel::insert_into(transactions::table)
                    .values(NewTransaction {
                        booking_id: Some(booking.id),
                        payer_id: booking.traveler_id,
                        payee_id: guide.user_id,
                        payment_method_id: None,
                        amount: booking.total_amount,
                        currency: "INR".to_string(),
                        transaction_type: TransactionType::BookingPayment.to_string(),
                        status: TransactionStatus::Pending.to_string(),
                        gateway: None,
                        gateway_transaction_id: None,
                        description: Some(format!(
                            "Payment for booking on {}",
                            booking.booking_date
                        )),
                        fees: 0,
                    })
                    .execute(conn)
                    .map_err(ApiError::Database)?;

                diesel::update(guides::table.find(guide.id))
                    .set((
                        guides::total_bookings.eq(guides::total_bookings + 1),
                        guides::updated_at.eq(Utc::now()),
                    ))
                    .execute(conn)
                    .map_err(ApiError::Database)?;
            }

            Ok::<Booking, ApiError>(updated)
        })?;

        info!(
            "Booking {} transitioned {} -> {} by {}",
            booking_id, current, new_status, actor_id
        );
        Ok(updated)
    }

    /// Bookings where the principal is the traveler or the guide owner,
    /// newest first.
    pub fn bookings_for(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Vec<Booking>, ApiError> {
        let own_guide_id = guides::table
            .filter(guides::user_id.eq(user_id))
            .select(guides::id)
            .first::<Uuid>(conn)
            .optional()
            .map_err(ApiError::Database)?;

        let mut query = bookings::table.into_boxed();
        query = match own_guide_id {
            Some(guide_id) => query.filter(
                bookings::traveler_id
                    .eq(user_id)
                    .or(bookings::guide_id.eq(guide_id)),
            ),
            None => query.filter(bookings::traveler_id.eq(user_id)),
        };

        query
            .order(bookings::created_at.desc())
            .select(Booking::as_select())
            .load(conn)
            .map_err(ApiError::Database)
    }
}
