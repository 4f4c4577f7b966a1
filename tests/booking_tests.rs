mod common;

use chrono::NaiveTime;
use common::{sample_booking, sample_guide};
use uuid::Uuid;
use villagestay::models::enums::{BookingRole, BookingStatus};
use villagestay::services::booking_service::windows_overlap;

fn at(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
}

#[test]
fn test_pending_can_confirm_or_cancel() {
    assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Confirmed));
    assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Cancelled));
    assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Completed));
    assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Pending));
}

#[test]
fn test_confirmed_can_complete_or_cancel() {
    assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Completed));
    assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Cancelled));
    assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Pending));
    assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Confirmed));
}

#[test]
fn test_terminal_states_admit_no_transition() {
    for from in [BookingStatus::Completed, BookingStatus::Cancelled] {
        assert!(from.is_terminal());
        for to in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            assert!(
                !from.can_transition_to(to),
                "{} -> {} should be rejected",
                from,
                to
            );
        }
    }
}

#[test]
fn test_confirm_and_complete_are_guide_only() {
    assert!(BookingStatus::Pending.actor_allowed(BookingStatus::Confirmed, BookingRole::Guide));
    assert!(!BookingStatus::Pending.actor_allowed(BookingStatus::Confirmed, BookingRole::Traveler));

    assert!(BookingStatus::Confirmed.actor_allowed(BookingStatus::Completed, BookingRole::Guide));
    assert!(
        !BookingStatus::Confirmed.actor_allowed(BookingStatus::Completed, BookingRole::Traveler)
    );
}

#[test]
fn test_either_party_may_cancel() {
    for from in [BookingStatus::Pending, BookingStatus::Confirmed] {
        assert!(from.actor_allowed(BookingStatus::Cancelled, BookingRole::Traveler));
        assert!(from.actor_allowed(BookingStatus::Cancelled, BookingRole::Guide));
    }
}

#[test]
fn test_status_round_trips_through_storage_form() {
    for status in [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ] {
        let stored = status.to_string();
        assert_eq!(BookingStatus::parse(&stored).unwrap(), status);
    }
    assert!(BookingStatus::parse("in_progress").is_err());
}

#[test]
fn test_total_amount_is_rate_times_duration() {
    let guide = sample_guide();
    let booking = sample_booking(&guide, Uuid::new_v4(), BookingStatus::Pending);

    // ₹400/hour for 3 hours = ₹1200, all in paise
    assert_eq!(guide.hourly_rate, 40_000);
    assert_eq!(booking.duration_hours, 3);
    assert_eq!(booking.total_amount, 120_000);
}

#[test]
fn test_overlapping_windows_detected() {
    // 10:00-13:00 vs 12:00-14:00
    assert!(windows_overlap(at(10), 3, at(12), 2));
    // containment: 9:00-15:00 vs 10:00-12:00
    assert!(windows_overlap(at(9), 6, at(10), 2));
    // identical windows
    assert!(windows_overlap(at(10), 2, at(10), 2));
}

#[test]
fn test_adjacent_windows_do_not_overlap() {
    // 10:00-12:00 then 12:00-14:00 back to back
    assert!(!windows_overlap(at(10), 2, at(12), 2));
    assert!(!windows_overlap(at(12), 2, at(10), 2));
}

#[test]
fn test_disjoint_windows_do_not_overlap() {
    assert!(!windows_overlap(at(8), 2, at(14), 3));
    assert!(!windows_overlap(at(14), 3, at(8), 2));
}
