#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime, Utc};
use uuid::Uuid;
use villagestay::models::entities::{Booking, Guide, Transaction};
use villagestay::models::enums::{BookingStatus, TransactionStatus, TransactionType};

/// A verified, active guide at ₹400/hour (40_000 paise).
pub fn sample_guide() -> Guide {
    let now = Utc::now();
    Guide {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        village: "Khonoma".to_string(),
        district: "Kohima".to_string(),
        state: "Nagaland".to_string(),
        pincode: "797001".to_string(),
        specialties: vec!["Pottery".to_string(), "Village Walks".to_string()],
        languages: vec!["English".to_string(), "Hindi".to_string()],
        gender: Some("female".to_string()),
        years_experience: Some("3-5".to_string()),
        description: Some("Local artisan and storyteller".to_string()),
        hourly_rate: 40_000,
        availability: vec!["weekends".to_string()],
        gallery_images: vec![],
        certifications: vec![],
        is_verified: true,
        is_active: true,
        rating: 4.8,
        total_reviews: 12,
        total_bookings: 20,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_booking(guide: &Guide, traveler_id: Uuid, status: BookingStatus) -> Booking {
    let now = Utc::now();
    Booking {
        id: Uuid::new_v4(),
        traveler_id,
        guide_id: guide.id,
        booking_date: NaiveDate::from_ymd_opt(2027, 3, 14).unwrap(),
        booking_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        duration_hours: 3,
        number_of_guests: 2,
        experience_type: Some("Pottery".to_string()),
        special_requests: None,
        total_amount: guide.hourly_rate * 3,
        status: status.to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_transaction(
    payee_id: Uuid,
    amount: i64,
    status: TransactionStatus,
    net_amount: Option<i64>,
) -> Transaction {
    let now = Utc::now();
    Transaction {
        id: Uuid::new_v4(),
        booking_id: Some(Uuid::new_v4()),
        payer_id: Uuid::new_v4(),
        payee_id,
        payment_method_id: None,
        amount,
        currency: "INR".to_string(),
        transaction_type: TransactionType::BookingPayment.to_string(),
        status: status.to_string(),
        gateway: None,
        gateway_transaction_id: None,
        description: None,
        fees: amount - net_amount.unwrap_or(amount),
        net_amount,
        processed_at: None,
        created_at: now,
        updated_at: now,
    }
}
