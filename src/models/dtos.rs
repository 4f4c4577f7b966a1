use crate::models::entities::{Guide, Profile};
use crate::models::enums::{AccountType, BookingStatus, MethodType, TransactionType};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Policy bounds on a guide's hourly rate, in paise (₹200 - ₹1000).
pub const MIN_HOURLY_RATE: i64 = 20_000;
pub const MAX_HOURLY_RATE: i64 = 100_000;

#[derive(Serialize, ToSchema, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Deserialize, ToSchema, Validate)]
pub struct RegisterGuideRequest {
    #[validate(length(min = 1, max = 100, message = "Village is required"))]
    pub village: String,
    #[validate(length(min = 1, max = 100, message = "District is required"))]
    pub district: String,
    #[validate(length(min = 1, max = 100, message = "State is required"))]
    pub state: String,
    #[validate(length(min = 6, max = 10, message = "Pincode must be 6-10 characters"))]
    pub pincode: String,
    #[validate(length(min = 2, message = "At least 2 specialties are required"))]
    pub specialties: Vec<String>,
    #[validate(length(min = 2, message = "At least 2 languages are required"))]
    pub languages: Vec<String>,
    pub gender: Option<String>,
    pub years_experience: Option<String>,
    pub description: Option<String>,
    #[validate(range(
        min = 20_000,
        max = 100_000,
        message = "Hourly rate must be between ₹200 and ₹1000 (in paise)"
    ))]
    pub hourly_rate: i64,
    #[serde(default)]
    pub availability: Vec<String>,
    #[serde(default)]
    pub gallery_images: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

/// Conjunctive search filters; absent fields are not applied, and a
/// max_rate at the policy ceiling is treated as "no cap".
#[derive(Deserialize, IntoParams, Debug, Default)]
pub struct GuideSearchFilter {
    pub location: Option<String>,
    pub specialty: Option<String>,
    pub language: Option<String>,
    pub gender: Option<String>,
    pub min_rating: Option<f64>,
    pub max_rate: Option<i64>,
}

#[derive(Serialize, ToSchema)]
pub struct GuideListResponse {
    pub guides: Vec<Guide>,
}

#[derive(Deserialize, ToSchema, Validate)]
pub struct CreateBookingRequest {
    pub guide_id: Uuid,
    pub booking_date: NaiveDate,
    pub booking_time: NaiveTime,
    #[validate(range(min = 2, max = 6, message = "Duration must be between 2 and 6 hours"))]
    pub duration_hours: i32,
    #[validate(range(min = 1, max = 6, message = "Guests must be between 1 and 6"))]
    pub number_of_guests: i32,
    pub experience_type: Option<String>,
    pub special_requests: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct TransitionBookingRequest {
    pub status: BookingStatus,
}

/// Ceiling on a single ledger entry, in paise (₹100 crore).
pub const MAX_TRANSACTION_AMOUNT: i64 = 100_000_000_000;

#[derive(Deserialize, ToSchema, Validate)]
pub struct RecordTransactionRequest {
    pub transaction_type: TransactionType,
    pub payee_id: Uuid,
    #[validate(range(
        min = 1,
        max = 100_000_000_000i64,
        message = "Amount must be between 1 and 100_000_000_000 paise"
    ))]
    pub amount: i64,
    pub booking_id: Option<Uuid>,
    pub payment_method_id: Option<Uuid>,
    pub description: Option<String>,
}

#[derive(Deserialize, ToSchema, Validate)]
pub struct CreateMerchantAccountRequest {
    pub account_type: AccountType,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub ifsc_code: Option<String>,
    pub account_holder_name: Option<String>,
    pub upi_id: Option<String>,
}

#[derive(Deserialize, ToSchema, Validate)]
pub struct CreatePayoutRequest {
    #[validate(length(min = 1, message = "At least one transaction id is required"))]
    pub transaction_ids: Vec<Uuid>,
}

#[derive(Deserialize, ToSchema, Validate)]
pub struct AddPaymentMethodRequest {
    pub method_type: MethodType,
    pub provider: Option<String>,
    #[validate(length(equal = 4, message = "last_four must be exactly 4 digits"))]
    pub last_four: Option<String>,
    pub upi_id: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct CurrentUserResponse {
    pub profile: Profile,
    pub guide: Option<Guide>,
    /// Derived from the existence of a guide row, never from user_type.
    pub is_guide: bool,
    /// user_type says guide but no guide row exists: the two-row
    /// registration did not finish and must be repaired, not trusted.
    pub registration_incomplete: bool,
}

#[derive(Serialize, ToSchema)]
pub struct EarningsResponse {
    pub guide_id: Uuid,
    pub total_earnings: i64,
    pub currency: String,
}
