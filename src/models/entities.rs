use crate::schema::*;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Queryable, Insertable, Selectable, Identifiable, Debug, Clone, Serialize, ToSchema)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(table_name = profiles)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub user_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = profiles)]
pub struct NewProfile {
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub user_type: String,
}

#[derive(Queryable, Insertable, Selectable, Identifiable, Debug, Clone, Serialize, ToSchema)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(table_name = guides)]
pub struct Guide {
    pub id: Uuid,
    pub user_id: Uuid,
    pub village: String,
    pub district: String,
    pub state: String,
    pub pincode: String,
    pub specialties: Vec<String>,
    pub languages: Vec<String>,
    pub gender: Option<String>,
    pub years_experience: Option<String>,
    pub description: Option<String>,
    pub hourly_rate: i64, // BIGINT in paise (20000 = ₹200)
    pub availability: Vec<String>,
    pub gallery_images: Vec<String>,
    pub certifications: Vec<String>,
    pub is_verified: bool,
    pub is_active: bool,
    pub rating: f64,
    pub total_reviews: i32,
    pub total_bookings: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = guides)]
pub struct NewGuide {
    pub user_id: Uuid,
    pub village: String,
    pub district: String,
    pub state: String,
    pub pincode: String,
    pub specialties: Vec<String>,
    pub languages: Vec<String>,
    pub gender: Option<String>,
    pub years_experience: Option<String>,
    pub description: Option<String>,
    pub hourly_rate: i64,
    pub availability: Vec<String>,
    pub gallery_images: Vec<String>,
    pub certifications: Vec<String>,
    pub is_verified: bool,
    pub is_active: bool,
}

#[derive(Queryable, Insertable, Selectable, Identifiable, Debug, Clone, Serialize, ToSchema)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(table_name = bookings)]
pub struct Booking {
    pub id: Uuid,
    pub traveler_id: Uuid,
    pub guide_id: Uuid,
    pub booking_date: NaiveDate,
    pub booking_time: NaiveTime,
    pub duration_hours: i32,
    pub number_of_guests: i32,
    pub experience_type: Option<String>,
    pub special_requests: Option<String>,
    pub total_amount: i64, // frozen at creation: hourly_rate * duration_hours
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = bookings)]
pub struct NewBooking {
    pub traveler_id: Uuid,
    pub guide_id: Uuid,
    pub booking_date: NaiveDate,
    pub booking_time: NaiveTime,
    pub duration_hours: i32,
    pub number_of_guests: i32,
    pub experience_type: Option<String>,
    pub special_requests: Option<String>,
    pub total_amount: i64,
    pub status: String,
}

#[derive(Queryable, Insertable, Selectable, Identifiable, Debug, Clone, Serialize, ToSchema)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(table_name = transactions)]
pub struct Transaction {
    pub id: Uuid,
    pub booking_id: Option<Uuid>,
    pub payer_id: Uuid,
    pub payee_id: Uuid,
    pub payment_method_id: Option<Uuid>,
    pub amount: i64, // BIGINT in paise
    pub currency: String,
    pub transaction_type: String,
    pub status: String,
    pub gateway: Option<String>,
    pub gateway_transaction_id: Option<String>,
    pub description: Option<String>,
    pub fees: i64,
    pub net_amount: Option<i64>, // amount - fees, set at settlement
    pub processed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = transactions)]
pub struct NewTransaction {
    pub booking_id: Option<Uuid>,
    pub payer_id: Uuid,
    pub payee_id: Uuid,
    pub payment_method_id: Option<Uuid>,
    pub amount: i64,
    pub currency: String,
    pub transaction_type: String,
    pub status: String,
    pub gateway: Option<String>,
    pub gateway_transaction_id: Option<String>,
    pub description: Option<String>,
    pub fees: i64,
}

#[derive(Queryable, Insertable, Selectable, Identifiable, Debug, Clone, Serialize, ToSchema)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(table_name = merchant_accounts)]
pub struct MerchantAccount {
    pub id: Uuid,
    pub guide_id: Uuid,
    pub account_type: String,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub ifsc_code: Option<String>,
    pub account_holder_name: Option<String>,
    pub upi_id: Option<String>,
    pub is_verified: bool,
    pub verification_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = merchant_accounts)]
pub struct NewMerchantAccount {
    pub guide_id: Uuid,
    pub account_type: String,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub ifsc_code: Option<String>,
    pub account_holder_name: Option<String>,
    pub upi_id: Option<String>,
    pub is_verified: bool,
    pub verification_status: String,
}

#[derive(Queryable, Insertable, Selectable, Identifiable, Debug, Clone, Serialize, ToSchema)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(table_name = payouts)]
pub struct Payout {
    pub id: Uuid,
    pub guide_id: Uuid,
    pub merchant_account_id: Uuid,
    pub amount: i64,
    pub currency: String,
    pub status: String,
    pub payout_date: Option<DateTime<Utc>>,
    pub gateway_payout_id: Option<String>,
    pub transaction_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = payouts)]
pub struct NewPayout {
    pub guide_id: Uuid,
    pub merchant_account_id: Uuid,
    pub amount: i64,
    pub currency: String,
    pub status: String,
    pub transaction_ids: Vec<Uuid>,
}

#[derive(Queryable, Insertable, Selectable, Identifiable, Debug, Clone, Serialize, ToSchema)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(table_name = payment_methods)]
pub struct PaymentMethod {
    pub id: Uuid,
    pub user_id: Uuid,
    pub method_type: String,
    pub provider: Option<String>,
    pub last_four: Option<String>,
    pub upi_id: Option<String>,
    pub is_default: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = payment_methods)]
pub struct NewPaymentMethod {
    pub user_id: Uuid,
    pub method_type: String,
    pub provider: Option<String>,
    pub last_four: Option<String>,
    pub upi_id: Option<String>,
    pub is_default: bool,
}
