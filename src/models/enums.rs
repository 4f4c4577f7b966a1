use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Display label on the profile. Capability gating never trusts this field;
/// it derives from the existence of a guide row (see `current_user`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UserType {
    Traveler,
    Guide,
    Admin,
}

/// Which side of a booking an actor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingRole {
    Traveler,
    Guide,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn parse(input: &str) -> Result<Self, ApiError> {
        BookingStatus::from_str(input)
            .map_err(|_| ApiError::Internal(format!("Unknown booking status: {}", input)))
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    /// Reachability of the booking state machine:
    /// pending -> confirmed | cancelled, confirmed -> completed | cancelled.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Completed)
                | (BookingStatus::Confirmed, BookingStatus::Cancelled)
        )
    }

    /// Confirm and complete are guide-only moves; cancel is open to both
    /// parties. Callers must have already checked reachability.
    pub fn actor_allowed(self, next: BookingStatus, role: BookingRole) -> bool {
        match (self, next) {
            (BookingStatus::Pending, BookingStatus::Confirmed)
            | (BookingStatus::Confirmed, BookingStatus::Completed) => role == BookingRole::Guide,
            (_, BookingStatus::Cancelled) => true,
            _ => false,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TransactionType {
    BookingPayment,
    Refund,
    Payout,
    Fee,
}

impl TransactionType {
    pub fn parse(input: &str) -> Result<Self, ApiError> {
        TransactionType::from_str(input)
            .map_err(|_| ApiError::Internal(format!("Unknown transaction type: {}", input)))
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    Cancelled,
    Refunded,
}

impl TransactionStatus {
    pub fn parse(input: &str) -> Result<Self, ApiError> {
        TransactionStatus::from_str(input)
            .map_err(|_| ApiError::Internal(format!("Unknown transaction status: {}", input)))
    }

    /// net_amount is defined only once a transaction reaches completed;
    /// only pending/processing entries may settle or fail.
    pub fn is_settleable(self) -> bool {
        matches!(self, TransactionStatus::Pending | TransactionStatus::Processing)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PayoutStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AccountType {
    BankAccount,
    Upi,
    Wallet,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
}

impl VerificationStatus {
    pub fn parse(input: &str) -> Result<Self, ApiError> {
        VerificationStatus::from_str(input)
            .map_err(|_| ApiError::Internal(format!("Unknown verification status: {}", input)))
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MethodType {
    Card,
    Upi,
    Netbanking,
    Wallet,
}
