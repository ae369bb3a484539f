//! Booking model and related types

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::ToSchema;
use validator::Validate;

use super::destination::DestinationSummary;

/// Payment status lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(PaymentStatus::Pending),
            "paid" => Ok(PaymentStatus::Paid),
            "failed" => Ok(PaymentStatus::Failed),
            "refunded" => Ok(PaymentStatus::Refunded),
            _ => Err(format!("Invalid payment status: {}", s)),
        }
    }
}

// SQLx conversion for PaymentStatus (stored as text)
impl sqlx::Type<Postgres> for PaymentStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for PaymentStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for PaymentStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Booking status values with terminal-state semantics. The column itself is
/// free text; these constants cover the states the workflow cares about.
pub const STATUS_CONFIRMED: &str = "confirmed";
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_CANCELLED: &str = "cancelled";

/// Booking model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: i32,
    pub booking_code: String,
    pub user_id: i32,
    pub destination_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub number_of_travelers: i32,
    pub total_price: Decimal,
    pub primary_contact_name: String,
    pub primary_contact_email: String,
    pub primary_contact_phone: String,
    pub special_requirements: String,
    pub dietary_restrictions: String,
    pub status: String,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Traveler row belonging to a booking
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookingTraveler {
    pub id: i32,
    pub booking_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub passport_number: Option<String>,
    pub nationality: String,
}

/// Traveler payload inside a booking creation request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TravelerInput {
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub passport_number: Option<String>,
    #[validate(length(min = 1, max = 50, message = "Nationality must be 1-50 characters"))]
    pub nationality: String,
}

/// Booking creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBooking {
    pub destination_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub number_of_travelers: i32,
    #[validate(length(min = 1, max = 100, message = "Contact name must be 1-100 characters"))]
    pub primary_contact_name: String,
    /// Defaults to the authenticated user's email when absent
    #[validate(email(message = "Invalid email format"))]
    pub primary_contact_email: Option<String>,
    #[validate(length(min = 1, max = 20, message = "Contact phone must be 1-20 characters"))]
    pub primary_contact_phone: String,
    pub special_requirements: Option<String>,
    pub dietary_restrictions: Option<String>,
    #[validate(nested)]
    pub travelers: Vec<TravelerInput>,
}

/// Partial booking update. Creation-time invariants (date ordering, traveler
/// count match) are not re-checked here and the total price is never
/// recomputed; the booking code and owner are immutable.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBooking {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub number_of_travelers: Option<i32>,
    pub primary_contact_name: Option<String>,
    pub primary_contact_email: Option<String>,
    pub primary_contact_phone: Option<String>,
    pub special_requirements: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub status: Option<String>,
    pub payment_status: Option<PaymentStatus>,
}

/// Fully hydrated booking: header, travelers, destination summary
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingDetails {
    pub id: i32,
    pub booking_code: String,
    pub destination_id: i32,
    pub destination: DestinationSummary,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub number_of_travelers: i32,
    #[schema(value_type = String)]
    pub total_price: Decimal,
    pub primary_contact_name: String,
    pub primary_contact_email: String,
    pub primary_contact_phone: String,
    pub special_requirements: String,
    pub dietary_restrictions: String,
    pub status: String,
    pub payment_status: PaymentStatus,
    pub user_email: String,
    pub travelers: Vec<BookingTraveler>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-status booking counts for the summary endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingSummary {
    pub total_bookings: i64,
    pub pending_bookings: i64,
    pub confirmed_bookings: i64,
    pub completed_bookings: i64,
    pub cancelled_bookings: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_status_parse() {
        assert_eq!(
            "refunded".parse::<PaymentStatus>().unwrap(),
            PaymentStatus::Refunded
        );
        assert_eq!(
            "Paid".parse::<PaymentStatus>().unwrap(),
            PaymentStatus::Paid
        );
        assert!("chargeback".parse::<PaymentStatus>().is_err());
    }
}
