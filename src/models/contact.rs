//! Contact-form submissions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Inquiry category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContactCategory {
    General,
    Booking,
    Destinations,
    Feedback,
    Partnership,
    Technical,
}

impl ContactCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactCategory::General => "general",
            ContactCategory::Booking => "booking",
            ContactCategory::Destinations => "destinations",
            ContactCategory::Feedback => "feedback",
            ContactCategory::Partnership => "partnership",
            ContactCategory::Technical => "technical",
        }
    }

    /// Human-readable label used in notification emails
    pub fn label(&self) -> &'static str {
        match self {
            ContactCategory::General => "General Inquiry",
            ContactCategory::Booking => "Booking Support",
            ContactCategory::Destinations => "Destination Info",
            ContactCategory::Feedback => "Feedback",
            ContactCategory::Partnership => "Partnership",
            ContactCategory::Technical => "Technical Support",
        }
    }
}

impl std::fmt::Display for ContactCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ContactCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "general" => Ok(ContactCategory::General),
            "booking" => Ok(ContactCategory::Booking),
            "destinations" => Ok(ContactCategory::Destinations),
            "feedback" => Ok(ContactCategory::Feedback),
            "partnership" => Ok(ContactCategory::Partnership),
            "technical" => Ok(ContactCategory::Technical),
            _ => Err(format!("Invalid contact category: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for ContactCategory {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for ContactCategory {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for ContactCategory {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Inbox processing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    Pending,
    InProgress,
    Resolved,
    Closed,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::Pending => "pending",
            ContactStatus::InProgress => "in_progress",
            ContactStatus::Resolved => "resolved",
            ContactStatus::Closed => "closed",
        }
    }
}

impl std::fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ContactStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ContactStatus::Pending),
            "in_progress" => Ok(ContactStatus::InProgress),
            "resolved" => Ok(ContactStatus::Resolved),
            "closed" => Ok(ContactStatus::Closed),
            _ => Err(format!("Invalid contact status: {}", s)),
        }
    }
}

impl sqlx::Type<Postgres> for ContactStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for ContactStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for ContactStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Contact submission from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Contact {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub category: ContactCategory,
    pub message: String,
    pub newsletter: bool,
    pub status: ContactStatus,
    pub admin_notes: String,
    pub responded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Contact form submission request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmitContact {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 200, message = "Subject must be 1-200 characters"))]
    pub subject: String,
    pub category: Option<ContactCategory>,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
    pub newsletter: Option<bool>,
}

/// Inbox update request (staff)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateContact {
    pub status: Option<ContactStatus>,
    pub admin_notes: Option<String>,
}

/// Inbox list query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ContactQuery {
    pub status: Option<ContactStatus>,
    pub category: Option<ContactCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!(
            "partnership".parse::<ContactCategory>().unwrap(),
            ContactCategory::Partnership
        );
        assert!("spam".parse::<ContactCategory>().is_err());
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            ContactStatus::Pending,
            ContactStatus::InProgress,
            ContactStatus::Resolved,
            ContactStatus::Closed,
        ] {
            assert_eq!(status.as_str().parse::<ContactStatus>().unwrap(), status);
        }
    }
}
