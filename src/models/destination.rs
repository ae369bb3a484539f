//! Destination catalog models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Trip difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
    Extreme,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Moderate => "moderate",
            Difficulty::Challenging => "challenging",
            Difficulty::Extreme => "extreme",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "moderate" => Ok(Difficulty::Moderate),
            "challenging" => Ok(Difficulty::Challenging),
            "extreme" => Ok(Difficulty::Extreme),
            _ => Err(format!("Invalid difficulty: {}", s)),
        }
    }
}

// SQLx conversion for Difficulty (stored as text)
impl sqlx::Type<Postgres> for Difficulty {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for Difficulty {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for Difficulty {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Destination category
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Destination model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Destination {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub city: String,
    pub country: String,
    pub category_id: i32,
    pub short_description: String,
    pub long_description: String,
    pub price_per_person: Decimal,
    pub duration_days: i32,
    pub difficulty: Difficulty,
    pub best_time_to_visit: String,
    pub main_image_url: Option<String>,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Destination with embedded category and review aggregates, the shape
/// returned by every catalog read endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DestinationDetails {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub city: String,
    pub country: String,
    pub category_id: i32,
    pub category_name: String,
    pub category_icon: String,
    pub short_description: String,
    pub long_description: String,
    #[schema(value_type = String)]
    pub price_per_person: Decimal,
    pub duration_days: i32,
    pub difficulty: Difficulty,
    pub best_time_to_visit: String,
    pub main_image_url: Option<String>,
    pub is_featured: bool,
    /// Mean rating of approved reviews, one decimal; absent when unreviewed
    pub average_rating: Option<f64>,
    /// Number of approved reviews
    pub total_reviews: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Compact destination representation embedded in bookings and favorites
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DestinationSummary {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub city: String,
    pub country: String,
    #[schema(value_type = String)]
    pub price_per_person: Decimal,
    pub duration_days: i32,
    pub difficulty: Difficulty,
    pub main_image_url: Option<String>,
}

/// Destination list query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct DestinationQuery {
    /// Case-insensitive substring match on the category name
    pub category: Option<String>,
    /// Case-insensitive substring match across name, city, country and
    /// short description
    pub search: Option<String>,
}

/// Create destination request (staff)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateDestination {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,
    /// Derived from the name when absent
    pub slug: Option<String>,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,
    pub category_id: i32,
    #[validate(length(min = 1, max = 500, message = "Short description must be 1-500 characters"))]
    pub short_description: String,
    pub long_description: String,
    #[schema(value_type = String)]
    pub price_per_person: Decimal,
    #[validate(range(min = 1, message = "Duration must be at least 1 day"))]
    pub duration_days: i32,
    pub difficulty: Difficulty,
    pub best_time_to_visit: Option<String>,
    pub main_image_url: Option<String>,
    pub is_featured: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(
            "Challenging".parse::<Difficulty>().unwrap(),
            Difficulty::Challenging
        );
        assert!("vertical".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::Extreme.to_string(), "extreme");
        assert_eq!(Difficulty::Moderate.to_string(), "moderate");
    }
}
