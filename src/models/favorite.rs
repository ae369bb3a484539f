//! Favorites and favorite lists

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::destination::DestinationSummary;

/// Favorite with its destination embedded, for listing. The underlying row
/// is just a (user, destination) toggle flag.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDetails {
    pub id: i32,
    pub destination: DestinationSummary,
    pub created_at: DateTime<Utc>,
}

/// User-curated named list of destinations
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FavoriteList {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List item with its destination embedded
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FavoriteListItemDetails {
    pub id: i32,
    pub destination: DestinationSummary,
    pub notes: String,
    pub added_at: DateTime<Utc>,
}

/// Favorite list with item count and items. List views carry a three-item
/// preview; the detail view carries everything.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FavoriteListDetails {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub is_public: bool,
    pub destinations_count: i64,
    pub destinations: Vec<FavoriteListItemDetails>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create favorite list request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFavoriteList {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    pub description: Option<String>,
    pub is_public: Option<bool>,
}

/// Update favorite list request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateFavoriteList {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
}
