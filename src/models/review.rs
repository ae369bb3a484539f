//! Destination reviews

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Review model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub destination_id: i32,
    pub rating: i32,
    pub title: String,
    pub comment: String,
    pub value_for_money: Option<i32>,
    pub service_quality: Option<i32>,
    pub cleanliness: Option<i32>,
    pub location: Option<i32>,
    pub helpful_votes: i32,
    pub total_votes: i32,
    pub is_verified: bool,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Review with reviewer and destination names embedded, for listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewDetails {
    pub id: i32,
    pub destination_id: i32,
    pub destination_name: String,
    pub user_name: String,
    pub rating: i32,
    pub title: String,
    pub comment: String,
    pub helpful_votes: i32,
    pub total_votes: i32,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Create review request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReview {
    pub destination_id: i32,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Comment is required"))]
    pub comment: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub value_for_money: Option<i32>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub service_quality: Option<i32>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub cleanliness: Option<i32>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub location: Option<i32>,
}

/// Review list query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ReviewQuery {
    pub destination_id: Option<i32>,
    pub rating: Option<i32>,
}
