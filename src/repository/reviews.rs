//! Reviews repository for database operations

use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::review::{CreateReview, Review, ReviewDetails, ReviewQuery},
};

#[derive(Clone)]
pub struct ReviewsRepository {
    pool: Pool<Postgres>,
}

impl ReviewsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Approved reviews, optionally filtered by destination and rating,
    /// newest first
    pub async fn list(&self, query: &ReviewQuery) -> AppResult<Vec<ReviewDetails>> {
        let rows = sqlx::query(
            r#"
            SELECT r.id, r.destination_id, d.name AS destination_name,
                   u.first_name || ' ' || u.last_name AS user_name,
                   r.rating, r.title, r.comment,
                   r.helpful_votes, r.total_votes, r.is_verified, r.created_at
            FROM reviews r
            JOIN destinations d ON r.destination_id = d.id
            JOIN users u ON r.user_id = u.id
            WHERE r.is_approved
              AND ($1::int IS NULL OR r.destination_id = $1)
              AND ($2::int IS NULL OR r.rating = $2)
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(query.destination_id)
        .bind(query.rating)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| ReviewDetails {
                id: row.get("id"),
                destination_id: row.get("destination_id"),
                destination_name: row.get("destination_name"),
                user_name: row.get("user_name"),
                rating: row.get("rating"),
                title: row.get("title"),
                comment: row.get("comment"),
                helpful_votes: row.get("helpful_votes"),
                total_votes: row.get("total_votes"),
                is_verified: row.get("is_verified"),
                created_at: row.get("created_at"),
            })
            .collect())
    }

    /// Insert a review. A second review for the same destination by the same
    /// user trips the (user, destination) unique constraint.
    pub async fn create(&self, user_id: i32, review: &CreateReview) -> AppResult<Review> {
        let created = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (
                user_id, destination_id, rating, title, comment,
                value_for_money, service_quality, cleanliness, location
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(review.destination_id)
        .bind(review.rating)
        .bind(&review.title)
        .bind(&review.comment)
        .bind(review.value_for_money)
        .bind(review.service_quality)
        .bind(review.cleanliness)
        .bind(review.location)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("You have already reviewed this destination".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(created)
    }
}
