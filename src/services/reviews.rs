//! Review service

use crate::{
    error::{AppError, AppResult},
    models::review::{CreateReview, Review, ReviewDetails, ReviewQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct ReviewsService {
    repository: Repository,
}

impl ReviewsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Approved reviews, optionally filtered
    pub async fn list(&self, query: &ReviewQuery) -> AppResult<Vec<ReviewDetails>> {
        self.repository.reviews.list(query).await
    }

    /// Submit a review for a destination
    pub async fn create(&self, user_id: i32, request: CreateReview) -> AppResult<Review> {
        if !self
            .repository
            .destinations
            .exists(request.destination_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Destination with id {} not found",
                request.destination_id
            )));
        }

        self.repository.reviews.create(user_id, &request).await
    }
}
