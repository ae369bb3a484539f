//! Review endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppResult,
    models::review::{CreateReview, Review, ReviewDetails, ReviewQuery},
};

use super::AuthenticatedUser;

/// Review creation response
#[derive(Serialize, ToSchema)]
pub struct CreateReviewResponse {
    pub success: bool,
    pub message: String,
    pub review_id: i32,
}

/// List approved reviews
#[utoipa::path(
    get,
    path = "/reviews",
    tag = "reviews",
    params(ReviewQuery),
    responses(
        (status = 200, description = "Reviews, newest first", body = Vec<ReviewDetails>)
    )
)]
pub async fn list_reviews(
    State(state): State<crate::AppState>,
    Query(query): Query<ReviewQuery>,
) -> AppResult<Json<Vec<ReviewDetails>>> {
    let reviews = state.services.reviews.list(&query).await?;
    Ok(Json(reviews))
}

/// Submit a review
#[utoipa::path(
    post,
    path = "/reviews",
    tag = "reviews",
    security(("bearer_auth" = [])),
    request_body = CreateReview,
    responses(
        (status = 201, description = "Review created", body = CreateReviewResponse),
        (status = 400, description = "Invalid rating or duplicate review"),
        (status = 404, description = "Destination not found")
    )
)]
pub async fn create_review(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateReview>,
) -> AppResult<(StatusCode, Json<CreateReviewResponse>)> {
    request.validate()?;

    let review: Review = state
        .services
        .reviews
        .create(claims.user_id, request)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateReviewResponse {
            success: true,
            message: "Review submitted successfully".to_string(),
            review_id: review.id,
        }),
    ))
}
