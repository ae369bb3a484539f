//! Booking endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppResult,
    models::booking::{BookingDetails, BookingSummary, CreateBooking, UpdateBooking},
};

use super::AuthenticatedUser;

/// Booking creation response
#[derive(Serialize, ToSchema)]
pub struct CreateBookingResponse {
    pub success: bool,
    pub message: String,
    pub booking: BookingDetails,
}

/// Booking cancellation response
#[derive(Serialize, ToSchema)]
pub struct CancelBookingResponse {
    pub message: String,
    pub booking: BookingDetails,
}

/// Create a booking with its travelers
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created", body = CreateBookingResponse),
        (status = 400, description = "Invalid dates or traveler count mismatch"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Destination not found")
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<CreateBookingResponse>)> {
    request.validate()?;

    let booking = state
        .services
        .bookings
        .create_booking(claims.user_id, request)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse {
            success: true,
            message: "Booking created successfully".to_string(),
            booking,
        }),
    ))
}

/// List the authenticated user's bookings
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Bookings, newest first", body = Vec<BookingDetails>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_bookings(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<BookingDetails>>> {
    let bookings = state.services.bookings.list_bookings(claims.user_id).await?;
    Ok(Json(bookings))
}

/// Get one of the authenticated user's bookings
#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking details", body = BookingDetails),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<BookingDetails>> {
    let booking = state.services.bookings.get_booking(id, claims.user_id).await?;
    Ok(Json(booking))
}

/// Partially update one of the authenticated user's bookings
#[utoipa::path(
    patch,
    path = "/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    request_body = UpdateBooking,
    responses(
        (status = 200, description = "Updated booking", body = BookingDetails),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn update_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdateBooking>,
) -> AppResult<Json<BookingDetails>> {
    let booking = state
        .services
        .bookings
        .update_booking(id, claims.user_id, request)
        .await?;
    Ok(Json(booking))
}

/// Cancel a booking
#[utoipa::path(
    post,
    path = "/bookings/{id}/cancel",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Cancelled booking", body = CancelBookingResponse),
        (status = 400, description = "Already cancelled or completed"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn cancel_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<CancelBookingResponse>> {
    let booking = state
        .services
        .bookings
        .cancel_booking(id, claims.user_id)
        .await?;

    Ok(Json(CancelBookingResponse {
        message: "Booking cancelled successfully".to_string(),
        booking,
    }))
}

/// Per-status counts of the authenticated user's bookings
#[utoipa::path(
    get,
    path = "/bookings/summary",
    tag = "bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Booking summary", body = BookingSummary),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn booking_summary(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<BookingSummary>> {
    let summary = state.services.bookings.summary(claims.user_id).await?;
    Ok(Json(summary))
}
