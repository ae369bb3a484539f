//! Destination catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    error::AppResult,
    models::destination::{Category, CreateDestination, DestinationDetails, DestinationQuery},
};

use super::AuthenticatedUser;

/// Text search query
#[derive(Deserialize, IntoParams, ToSchema)]
pub struct SearchQuery {
    /// Search term
    pub q: Option<String>,
}

/// Search results wrapper
#[derive(Serialize, ToSchema)]
pub struct SearchResponse {
    pub results: Vec<DestinationDetails>,
}

/// List destinations with optional filters
#[utoipa::path(
    get,
    path = "/destinations",
    tag = "destinations",
    params(DestinationQuery),
    responses(
        (status = 200, description = "List of destinations", body = Vec<DestinationDetails>)
    )
)]
pub async fn list_destinations(
    State(state): State<crate::AppState>,
    Query(query): Query<DestinationQuery>,
) -> AppResult<Json<Vec<DestinationDetails>>> {
    let destinations = state.services.destinations.list(&query).await?;
    Ok(Json(destinations))
}

/// Get destination details by ID
#[utoipa::path(
    get,
    path = "/destinations/{id}",
    tag = "destinations",
    params(
        ("id" = i32, Path, description = "Destination ID")
    ),
    responses(
        (status = 200, description = "Destination details", body = DestinationDetails),
        (status = 404, description = "Destination not found")
    )
)]
pub async fn get_destination(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<DestinationDetails>> {
    let destination = state.services.destinations.get(id).await?;
    Ok(Json(destination))
}

/// Featured destinations (top 6)
#[utoipa::path(
    get,
    path = "/destinations/featured",
    tag = "destinations",
    responses(
        (status = 200, description = "Featured destinations", body = Vec<DestinationDetails>)
    )
)]
pub async fn featured_destinations(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<DestinationDetails>>> {
    let destinations = state.services.destinations.featured().await?;
    Ok(Json(destinations))
}

/// Free-text destination search (top 10)
#[utoipa::path(
    get,
    path = "/destinations/search",
    tag = "destinations",
    params(SearchQuery),
    responses(
        (status = 200, description = "Search results", body = SearchResponse)
    )
)]
pub async fn search_destinations(
    State(state): State<crate::AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<SearchResponse>> {
    let results = state
        .services
        .destinations
        .search(query.q.as_deref().unwrap_or(""))
        .await?;
    Ok(Json(SearchResponse { results }))
}

/// List destination categories
#[utoipa::path(
    get,
    path = "/destinations/categories",
    tag = "destinations",
    responses(
        (status = 200, description = "Categories", body = Vec<Category>)
    )
)]
pub async fn list_categories(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Category>>> {
    let categories = state.services.destinations.categories().await?;
    Ok(Json(categories))
}

/// Create a destination (staff)
#[utoipa::path(
    post,
    path = "/destinations",
    tag = "destinations",
    security(("bearer_auth" = [])),
    request_body = CreateDestination,
    responses(
        (status = 201, description = "Destination created", body = DestinationDetails),
        (status = 400, description = "Invalid input or duplicate slug"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn create_destination(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateDestination>,
) -> AppResult<(StatusCode, Json<DestinationDetails>)> {
    claims.require_staff()?;
    request.validate()?;

    let destination = state.services.destinations.create(request).await?;
    Ok((StatusCode::CREATED, Json(destination)))
}
