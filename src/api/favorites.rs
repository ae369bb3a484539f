//! Favorites endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppResult,
    models::favorite::{
        CreateFavoriteList, FavoriteDetails, FavoriteListDetails, FavoriteListItemDetails,
        UpdateFavoriteList,
    },
};

use super::AuthenticatedUser;

/// Toggle request
#[derive(Deserialize, ToSchema)]
pub struct ToggleRequest {
    pub destination_id: i32,
}

/// Toggle response
#[derive(Serialize, ToSchema)]
pub struct ToggleResponse {
    pub success: bool,
    pub is_favorited: bool,
    pub message: String,
    pub destination_id: i32,
}

/// Bulk status request
#[derive(Deserialize, ToSchema)]
pub struct StatusRequest {
    pub destination_ids: Vec<i32>,
}

/// Bulk status response
#[derive(Serialize, ToSchema)]
pub struct StatusResponse {
    pub success: bool,
    /// Destination ID to membership flag
    #[schema(value_type = Object)]
    pub favorites_status: HashMap<i32, bool>,
}

/// Add-to-list request
#[derive(Deserialize, ToSchema)]
pub struct AddListItemRequest {
    pub destination_id: i32,
    pub notes: Option<String>,
}

/// Add-to-list response
#[derive(Serialize, ToSchema)]
pub struct AddListItemResponse {
    pub success: bool,
    pub message: String,
    pub item: FavoriteListItemDetails,
}

/// Plain acknowledgement
#[derive(Serialize, ToSchema)]
pub struct FavoriteMessageResponse {
    pub success: bool,
    pub message: String,
}

/// Toggle favorite membership for a destination
#[utoipa::path(
    post,
    path = "/favorites/toggle",
    tag = "favorites",
    security(("bearer_auth" = [])),
    request_body = ToggleRequest,
    responses(
        (status = 200, description = "New favorite state", body = ToggleResponse),
        (status = 404, description = "Destination not found")
    )
)]
pub async fn toggle_favorite(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<ToggleRequest>,
) -> AppResult<Json<ToggleResponse>> {
    let outcome = state
        .services
        .favorites
        .toggle(claims.user_id, request.destination_id)
        .await?;

    let message = if outcome.is_favorited {
        format!("Added {} to favorites", outcome.destination_name)
    } else {
        format!("Removed {} from favorites", outcome.destination_name)
    };

    Ok(Json(ToggleResponse {
        success: true,
        is_favorited: outcome.is_favorited,
        message,
        destination_id: request.destination_id,
    }))
}

/// Check favorite status for multiple destinations
#[utoipa::path(
    post,
    path = "/favorites/status",
    tag = "favorites",
    security(("bearer_auth" = [])),
    request_body = StatusRequest,
    responses(
        (status = 200, description = "Membership map", body = StatusResponse),
        (status = 400, description = "Unknown destination IDs")
    )
)]
pub async fn favorites_status(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<StatusRequest>,
) -> AppResult<Json<StatusResponse>> {
    let favorites_status = state
        .services
        .favorites
        .status(claims.user_id, &request.destination_ids)
        .await?;

    Ok(Json(StatusResponse {
        success: true,
        favorites_status,
    }))
}

/// List the authenticated user's favorites
#[utoipa::path(
    get,
    path = "/favorites",
    tag = "favorites",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Favorites, newest first", body = Vec<FavoriteDetails>)
    )
)]
pub async fn list_favorites(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<FavoriteDetails>>> {
    let favorites = state.services.favorites.list(claims.user_id).await?;
    Ok(Json(favorites))
}

/// List the authenticated user's favorite lists
#[utoipa::path(
    get,
    path = "/favorites/lists",
    tag = "favorites",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Favorite lists", body = Vec<FavoriteListDetails>)
    )
)]
pub async fn list_favorite_lists(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<FavoriteListDetails>>> {
    let lists = state.services.favorites.lists(claims.user_id).await?;
    Ok(Json(lists))
}

/// Create a favorite list
#[utoipa::path(
    post,
    path = "/favorites/lists",
    tag = "favorites",
    security(("bearer_auth" = [])),
    request_body = CreateFavoriteList,
    responses(
        (status = 201, description = "List created", body = FavoriteListDetails),
        (status = 400, description = "Invalid input or duplicate name")
    )
)]
pub async fn create_favorite_list(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateFavoriteList>,
) -> AppResult<(StatusCode, Json<FavoriteListDetails>)> {
    request.validate()?;

    let list = state
        .services
        .favorites
        .create_list(claims.user_id, request)
        .await?;
    Ok((StatusCode::CREATED, Json(list)))
}

/// Get a favorite list with all its items
#[utoipa::path(
    get,
    path = "/favorites/lists/{id}",
    tag = "favorites",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "List ID")
    ),
    responses(
        (status = 200, description = "List details", body = FavoriteListDetails),
        (status = 404, description = "List not found")
    )
)]
pub async fn get_favorite_list(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<FavoriteListDetails>> {
    let list = state.services.favorites.get_list(id, claims.user_id).await?;
    Ok(Json(list))
}

/// Update a favorite list
#[utoipa::path(
    patch,
    path = "/favorites/lists/{id}",
    tag = "favorites",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "List ID")
    ),
    request_body = UpdateFavoriteList,
    responses(
        (status = 200, description = "Updated list", body = FavoriteListDetails),
        (status = 404, description = "List not found")
    )
)]
pub async fn update_favorite_list(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdateFavoriteList>,
) -> AppResult<Json<FavoriteListDetails>> {
    request.validate()?;

    let list = state
        .services
        .favorites
        .update_list(id, claims.user_id, request)
        .await?;
    Ok(Json(list))
}

/// Delete a favorite list
#[utoipa::path(
    delete,
    path = "/favorites/lists/{id}",
    tag = "favorites",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "List ID")
    ),
    responses(
        (status = 204, description = "List deleted"),
        (status = 404, description = "List not found")
    )
)]
pub async fn delete_favorite_list(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state
        .services
        .favorites
        .delete_list(id, claims.user_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a destination to a favorite list
#[utoipa::path(
    post,
    path = "/favorites/lists/{id}/items",
    tag = "favorites",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "List ID")
    ),
    request_body = AddListItemRequest,
    responses(
        (status = 200, description = "Item added", body = AddListItemResponse),
        (status = 400, description = "Already in list"),
        (status = 404, description = "List or destination not found")
    )
)]
pub async fn add_to_favorite_list(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<AddListItemRequest>,
) -> AppResult<Json<AddListItemResponse>> {
    let item = state
        .services
        .favorites
        .add_to_list(
            id,
            claims.user_id,
            request.destination_id,
            request.notes.as_deref().unwrap_or(""),
        )
        .await?;

    Ok(Json(AddListItemResponse {
        success: true,
        message: format!("Added {} to list", item.destination.name),
        item,
    }))
}

/// Remove a destination from a favorite list
#[utoipa::path(
    delete,
    path = "/favorites/lists/{id}/items/{destination_id}",
    tag = "favorites",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "List ID"),
        ("destination_id" = i32, Path, description = "Destination ID")
    ),
    responses(
        (status = 200, description = "Item removed", body = FavoriteMessageResponse),
        (status = 404, description = "List or item not found")
    )
)]
pub async fn remove_from_favorite_list(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path((id, destination_id)): Path<(i32, i32)>,
) -> AppResult<Json<FavoriteMessageResponse>> {
    let message = state
        .services
        .favorites
        .remove_from_list(id, claims.user_id, destination_id)
        .await?;

    Ok(Json(FavoriteMessageResponse {
        success: true,
        message,
    }))
}
