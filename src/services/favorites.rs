//! Favorites and favorite-lists service

use std::collections::HashMap;

use crate::{
    error::{AppError, AppResult},
    models::favorite::{
        CreateFavoriteList, FavoriteDetails, FavoriteListDetails, FavoriteListItemDetails,
        UpdateFavoriteList,
    },
    repository::Repository,
};

/// Number of items embedded per list in the lists overview
const LIST_PREVIEW_ITEMS: i64 = 3;

/// Result of a toggle operation
pub struct ToggleOutcome {
    pub is_favorited: bool,
    pub destination_name: String,
}

#[derive(Clone)]
pub struct FavoritesService {
    repository: Repository,
}

impl FavoritesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Flip favorite membership for a destination
    pub async fn toggle(&self, user_id: i32, destination_id: i32) -> AppResult<ToggleOutcome> {
        let destination = self
            .repository
            .destinations
            .summary_by_id(destination_id)
            .await?;

        let is_favorited = self.repository.favorites.toggle(user_id, destination_id).await?;

        Ok(ToggleOutcome {
            is_favorited,
            destination_name: destination.name,
        })
    }

    /// Favorite membership for a batch of destinations. Unknown IDs fail the
    /// whole request.
    pub async fn status(
        &self,
        user_id: i32,
        destination_ids: &[i32],
    ) -> AppResult<HashMap<i32, bool>> {
        let existing = self
            .repository
            .destinations
            .existing_ids(destination_ids)
            .await?;

        let mut invalid: Vec<i32> = destination_ids
            .iter()
            .copied()
            .filter(|id| !existing.contains(id))
            .collect();
        if !invalid.is_empty() {
            invalid.sort_unstable();
            invalid.dedup();
            return Err(AppError::Validation(format!(
                "Invalid destination IDs: {:?}",
                invalid
            )));
        }

        let favorited = self
            .repository
            .favorites
            .favorited_ids(user_id, destination_ids)
            .await?;

        Ok(destination_ids
            .iter()
            .map(|id| (*id, favorited.contains(id)))
            .collect())
    }

    /// All favorites of a user with embedded destinations
    pub async fn list(&self, user_id: i32) -> AppResult<Vec<FavoriteDetails>> {
        self.repository.favorites.list_for_user(user_id).await
    }

    /// Lists overview with three-item previews
    pub async fn lists(&self, user_id: i32) -> AppResult<Vec<FavoriteListDetails>> {
        let lists = self.repository.favorites.lists_for_user(user_id).await?;

        let mut details = Vec::with_capacity(lists.len());
        for list in lists {
            details.push(
                self.repository
                    .favorites
                    .list_details(list, Some(LIST_PREVIEW_ITEMS))
                    .await?,
            );
        }
        Ok(details)
    }

    pub async fn create_list(
        &self,
        user_id: i32,
        request: CreateFavoriteList,
    ) -> AppResult<FavoriteListDetails> {
        let list = self.repository.favorites.create_list(user_id, &request).await?;
        self.repository.favorites.list_details(list, None).await
    }

    /// One owned list with all items
    pub async fn get_list(&self, id: i32, user_id: i32) -> AppResult<FavoriteListDetails> {
        let list = self.repository.favorites.get_list_for_user(id, user_id).await?;
        self.repository.favorites.list_details(list, None).await
    }

    pub async fn update_list(
        &self,
        id: i32,
        user_id: i32,
        request: UpdateFavoriteList,
    ) -> AppResult<FavoriteListDetails> {
        let list = self
            .repository
            .favorites
            .update_list(id, user_id, &request)
            .await?;
        self.repository.favorites.list_details(list, None).await
    }

    pub async fn delete_list(&self, id: i32, user_id: i32) -> AppResult<()> {
        self.repository.favorites.delete_list(id, user_id).await
    }

    /// Add a destination to an owned list
    pub async fn add_to_list(
        &self,
        list_id: i32,
        user_id: i32,
        destination_id: i32,
        notes: &str,
    ) -> AppResult<FavoriteListItemDetails> {
        let list = self
            .repository
            .favorites
            .get_list_for_user(list_id, user_id)
            .await?;
        let destination = self
            .repository
            .destinations
            .summary_by_id(destination_id)
            .await?;

        let added = self
            .repository
            .favorites
            .add_item(list.id, destination_id, notes)
            .await?;
        if !added {
            return Err(AppError::Conflict(format!(
                "{} is already in {}",
                destination.name, list.name
            )));
        }

        let items = self.repository.favorites.list_items(list.id, None).await?;
        items
            .into_iter()
            .find(|item| item.destination.id == destination_id)
            .ok_or_else(|| AppError::Internal("List item vanished after insert".to_string()))
    }

    /// Remove a destination from an owned list
    pub async fn remove_from_list(
        &self,
        list_id: i32,
        user_id: i32,
        destination_id: i32,
    ) -> AppResult<String> {
        let list = self
            .repository
            .favorites
            .get_list_for_user(list_id, user_id)
            .await?;
        let destination = self
            .repository
            .destinations
            .summary_by_id(destination_id)
            .await?;

        let removed = self
            .repository
            .favorites
            .remove_item(list.id, destination_id)
            .await?;
        if !removed {
            return Err(AppError::NotFound(
                "Destination not found in this list".to_string(),
            ));
        }

        Ok(format!("Removed {} from {}", destination.name, list.name))
    }
}
