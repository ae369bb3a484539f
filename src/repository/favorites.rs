//! Favorites repository for database operations

use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        destination::DestinationSummary,
        favorite::{
            CreateFavoriteList, FavoriteDetails, FavoriteList, FavoriteListDetails,
            FavoriteListItemDetails, UpdateFavoriteList,
        },
    },
};

fn summary_from_prefixed(row: &PgRow) -> DestinationSummary {
    DestinationSummary {
        id: row.get("dest_id"),
        name: row.get("dest_name"),
        slug: row.get("dest_slug"),
        city: row.get("dest_city"),
        country: row.get("dest_country"),
        price_per_person: row.get("dest_price_per_person"),
        duration_days: row.get("dest_duration_days"),
        difficulty: row.get("dest_difficulty"),
        main_image_url: row.get("dest_main_image_url"),
    }
}

const DEST_COLUMNS: &str = r#"
    d.id AS dest_id, d.name AS dest_name, d.slug AS dest_slug,
    d.city AS dest_city, d.country AS dest_country,
    d.price_per_person AS dest_price_per_person,
    d.duration_days AS dest_duration_days,
    d.difficulty AS dest_difficulty,
    d.main_image_url AS dest_main_image_url
"#;

#[derive(Clone)]
pub struct FavoritesRepository {
    pool: Pool<Postgres>,
}

impl FavoritesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Flip favorite membership for (user, destination), returning the new
    /// state. Runs as one transaction; a create that loses the race against a
    /// concurrent toggle hits the unique constraint (ON CONFLICT) and is
    /// reported as already favorited.
    pub async fn toggle(&self, user_id: i32, destination_id: i32) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query(
            "DELETE FROM favorites WHERE user_id = $1 AND destination_id = $2",
        )
        .bind(user_id)
        .bind(destination_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let is_favorited = if deleted > 0 {
            false
        } else {
            // rows_affected == 0 here means a concurrent request created the
            // row first; either way the pair is now favorited.
            sqlx::query(
                r#"
                INSERT INTO favorites (user_id, destination_id)
                VALUES ($1, $2)
                ON CONFLICT (user_id, destination_id) DO NOTHING
                "#,
            )
            .bind(user_id)
            .bind(destination_id)
            .execute(&mut *tx)
            .await?;
            true
        };

        tx.commit().await?;

        Ok(is_favorited)
    }

    /// Which of the given destinations the user has favorited
    pub async fn favorited_ids(&self, user_id: i32, destination_ids: &[i32]) -> AppResult<Vec<i32>> {
        let ids: Vec<i32> = sqlx::query_scalar(
            "SELECT destination_id FROM favorites WHERE user_id = $1 AND destination_id = ANY($2)",
        )
        .bind(user_id)
        .bind(destination_ids)
        .fetch_all(&self.pool)
        .await?;
        Ok(ids)
    }

    /// All favorites of a user with embedded destinations, newest first
    pub async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<FavoriteDetails>> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT f.id, f.created_at, {DEST_COLUMNS}
            FROM favorites f
            JOIN destinations d ON f.destination_id = d.id
            WHERE f.user_id = $1
            ORDER BY f.created_at DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| FavoriteDetails {
                id: row.get("id"),
                destination: summary_from_prefixed(row),
                created_at: row.get("created_at"),
            })
            .collect())
    }

    /// All lists of a user, most recently updated first
    pub async fn lists_for_user(&self, user_id: i32) -> AppResult<Vec<FavoriteList>> {
        let lists = sqlx::query_as::<_, FavoriteList>(
            "SELECT * FROM favorite_lists WHERE user_id = $1 ORDER BY updated_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(lists)
    }

    /// Get a list scoped to its owner
    pub async fn get_list_for_user(&self, id: i32, user_id: i32) -> AppResult<FavoriteList> {
        sqlx::query_as::<_, FavoriteList>(
            "SELECT * FROM favorite_lists WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Favorite list with id {} not found", id)))
    }

    /// Create a list; duplicate (user, name) trips the unique constraint
    pub async fn create_list(
        &self,
        user_id: i32,
        list: &CreateFavoriteList,
    ) -> AppResult<FavoriteList> {
        let created = sqlx::query_as::<_, FavoriteList>(
            r#"
            INSERT INTO favorite_lists (user_id, name, description, is_public)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&list.name)
        .bind(list.description.as_deref().unwrap_or(""))
        .bind(list.is_public.unwrap_or(false))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("You already have a list with this name".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(created)
    }

    pub async fn update_list(
        &self,
        id: i32,
        user_id: i32,
        update: &UpdateFavoriteList,
    ) -> AppResult<FavoriteList> {
        sqlx::query_as::<_, FavoriteList>(
            r#"
            UPDATE favorite_lists SET
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                is_public = COALESCE($5, is_public),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&update.name)
        .bind(&update.description)
        .bind(update.is_public)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Favorite list with id {} not found", id)))
    }

    pub async fn delete_list(&self, id: i32, user_id: i32) -> AppResult<()> {
        let deleted = sqlx::query("DELETE FROM favorite_lists WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if deleted == 0 {
            return Err(AppError::NotFound(format!(
                "Favorite list with id {} not found",
                id
            )));
        }
        Ok(())
    }

    /// Items of a list with embedded destinations, optionally capped
    pub async fn list_items(
        &self,
        list_id: i32,
        limit: Option<i64>,
    ) -> AppResult<Vec<FavoriteListItemDetails>> {
        let rows = sqlx::query(&format!(
            r#"
            SELECT i.id, i.notes, i.added_at, {DEST_COLUMNS}
            FROM favorite_list_items i
            JOIN destinations d ON i.destination_id = d.id
            WHERE i.list_id = $1
            ORDER BY i.added_at DESC
            LIMIT $2
            "#
        ))
        .bind(list_id)
        .bind(limit.unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| FavoriteListItemDetails {
                id: row.get("id"),
                destination: summary_from_prefixed(row),
                notes: row.get("notes"),
                added_at: row.get("added_at"),
            })
            .collect())
    }

    pub async fn count_items(&self, list_id: i32) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM favorite_list_items WHERE list_id = $1")
                .bind(list_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    /// Add a destination to a list. Returns false when it was already there.
    pub async fn add_item(
        &self,
        list_id: i32,
        destination_id: i32,
        notes: &str,
    ) -> AppResult<bool> {
        let inserted = sqlx::query(
            r#"
            INSERT INTO favorite_list_items (list_id, destination_id, notes)
            VALUES ($1, $2, $3)
            ON CONFLICT (list_id, destination_id) DO NOTHING
            "#,
        )
        .bind(list_id)
        .bind(destination_id)
        .bind(notes)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(inserted > 0)
    }

    /// Remove a destination from a list. Returns false when it was absent.
    pub async fn remove_item(&self, list_id: i32, destination_id: i32) -> AppResult<bool> {
        let deleted = sqlx::query(
            "DELETE FROM favorite_list_items WHERE list_id = $1 AND destination_id = $2",
        )
        .bind(list_id)
        .bind(destination_id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(deleted > 0)
    }

    /// Assemble the list payload: header, count, items (optionally previewed)
    pub async fn list_details(
        &self,
        list: FavoriteList,
        preview: Option<i64>,
    ) -> AppResult<FavoriteListDetails> {
        let destinations_count = self.count_items(list.id).await?;
        let destinations = self.list_items(list.id, preview).await?;

        Ok(FavoriteListDetails {
            id: list.id,
            name: list.name,
            description: list.description,
            is_public: list.is_public,
            destinations_count,
            destinations,
            created_at: list.created_at,
            updated_at: list.updated_at,
        })
    }
}
