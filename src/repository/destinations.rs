//! Destinations repository for database operations

use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::destination::{
        Category, CreateDestination, Destination, DestinationDetails, DestinationQuery,
        DestinationSummary,
    },
};

/// Base SELECT used by every catalog read: destination columns plus the
/// category and the approved-review aggregates.
const DETAILS_SELECT: &str = r#"
    SELECT d.id, d.name, d.slug, d.city, d.country, d.category_id,
           c.name AS category_name, c.icon AS category_icon,
           d.short_description, d.long_description, d.price_per_person,
           d.duration_days, d.difficulty, d.best_time_to_visit,
           d.main_image_url, d.is_featured, d.created_at, d.updated_at,
           r.average_rating, COALESCE(r.total_reviews, 0) AS total_reviews
    FROM destinations d
    JOIN categories c ON d.category_id = c.id
    LEFT JOIN (
        SELECT destination_id,
               ROUND(AVG(rating)::numeric, 1)::float8 AS average_rating,
               COUNT(*) AS total_reviews
        FROM reviews
        WHERE is_approved
        GROUP BY destination_id
    ) r ON r.destination_id = d.id
"#;

#[derive(Clone)]
pub struct DestinationsRepository {
    pool: Pool<Postgres>,
}

impl DestinationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    fn map_details(row: &PgRow) -> DestinationDetails {
        DestinationDetails {
            id: row.get("id"),
            name: row.get("name"),
            slug: row.get("slug"),
            city: row.get("city"),
            country: row.get("country"),
            category_id: row.get("category_id"),
            category_name: row.get("category_name"),
            category_icon: row.get("category_icon"),
            short_description: row.get("short_description"),
            long_description: row.get("long_description"),
            price_per_person: row.get("price_per_person"),
            duration_days: row.get("duration_days"),
            difficulty: row.get("difficulty"),
            best_time_to_visit: row.get("best_time_to_visit"),
            main_image_url: row.get("main_image_url"),
            is_featured: row.get("is_featured"),
            average_rating: row.get("average_rating"),
            total_reviews: row.get("total_reviews"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }

    /// List destinations, optionally filtered by category name and/or a
    /// free-text term matched across name, city, country and short
    /// description. Newest first.
    pub async fn search(&self, query: &DestinationQuery) -> AppResult<Vec<DestinationDetails>> {
        let category_pattern = query.category.as_ref().map(|c| format!("%{}%", c));
        let search_pattern = query.search.as_ref().map(|s| format!("%{}%", s));

        let rows = sqlx::query(&format!(
            r#"{DETAILS_SELECT}
            WHERE ($1::text IS NULL OR c.name ILIKE $1)
              AND ($2::text IS NULL
                   OR d.name ILIKE $2
                   OR d.city ILIKE $2
                   OR d.country ILIKE $2
                   OR d.short_description ILIKE $2)
            ORDER BY d.created_at DESC
            "#
        ))
        .bind(category_pattern)
        .bind(search_pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::map_details).collect())
    }

    /// Get destination details by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<DestinationDetails> {
        let row = sqlx::query(&format!("{DETAILS_SELECT} WHERE d.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Destination with id {} not found", id)))?;

        Ok(Self::map_details(&row))
    }

    /// Featured destinations, newest first, capped
    pub async fn featured(&self, limit: i64) -> AppResult<Vec<DestinationDetails>> {
        let rows = sqlx::query(&format!(
            "{DETAILS_SELECT} WHERE d.is_featured ORDER BY d.created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::map_details).collect())
    }

    /// Free-text search across name, city, country and short description
    pub async fn text_search(&self, term: &str, limit: i64) -> AppResult<Vec<DestinationDetails>> {
        let pattern = format!("%{}%", term);

        let rows = sqlx::query(&format!(
            r#"{DETAILS_SELECT}
            WHERE d.name ILIKE $1
               OR d.city ILIKE $1
               OR d.country ILIKE $1
               OR d.short_description ILIKE $1
            ORDER BY d.created_at DESC
            LIMIT $2
            "#
        ))
        .bind(&pattern)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::map_details).collect())
    }

    /// Compact summary used when embedding a destination in other payloads
    pub async fn summary_by_id(&self, id: i32) -> AppResult<DestinationSummary> {
        sqlx::query_as::<_, DestinationSummary>(
            r#"
            SELECT id, name, slug, city, country, price_per_person,
                   duration_days, difficulty, main_image_url
            FROM destinations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Destination with id {} not found", id)))
    }

    /// Check a set of destination IDs, returning the ones that exist
    pub async fn existing_ids(&self, ids: &[i32]) -> AppResult<Vec<i32>> {
        let existing: Vec<i32> =
            sqlx::query_scalar("SELECT id FROM destinations WHERE id = ANY($1)")
                .bind(ids)
                .fetch_all(&self.pool)
                .await?;
        Ok(existing)
    }

    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM destinations WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    pub async fn slug_exists(&self, slug: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM destinations WHERE slug = $1)")
                .bind(slug)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// All categories
    pub async fn categories(&self) -> AppResult<Vec<Category>> {
        let categories =
            sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name")
                .fetch_all(&self.pool)
                .await?;
        Ok(categories)
    }

    pub async fn category_exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Insert a destination with a resolved slug
    pub async fn create(&self, dest: &CreateDestination, slug: &str) -> AppResult<Destination> {
        let created = sqlx::query_as::<_, Destination>(
            r#"
            INSERT INTO destinations (
                name, slug, city, country, category_id,
                short_description, long_description, price_per_person,
                duration_days, difficulty, best_time_to_visit,
                main_image_url, is_featured
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(&dest.name)
        .bind(slug)
        .bind(&dest.city)
        .bind(&dest.country)
        .bind(dest.category_id)
        .bind(&dest.short_description)
        .bind(&dest.long_description)
        .bind(dest.price_per_person)
        .bind(dest.duration_days)
        .bind(dest.difficulty)
        .bind(dest.best_time_to_visit.as_deref().unwrap_or(""))
        .bind(&dest.main_image_url)
        .bind(dest.is_featured.unwrap_or(false))
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
