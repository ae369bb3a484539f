//! Destination catalog service

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::{
    error::{AppError, AppResult},
    models::destination::{
        Category, CreateDestination, DestinationDetails, DestinationQuery,
    },
    repository::Repository,
};

/// Featured listing cap
const FEATURED_LIMIT: i64 = 6;
/// Text search cap
const SEARCH_LIMIT: i64 = 10;

static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Build a URL slug from a name: NFKD-decompose, drop non-ASCII marks,
/// lowercase, collapse everything else to single hyphens.
pub fn slugify(name: &str) -> String {
    let ascii: String = name
        .nfkd()
        .filter(|c| c.is_ascii())
        .collect::<String>()
        .to_lowercase();

    NON_SLUG_CHARS
        .replace_all(&ascii, "-")
        .trim_matches('-')
        .to_string()
}

#[derive(Clone)]
pub struct DestinationsService {
    repository: Repository,
}

impl DestinationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List destinations with optional category / free-text filters
    pub async fn list(&self, query: &DestinationQuery) -> AppResult<Vec<DestinationDetails>> {
        self.repository.destinations.search(query).await
    }

    /// Destination details by ID
    pub async fn get(&self, id: i32) -> AppResult<DestinationDetails> {
        self.repository.destinations.get_by_id(id).await
    }

    /// Up to six featured destinations
    pub async fn featured(&self) -> AppResult<Vec<DestinationDetails>> {
        self.repository.destinations.featured(FEATURED_LIMIT).await
    }

    /// Free-text search capped at ten results. An empty term matches nothing.
    pub async fn search(&self, term: &str) -> AppResult<Vec<DestinationDetails>> {
        if term.is_empty() {
            return Ok(Vec::new());
        }
        self.repository.destinations.text_search(term, SEARCH_LIMIT).await
    }

    /// All categories
    pub async fn categories(&self) -> AppResult<Vec<Category>> {
        self.repository.destinations.categories().await
    }

    /// Create a destination, deriving the slug from the name when absent
    pub async fn create(&self, request: CreateDestination) -> AppResult<DestinationDetails> {
        if !self
            .repository
            .destinations
            .category_exists(request.category_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Category with id {} not found",
                request.category_id
            )));
        }

        let slug = match &request.slug {
            Some(slug) => slug.clone(),
            None => slugify(&request.name),
        };

        if slug.is_empty() {
            return Err(AppError::Validation(
                "Could not derive a slug from the destination name".to_string(),
            ));
        }

        if self.repository.destinations.slug_exists(&slug).await? {
            return Err(AppError::Conflict(format!(
                "Destination with slug {} already exists",
                slug
            )));
        }

        let created = self.repository.destinations.create(&request, &slug).await?;

        tracing::info!(destination_id = created.id, slug = %created.slug, "Destination created");

        self.repository.destinations.get_by_id(created.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Swiss Alps Trek"), "swiss-alps-trek");
    }

    #[test]
    fn test_slugify_punctuation_and_case() {
        assert_eq!(slugify("Paris: Luxury Experience!"), "paris-luxury-experience");
    }

    #[test]
    fn test_slugify_accents() {
        assert_eq!(slugify("Café São Paulo"), "cafe-sao-paulo");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("  --  Tokyo   Discovery --"), "tokyo-discovery");
    }
}
