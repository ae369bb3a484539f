//! Contacts repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::contact::{Contact, ContactCategory, ContactQuery, SubmitContact, UpdateContact},
};

#[derive(Clone)]
pub struct ContactsRepository {
    pool: Pool<Postgres>,
}

impl ContactsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Store a contact-form submission
    pub async fn create(&self, submission: &SubmitContact) -> AppResult<Contact> {
        let created = sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO contacts (name, email, phone, subject, category, message, newsletter)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.phone)
        .bind(&submission.subject)
        .bind(submission.category.unwrap_or(ContactCategory::General))
        .bind(&submission.message)
        .bind(submission.newsletter.unwrap_or(false))
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Inbox listing with optional status/category filters, newest first
    pub async fn list(&self, query: &ContactQuery) -> AppResult<Vec<Contact>> {
        let contacts = sqlx::query_as::<_, Contact>(
            r#"
            SELECT * FROM contacts
            WHERE ($1::text IS NULL OR status = $1)
              AND ($2::text IS NULL OR category = $2)
            ORDER BY created_at DESC
            "#,
        )
        .bind(query.status)
        .bind(query.category)
        .fetch_all(&self.pool)
        .await?;
        Ok(contacts)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Contact> {
        sqlx::query_as::<_, Contact>("SELECT * FROM contacts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Contact with id {} not found", id)))
    }

    /// Update status and admin notes. `responded_at` is stamped by the
    /// service when a contact moves to resolved.
    pub async fn update(
        &self,
        id: i32,
        update: &UpdateContact,
        responded_at: Option<chrono::DateTime<chrono::Utc>>,
    ) -> AppResult<Contact> {
        sqlx::query_as::<_, Contact>(
            r#"
            UPDATE contacts SET
                status = COALESCE($2, status),
                admin_notes = COALESCE($3, admin_notes),
                responded_at = COALESCE($4, responded_at),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(update.status)
        .bind(&update.admin_notes)
        .bind(responded_at)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Contact with id {} not found", id)))
    }
}
