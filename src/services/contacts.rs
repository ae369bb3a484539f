//! Contact-form service

use chrono::Utc;

use crate::{
    error::AppResult,
    models::contact::{Contact, ContactQuery, ContactStatus, SubmitContact, UpdateContact},
    repository::Repository,
    services::email::EmailService,
};

#[derive(Clone)]
pub struct ContactsService {
    repository: Repository,
    email: EmailService,
}

impl ContactsService {
    pub fn new(repository: Repository, email: EmailService) -> Self {
        Self { repository, email }
    }

    /// Store a submission and fire off the confirmation and admin
    /// notification emails. Delivery failures are logged and swallowed; they
    /// never fail the submission.
    pub async fn submit(&self, request: SubmitContact) -> AppResult<Contact> {
        let contact = self.repository.contacts.create(&request).await?;

        let email = self.email.clone();
        let for_emails = contact.clone();
        tokio::spawn(async move {
            if let Err(e) = email.send_contact_confirmation(&for_emails).await {
                tracing::warn!(contact_id = for_emails.id, "Failed to send confirmation email: {}", e);
            }
            if let Err(e) = email.send_admin_notification(&for_emails).await {
                tracing::warn!(contact_id = for_emails.id, "Failed to send admin notification: {}", e);
            }
        });

        Ok(contact)
    }

    /// Inbox listing (staff)
    pub async fn list(&self, query: &ContactQuery) -> AppResult<Vec<Contact>> {
        self.repository.contacts.list(query).await
    }

    /// Update a submission's processing state; moving to resolved stamps the
    /// response time.
    pub async fn update(&self, id: i32, update: UpdateContact) -> AppResult<Contact> {
        let current = self.repository.contacts.get_by_id(id).await?;

        let responded_at = match update.status {
            Some(ContactStatus::Resolved) if current.responded_at.is_none() => Some(Utc::now()),
            _ => None,
        };

        self.repository.contacts.update(id, &update, responded_at).await
    }
}
