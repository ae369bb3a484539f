//! Contact-form endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppResult,
    models::contact::{Contact, ContactQuery, SubmitContact, UpdateContact},
};

use super::AuthenticatedUser;

/// Submission response
#[derive(Serialize, ToSchema)]
pub struct SubmitContactResponse {
    pub success: bool,
    pub message: String,
    pub contact_id: i32,
}

/// Submit a contact form (public)
#[utoipa::path(
    post,
    path = "/contacts/submit",
    tag = "contacts",
    request_body = SubmitContact,
    responses(
        (status = 201, description = "Submission stored", body = SubmitContactResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn submit_contact(
    State(state): State<crate::AppState>,
    Json(request): Json<SubmitContact>,
) -> AppResult<(StatusCode, Json<SubmitContactResponse>)> {
    request.validate()?;

    let contact = state.services.contacts.submit(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitContactResponse {
            success: true,
            message: "Thank you for your message! We'll get back to you within 24 hours."
                .to_string(),
            contact_id: contact.id,
        }),
    ))
}

/// List contact submissions (staff)
#[utoipa::path(
    get,
    path = "/contacts",
    tag = "contacts",
    security(("bearer_auth" = [])),
    params(ContactQuery),
    responses(
        (status = 200, description = "Submissions, newest first", body = Vec<Contact>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_contacts(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<ContactQuery>,
) -> AppResult<Json<Vec<Contact>>> {
    claims.require_staff()?;

    let contacts = state.services.contacts.list(&query).await?;
    Ok(Json(contacts))
}

/// Update a contact submission's processing state (staff)
#[utoipa::path(
    patch,
    path = "/contacts/{id}",
    tag = "contacts",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Contact ID")
    ),
    request_body = UpdateContact,
    responses(
        (status = 200, description = "Updated submission", body = Contact),
        (status = 404, description = "Contact not found")
    )
)]
pub async fn update_contact(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdateContact>,
) -> AppResult<Json<Contact>> {
    claims.require_staff()?;

    let contact = state.services.contacts.update(id, request).await?;
    Ok(Json(contact))
}
