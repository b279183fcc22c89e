use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath, ClientInfo};
use crate::features::contacts::dtos::{
    ContactMessageResponseDto, ContactRequestDto, ContactSubmittedDto,
};
use crate::features::contacts::services::ContactService;
use crate::shared::types::ErrorResponse;

/// Submit a contact message
///
/// Public endpoint used by the contact form. The sender's IP address and user
/// agent are recorded with the message.
#[utoipa::path(
    post,
    path = "/api/contacts",
    request_body = ContactRequestDto,
    responses(
        (status = 201, description = "Message received", body = ContactSubmittedDto),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    ),
    tag = "contacts"
)]
pub async fn submit_contact(
    State(service): State<Arc<ContactService>>,
    client: ClientInfo,
    AppJson(dto): AppJson<ContactRequestDto>,
) -> Result<(StatusCode, Json<ContactSubmittedDto>)> {
    dto.validate()?;

    let message = service.submit(dto.into_submission(client)).await?;
    Ok((StatusCode::CREATED, Json(ContactSubmittedDto::from(&message))))
}

/// List contact messages, most recent first
#[utoipa::path(
    get,
    path = "/api/admin/contacts",
    responses(
        (status = 200, description = "Contact messages", body = Vec<ContactMessageResponseDto>),
    ),
    tag = "contacts"
)]
pub async fn list_contacts(
    State(service): State<Arc<ContactService>>,
) -> Result<Json<Vec<ContactMessageResponseDto>>> {
    let messages = service.list().await?;
    Ok(Json(messages.into_iter().map(Into::into).collect()))
}

/// Get contact message by id
#[utoipa::path(
    get,
    path = "/api/admin/contacts/{id}",
    params(
        ("id" = i64, Path, description = "Contact message id")
    ),
    responses(
        (status = 200, description = "Contact message found", body = ContactMessageResponseDto),
        (status = 404, description = "Contact message not found", body = ErrorResponse)
    ),
    tag = "contacts"
)]
pub async fn get_contact(
    State(service): State<Arc<ContactService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ContactMessageResponseDto>> {
    let message = service.get_by_id(id).await?;
    Ok(Json(message.into()))
}

/// Mark a contact message as read
#[utoipa::path(
    patch,
    path = "/api/admin/contacts/{id}/read",
    params(
        ("id" = i64, Path, description = "Contact message id")
    ),
    responses(
        (status = 200, description = "Contact message marked as read", body = ContactMessageResponseDto),
        (status = 404, description = "Contact message not found", body = ErrorResponse)
    ),
    tag = "contacts"
)]
pub async fn mark_contact_read(
    State(service): State<Arc<ContactService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ContactMessageResponseDto>> {
    let message = service.mark_as_read(id).await?;
    Ok(Json(message.into()))
}
