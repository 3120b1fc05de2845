//! Contact handlers
//!
//! The contact form is public; reading and deleting submissions is
//! admin-only. `/contact-owner` relays a visitor message to a listing owner
//! by mail without storing anything.

use axum::{extract::State, Json};

use estate_service::dto::{ApiResponse, ContactOwnerRequest, ContactResponse, CreateContactRequest};
use estate_service::ContactService;

use crate::extractors::{AdminUser, SnowflakePath, ValidatedJson};
use crate::response::{ApiResult, Created, MessageBody};
use crate::state::AppState;

/// Store a contact form submission
///
/// POST /contacts
pub async fn create_contact(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateContactRequest>,
) -> ApiResult<Created<Json<ApiResponse<ContactResponse>>>> {
    let service = ContactService::new(state.service_context());
    let contact = service.create(request).await?;
    Ok(Created(Json(ApiResponse::new(contact))))
}

/// List all submissions, newest first
///
/// GET /contacts
pub async fn list_contacts(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<ApiResponse<Vec<ContactResponse>>>> {
    let service = ContactService::new(state.service_context());
    let contacts = service.list().await?;
    Ok(Json(ApiResponse::new(contacts)))
}

/// Delete a submission
///
/// DELETE /contacts/:id
pub async fn delete_contact(
    State(state): State<AppState>,
    _admin: AdminUser,
    SnowflakePath(id): SnowflakePath,
) -> ApiResult<Json<ApiResponse<MessageBody>>> {
    let service = ContactService::new(state.service_context());
    service.delete(id).await?;
    Ok(Json(ApiResponse::new(MessageBody::new("Contact deleted"))))
}

/// Relay a visitor message to a property owner by email
///
/// POST /contact-owner
pub async fn contact_owner(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ContactOwnerRequest>,
) -> ApiResult<Json<ApiResponse<MessageBody>>> {
    let service = ContactService::new(state.service_context());
    service.contact_owner(request).await?;
    Ok(Json(ApiResponse::new(MessageBody::new("Message sent"))))
}
