//! Property handlers
//!
//! Create and update take multipart bodies: a `data` field with the JSON
//! request plus up to [`MAX_IMAGES_PER_REQUEST`] `images` file fields, which
//! are stored through the image store before the service runs. If the request
//! fails after files were written, the stored files are discarded so a
//! rejected upload leaves nothing behind.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use estate_service::dto::{ApiResponse, CreatePropertyRequest, PropertyResponse, UpdatePropertyRequest};
use estate_service::PropertyService;

use crate::extractors::{AuthUser, SnowflakePath};
use crate::response::{ApiError, ApiResult, Created, MessageBody};
use crate::state::AppState;
use crate::storage::{ImageStore, MAX_IMAGES_PER_REQUEST};

/// Create a listing
///
/// POST /properties
pub async fn create_property(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Multipart,
) -> ApiResult<Created<Json<ApiResponse<PropertyResponse>>>> {
    let (request, image_urls) =
        parse_listing_multipart::<CreatePropertyRequest>(multipart, state.image_store()).await?;

    let result = match request {
        Some(request) => {
            let service = PropertyService::new(state.service_context());
            service
                .create(&auth.0, request, image_urls.clone())
                .await
                .map_err(ApiError::from)
        }
        None => Err(ApiError::invalid_body("Missing data field")),
    };

    match result {
        Ok(property) => Ok(Created(Json(ApiResponse::new(property)))),
        Err(e) => {
            state.image_store().discard(&image_urls).await;
            Err(e)
        }
    }
}

/// List all listings, newest first
///
/// GET /properties
pub async fn list_properties(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<PropertyResponse>>>> {
    let service = PropertyService::new(state.service_context());
    let properties = service.list().await?;
    Ok(Json(ApiResponse::new(properties)))
}

/// Fetch one listing
///
/// GET /properties/:id
pub async fn get_property(
    State(state): State<AppState>,
    SnowflakePath(id): SnowflakePath,
) -> ApiResult<Json<ApiResponse<PropertyResponse>>> {
    let service = PropertyService::new(state.service_context());
    let property = service.get(id).await?;
    Ok(Json(ApiResponse::new(property)))
}

/// Update a listing (owner or admin)
///
/// PUT /properties/:id
pub async fn update_property(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(id): SnowflakePath,
    multipart: Multipart,
) -> ApiResult<Json<ApiResponse<PropertyResponse>>> {
    let (request, image_urls) =
        parse_listing_multipart::<UpdatePropertyRequest>(multipart, state.image_store()).await?;
    let request = request.unwrap_or_default();

    let service = PropertyService::new(state.service_context());
    match service.update(&auth.0, id, request, image_urls.clone()).await {
        Ok(property) => Ok(Json(ApiResponse::new(property))),
        Err(e) => {
            state.image_store().discard(&image_urls).await;
            Err(e.into())
        }
    }
}

/// Delete a listing (owner or admin)
///
/// DELETE /properties/:id
pub async fn delete_property(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(id): SnowflakePath,
) -> ApiResult<Json<ApiResponse<MessageBody>>> {
    let service = PropertyService::new(state.service_context());
    service.delete(&auth.0, id).await?;
    Ok(Json(ApiResponse::new(MessageBody::new("Property deleted"))))
}

/// Pull the JSON `data` field and stored image URLs out of a multipart body
///
/// On a parse error, files already written for this request are discarded
/// before the error propagates.
async fn parse_listing_multipart<T>(
    mut multipart: Multipart,
    store: &ImageStore,
) -> ApiResult<(Option<T>, Vec<String>)>
where
    T: DeserializeOwned + Validate,
{
    let mut data: Option<T> = None;
    let mut image_urls = Vec::new();

    if let Err(e) = read_listing_fields(&mut multipart, store, &mut data, &mut image_urls).await {
        store.discard(&image_urls).await;
        return Err(e);
    }

    Ok((data, image_urls))
}

async fn read_listing_fields<T>(
    multipart: &mut Multipart,
    store: &ImageStore,
    data: &mut Option<T>,
    image_urls: &mut Vec<String>,
) -> ApiResult<()>
where
    T: DeserializeOwned + Validate,
{
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid_body(e.body_text()))?
    {
        match field.name() {
            Some("data") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::invalid_body(e.body_text()))?;
                let value: T = serde_json::from_slice(&bytes)
                    .map_err(|e| ApiError::invalid_body(format!("Invalid data field: {e}")))?;
                value.validate()?;
                *data = Some(value);
            }
            Some("images") => {
                if image_urls.len() >= MAX_IMAGES_PER_REQUEST {
                    return Err(ApiError::invalid_body(format!(
                        "At most {MAX_IMAGES_PER_REQUEST} images per request"
                    )));
                }
                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| ApiError::invalid_body("Image field without a filename"))?;
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::invalid_body(e.body_text()))?;
                image_urls.push(store.save(&file_name, &bytes).await?);
            }
            _ => {}
        }
    }

    Ok(())
}
