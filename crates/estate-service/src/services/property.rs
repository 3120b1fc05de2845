//! Property service - listing CRUD with ownership checks
//!
//! Mutation (update, delete) is allowed for the listing creator and for
//! admins; everyone else gets an authorization error.

use tracing::{info, instrument};

use estate_core::entities::{Property, User};
use estate_core::traits::PropertyUpdate;
use estate_core::value_objects::{ListingType, Snowflake};
use estate_core::DomainError;

use crate::dto::{CreatePropertyRequest, PropertyResponse, UpdatePropertyRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Property service
pub struct PropertyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PropertyService<'a> {
    /// Create a new PropertyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a listing owned by `user`
    ///
    /// `image_urls` are the stored URLs of freshly uploaded files.
    #[instrument(skip(self, user, request, image_urls), fields(user_id = %user.id))]
    pub async fn create(
        &self,
        user: &User,
        request: CreatePropertyRequest,
        image_urls: Vec<String>,
    ) -> ServiceResult<PropertyResponse> {
        let listing_type = parse_listing_type(&request.listing_type)?;
        let now = chrono::Utc::now();

        let property = Property {
            id: self.ctx.generate_id(),
            name: request.name,
            description: request.description,
            listing_type,
            bedrooms: request.bedrooms,
            bathrooms: request.bathrooms,
            floor_area: request.floor_area,
            total_floors: request.total_floors,
            amenities: request.amenities,
            address: request.address,
            city: request.city,
            state: request.state,
            country: request.country,
            contact_name: request.contact_name,
            contact_email: request.contact_email,
            contact_phone: request.contact_phone,
            price: request.price,
            discounted_price: request.discounted_price,
            images: image_urls,
            created_by: user.id,
            created_at: now,
            updated_at: now,
        };

        self.ctx.property_repo().create(&property).await?;

        info!(property_id = %property.id, "Property created");

        Ok(PropertyResponse::from(&property))
    }

    /// List all listings, newest first
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<PropertyResponse>> {
        let properties = self.ctx.property_repo().list_all().await?;
        Ok(properties.iter().map(PropertyResponse::from).collect())
    }

    /// Fetch one listing
    #[instrument(skip(self))]
    pub async fn get(&self, id: Snowflake) -> ServiceResult<PropertyResponse> {
        let property = self
            .ctx
            .property_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PropertyNotFound(id))?;

        Ok(PropertyResponse::from(&property))
    }

    /// Update a listing
    ///
    /// The image list becomes `existing_images` (the URLs the client kept)
    /// plus any newly uploaded files; omitting both leaves images untouched.
    #[instrument(skip(self, user, request, new_image_urls), fields(user_id = %user.id))]
    pub async fn update(
        &self,
        user: &User,
        id: Snowflake,
        request: UpdatePropertyRequest,
        new_image_urls: Vec<String>,
    ) -> ServiceResult<PropertyResponse> {
        let property = self
            .ctx
            .property_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PropertyNotFound(id))?;

        if !property.can_be_mutated_by(user.id, user.is_admin()) {
            return Err(DomainError::NotListingOwner.into());
        }

        let listing_type = request
            .listing_type
            .as_deref()
            .map(parse_listing_type)
            .transpose()?;

        let images = if request.existing_images.is_some() || !new_image_urls.is_empty() {
            let mut images = request.existing_images.unwrap_or_default();
            images.extend(new_image_urls);
            Some(images)
        } else {
            None
        };

        let update = PropertyUpdate {
            name: request.name,
            description: request.description,
            listing_type,
            bedrooms: request.bedrooms,
            bathrooms: request.bathrooms,
            floor_area: request.floor_area,
            total_floors: request.total_floors,
            amenities: request.amenities,
            address: request.address,
            city: request.city,
            state: request.state,
            country: request.country,
            contact_name: request.contact_name,
            contact_email: request.contact_email,
            contact_phone: request.contact_phone,
            price: request.price,
            discounted_price: request.discounted_price,
            images,
        };

        let updated = self.ctx.property_repo().update(id, &update).await?;

        info!(property_id = %id, "Property updated");

        Ok(PropertyResponse::from(&updated))
    }

    /// Delete a listing
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn delete(&self, user: &User, id: Snowflake) -> ServiceResult<()> {
        let property = self
            .ctx
            .property_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PropertyNotFound(id))?;

        if !property.can_be_mutated_by(user.id, user.is_admin()) {
            return Err(DomainError::NotListingOwner.into());
        }

        self.ctx.property_repo().delete(id).await?;

        info!(property_id = %id, "Property deleted");

        Ok(())
    }
}

fn parse_listing_type(s: &str) -> ServiceResult<ListingType> {
    s.parse::<ListingType>()
        .map_err(|e| ServiceError::validation(e.to_string()))
}
