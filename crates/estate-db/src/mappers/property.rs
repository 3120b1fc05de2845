//! Property entity <-> model mapper

use estate_core::entities::Property;
use estate_core::error::DomainError;
use estate_core::value_objects::{ListingType, Snowflake};

use crate::models::PropertyModel;

impl TryFrom<PropertyModel> for Property {
    type Error = DomainError;

    fn try_from(model: PropertyModel) -> Result<Self, Self::Error> {
        let listing_type = model
            .listing_type
            .parse::<ListingType>()
            .map_err(|e| DomainError::InternalError(e.to_string()))?;

        Ok(Property {
            id: Snowflake::new(model.id),
            name: model.name,
            description: model.description,
            listing_type,
            bedrooms: model.bedrooms,
            bathrooms: model.bathrooms,
            floor_area: model.floor_area,
            total_floors: model.total_floors,
            amenities: model.amenities,
            address: model.address,
            city: model.city,
            state: model.state,
            country: model.country,
            contact_name: model.contact_name,
            contact_email: model.contact_email,
            contact_phone: model.contact_phone,
            price: model.price,
            discounted_price: model.discounted_price,
            images: model.images,
            created_by: Snowflake::new(model.created_by),
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
