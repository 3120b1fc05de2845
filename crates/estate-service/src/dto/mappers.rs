//! Entity -> response DTO mappers

use estate_core::entities::{Booking, ContactMessage, Property, User};

use super::responses::{BookingResponse, ContactResponse, PropertyResponse, UserResponse};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            role: user.role.to_string(),
            created_at: user.created_at,
        }
    }
}

impl From<&Property> for PropertyResponse {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id.to_string(),
            name: property.name.clone(),
            description: property.description.clone(),
            listing_type: property.listing_type.to_string(),
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            floor_area: property.floor_area,
            total_floors: property.total_floors,
            amenities: property.amenities.clone(),
            address: property.address.clone(),
            city: property.city.clone(),
            state: property.state.clone(),
            country: property.country.clone(),
            contact_name: property.contact_name.clone(),
            contact_email: property.contact_email.clone(),
            contact_phone: property.contact_phone.clone(),
            price: property.price,
            discounted_price: property.discounted_price,
            images: property.images.clone(),
            created_by: property.created_by.to_string(),
            created_at: property.created_at,
            updated_at: property.updated_at,
        }
    }
}

impl From<&ContactMessage> for ContactResponse {
    fn from(contact: &ContactMessage) -> Self {
        Self {
            id: contact.id.to_string(),
            name: contact.name.clone(),
            email: contact.email.clone(),
            subject: contact.subject.clone(),
            message: contact.message.clone(),
            created_at: contact.created_at,
        }
    }
}

impl From<&Booking> for BookingResponse {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id.to_string(),
            user_id: booking.user_id.to_string(),
            property_id: booking.property_id.to_string(),
            amount: booking.amount,
            payment_status: booking.payment_status.to_string(),
            created_at: booking.created_at,
        }
    }
}
