//! In-memory repository fakes for service tests
//!
//! The user fake guards its map with a single mutex so that refresh-token
//! rotation keeps compare-and-swap semantics under concurrent calls.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use estate_common::auth::JwtService;
use estate_common::mail::Mailer;
use estate_core::entities::{Booking, ContactMessage, Property, User};
use estate_core::traits::{
    BookingRepository, ContactRepository, PropertyRepository, PropertyUpdate, RepoResult,
    UserRepository,
};
use estate_core::value_objects::{Role, Snowflake, SnowflakeGenerator};
use estate_core::DomainError;

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Clone)]
struct StoredUser {
    user: User,
    password_hash: String,
    current_refresh_token: Option<String>,
}

/// In-memory UserRepository
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<i64, StoredUser>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.get(&id.into_inner()).map(|s| s.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .values()
            .find(|s| s.user.email == email)
            .map(|s| s.user.clone()))
    }

    async fn find_by_identifier(&self, identifier: &str) -> RepoResult<Option<User>> {
        let users = self.users.lock().unwrap();
        let lowered = identifier.to_lowercase();
        Ok(users
            .values()
            .find(|s| s.user.username == lowered || s.user.email == identifier)
            .map(|s| s.user.clone()))
    }

    async fn identifier_exists(&self, username: &str, email: &str) -> RepoResult<bool> {
        let users = self.users.lock().unwrap();
        let lowered = username.to_lowercase();
        Ok(users
            .values()
            .any(|s| s.user.username == lowered || s.user.email == email))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut users = self.users.lock().unwrap();
        if users
            .values()
            .any(|s| s.user.username == user.username || s.user.email == user.email)
        {
            return Err(DomainError::UserAlreadyExists);
        }
        users.insert(
            user.id.into_inner(),
            StoredUser {
                user: user.clone(),
                password_hash: password_hash.to_string(),
                current_refresh_token: None,
            },
        );
        Ok(())
    }

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        let users = self.users.lock().unwrap();
        Ok(users.get(&id.into_inner()).map(|s| s.password_hash.clone()))
    }

    async fn set_refresh_token(&self, id: Snowflake, token: &str) -> RepoResult<()> {
        let mut users = self.users.lock().unwrap();
        let stored = users
            .get_mut(&id.into_inner())
            .ok_or(DomainError::UserNotFound(id))?;
        stored.current_refresh_token = Some(token.to_string());
        Ok(())
    }

    async fn rotate_refresh_token(
        &self,
        id: Snowflake,
        current: &str,
        new: &str,
    ) -> RepoResult<bool> {
        // Compare-and-swap under one lock, mirroring the conditional UPDATE
        let mut users = self.users.lock().unwrap();
        let stored = users
            .get_mut(&id.into_inner())
            .ok_or(DomainError::UserNotFound(id))?;
        if stored.current_refresh_token.as_deref() == Some(current) {
            stored.current_refresh_token = Some(new.to_string());
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn clear_refresh_token(&self, id: Snowflake) -> RepoResult<()> {
        let mut users = self.users.lock().unwrap();
        let stored = users
            .get_mut(&id.into_inner())
            .ok_or(DomainError::UserNotFound(id))?;
        stored.current_refresh_token = None;
        Ok(())
    }

    async fn set_role(&self, id: Snowflake, role: Role) -> RepoResult<()> {
        let mut users = self.users.lock().unwrap();
        let stored = users
            .get_mut(&id.into_inner())
            .ok_or(DomainError::UserNotFound(id))?;
        stored.user.role = role;
        Ok(())
    }
}

/// In-memory PropertyRepository
#[derive(Default)]
pub struct InMemoryPropertyRepository {
    properties: Mutex<HashMap<i64, Property>>,
}

impl InMemoryPropertyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Property>> {
        let properties = self.properties.lock().unwrap();
        Ok(properties.get(&id.into_inner()).cloned())
    }

    async fn list_all(&self) -> RepoResult<Vec<Property>> {
        let properties = self.properties.lock().unwrap();
        let mut all: Vec<_> = properties.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn create(&self, property: &Property) -> RepoResult<()> {
        let mut properties = self.properties.lock().unwrap();
        properties.insert(property.id.into_inner(), property.clone());
        Ok(())
    }

    async fn update(&self, id: Snowflake, update: &PropertyUpdate) -> RepoResult<Property> {
        let mut properties = self.properties.lock().unwrap();
        let property = properties
            .get_mut(&id.into_inner())
            .ok_or(DomainError::PropertyNotFound(id))?;

        if let Some(name) = &update.name {
            property.name = name.clone();
        }
        if let Some(description) = &update.description {
            property.description = description.clone();
        }
        if let Some(listing_type) = update.listing_type {
            property.listing_type = listing_type;
        }
        if let Some(bedrooms) = update.bedrooms {
            property.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = update.bathrooms {
            property.bathrooms = bathrooms;
        }
        if let Some(floor_area) = update.floor_area {
            property.floor_area = floor_area;
        }
        if let Some(total_floors) = update.total_floors {
            property.total_floors = total_floors;
        }
        if let Some(amenities) = &update.amenities {
            property.amenities = amenities.clone();
        }
        if let Some(address) = &update.address {
            property.address = address.clone();
        }
        if let Some(city) = &update.city {
            property.city = city.clone();
        }
        if let Some(state) = &update.state {
            property.state = state.clone();
        }
        if let Some(country) = &update.country {
            property.country = country.clone();
        }
        if let Some(contact_name) = &update.contact_name {
            property.contact_name = contact_name.clone();
        }
        if let Some(contact_email) = &update.contact_email {
            property.contact_email = contact_email.clone();
        }
        if let Some(contact_phone) = &update.contact_phone {
            property.contact_phone = contact_phone.clone();
        }
        if let Some(price) = update.price {
            property.price = price;
        }
        if let Some(discounted_price) = update.discounted_price {
            property.discounted_price = Some(discounted_price);
        }
        if let Some(images) = &update.images {
            property.images = images.clone();
        }
        property.updated_at = chrono::Utc::now();

        Ok(property.clone())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut properties = self.properties.lock().unwrap();
        properties
            .remove(&id.into_inner())
            .map(|_| ())
            .ok_or(DomainError::PropertyNotFound(id))
    }
}

/// In-memory ContactRepository
#[derive(Default)]
pub struct InMemoryContactRepository {
    contacts: Mutex<HashMap<i64, ContactMessage>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, contact: &ContactMessage) -> RepoResult<()> {
        let mut contacts = self.contacts.lock().unwrap();
        contacts.insert(contact.id.into_inner(), contact.clone());
        Ok(())
    }

    async fn list_all(&self) -> RepoResult<Vec<ContactMessage>> {
        let contacts = self.contacts.lock().unwrap();
        let mut all: Vec<_> = contacts.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut contacts = self.contacts.lock().unwrap();
        contacts
            .remove(&id.into_inner())
            .map(|_| ())
            .ok_or(DomainError::ContactNotFound(id))
    }
}

/// In-memory BookingRepository
#[derive(Default)]
pub struct InMemoryBookingRepository {
    bookings: Mutex<HashMap<i64, Booking>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create(&self, booking: &Booking) -> RepoResult<()> {
        let mut bookings = self.bookings.lock().unwrap();
        bookings.insert(booking.id.into_inner(), booking.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Booking>> {
        let bookings = self.bookings.lock().unwrap();
        Ok(bookings.get(&id.into_inner()).cloned())
    }
}

/// Build a ServiceContext backed by in-memory fakes
pub fn test_context(user_repo: Arc<InMemoryUserRepository>) -> ServiceContext {
    ServiceContextBuilder::new()
        .user_repo(user_repo)
        .property_repo(Arc::new(InMemoryPropertyRepository::new()))
        .contact_repo(Arc::new(InMemoryContactRepository::new()))
        .booking_repo(Arc::new(InMemoryBookingRepository::new()))
        .jwt_service(Arc::new(JwtService::new(
            "test-access-secret-0123456789",
            "test-refresh-secret-0123456789",
            900,
            604800,
        )))
        .mailer(Mailer::disabled())
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(0)))
        .build()
        .unwrap()
}

/// Build a ServiceContext with explicit user and property repositories
pub fn test_context_with_properties(
    user_repo: Arc<InMemoryUserRepository>,
    property_repo: Arc<InMemoryPropertyRepository>,
) -> ServiceContext {
    ServiceContextBuilder::new()
        .user_repo(user_repo)
        .property_repo(property_repo)
        .contact_repo(Arc::new(InMemoryContactRepository::new()))
        .booking_repo(Arc::new(InMemoryBookingRepository::new()))
        .jwt_service(Arc::new(JwtService::new(
            "test-access-secret-0123456789",
            "test-refresh-secret-0123456789",
            900,
            604800,
        )))
        .mailer(Mailer::disabled())
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(0)))
        .build()
        .unwrap()
}
