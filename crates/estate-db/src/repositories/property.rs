//! PostgreSQL implementation of PropertyRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use estate_core::entities::Property;
use estate_core::traits::{PropertyRepository, PropertyUpdate, RepoResult};
use estate_core::value_objects::Snowflake;

use crate::models::PropertyModel;

use super::error::{map_db_error, property_not_found};

const PROPERTY_COLUMNS: &str = "id, name, description, listing_type, bedrooms, bathrooms, \
     floor_area, total_floors, amenities, address, city, state, country, \
     contact_name, contact_email, contact_phone, price, discounted_price, \
     images, created_by, created_at, updated_at";

/// PostgreSQL implementation of PropertyRepository
#[derive(Clone)]
pub struct PgPropertyRepository {
    pool: PgPool,
}

impl PgPropertyRepository {
    /// Create a new PgPropertyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyRepository for PgPropertyRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Property>> {
        let result = sqlx::query_as::<_, PropertyModel>(&format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Property::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Property>> {
        let rows = sqlx::query_as::<_, PropertyModel>(&format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Property::try_from).collect()
    }

    #[instrument(skip(self, property))]
    async fn create(&self, property: &Property) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO properties (
                id, name, description, listing_type, bedrooms, bathrooms,
                floor_area, total_floors, amenities, address, city, state, country,
                contact_name, contact_email, contact_phone, price, discounted_price,
                images, created_by, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, $19, $20, $21, $22)
            ",
        )
        .bind(property.id.into_inner())
        .bind(&property.name)
        .bind(&property.description)
        .bind(property.listing_type.as_str())
        .bind(property.bedrooms)
        .bind(property.bathrooms)
        .bind(property.floor_area)
        .bind(property.total_floors)
        .bind(&property.amenities)
        .bind(&property.address)
        .bind(&property.city)
        .bind(&property.state)
        .bind(&property.country)
        .bind(&property.contact_name)
        .bind(&property.contact_email)
        .bind(&property.contact_phone)
        .bind(property.price)
        .bind(property.discounted_price)
        .bind(&property.images)
        .bind(property.created_by.into_inner())
        .bind(property.created_at)
        .bind(property.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, update))]
    async fn update(&self, id: Snowflake, update: &PropertyUpdate) -> RepoResult<Property> {
        // Absent fields keep their stored value via COALESCE
        let result = sqlx::query_as::<_, PropertyModel>(&format!(
            r"
            UPDATE properties SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                listing_type = COALESCE($4, listing_type),
                bedrooms = COALESCE($5, bedrooms),
                bathrooms = COALESCE($6, bathrooms),
                floor_area = COALESCE($7, floor_area),
                total_floors = COALESCE($8, total_floors),
                amenities = COALESCE($9, amenities),
                address = COALESCE($10, address),
                city = COALESCE($11, city),
                state = COALESCE($12, state),
                country = COALESCE($13, country),
                contact_name = COALESCE($14, contact_name),
                contact_email = COALESCE($15, contact_email),
                contact_phone = COALESCE($16, contact_phone),
                price = COALESCE($17, price),
                discounted_price = COALESCE($18, discounted_price),
                images = COALESCE($19, images),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {PROPERTY_COLUMNS}
            "
        ))
        .bind(id.into_inner())
        .bind(update.name.as_deref())
        .bind(update.description.as_deref())
        .bind(update.listing_type.map(|t| t.as_str()))
        .bind(update.bedrooms)
        .bind(update.bathrooms)
        .bind(update.floor_area)
        .bind(update.total_floors)
        .bind(update.amenities.as_deref())
        .bind(update.address.as_deref())
        .bind(update.city.as_deref())
        .bind(update.state.as_deref())
        .bind(update.country.as_deref())
        .bind(update.contact_name.as_deref())
        .bind(update.contact_email.as_deref())
        .bind(update.contact_phone.as_deref())
        .bind(update.price)
        .bind(update.discounted_price)
        .bind(update.images.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match result {
            Some(model) => Property::try_from(model),
            None => Err(property_not_found(id)),
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(property_not_found(id));
        }

        Ok(())
    }
}
