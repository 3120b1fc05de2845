//! PostgreSQL implementation of ContactRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use estate_core::entities::ContactMessage;
use estate_core::traits::{ContactRepository, RepoResult};
use estate_core::value_objects::Snowflake;

use crate::models::ContactModel;

use super::error::{contact_not_found, map_db_error};

/// PostgreSQL implementation of ContactRepository
#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    /// Create a new PgContactRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    #[instrument(skip(self, contact))]
    async fn create(&self, contact: &ContactMessage) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO contact_messages (id, name, email, subject, message, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(contact.id.into_inner())
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.subject)
        .bind(&contact.message)
        .bind(contact.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<ContactMessage>> {
        let rows = sqlx::query_as::<_, ContactModel>(
            r"
            SELECT id, name, email, subject, message, created_at
            FROM contact_messages
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ContactMessage::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(contact_not_found(id));
        }

        Ok(())
    }
}
