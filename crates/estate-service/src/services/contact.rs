//! Contact service - contact form storage and owner email relay

use tracing::{info, instrument};

use estate_core::entities::ContactMessage;
use estate_core::value_objects::Snowflake;

use crate::dto::{ContactOwnerRequest, ContactResponse, CreateContactRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Contact service
pub struct ContactService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContactService<'a> {
    /// Create a new ContactService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store a public contact form submission
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn create(&self, request: CreateContactRequest) -> ServiceResult<ContactResponse> {
        let contact = ContactMessage::new(
            self.ctx.generate_id(),
            request.name,
            request.email,
            request.subject,
            request.message,
        );

        self.ctx.contact_repo().create(&contact).await?;

        info!(contact_id = %contact.id, "Contact message stored");

        Ok(ContactResponse::from(&contact))
    }

    /// List all submissions, newest first (admin only; gated at the API layer)
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ContactResponse>> {
        let contacts = self.ctx.contact_repo().list_all().await?;
        Ok(contacts.iter().map(ContactResponse::from).collect())
    }

    /// Delete a submission
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Snowflake) -> ServiceResult<()> {
        self.ctx.contact_repo().delete(id).await?;
        info!(contact_id = %id, "Contact message deleted");
        Ok(())
    }

    /// Relay a visitor message to a property owner by email
    ///
    /// The visitor's address rides along as reply-to so the owner can answer
    /// directly. SMTP failure surfaces as an error; nothing is stored.
    #[instrument(skip(self, request), fields(owner = %request.owner_email))]
    pub async fn contact_owner(&self, request: ContactOwnerRequest) -> ServiceResult<()> {
        let html_body = format!(
            "<h2>New inquiry about your listing</h2>\
             <p><strong>From:</strong> {} &lt;{}&gt;</p>\
             <p>{}</p>",
            html_escape(&request.name),
            html_escape(&request.email),
            html_escape(&request.message),
        );

        self.ctx
            .mailer()
            .send(
                &request.owner_email,
                "New inquiry about your listing",
                html_body,
                Some(&request.email),
            )
            .await
            .map_err(ServiceError::from)?;

        info!("Owner contact email relayed");

        Ok(())
    }
}

/// Minimal HTML escaping for user-supplied text placed into the mail body
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
