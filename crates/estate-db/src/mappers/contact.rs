//! Contact message entity <-> model mapper

use estate_core::entities::ContactMessage;
use estate_core::value_objects::Snowflake;

use crate::models::ContactModel;

impl From<ContactModel> for ContactMessage {
    fn from(model: ContactModel) -> Self {
        ContactMessage {
            id: Snowflake::new(model.id),
            name: model.name,
            email: model.email,
            subject: model.subject,
            message: model.message,
            created_at: model.created_at,
        }
    }
}
