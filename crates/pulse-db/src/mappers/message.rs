//! Message entity <-> model mapper

use pulse_core::entities::Message;
use pulse_core::error::DomainError;
use pulse_core::value_objects::{MessageTag, ProductCategory};

use crate::models::MessageModel;

/// Convert MessageModel to Message entity
///
/// Fallible because tag and category columns are free text in the store;
/// a row carrying an unknown token is surfaced, not silently dropped.
impl TryFrom<MessageModel> for Message {
    type Error = DomainError;

    fn try_from(model: MessageModel) -> Result<Self, Self::Error> {
        let tag: MessageTag = model
            .tag
            .parse()
            .map_err(|_| DomainError::UnknownTag(model.tag.clone()))?;

        let product_category = model
            .product_category
            .as_deref()
            .map(str::parse::<ProductCategory>)
            .transpose()
            .map_err(|e| DomainError::UnknownTag(e.0))?;

        Ok(Message {
            id: model.id,
            creator_id: model.creator_id,
            company_id: model.company_id,
            body: model.body,
            tag,
            product_category,
            reviewed: model.reviewed,
            created_at: model.created_at,
        })
    }
}
