//! Entity -> response DTO mappers

use pulse_core::entities::{Creator, Message, MessageWithRelations, Reply};

use super::responses::{CreatorResponse, FeedItemResponse, MessageResponse, ReplyResponse};

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id,
            creator_id: message.creator_id,
            body: message.body.clone(),
            tag: message.tag,
            product_category: message.product_category,
            reviewed: message.reviewed,
            created_at: message.created_at,
        }
    }
}

impl From<&Reply> for ReplyResponse {
    fn from(reply: &Reply) -> Self {
        Self {
            id: reply.id,
            message_id: reply.message_id,
            body: reply.body.clone(),
            is_public: reply.is_public,
            created_at: reply.created_at,
        }
    }
}

impl From<&Creator> for CreatorResponse {
    fn from(creator: &Creator) -> Self {
        Self {
            id: creator.id,
            name: creator.name.clone(),
            feedback_link: creator.feedback_link.clone(),
            created_at: creator.created_at,
        }
    }
}

/// Build a public feed item: only public replies are carried over
impl From<&MessageWithRelations> for FeedItemResponse {
    fn from(hydrated: &MessageWithRelations) -> Self {
        let message = &hydrated.message;
        Self {
            id: message.id,
            body: message.body.clone(),
            tag: message.tag,
            product_category: message.product_category,
            created_at: message.created_at,
            replies: hydrated
                .replies
                .iter()
                .filter(|r| r.is_public)
                .map(ReplyResponse::from)
                .collect(),
            reaction_count: hydrated.reactions.len() as i64,
        }
    }
}
