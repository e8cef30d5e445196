//! Message service
//!
//! Handles anonymous message submission and creator-side moderation.

use tracing::{info, instrument};
use uuid::Uuid;

use pulse_core::entities::Message;
use pulse_core::traits::MessageFilter;

use crate::dto::{MessageResponse, SubmitMessageRequest};

use super::access::{AccessService, Actor};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit an anonymous message to a creator. No authentication: visitors
    /// stay anonymous by design.
    #[instrument(skip(self, request))]
    pub async fn submit(&self, request: SubmitMessageRequest) -> ServiceResult<MessageResponse> {
        let creator = self
            .ctx
            .creator_repo()
            .find_by_id(request.creator_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Creator", request.creator_id.to_string()))?;

        let message = Message::new(
            Uuid::new_v4(),
            creator.id,
            self.ctx.company_id().to_string(),
            request.body,
            request.tag,
            request.product_category,
        );

        self.ctx.message_repo().create(&message).await?;

        info!(
            message_id = %message.id,
            creator_id = %creator.id,
            tag = %message.tag,
            "Message submitted"
        );

        Ok(MessageResponse::from(&message))
    }

    /// List a creator's messages with optional reviewed/tag filters.
    /// Creator access required.
    #[instrument(skip(self, actor))]
    pub async fn list(
        &self,
        actor: &Actor,
        creator_id: Uuid,
        filter: MessageFilter,
    ) -> ServiceResult<Vec<MessageResponse>> {
        AccessService::new(self.ctx).require_admin(actor)?;

        let messages = self
            .ctx
            .message_repo()
            .find_by_creator(creator_id, self.ctx.company_id(), filter)
            .await?;

        Ok(messages.iter().map(MessageResponse::from).collect())
    }

    /// Fetch a single message. Creator access required.
    #[instrument(skip(self, actor))]
    pub async fn get(&self, actor: &Actor, id: Uuid) -> ServiceResult<MessageResponse> {
        AccessService::new(self.ctx).require_admin(actor)?;

        let message = self
            .ctx
            .message_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Message", id.to_string()))?;

        Ok(MessageResponse::from(&message))
    }

    /// Set the reviewed flag on a message. Creator access required.
    #[instrument(skip(self, actor))]
    pub async fn set_reviewed(
        &self,
        actor: &Actor,
        id: Uuid,
        reviewed: bool,
    ) -> ServiceResult<MessageResponse> {
        AccessService::new(self.ctx).require_admin(actor)?;

        self.ctx.message_repo().set_reviewed(id, reviewed).await?;

        let message = self
            .ctx
            .message_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Message", id.to_string()))?;

        info!(message_id = %id, reviewed, "Message reviewed flag updated");

        Ok(MessageResponse::from(&message))
    }

    /// Delete a message and its relations. Creator access required.
    #[instrument(skip(self, actor))]
    pub async fn delete(&self, actor: &Actor, id: Uuid) -> ServiceResult<()> {
        AccessService::new(self.ctx).require_admin(actor)?;

        self.ctx.message_repo().delete(id).await?;

        info!(message_id = %id, "Message deleted");

        Ok(())
    }
}
