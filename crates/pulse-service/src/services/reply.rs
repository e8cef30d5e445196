//! Reply service
//!
//! Creators answer messages; replies are private by default and can be
//! published to the feed.

use tracing::{info, instrument};
use uuid::Uuid;

use pulse_core::entities::Reply;

use crate::dto::{CreateReplyRequest, ReplyResponse, UpdateReplyRequest};

use super::access::{AccessService, Actor};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reply service
pub struct ReplyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReplyService<'a> {
    /// Create a new ReplyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reply to a message. Creator access required.
    #[instrument(skip(self, actor, request))]
    pub async fn create(
        &self,
        actor: &Actor,
        message_id: Uuid,
        request: CreateReplyRequest,
    ) -> ServiceResult<ReplyResponse> {
        AccessService::new(self.ctx).require_admin(actor)?;

        // Replying to a nonexistent message is a caller error, not a storage one
        self.ctx
            .message_repo()
            .find_by_id(message_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Message", message_id.to_string()))?;

        let reply = Reply::new(Uuid::new_v4(), message_id, request.body, request.is_public);

        self.ctx.reply_repo().create(&reply).await?;

        info!(
            reply_id = %reply.id,
            message_id = %message_id,
            is_public = reply.is_public,
            "Reply created"
        );

        Ok(ReplyResponse::from(&reply))
    }

    /// List replies for a message. Visitors only see public replies;
    /// creators see everything.
    #[instrument(skip(self, viewer))]
    pub async fn list(
        &self,
        viewer: Option<&Actor>,
        message_id: Uuid,
    ) -> ServiceResult<Vec<ReplyResponse>> {
        let public_only = !viewer.is_some_and(Actor::is_admin);

        let replies = self
            .ctx
            .reply_repo()
            .find_by_message(message_id, public_only)
            .await?;

        Ok(replies.iter().map(ReplyResponse::from).collect())
    }

    /// Update reply text and/or visibility. Creator access required.
    #[instrument(skip(self, actor, request))]
    pub async fn update(
        &self,
        actor: &Actor,
        id: Uuid,
        request: UpdateReplyRequest,
    ) -> ServiceResult<ReplyResponse> {
        AccessService::new(self.ctx).require_admin(actor)?;

        if request.is_empty() {
            return Err(ServiceError::validation("no fields to update"));
        }

        let mut reply = self
            .ctx
            .reply_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Reply", id.to_string()))?;

        if let Some(body) = request.body {
            reply.body = body;
        }
        if let Some(is_public) = request.is_public {
            reply.set_visibility(is_public);
        }

        self.ctx.reply_repo().update(&reply).await?;

        info!(
            reply_id = %id,
            is_public = reply.is_public,
            "Reply updated"
        );

        Ok(ReplyResponse::from(&reply))
    }

    /// Delete a reply. Creator access required.
    #[instrument(skip(self, actor))]
    pub async fn delete(&self, actor: &Actor, id: Uuid) -> ServiceResult<()> {
        AccessService::new(self.ctx).require_admin(actor)?;

        self.ctx.reply_repo().delete(id).await?;

        info!(reply_id = %id, "Reply deleted");

        Ok(())
    }
}
