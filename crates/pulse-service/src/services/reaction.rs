//! Reaction service
//!
//! Anonymous visitors react to messages with emoji tokens. A fingerprint
//! hash enforces one reaction per type per visitor.

use std::collections::BTreeMap;

use tracing::{info, instrument};
use uuid::Uuid;

use pulse_core::entities::Reaction;

use crate::dto::{ReactionRequest, ReactionSummaryResponse, RemoveReactionRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a reaction to a message
    #[instrument(skip(self, request))]
    pub async fn add(&self, message_id: Uuid, request: ReactionRequest) -> ServiceResult<()> {
        self.verify_message_exists(message_id).await?;

        let reaction_type = request.reaction_type().to_string();

        // Check if reaction already exists
        if self
            .ctx
            .reaction_repo()
            .find(message_id, &request.user_hash, &reaction_type)
            .await?
            .is_some()
        {
            // Already reacted with this type, no-op
            return Ok(());
        }

        let reaction = Reaction::new(
            Uuid::new_v4(),
            message_id,
            reaction_type.clone(),
            Some(request.user_hash),
        );

        self.ctx.reaction_repo().create(&reaction).await?;

        info!(
            message_id = %message_id,
            reaction_type = %reaction_type,
            "Reaction added"
        );

        Ok(())
    }

    /// Remove a reaction from a message
    #[instrument(skip(self, request))]
    pub async fn remove(
        &self,
        message_id: Uuid,
        request: RemoveReactionRequest,
    ) -> ServiceResult<()> {
        self.verify_message_exists(message_id).await?;

        self.ctx
            .reaction_repo()
            .delete(message_id, &request.user_hash, &request.reaction_type)
            .await?;

        info!(
            message_id = %message_id,
            reaction_type = %request.reaction_type,
            "Reaction removed"
        );

        Ok(())
    }

    /// Get per-type reaction counts for a message, flagging the types the
    /// viewer has reacted with
    #[instrument(skip(self, viewer_hash))]
    pub async fn summary(
        &self,
        message_id: Uuid,
        viewer_hash: Option<&str>,
    ) -> ServiceResult<Vec<ReactionSummaryResponse>> {
        self.verify_message_exists(message_id).await?;

        let reactions = self.ctx.reaction_repo().find_by_message(message_id).await?;

        let mut counts: BTreeMap<String, (i64, bool)> = BTreeMap::new();
        for reaction in &reactions {
            let entry = counts.entry(reaction.reaction_type.clone()).or_default();
            entry.0 += 1;
            if viewer_hash.is_some() && reaction.user_hash.as_deref() == viewer_hash {
                entry.1 = true;
            }
        }

        Ok(counts
            .into_iter()
            .map(|(reaction_type, (count, me))| ReactionSummaryResponse {
                reaction_type,
                count,
                me,
            })
            .collect())
    }

    async fn verify_message_exists(&self, message_id: Uuid) -> ServiceResult<()> {
        self.ctx
            .message_repo()
            .find_by_id(message_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Message", message_id.to_string()))?;
        Ok(())
    }
}
