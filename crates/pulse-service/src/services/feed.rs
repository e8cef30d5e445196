//! Feed service
//!
//! The public feed shows a creator's messages that have at least one public
//! reply, together with reaction volume. Private replies never leave the
//! service layer.

use tracing::instrument;
use uuid::Uuid;

use crate::dto::FeedItemResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Build the public feed for a creator, newest first
    #[instrument(skip(self))]
    pub async fn feed(&self, creator_id: Uuid) -> ServiceResult<Vec<FeedItemResponse>> {
        self.ctx
            .creator_repo()
            .find_by_id(creator_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Creator", creator_id.to_string()))?;

        let hydrated = self
            .ctx
            .message_repo()
            .find_hydrated(creator_id, self.ctx.company_id(), None)
            .await?;

        let mut items: Vec<FeedItemResponse> = hydrated
            .iter()
            .filter(|m| m.public_reply_count() > 0)
            .map(FeedItemResponse::from)
            .collect();

        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(items)
    }
}
