//! Creator service
//!
//! Resolves public feedback links and registers creator profiles.

use tracing::{info, instrument};
use uuid::Uuid;

use pulse_core::entities::Creator;

use crate::dto::{CreatorResponse, RegisterCreatorRequest};

use super::access::{AccessService, Actor};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Creator service
pub struct CreatorService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CreatorService<'a> {
    /// Create a new CreatorService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve a public feedback link to a creator profile
    #[instrument(skip(self))]
    pub async fn lookup(&self, feedback_link: &str) -> ServiceResult<CreatorResponse> {
        let creator = self
            .ctx
            .creator_repo()
            .find_by_feedback_link(feedback_link)
            .await?
            .ok_or_else(|| ServiceError::not_found("Creator", feedback_link))?;

        Ok(CreatorResponse::from(&creator))
    }

    /// Register a creator profile for this installation.
    /// Creator access required.
    #[instrument(skip(self, actor, request))]
    pub async fn register(
        &self,
        actor: &Actor,
        request: RegisterCreatorRequest,
    ) -> ServiceResult<CreatorResponse> {
        AccessService::new(self.ctx).require_admin(actor)?;

        let creator = Creator::new(
            Uuid::new_v4(),
            self.ctx.company_id().to_string(),
            request.name,
            request.email,
        );

        self.ctx.creator_repo().create(&creator).await?;

        info!(
            creator_id = %creator.id,
            feedback_link = %creator.feedback_link,
            "Creator registered"
        );

        Ok(CreatorResponse::from(&creator))
    }
}
