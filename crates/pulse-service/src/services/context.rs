//! Service context - dependency container for services
//!
//! Holds all repositories and the platform access provider needed by services.

use std::sync::Arc;

use pulse_core::traits::{
    AccessProvider, CreatorRepository, MessageRepository, ReactionRepository, ReplyRepository,
};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Data store repositories
/// - The external platform access provider
/// - The company (tenant) id this installation serves
#[derive(Clone)]
pub struct ServiceContext {
    message_repo: Arc<dyn MessageRepository>,
    reply_repo: Arc<dyn ReplyRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
    creator_repo: Arc<dyn CreatorRepository>,
    access_provider: Arc<dyn AccessProvider>,
    company_id: String,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        message_repo: Arc<dyn MessageRepository>,
        reply_repo: Arc<dyn ReplyRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
        creator_repo: Arc<dyn CreatorRepository>,
        access_provider: Arc<dyn AccessProvider>,
        company_id: String,
    ) -> Self {
        Self {
            message_repo,
            reply_repo,
            reaction_repo,
            creator_repo,
            access_provider,
            company_id,
        }
    }

    // === Repositories ===

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the reply repository
    pub fn reply_repo(&self) -> &dyn ReplyRepository {
        self.reply_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    /// Get the creator repository
    pub fn creator_repo(&self) -> &dyn CreatorRepository {
        self.creator_repo.as_ref()
    }

    // === Platform ===

    /// Get the platform access provider
    pub fn access_provider(&self) -> &dyn AccessProvider {
        self.access_provider.as_ref()
    }

    /// Get the company id this installation serves
    pub fn company_id(&self) -> &str {
        &self.company_id
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("access_provider", &"AccessProvider")
            .field("company_id", &self.company_id)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    message_repo: Option<Arc<dyn MessageRepository>>,
    reply_repo: Option<Arc<dyn ReplyRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    creator_repo: Option<Arc<dyn CreatorRepository>>,
    access_provider: Option<Arc<dyn AccessProvider>>,
    company_id: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn reply_repo(mut self, repo: Arc<dyn ReplyRepository>) -> Self {
        self.reply_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    pub fn creator_repo(mut self, repo: Arc<dyn CreatorRepository>) -> Self {
        self.creator_repo = Some(repo);
        self
    }

    pub fn access_provider(mut self, provider: Arc<dyn AccessProvider>) -> Self {
        self.access_provider = Some(provider);
        self
    }

    pub fn company_id(mut self, company_id: impl Into<String>) -> Self {
        self.company_id = Some(company_id.into());
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            self.reply_repo
                .ok_or_else(|| ServiceError::validation("reply_repo is required"))?,
            self.reaction_repo
                .ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            self.creator_repo
                .ok_or_else(|| ServiceError::validation("creator_repo is required"))?,
            self.access_provider
                .ok_or_else(|| ServiceError::validation("access_provider is required"))?,
            self.company_id
                .ok_or_else(|| ServiceError::validation("company_id is required"))?,
        ))
    }
}
