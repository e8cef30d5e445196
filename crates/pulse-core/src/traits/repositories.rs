//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{Creator, Message, MessageWithRelations, Reaction, Reply};
use crate::error::DomainError;
use crate::value_objects::MessageTag;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Message Repository
// ============================================================================

/// Filter options for message listing
#[derive(Debug, Clone, Default)]
pub struct MessageFilter {
    pub reviewed: Option<bool>,
    pub tag: Option<MessageTag>,
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find message by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Message>>;

    /// List a creator's messages, newest first, with optional filters
    async fn find_by_creator(
        &self,
        creator_id: Uuid,
        company_id: &str,
        filter: MessageFilter,
    ) -> RepoResult<Vec<Message>>;

    /// List a creator's messages hydrated with replies and reactions,
    /// optionally bounded below by a creation-time cutoff
    async fn find_hydrated(
        &self,
        creator_id: Uuid,
        company_id: &str,
        since: Option<DateTime<Utc>>,
    ) -> RepoResult<Vec<MessageWithRelations>>;

    /// Create a new message
    async fn create(&self, message: &Message) -> RepoResult<()>;

    /// Set the reviewed flag
    async fn set_reviewed(&self, id: Uuid, reviewed: bool) -> RepoResult<()>;

    /// Delete a message (replies and reactions cascade)
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Reply Repository
// ============================================================================

#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// Find reply by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Reply>>;

    /// List replies for a message, newest first
    async fn find_by_message(&self, message_id: Uuid, public_only: bool) -> RepoResult<Vec<Reply>>;

    /// Earliest reply time per message, across the full reply corpus.
    /// Used for response-latency computation.
    async fn first_reply_times(&self) -> RepoResult<HashMap<Uuid, DateTime<Utc>>>;

    /// Create a new reply
    async fn create(&self, reply: &Reply) -> RepoResult<()>;

    /// Update reply body and/or visibility
    async fn update(&self, reply: &Reply) -> RepoResult<()>;

    /// Delete a reply
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find reaction by message, fingerprint, and type
    async fn find(
        &self,
        message_id: Uuid,
        user_hash: &str,
        reaction_type: &str,
    ) -> RepoResult<Option<Reaction>>;

    /// Get all reactions for a message
    async fn find_by_message(&self, message_id: Uuid) -> RepoResult<Vec<Reaction>>;

    /// Total reaction count for a message
    async fn count_by_message(&self, message_id: Uuid) -> RepoResult<i64>;

    /// Add a reaction (idempotent per message, fingerprint, and type)
    async fn create(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Remove a reaction
    async fn delete(&self, message_id: Uuid, user_hash: &str, reaction_type: &str)
        -> RepoResult<()>;
}

// ============================================================================
// Creator Repository
// ============================================================================

#[async_trait]
pub trait CreatorRepository: Send + Sync {
    /// Find creator by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Creator>>;

    /// Find creator by public feedback link
    async fn find_by_feedback_link(&self, feedback_link: &str) -> RepoResult<Option<Creator>>;

    /// Create a new creator
    async fn create(&self, creator: &Creator) -> RepoResult<()>;
}
