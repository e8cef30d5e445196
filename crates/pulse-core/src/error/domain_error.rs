//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Message not found: {0}")]
    MessageNotFound(Uuid),

    #[error("Reply not found: {0}")]
    ReplyNotFound(Uuid),

    #[error("Reaction not found")]
    ReactionNotFound,

    #[error("Creator not found: {0}")]
    CreatorNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Missing owner identifier")]
    MissingOwner,

    #[error("Unknown tag: {0}")]
    UnknownTag(String),

    #[error("Unknown period: {0}")]
    UnknownPeriod(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Invalid platform token")]
    InvalidToken,

    #[error("Creator access required")]
    CreatorAccessRequired,

    #[error("Company access required")]
    CompanyAccessRequired,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Reaction already exists")]
    ReactionAlreadyExists,

    #[error("Feedback link already in use: {0}")]
    FeedbackLinkExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Platform access error: {0}")]
    PlatformError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::ReplyNotFound(_) => "UNKNOWN_REPLY",
            Self::ReactionNotFound => "UNKNOWN_REACTION",
            Self::CreatorNotFound(_) => "UNKNOWN_CREATOR",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingOwner => "MISSING_OWNER",
            Self::UnknownTag(_) => "UNKNOWN_TAG",
            Self::UnknownPeriod(_) => "UNKNOWN_PERIOD",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Authorization
            Self::InvalidToken => "INVALID_TOKEN",
            Self::CreatorAccessRequired => "CREATOR_ACCESS_REQUIRED",
            Self::CompanyAccessRequired => "COMPANY_ACCESS_REQUIRED",

            // Conflict
            Self::ReactionAlreadyExists => "REACTION_ALREADY_EXISTS",
            Self::FeedbackLinkExists(_) => "FEEDBACK_LINK_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::PlatformError(_) => "PLATFORM_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MessageNotFound(_)
                | Self::ReplyNotFound(_)
                | Self::ReactionNotFound
                | Self::CreatorNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::MissingOwner
                | Self::UnknownTag(_)
                | Self::UnknownPeriod(_)
                | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::InvalidToken | Self::CreatorAccessRequired | Self::CompanyAccessRequired
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::ReactionAlreadyExists | Self::FeedbackLinkExists(_)
        )
    }

    /// Check if this error means an upstream collaborator failed
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::PlatformError(_))
    }
}
