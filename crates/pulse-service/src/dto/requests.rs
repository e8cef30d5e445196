//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use pulse_core::{MessageTag, ProductCategory};

// ============================================================================
// Message Requests
// ============================================================================

/// Anonymous message submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitMessageRequest {
    pub creator_id: Uuid,

    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub body: String,

    pub tag: MessageTag,

    pub product_category: Option<ProductCategory>,
}

/// Update a message's reviewed flag
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMessageRequest {
    pub reviewed: bool,
}

// ============================================================================
// Reply Requests
// ============================================================================

/// Create a reply to a message
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReplyRequest {
    #[validate(length(min = 1, max = 2000, message = "Reply must be 1-2000 characters"))]
    pub body: String,

    /// Whether the reply shows up in the public feed
    #[serde(default)]
    pub is_public: bool,
}

/// Update reply text and/or visibility; at least one field must be present
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateReplyRequest {
    #[validate(length(min = 1, max = 2000, message = "Reply must be 1-2000 characters"))]
    pub body: Option<String>,

    pub is_public: Option<bool>,
}

impl UpdateReplyRequest {
    /// Check whether the request carries any change at all
    pub fn is_empty(&self) -> bool {
        self.body.is_none() && self.is_public.is_none()
    }
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Add a reaction to a message
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReactionRequest {
    /// Emoji or textual reaction token; defaults to a thumbs-up
    #[validate(length(min = 1, max = 64, message = "Reaction type must be 1-64 characters"))]
    pub reaction_type: Option<String>,

    #[validate(length(min = 1, max = 128, message = "User hash must be 1-128 characters"))]
    pub user_hash: String,
}

impl ReactionRequest {
    /// Default reaction token when the client sends none
    pub const DEFAULT_TYPE: &'static str = "thumbs_up";

    /// Effective reaction token
    pub fn reaction_type(&self) -> &str {
        self.reaction_type.as_deref().unwrap_or(Self::DEFAULT_TYPE)
    }
}

/// Remove a reaction from a message
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RemoveReactionRequest {
    #[validate(length(min = 1, max = 64, message = "Reaction type must be 1-64 characters"))]
    pub reaction_type: String,

    #[validate(length(min = 1, max = 128, message = "User hash must be 1-128 characters"))]
    pub user_hash: String,
}

// ============================================================================
// Creator Requests
// ============================================================================

/// Register a creator profile for this installation
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterCreatorRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}
