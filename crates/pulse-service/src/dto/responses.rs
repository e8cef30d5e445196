//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use pulse_core::{MessageTag, ProductCategory};

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

// ============================================================================
// Message Responses
// ============================================================================

/// Message as seen by the creator dashboard
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub body: String,
    pub tag: MessageTag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_category: Option<ProductCategory>,
    pub reviewed: bool,
    pub created_at: DateTime<Utc>,
}

/// Message in the public feed: public replies only, plus reaction volume
#[derive(Debug, Clone, Serialize)]
pub struct FeedItemResponse {
    pub id: Uuid,
    pub body: String,
    pub tag: MessageTag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_category: Option<ProductCategory>,
    pub created_at: DateTime<Utc>,
    pub replies: Vec<ReplyResponse>,
    pub reaction_count: i64,
}

// ============================================================================
// Reply Responses
// ============================================================================

/// Reply to an anonymous message
#[derive(Debug, Clone, Serialize)]
pub struct ReplyResponse {
    pub id: Uuid,
    pub message_id: Uuid,
    pub body: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// Per-type reaction count on a message, with the viewer's own-reaction flag
#[derive(Debug, Clone, Serialize)]
pub struct ReactionSummaryResponse {
    pub reaction_type: String,
    pub count: i64,
    pub me: bool,
}

// ============================================================================
// Creator Responses
// ============================================================================

/// Public creator profile (email intentionally omitted)
#[derive(Debug, Clone, Serialize)]
pub struct CreatorResponse {
    pub id: Uuid,
    pub name: String,
    pub feedback_link: String,
    pub created_at: DateTime<Utc>,
}
