//! Reply entity - a creator's answer to an anonymous message

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Reply entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub id: Uuid,
    pub message_id: Uuid,
    pub body: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

impl Reply {
    /// Create a new Reply
    pub fn new(id: Uuid, message_id: Uuid, body: String, is_public: bool) -> Self {
        Self {
            id,
            message_id,
            body,
            is_public,
            created_at: Utc::now(),
        }
    }

    /// Toggle or set the visibility flag
    pub fn set_visibility(&mut self, is_public: bool) {
        self.is_public = is_public;
    }

    /// Check if reply body is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}
