//! Reaction entity - an anonymous emoji reaction on a message

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Reaction entity
///
/// `user_hash` is a hashed client fingerprint; it enforces one reaction per
/// type per visitor without identifying anyone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: Uuid,
    pub message_id: Uuid,
    pub reaction_type: String,
    pub user_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(
        id: Uuid,
        message_id: Uuid,
        reaction_type: String,
        user_hash: Option<String>,
    ) -> Self {
        Self {
            id,
            message_id,
            reaction_type,
            user_hash,
            created_at: Utc::now(),
        }
    }

    /// Check if reaction uses a specific type token
    #[inline]
    pub fn is_type(&self, reaction_type: &str) -> bool {
        self.reaction_type == reaction_type
    }
}
