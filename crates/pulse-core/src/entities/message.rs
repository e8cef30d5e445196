//! Message entity - an anonymous message submitted to a creator

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::{MessageTag, ProductCategory};

use super::{Reaction, Reply};

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub company_id: String,
    pub body: String,
    pub tag: MessageTag,
    pub product_category: Option<ProductCategory>,
    pub reviewed: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new Message
    pub fn new(
        id: Uuid,
        creator_id: Uuid,
        company_id: String,
        body: String,
        tag: MessageTag,
        product_category: Option<ProductCategory>,
    ) -> Self {
        Self {
            id,
            creator_id,
            company_id,
            body,
            tag,
            product_category,
            reviewed: false,
            created_at: Utc::now(),
        }
    }

    /// Mark the message as reviewed (or unreviewed)
    pub fn set_reviewed(&mut self, reviewed: bool) {
        self.reviewed = reviewed;
    }

    /// Check if message body is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Get a truncated preview of the message body (for log context)
    pub fn preview(&self, max_len: usize) -> &str {
        if self.body.len() <= max_len {
            &self.body
        } else {
            let mut end = max_len;
            while !self.body.is_char_boundary(end) && end > 0 {
                end -= 1;
            }
            &self.body[..end]
        }
    }
}

/// Message hydrated with its replies and reactions, as returned by the
/// analytics query path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageWithRelations {
    pub message: Message,
    pub replies: Vec<Reply>,
    pub reactions: Vec<Reaction>,
}

impl MessageWithRelations {
    /// Wrap a bare message with no relations
    pub fn bare(message: Message) -> Self {
        Self {
            message,
            replies: Vec::new(),
            reactions: Vec::new(),
        }
    }

    /// Check if the message has at least one reply
    #[inline]
    pub fn has_reply(&self) -> bool {
        !self.replies.is_empty()
    }

    /// Number of replies flagged public
    pub fn public_reply_count(&self) -> usize {
        self.replies.iter().filter(|r| r.is_public).count()
    }
}
