//! Reply database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for replies table
#[derive(Debug, Clone, FromRow)]
pub struct ReplyModel {
    pub id: Uuid,
    pub message_id: Uuid,
    pub body: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

/// Earliest reply time for a message, from the first-reply lookup query
#[derive(Debug, Clone, FromRow)]
pub struct FirstReplyRow {
    pub message_id: Uuid,
    pub created_at: DateTime<Utc>,
}
