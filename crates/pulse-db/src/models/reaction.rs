//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: Uuid,
    pub message_id: Uuid,
    pub reaction_type: String,
    pub user_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

