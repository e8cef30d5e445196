//! Creator database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for creators table
#[derive(Debug, Clone, FromRow)]
pub struct CreatorModel {
    pub id: Uuid,
    pub company_id: String,
    pub name: String,
    pub email: String,
    pub feedback_link: String,
    pub created_at: DateTime<Utc>,
}
