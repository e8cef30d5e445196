//! Message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for messages table
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub company_id: String,
    pub body: String,
    pub tag: String,
    pub product_category: Option<String>,
    pub reviewed: bool,
    pub created_at: DateTime<Utc>,
}

impl MessageModel {
    /// Check if the message carries a product category
    #[inline]
    pub fn has_product_category(&self) -> bool {
        self.product_category.is_some()
    }
}
