//! Creator entity - the account that receives anonymous messages

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Creator entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creator {
    pub id: Uuid,
    pub company_id: String,
    pub name: String,
    pub email: String,
    pub feedback_link: String,
    pub created_at: DateTime<Utc>,
}

impl Creator {
    /// Create a new Creator with a freshly generated feedback link
    pub fn new(id: Uuid, company_id: String, name: String, email: String) -> Self {
        Self {
            id,
            company_id,
            name,
            email,
            feedback_link: generate_feedback_link(),
            created_at: Utc::now(),
        }
    }

    /// Public URL path segment for this creator's feedback page
    pub fn public_path(&self) -> String {
        format!("/p/{}", self.feedback_link)
    }
}

/// Generate a random 8-character alphanumeric feedback link slug
pub fn generate_feedback_link() -> String {
    use rand::Rng;

    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const LINK_LEN: usize = 8;

    let mut rng = rand::thread_rng();
    (0..LINK_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}
