//! Access provider trait (port) - external platform identity and access checks
//!
//! Identity verification and company-access determination are delegated
//! entirely to the hosting platform's API. The domain only sees this
//! boundary; the HTTP implementation lives in the infrastructure layer.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::value_objects::AccessLevel;

/// Identity established by the platform from a request token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedUser {
    pub user_id: String,
}

/// Result of a company access check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessGrant {
    pub has_access: bool,
    pub level: AccessLevel,
}

impl AccessGrant {
    /// A grant with no access at all
    pub const DENIED: AccessGrant = AccessGrant {
        has_access: false,
        level: AccessLevel::None,
    };

    /// Whether this grant carries creator/moderation rights
    #[inline]
    pub fn is_admin(self) -> bool {
        self.has_access && self.level.is_admin()
    }
}

#[async_trait]
pub trait AccessProvider: Send + Sync {
    /// Verify a request token and resolve the user behind it
    async fn verify_token(&self, token: &str) -> Result<VerifiedUser, DomainError>;

    /// Check what access a user holds within a company installation
    async fn check_company_access(
        &self,
        user_id: &str,
        company_id: &str,
    ) -> Result<AccessGrant, DomainError>;
}
