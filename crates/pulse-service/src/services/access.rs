//! Access service
//!
//! Resolves request tokens into an [`Actor`] and enforces access levels.
//! Both steps are boundary calls to the external platform; nothing about a
//! user's standing is decided locally.

use tracing::{instrument, warn};

use pulse_core::traits::AccessGrant;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// An authenticated caller and their access grant for this installation
#[derive(Debug, Clone)]
pub struct Actor {
    pub user_id: String,
    pub grant: AccessGrant,
}

impl Actor {
    /// Whether the actor can moderate and view analytics
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.grant.is_admin()
    }

    /// Whether the actor has any access to the installation
    #[inline]
    pub fn has_access(&self) -> bool {
        self.grant.has_access
    }
}

/// Access service
pub struct AccessService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccessService<'a> {
    /// Create a new AccessService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Verify a token and resolve the caller's access to this installation
    #[instrument(skip(self, token))]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<Actor> {
        let verified = self.ctx.access_provider().verify_token(token).await?;

        let grant = self
            .ctx
            .access_provider()
            .check_company_access(&verified.user_id, self.ctx.company_id())
            .await?;

        Ok(Actor {
            user_id: verified.user_id,
            grant,
        })
    }

    /// Require creator (admin) access for the given actor
    pub fn require_admin(&self, actor: &Actor) -> ServiceResult<()> {
        if actor.is_admin() {
            return Ok(());
        }
        warn!(user_id = %actor.user_id, "Creator access denied");
        Err(ServiceError::permission_denied("creator access required"))
    }

    /// Require any company access for the given actor
    pub fn require_access(&self, actor: &Actor) -> ServiceResult<()> {
        if actor.has_access() {
            return Ok(());
        }
        warn!(user_id = %actor.user_id, "Company access denied");
        Err(ServiceError::permission_denied("company access required"))
    }
}
