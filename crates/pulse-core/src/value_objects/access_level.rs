//! Access level granted by the external platform
//!
//! The platform's access-check API answers with a level string; everything
//! past that boundary works with this enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Access level a user holds within a company installation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// No access to the company
    #[default]
    None,
    /// Paying member of the company
    Customer,
    /// Owner or moderator of the company
    Admin,
}

impl AccessLevel {
    /// Whether this level grants creator/moderation capabilities
    #[inline]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether this level grants any access at all
    #[inline]
    pub fn has_access(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::Customer => "customer",
            Self::Admin => "admin",
        };
        f.write_str(s)
    }
}

impl FromStr for AccessLevel {
    type Err = std::convert::Infallible;

    /// Unknown level strings from the platform degrade to `None` rather than
    /// failing the request.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "admin" => Self::Admin,
            "customer" => Self::Customer,
            _ => Self::None,
        })
    }
}
