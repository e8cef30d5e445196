//! Message categorization tags
//!
//! Visitors pick a tag when submitting a message; creators can additionally
//! attach a product category. Both are closed enumerations stored as text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error when parsing a tag or category from its text form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value: {0}")]
pub struct ParseEnumError(pub String);

/// Category a visitor assigns to a submitted message
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MessageTag {
    Question,
    Feedback,
    Confession,
}

impl MessageTag {
    /// Text form as stored in the database
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Feedback => "feedback",
            Self::Confession => "confession",
        }
    }

    /// All tags, in display order
    pub const ALL: [MessageTag; 3] = [Self::Question, Self::Feedback, Self::Confession];
}

impl fmt::Display for MessageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageTag {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "question" => Ok(Self::Question),
            "feedback" => Ok(Self::Feedback),
            "confession" => Ok(Self::Confession),
            other => Err(ParseEnumError(other.to_string())),
        }
    }
}

/// Optional product category attached to a message
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    General,
    FeatureRequest,
    Service,
    BugReport,
    Other,
}

impl ProductCategory {
    /// Text form as stored in the database
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::FeatureRequest => "feature_request",
            Self::Service => "service",
            Self::BugReport => "bug_report",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(Self::General),
            "feature_request" => Ok(Self::FeatureRequest),
            "service" => Ok(Self::Service),
            "bug_report" => Ok(Self::BugReport),
            "other" => Ok(Self::Other),
            other => Err(ParseEnumError(other.to_string())),
        }
    }
}
