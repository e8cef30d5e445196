//! Reporting window selection
//!
//! Windows are fixed-length second offsets from the report instant, not
//! calendar-aware: a week is exactly 604800 seconds, a month exactly
//! 2592000 seconds.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::tag::ParseEnumError;

/// Caller-selected reporting window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Last 7 days (604800 seconds)
    Week,
    /// Last 30 days (2592000 seconds)
    Month,
    /// No lower bound
    #[default]
    All,
}

impl Period {
    const WEEK_SECONDS: i64 = 604_800;
    const MONTH_SECONDS: i64 = 2_592_000;

    /// Lower bound for message inclusion, relative to `now`.
    ///
    /// Returns `None` for the all-time window.
    pub fn cutoff(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Week => Some(now - Duration::seconds(Self::WEEK_SECONDS)),
            Self::Month => Some(now - Duration::seconds(Self::MONTH_SECONDS)),
            Self::All => None,
        }
    }

    /// Text form used in query strings
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::All => "all",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "all" => Ok(Self::All),
            other => Err(ParseEnumError(other.to_string())),
        }
    }
}
