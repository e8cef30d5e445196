//! Analytics report value objects
//!
//! The report is derived on demand and never persisted. Distributions use
//! ordered maps so serialized output is deterministic for a given snapshot.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::value_objects::{MessageTag, ProductCategory};

/// Full analytics report for one creator and reporting window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub summary: Summary,
    pub distributions: Distributions,
    /// Messages per calendar day, ascending by date
    pub trend: Vec<TrendPoint>,
    /// Unanswered messages older than the staleness threshold
    pub stale_messages: Vec<StaleMessage>,
}

/// Headline statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_messages: u64,
    pub total_reactions: u64,
    pub total_replies: u64,
    pub public_replies: u64,
    pub average_reactions_per_message: f64,
    /// Percentage of messages with at least one reply, in [0, 100],
    /// rounded to one decimal
    pub response_rate: f64,
    /// Mean hours from message creation to first reply, rounded to one
    /// decimal; 0 when no latency samples exist
    pub average_response_time_hours: f64,
    pub stale_unanswered_count: u64,
    /// Display label of the busiest day, if any messages exist
    pub peak_day: Option<String>,
    pub peak_day_count: u64,
}

impl Summary {
    /// Summary for an empty message set: every numeric field zero
    pub fn empty() -> Self {
        Self {
            total_messages: 0,
            total_reactions: 0,
            total_replies: 0,
            public_replies: 0,
            average_reactions_per_message: 0.0,
            response_rate: 0.0,
            average_response_time_hours: 0.0,
            stale_unanswered_count: 0,
            peak_day: None,
            peak_day_count: 0,
        }
    }
}

/// Frequency tables over the filtered message set
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Distributions {
    pub tags: BTreeMap<MessageTag, u64>,
    pub product_categories: BTreeMap<ProductCategory, u64>,
    /// Reaction type tokens counted verbatim, no normalization
    pub reaction_types: BTreeMap<String, u64>,
    /// UTC hour of day (0-23) of message creation
    pub hours: BTreeMap<u32, u64>,
}

/// One day in the message-volume trend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    /// Underlying calendar date; trend ordering key
    pub date: NaiveDate,
    /// Short display label, e.g. "Jan 5"
    pub label: String,
    pub count: u64,
}

/// Reduced projection of a stale unanswered message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaleMessage {
    pub id: Uuid,
    pub body: String,
    pub tag: MessageTag,
    pub created_at: DateTime<Utc>,
}

impl AnalyticsReport {
    /// Report for an empty message set
    pub fn empty() -> Self {
        Self {
            summary: Summary::empty(),
            distributions: Distributions::default(),
            trend: Vec::new(),
            stale_messages: Vec::new(),
        }
    }
}
