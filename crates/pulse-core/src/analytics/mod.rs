//! Analytics aggregation engine
//!
//! Computes a creator's engagement report from an in-memory snapshot of
//! messages with their replies and reactions. The computation is pure and
//! deterministic: the report instant is threaded in as a parameter and no
//! state outlives the call.

mod engine;
mod report;

pub use engine::{build_report, STALE_AFTER_SECONDS};
pub use report::{AnalyticsReport, Distributions, StaleMessage, Summary, TrendPoint};
