//! Report computation
//!
//! One pass over the filtered message set builds every summary figure,
//! all four distributions, the daily trend, and the stale list. Reply
//! latency uses a pre-joined earliest-reply-per-message lookup so the pass
//! stays O(n) in the number of messages.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Duration, NaiveDate, Timelike, Utc};
use uuid::Uuid;

use crate::entities::MessageWithRelations;

use super::report::{AnalyticsReport, Distributions, StaleMessage, Summary, TrendPoint};

/// A message with no reply counts as stale once it is older than this
/// (3 days)
pub const STALE_AFTER_SECONDS: i64 = 259_200;

/// Build the analytics report for an already-windowed message snapshot.
///
/// `first_replies` maps message id to the earliest reply time across the
/// full reply corpus; entries for messages outside the snapshot are ignored.
/// `now` is the single report instant used for age computation. Messages
/// whose first reply predates their own creation are a data anomaly and are
/// excluded from the latency average, not clamped.
pub fn build_report(
    messages: &[MessageWithRelations],
    first_replies: &HashMap<Uuid, DateTime<Utc>>,
    now: DateTime<Utc>,
) -> AnalyticsReport {
    if messages.is_empty() {
        return AnalyticsReport::empty();
    }

    let stale_cutoff = now - Duration::seconds(STALE_AFTER_SECONDS);

    let mut total_reactions: u64 = 0;
    let mut total_replies: u64 = 0;
    let mut public_replies: u64 = 0;
    let mut messages_with_reply: u64 = 0;

    let mut distributions = Distributions::default();
    let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    let mut latency_hours: Vec<f64> = Vec::new();
    let mut stale_messages: Vec<StaleMessage> = Vec::new();

    for hydrated in messages {
        let message = &hydrated.message;

        total_reactions += hydrated.reactions.len() as u64;
        total_replies += hydrated.replies.len() as u64;
        public_replies += hydrated.public_reply_count() as u64;
        if hydrated.has_reply() {
            messages_with_reply += 1;
        }

        *distributions.tags.entry(message.tag).or_default() += 1;
        if let Some(category) = message.product_category {
            *distributions.product_categories.entry(category).or_default() += 1;
        }
        for reaction in &hydrated.reactions {
            *distributions
                .reaction_types
                .entry(reaction.reaction_type.clone())
                .or_default() += 1;
        }
        *distributions.hours.entry(message.created_at.hour()).or_default() += 1;

        *per_day.entry(message.created_at.date_naive()).or_default() += 1;

        if let Some(first_reply_at) = first_replies.get(&message.id) {
            let delta_hours =
                (*first_reply_at - message.created_at).num_milliseconds() as f64 / 3_600_000.0;
            if delta_hours >= 0.0 {
                latency_hours.push(delta_hours);
            }
        }

        if !hydrated.has_reply() && message.created_at < stale_cutoff {
            stale_messages.push(StaleMessage {
                id: message.id,
                body: message.body.clone(),
                tag: message.tag,
                created_at: message.created_at,
            });
        }
    }

    let total_messages = messages.len() as u64;

    let average_reactions_per_message = total_reactions as f64 / total_messages as f64;
    let response_rate = round1(messages_with_reply as f64 / total_messages as f64 * 100.0);
    let average_response_time_hours = if latency_hours.is_empty() {
        0.0
    } else {
        round1(latency_hours.iter().sum::<f64>() / latency_hours.len() as f64)
    };

    let trend: Vec<TrendPoint> = per_day
        .iter()
        .map(|(&date, &count)| TrendPoint {
            date,
            label: day_label(date),
            count,
        })
        .collect();

    // Strictly-greater comparison over the ascending day map: the earliest
    // day reaching the maximum wins ties.
    let peak = trend.iter().fold(None::<&TrendPoint>, |best, point| match best {
        Some(b) if b.count >= point.count => Some(b),
        _ => Some(point),
    });
    let (peak_day, peak_day_count) = match peak {
        Some(point) => (Some(point.label.clone()), point.count),
        None => (None, 0),
    };

    AnalyticsReport {
        summary: Summary {
            total_messages,
            total_reactions,
            total_replies,
            public_replies,
            average_reactions_per_message,
            response_rate,
            average_response_time_hours,
            stale_unanswered_count: stale_messages.len() as u64,
            peak_day,
            peak_day_count,
        },
        distributions,
        trend,
        stale_messages,
    }
}

/// Short display label for a trend day, e.g. "Jan 5"
fn day_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Round to one decimal place
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
