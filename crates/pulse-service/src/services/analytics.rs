//! Analytics service
//!
//! Orchestrates the two store reads and the aggregation engine. The report
//! instant is threaded through explicitly so callers (and tests) control the
//! clock; the engine itself never reads one.

use chrono::{DateTime, Utc};
use tracing::{error, info, instrument};
use uuid::Uuid;

use pulse_core::analytics::{build_report, AnalyticsReport};
use pulse_core::{DomainError, Period};

use super::access::{AccessService, Actor};
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Analytics service
pub struct AnalyticsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AnalyticsService<'a> {
    /// Create a new AnalyticsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Compute the analytics report for a creator over the given window.
    /// Creator access required.
    pub async fn report(
        &self,
        actor: &Actor,
        creator_id: Uuid,
        period: Period,
    ) -> ServiceResult<AnalyticsReport> {
        self.report_at(actor, creator_id, period, Utc::now()).await
    }

    /// Compute the report against an explicit "now" instant
    #[instrument(skip(self, actor))]
    pub async fn report_at(
        &self,
        actor: &Actor,
        creator_id: Uuid,
        period: Period,
        now: DateTime<Utc>,
    ) -> ServiceResult<AnalyticsReport> {
        AccessService::new(self.ctx).require_admin(actor)?;

        if creator_id.is_nil() {
            return Err(DomainError::MissingOwner.into());
        }

        let cutoff = period.cutoff(now);

        let messages = self
            .ctx
            .message_repo()
            .find_hydrated(creator_id, self.ctx.company_id(), cutoff)
            .await
            .map_err(|e| {
                error!(
                    creator_id = %creator_id,
                    period = %period,
                    stage = "load_messages",
                    error = %e,
                    "Analytics store read failed"
                );
                e
            })?;

        let first_replies = self.ctx.reply_repo().first_reply_times().await.map_err(|e| {
            error!(
                creator_id = %creator_id,
                period = %period,
                stage = "load_first_replies",
                error = %e,
                "Analytics store read failed"
            );
            e
        })?;

        let report = build_report(&messages, &first_replies, now);

        info!(
            creator_id = %creator_id,
            period = %period,
            total_messages = report.summary.total_messages,
            stale_unanswered = report.summary.stale_unanswered_count,
            "Analytics report computed"
        );

        Ok(report)
    }
}
