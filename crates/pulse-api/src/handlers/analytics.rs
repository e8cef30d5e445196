//! Analytics handler
//!
//! Creator-only engagement report over a selectable time window.

use axum::extract::{Query, State};
use serde::Deserialize;
use uuid::Uuid;

use pulse_core::analytics::AnalyticsReport;
use pulse_core::Period;
use pulse_service::{AnalyticsService, ApiResponse};

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiJson, ApiResult};
use crate::state::AppState;

/// Query parameters for the analytics report
#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    pub creator_id: Uuid,
    /// Reporting window: week, month, or all (default)
    pub period: Option<String>,
}

/// Compute the analytics report for a creator
///
/// GET /analytics?creator_id=...&period=week|month|all
pub async fn get_analytics(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<AnalyticsQuery>,
) -> ApiResult<ApiJson<ApiResponse<AnalyticsReport>>> {
    let period = query
        .period
        .as_deref()
        .map(str::parse::<Period>)
        .transpose()
        .map_err(|e| ApiError::invalid_query(format!("Unknown period: {}", e.0)))?
        .unwrap_or_default();

    let service = AnalyticsService::new(state.service_context());
    let report = service
        .report(&auth.actor, query.creator_id, period)
        .await?;
    Ok(ApiJson(ApiResponse::new(report)))
}
