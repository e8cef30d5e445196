//! Reaction handlers
//!
//! Anonymous emoji reactions on messages.

use axum::extract::{Path, Query, State};
use serde::Deserialize;

use pulse_service::{
    ApiResponse, ReactionRequest, ReactionService, ReactionSummaryResponse, RemoveReactionRequest,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiJson, ApiResult, NoContent};
use crate::state::AppState;

use super::messages::parse_id;

/// Query parameters for the reaction summary
#[derive(Debug, Deserialize)]
pub struct ReactionSummaryQuery {
    /// Fingerprint of the viewer, used to flag their own reactions
    pub user_hash: Option<String>,
}

/// Add a reaction to a message (idempotent per fingerprint and type)
///
/// POST /messages/{message_id}/reactions
pub async fn add_reaction(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
    ValidatedJson(request): ValidatedJson<ReactionRequest>,
) -> ApiResult<NoContent> {
    let message_id = parse_id(&message_id)?;

    let service = ReactionService::new(state.service_context());
    service.add(message_id, request).await?;
    Ok(NoContent)
}

/// Remove a reaction from a message
///
/// DELETE /messages/{message_id}/reactions
pub async fn remove_reaction(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
    ValidatedJson(request): ValidatedJson<RemoveReactionRequest>,
) -> ApiResult<NoContent> {
    let message_id = parse_id(&message_id)?;

    let service = ReactionService::new(state.service_context());
    service.remove(message_id, request).await?;
    Ok(NoContent)
}

/// Get per-type reaction counts for a message
///
/// GET /messages/{message_id}/reactions?user_hash=...
pub async fn get_reactions(
    State(state): State<AppState>,
    Path(message_id): Path<String>,
    Query(query): Query<ReactionSummaryQuery>,
) -> ApiResult<ApiJson<ApiResponse<Vec<ReactionSummaryResponse>>>> {
    let message_id = parse_id(&message_id)?;

    let service = ReactionService::new(state.service_context());
    let summary = service
        .summary(message_id, query.user_hash.as_deref())
        .await?;
    Ok(ApiJson(ApiResponse::new(summary)))
}
