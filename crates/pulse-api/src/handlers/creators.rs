//! Creator handlers
//!
//! Public feedback-link resolution, creator registration, and the public feed.

use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use pulse_service::{
    ApiResponse, CreatorResponse, CreatorService, FeedItemResponse, FeedService,
    RegisterCreatorRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

/// Resolve a public feedback link to a creator profile
///
/// GET /creators/{feedback_link}
pub async fn get_creator(
    State(state): State<AppState>,
    Path(feedback_link): Path<String>,
) -> ApiResult<ApiJson<ApiResponse<CreatorResponse>>> {
    let service = CreatorService::new(state.service_context());
    let creator = service.lookup(&feedback_link).await?;
    Ok(ApiJson(ApiResponse::new(creator)))
}

/// Register a creator profile
///
/// POST /creators
pub async fn register_creator(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<RegisterCreatorRequest>,
) -> ApiResult<Created<ApiJson<ApiResponse<CreatorResponse>>>> {
    let service = CreatorService::new(state.service_context());
    let creator = service.register(&auth.actor, request).await?;
    Ok(Created(ApiJson(ApiResponse::new(creator))))
}

/// Query parameters for the public feed
#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub creator_id: Uuid,
}

/// Public feed: messages with at least one public reply
///
/// GET /feed?creator_id=...
pub async fn get_feed(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> ApiResult<ApiJson<ApiResponse<Vec<FeedItemResponse>>>> {
    let service = FeedService::new(state.service_context());
    let feed = service.feed(query.creator_id).await?;
    Ok(ApiJson(ApiResponse::new(feed)))
}
