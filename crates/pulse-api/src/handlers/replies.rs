//! Reply handlers
//!
//! Endpoints for creator replies to anonymous messages.

use axum::extract::{Path, State};

use pulse_service::{
    ApiResponse, CreateReplyRequest, ReplyResponse, ReplyService, UpdateReplyRequest,
};

use crate::extractors::{AuthUser, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

use super::messages::parse_id;

/// Reply to a message
///
/// POST /messages/{message_id}/replies
pub async fn create_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(message_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateReplyRequest>,
) -> ApiResult<Created<ApiJson<ApiResponse<ReplyResponse>>>> {
    let message_id = parse_id(&message_id)?;

    let service = ReplyService::new(state.service_context());
    let reply = service.create(&auth.actor, message_id, request).await?;
    Ok(Created(ApiJson(ApiResponse::new(reply))))
}

/// List replies for a message
///
/// Visitors only receive public replies; creators receive everything.
///
/// GET /messages/{message_id}/replies
pub async fn list_replies(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(message_id): Path<String>,
) -> ApiResult<ApiJson<ApiResponse<Vec<ReplyResponse>>>> {
    let message_id = parse_id(&message_id)?;

    let service = ReplyService::new(state.service_context());
    let viewer = auth.0.as_ref().map(|a| &a.actor);
    let replies = service.list(viewer, message_id).await?;
    Ok(ApiJson(ApiResponse::new(replies)))
}

/// Update reply text and/or visibility
///
/// PATCH /replies/{reply_id}
pub async fn update_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(reply_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateReplyRequest>,
) -> ApiResult<ApiJson<ApiResponse<ReplyResponse>>> {
    let reply_id = parse_id(&reply_id)?;

    let service = ReplyService::new(state.service_context());
    let reply = service.update(&auth.actor, reply_id, request).await?;
    Ok(ApiJson(ApiResponse::new(reply)))
}

/// Delete a reply
///
/// DELETE /replies/{reply_id}
pub async fn delete_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(reply_id): Path<String>,
) -> ApiResult<NoContent> {
    let reply_id = parse_id(&reply_id)?;

    let service = ReplyService::new(state.service_context());
    service.delete(&auth.actor, reply_id).await?;
    Ok(NoContent)
}
