//! Message handlers
//!
//! Anonymous submission plus creator-side listing and moderation.

use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use pulse_core::traits::MessageFilter;
use pulse_core::MessageTag;
use pulse_service::{
    ApiResponse, MessageResponse, MessageService, SubmitMessageRequest, UpdateMessageRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiJson, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Query parameters for message listing
#[derive(Debug, Deserialize)]
pub struct ListMessagesQuery {
    pub creator_id: Uuid,
    pub reviewed: Option<bool>,
    pub tag: Option<String>,
}

/// Submit an anonymous message
///
/// POST /messages
pub async fn submit_message(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SubmitMessageRequest>,
) -> ApiResult<Created<ApiJson<ApiResponse<MessageResponse>>>> {
    let service = MessageService::new(state.service_context());
    let message = service.submit(request).await?;
    Ok(Created(ApiJson(ApiResponse::new(message))))
}

/// List a creator's messages with optional filters
///
/// GET /messages?creator_id=...&reviewed=...&tag=...
pub async fn list_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListMessagesQuery>,
) -> ApiResult<ApiJson<ApiResponse<Vec<MessageResponse>>>> {
    let tag = query
        .tag
        .as_deref()
        .map(str::parse::<MessageTag>)
        .transpose()
        .map_err(|e| ApiError::invalid_query(format!("Unknown tag: {}", e.0)))?;

    let filter = MessageFilter {
        reviewed: query.reviewed,
        tag,
    };

    let service = MessageService::new(state.service_context());
    let messages = service.list(&auth.actor, query.creator_id, filter).await?;
    Ok(ApiJson(ApiResponse::new(messages)))
}

/// Fetch a single message
///
/// GET /messages/{message_id}
pub async fn get_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(message_id): Path<String>,
) -> ApiResult<ApiJson<ApiResponse<MessageResponse>>> {
    let message_id = parse_id(&message_id)?;

    let service = MessageService::new(state.service_context());
    let message = service.get(&auth.actor, message_id).await?;
    Ok(ApiJson(ApiResponse::new(message)))
}

/// Update a message's reviewed flag
///
/// PATCH /messages/{message_id}
pub async fn update_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(message_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateMessageRequest>,
) -> ApiResult<ApiJson<ApiResponse<MessageResponse>>> {
    let message_id = parse_id(&message_id)?;

    let service = MessageService::new(state.service_context());
    let message = service
        .set_reviewed(&auth.actor, message_id, request.reviewed)
        .await?;
    Ok(ApiJson(ApiResponse::new(message)))
}

/// Delete a message
///
/// DELETE /messages/{message_id}
pub async fn delete_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(message_id): Path<String>,
) -> ApiResult<NoContent> {
    let message_id = parse_id(&message_id)?;

    let service = MessageService::new(state.service_context());
    service.delete(&auth.actor, message_id).await?;
    Ok(NoContent)
}

pub(crate) fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid id format"))
}
