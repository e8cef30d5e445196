//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateReplyRequest, ReactionRequest, RegisterCreatorRequest, RemoveReactionRequest,
    SubmitMessageRequest, UpdateMessageRequest, UpdateReplyRequest,
};

// Re-export commonly used response types
pub use responses::{
    ApiResponse, CreatorResponse, FeedItemResponse, HealthResponse, MessageResponse,
    ReactionSummaryResponse, ReplyResponse,
};
