//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod access;
pub mod analytics;
pub mod context;
pub mod creator;
pub mod error;
pub mod feed;
pub mod message;
pub mod reaction;
pub mod reply;

// Re-export all services for convenience
pub use access::{AccessService, Actor};
pub use analytics::AnalyticsService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use creator::CreatorService;
pub use error::{ServiceError, ServiceResult};
pub use feed::FeedService;
pub use message::MessageService;
pub use reaction::ReactionService;
pub use reply::ReplyService;
