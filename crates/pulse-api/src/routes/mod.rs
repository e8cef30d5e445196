//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{analytics, creators, health, messages, reactions, replies};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(message_routes())
        .merge(reply_routes())
        .merge(creator_routes())
        .merge(report_routes())
}

/// Message routes (submission, moderation, reactions)
fn message_routes() -> Router<AppState> {
    Router::new()
        // Message CRUD
        .route("/messages", post(messages::submit_message))
        .route("/messages", get(messages::list_messages))
        .route("/messages/:message_id", get(messages::get_message))
        .route("/messages/:message_id", patch(messages::update_message))
        .route("/messages/:message_id", delete(messages::delete_message))
        // Message replies
        .route("/messages/:message_id/replies", post(replies::create_reply))
        .route("/messages/:message_id/replies", get(replies::list_replies))
        // Message reactions
        .route("/messages/:message_id/reactions", post(reactions::add_reaction))
        .route("/messages/:message_id/reactions", delete(reactions::remove_reaction))
        .route("/messages/:message_id/reactions", get(reactions::get_reactions))
}

/// Reply routes
fn reply_routes() -> Router<AppState> {
    Router::new()
        .route("/replies/:reply_id", patch(replies::update_reply))
        .route("/replies/:reply_id", delete(replies::delete_reply))
}

/// Creator routes (profile lookup and registration)
fn creator_routes() -> Router<AppState> {
    Router::new()
        .route("/creators", post(creators::register_creator))
        .route("/creators/:feedback_link", get(creators::get_creator))
}

/// Derived-view routes (public feed and creator analytics)
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/feed", get(creators::get_feed))
        .route("/analytics", get(analytics::get_analytics))
}
