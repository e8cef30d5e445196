//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use pulse_common::{AppConfig, AppError, PlatformAccessClient};
use pulse_db::{
    create_pool, PgCreatorRepository, PgMessageRepository, PgReactionRepository,
    PgReplyRepository,
};
use pulse_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the Axum application with the basic middleware stack.
/// Used by tests and local tooling; production wiring goes through [`run`].
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Build the Axum application with rate limiting and configured CORS
pub fn create_app_with_config(state: AppState) -> Router {
    let config = state.config().clone();
    let router = create_router();
    let router = apply_middleware_with_config(
        router,
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    // Health checks bypass rate limiting
    let router = router.merge(health_routes());
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = pulse_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create the platform access client
    let access_provider = Arc::new(
        PlatformAccessClient::new(&config.platform).map_err(|e| AppError::Config(e.to_string()))?,
    );

    // Create repositories
    let message_repo = Arc::new(PgMessageRepository::new(pool.clone()));
    let reply_repo = Arc::new(PgReplyRepository::new(pool.clone()));
    let reaction_repo = Arc::new(PgReactionRepository::new(pool.clone()));
    let creator_repo = Arc::new(PgCreatorRepository::new(pool));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .message_repo(message_repo)
        .reply_repo(reply_repo)
        .reaction_repo(reaction_repo)
        .creator_repo(creator_repo)
        .access_provider(access_provider)
        .company_id(config.platform.company_id.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application with production middleware
    let app = create_app_with_config(state);

    // Run server
    run_server(app, addr).await
}
