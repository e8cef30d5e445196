//! Test helpers for integration tests
//!
//! Provides utilities for spawning in-process test servers and making
//! HTTP requests against them.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use pulse_api::{create_app, AppState};
use pulse_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, PlatformConfig,
    RateLimitConfig, ServerConfig,
};
use pulse_service::ServiceContextBuilder;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fakes::{InMemoryStore, StubAccessProvider};

/// Company id used by every test server
pub const TEST_COMPANY_ID: &str = "biz_test";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<InMemoryStore>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server backed by in-memory collaborators
    pub async fn start() -> Result<Self> {
        let store = Arc::new(InMemoryStore::new());

        let service_context = ServiceContextBuilder::new()
            .message_repo(store.clone())
            .reply_repo(store.clone())
            .reaction_repo(store.clone())
            .creator_repo(store.clone())
            .access_provider(Arc::new(StubAccessProvider))
            .company_id(TEST_COMPANY_ID)
            .build()
            .map_err(|e| anyhow!("failed to build service context: {e}"))?;

        let state = AppState::new(service_context, test_config());
        let app = create_app(state);

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            store,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with a bearer token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Make a POST request with a JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with a bearer token and JSON body
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a PATCH request with a bearer token and JSON body
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .patch(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Response> {
        Ok(self.client.delete(self.url(path)).send().await?)
    }

    /// Make a DELETE request with a JSON body
    pub async fn delete_json<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.delete(self.url(path)).json(body).send().await?)
    }

    /// Make a DELETE request with a bearer token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }
}

/// Configuration for test servers; the platform section is never dialed
/// because tests install a stub access provider.
fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "pulse-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "postgresql://unused".to_string(),
            max_connections: 1,
            min_connections: 1,
        },
        platform: PlatformConfig {
            api_base: "http://127.0.0.1:9".to_string(),
            api_key: "key_test".to_string(),
            company_id: TEST_COMPANY_ID.to_string(),
            timeout_secs: 1,
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst: 1000,
        },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
    }
}

/// Assert a response status, consuming the response
pub async fn assert_status(response: Response, expected: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected {
        let body = response.text().await.unwrap_or_default();
        return Err(anyhow!("expected {expected}, got {status}: {body}"));
    }
    Ok(())
}

/// Assert a response status and return the `data` field of the JSON body
pub async fn json_data(response: Response, expected: StatusCode) -> Result<serde_json::Value> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if status != expected {
        return Err(anyhow!("expected {expected}, got {status}: {body}"));
    }
    let value: serde_json::Value = serde_json::from_str(&body)?;
    Ok(value
        .get("data")
        .cloned()
        .ok_or_else(|| anyhow!("response has no data field: {body}"))?)
}
