//! HTTP client for the hosting platform's identity and access API
//!
//! The platform is the source of truth for who a token belongs to and what
//! access that user holds within a company installation. Nothing here is
//! computed locally.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{instrument, warn};

use pulse_core::{AccessGrant, AccessLevel, AccessProvider, DomainError, VerifiedUser};

use crate::config::PlatformConfig;

/// Reqwest-backed implementation of [`AccessProvider`]
#[derive(Debug, Clone)]
pub struct PlatformAccessClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct VerifyTokenResponse {
    user_id: String,
}

#[derive(Debug, Deserialize)]
struct AccessCheckResponse {
    has_access: bool,
    #[serde(default)]
    access_level: String,
}

impl PlatformAccessClient {
    /// Create a client from platform configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &PlatformConfig) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DomainError::PlatformError(e.to_string()))?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

#[async_trait]
impl AccessProvider for PlatformAccessClient {
    #[instrument(skip(self, token))]
    async fn verify_token(&self, token: &str) -> Result<VerifiedUser, DomainError> {
        let response = self
            .http
            .post(self.url("/v1/tokens/verify"))
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({ "token": token }))
            .send()
            .await
            .map_err(|e| DomainError::PlatformError(e.to_string()))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(DomainError::InvalidToken),
            status if !status.is_success() => Err(DomainError::PlatformError(format!(
                "token verification returned {status}"
            ))),
            _ => {
                let body: VerifyTokenResponse = response
                    .json()
                    .await
                    .map_err(|e| DomainError::PlatformError(e.to_string()))?;
                Ok(VerifiedUser {
                    user_id: body.user_id,
                })
            }
        }
    }

    #[instrument(skip(self))]
    async fn check_company_access(
        &self,
        user_id: &str,
        company_id: &str,
    ) -> Result<AccessGrant, DomainError> {
        let response = self
            .http
            .get(self.url(&format!("/v1/users/{user_id}/access/{company_id}")))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| DomainError::PlatformError(e.to_string()))?;

        if !response.status().is_success() {
            // A rejection from the platform means the user holds no access;
            // it is not an upstream failure.
            warn!(
                user_id = %user_id,
                status = %response.status(),
                "Access check rejected"
            );
            return Ok(AccessGrant::DENIED);
        }

        let body: AccessCheckResponse = response
            .json()
            .await
            .map_err(|e| DomainError::PlatformError(e.to_string()))?;

        let level: AccessLevel = body.access_level.parse().unwrap_or_default();

        Ok(AccessGrant {
            has_access: body.has_access,
            level,
        })
    }
}
