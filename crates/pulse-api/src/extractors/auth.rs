//! Authentication extractor
//!
//! Resolves the bearer token from the Authorization header through the
//! external platform's verification and access-check API. No token is
//! interpreted locally.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use pulse_core::DomainError;
use pulse_service::{AccessService, Actor, ServiceError};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller with their platform access grant
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub actor: Actor,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(actor: Actor) -> Self {
        Self { actor }
    }
}

async fn authenticate<S>(parts: &mut Parts, state: &S) -> Result<Actor, ApiError>
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    // Extract the Authorization header
    let TypedHeader(Authorization(bearer)) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::MissingAuth)?;

    // Resolve the caller through the platform access API
    let app_state = AppState::from_ref(state);
    let service = AccessService::new(app_state.service_context());

    service.authenticate(bearer.token()).await.map_err(|e| {
        if matches!(e, ServiceError::Domain(DomainError::InvalidToken)) {
            tracing::warn!("Invalid platform token");
            ApiError::InvalidAuthFormat
        } else {
            ApiError::Service(e)
        }
    })
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let actor = authenticate(parts, state).await?;
        Ok(AuthUser::new(actor))
    }
}

/// Optional authenticated caller
///
/// Returns None if no authorization header is present,
/// or an error if the token is invalid.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if parts.headers.get(axum::http::header::AUTHORIZATION).is_none() {
            return Ok(OptionalAuthUser(None));
        }

        let actor = authenticate(parts, state).await?;
        Ok(OptionalAuthUser(Some(AuthUser::new(actor))))
    }
}
