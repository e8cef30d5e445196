//! PostgreSQL implementation of CreatorRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use pulse_core::entities::Creator;
use pulse_core::error::DomainError;
use pulse_core::traits::{CreatorRepository, RepoResult};

use crate::models::CreatorModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of CreatorRepository
#[derive(Clone)]
pub struct PgCreatorRepository {
    pool: PgPool,
}

impl PgCreatorRepository {
    /// Create a new PgCreatorRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CreatorRepository for PgCreatorRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Creator>> {
        let result = sqlx::query_as::<_, CreatorModel>(
            r#"
            SELECT id, company_id, name, email, feedback_link, created_at
            FROM creators
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Creator::from))
    }

    #[instrument(skip(self))]
    async fn find_by_feedback_link(&self, feedback_link: &str) -> RepoResult<Option<Creator>> {
        let result = sqlx::query_as::<_, CreatorModel>(
            r#"
            SELECT id, company_id, name, email, feedback_link, created_at
            FROM creators
            WHERE feedback_link = $1
            "#,
        )
        .bind(feedback_link)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Creator::from))
    }

    #[instrument(skip(self, creator))]
    async fn create(&self, creator: &Creator) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO creators (id, company_id, name, email, feedback_link, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(creator.id)
        .bind(&creator.company_id)
        .bind(&creator.name)
        .bind(&creator.email)
        .bind(&creator.feedback_link)
        .bind(creator.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::FeedbackLinkExists(creator.feedback_link.clone())
            })
        })?;

        Ok(())
    }
}
