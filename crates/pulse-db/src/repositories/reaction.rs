//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use pulse_core::entities::Reaction;
use pulse_core::traits::{ReactionRepository, RepoResult};

use crate::models::ReactionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        message_id: Uuid,
        user_hash: &str,
        reaction_type: &str,
    ) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, message_id, reaction_type, user_hash, created_at
            FROM reactions
            WHERE message_id = $1 AND user_hash = $2 AND reaction_type = $3
            "#,
        )
        .bind(message_id)
        .bind(user_hash)
        .bind(reaction_type)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reaction::from))
    }

    #[instrument(skip(self))]
    async fn find_by_message(&self, message_id: Uuid) -> RepoResult<Vec<Reaction>> {
        let results = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, message_id, reaction_type, user_hash, created_at
            FROM reactions
            WHERE message_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(message_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reaction::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_message(&self, message_id: Uuid) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM reactions WHERE message_id = $1
            "#,
        )
        .bind(message_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self, reaction))]
    async fn create(&self, reaction: &Reaction) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO reactions (id, message_id, reaction_type, user_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (message_id, user_hash, reaction_type) DO NOTHING
            "#,
        )
        .bind(reaction.id)
        .bind(reaction.message_id)
        .bind(&reaction.reaction_type)
        .bind(&reaction.user_hash)
        .bind(reaction.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(
        &self,
        message_id: Uuid,
        user_hash: &str,
        reaction_type: &str,
    ) -> RepoResult<()> {
        sqlx::query(
            r#"
            DELETE FROM reactions
            WHERE message_id = $1 AND user_hash = $2 AND reaction_type = $3
            "#,
        )
        .bind(message_id)
        .bind(user_hash)
        .bind(reaction_type)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
