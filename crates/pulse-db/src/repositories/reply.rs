//! PostgreSQL implementation of ReplyRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use pulse_core::entities::Reply;
use pulse_core::traits::{ReplyRepository, RepoResult};

use crate::models::{FirstReplyRow, ReplyModel};

use super::error::{map_db_error, reply_not_found};

/// PostgreSQL implementation of ReplyRepository
#[derive(Clone)]
pub struct PgReplyRepository {
    pool: PgPool,
}

impl PgReplyRepository {
    /// Create a new PgReplyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Reply>> {
        let result = sqlx::query_as::<_, ReplyModel>(
            r#"
            SELECT id, message_id, body, is_public, created_at
            FROM replies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reply::from))
    }

    #[instrument(skip(self))]
    async fn find_by_message(&self, message_id: Uuid, public_only: bool) -> RepoResult<Vec<Reply>> {
        let results = sqlx::query_as::<_, ReplyModel>(
            r#"
            SELECT id, message_id, body, is_public, created_at
            FROM replies
            WHERE message_id = $1
              AND (NOT $2 OR is_public)
            ORDER BY created_at DESC
            "#,
        )
        .bind(message_id)
        .bind(public_only)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reply::from).collect())
    }

    #[instrument(skip(self))]
    async fn first_reply_times(&self) -> RepoResult<HashMap<Uuid, DateTime<Utc>>> {
        let rows = sqlx::query_as::<_, FirstReplyRow>(
            r#"
            SELECT DISTINCT ON (message_id) message_id, created_at
            FROM replies
            ORDER BY message_id, created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|row| (row.message_id, row.created_at))
            .collect())
    }

    #[instrument(skip(self, reply))]
    async fn create(&self, reply: &Reply) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO replies (id, message_id, body, is_public, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(reply.id)
        .bind(reply.message_id)
        .bind(&reply.body)
        .bind(reply.is_public)
        .bind(reply.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, reply))]
    async fn update(&self, reply: &Reply) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE replies
            SET body = $2, is_public = $3
            WHERE id = $1
            "#,
        )
        .bind(reply.id)
        .bind(&reply.body)
        .bind(reply.is_public)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(reply_not_found(reply.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM replies WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(reply_not_found(id));
        }

        Ok(())
    }
}
