//! PostgreSQL implementation of MessageRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use pulse_core::entities::{Message, MessageWithRelations, Reaction, Reply};
use pulse_core::traits::{MessageFilter, MessageRepository, RepoResult};

use crate::models::{MessageModel, ReactionModel, ReplyModel};

use super::error::{map_db_error, message_not_found};

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Message>> {
        let result = sqlx::query_as::<_, MessageModel>(
            r#"
            SELECT id, creator_id, company_id, body, tag, product_category, reviewed, created_at
            FROM messages
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Message::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_creator(
        &self,
        creator_id: Uuid,
        company_id: &str,
        filter: MessageFilter,
    ) -> RepoResult<Vec<Message>> {
        let results = sqlx::query_as::<_, MessageModel>(
            r#"
            SELECT id, creator_id, company_id, body, tag, product_category, reviewed, created_at
            FROM messages
            WHERE creator_id = $1
              AND company_id = $2
              AND ($3::boolean IS NULL OR reviewed = $3)
              AND ($4::text IS NULL OR tag = $4)
            ORDER BY created_at DESC
            "#,
        )
        .bind(creator_id)
        .bind(company_id)
        .bind(filter.reviewed)
        .bind(filter.tag.map(|t| t.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Message::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_hydrated(
        &self,
        creator_id: Uuid,
        company_id: &str,
        since: Option<DateTime<Utc>>,
    ) -> RepoResult<Vec<MessageWithRelations>> {
        let models = sqlx::query_as::<_, MessageModel>(
            r#"
            SELECT id, creator_id, company_id, body, tag, product_category, reviewed, created_at
            FROM messages
            WHERE creator_id = $1
              AND company_id = $2
              AND ($3::timestamptz IS NULL OR created_at >= $3)
            ORDER BY created_at
            "#,
        )
        .bind(creator_id)
        .bind(company_id)
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();

        let reply_models = sqlx::query_as::<_, ReplyModel>(
            r#"
            SELECT id, message_id, body, is_public, created_at
            FROM replies
            WHERE message_id = ANY($1)
            ORDER BY created_at
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let reaction_models = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, message_id, reaction_type, user_hash, created_at
            FROM reactions
            WHERE message_id = ANY($1)
            ORDER BY created_at
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        // Index relations by parent id so assembly stays linear in row count.
        let mut replies_by_message: HashMap<Uuid, Vec<Reply>> = HashMap::new();
        for model in reply_models {
            replies_by_message
                .entry(model.message_id)
                .or_default()
                .push(Reply::from(model));
        }

        let mut reactions_by_message: HashMap<Uuid, Vec<Reaction>> = HashMap::new();
        for model in reaction_models {
            reactions_by_message
                .entry(model.message_id)
                .or_default()
                .push(Reaction::from(model));
        }

        models
            .into_iter()
            .map(|model| {
                let id = model.id;
                let message = Message::try_from(model)?;
                Ok(MessageWithRelations {
                    message,
                    replies: replies_by_message.remove(&id).unwrap_or_default(),
                    reactions: reactions_by_message.remove(&id).unwrap_or_default(),
                })
            })
            .collect()
    }

    #[instrument(skip(self, message))]
    async fn create(&self, message: &Message) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO messages (id, creator_id, company_id, body, tag, product_category, reviewed, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(message.id)
        .bind(message.creator_id)
        .bind(&message.company_id)
        .bind(&message.body)
        .bind(message.tag.as_str())
        .bind(message.product_category.map(|c| c.as_str()))
        .bind(message.reviewed)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_reviewed(&self, id: Uuid, reviewed: bool) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE messages SET reviewed = $2 WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(reviewed)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(message_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM messages WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(message_not_found(id));
        }

        Ok(())
    }
}
