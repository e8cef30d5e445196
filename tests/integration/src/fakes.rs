//! In-memory collaborators for hermetic integration tests
//!
//! `InMemoryStore` implements every repository trait over mutex-guarded
//! vectors; `StubAccessProvider` maps well-known test tokens to platform
//! access grants.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use pulse_core::entities::{Creator, Message, MessageWithRelations, Reaction, Reply};
use pulse_core::traits::{
    AccessGrant, AccessProvider, CreatorRepository, MessageFilter, MessageRepository,
    ReactionRepository, ReplyRepository, RepoResult, VerifiedUser,
};
use pulse_core::{AccessLevel, DomainError};

/// Bearer token accepted as the creator (admin) in tests
pub const CREATOR_TOKEN: &str = "tok_creator";
/// Bearer token accepted as a plain community member in tests
pub const MEMBER_TOKEN: &str = "tok_member";

/// In-memory message store backing all repository traits
#[derive(Default)]
pub struct InMemoryStore {
    messages: Mutex<Vec<Message>>,
    replies: Mutex<Vec<Reply>>,
    reactions: Mutex<Vec<Reaction>>,
    creators: Mutex<Vec<Creator>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a creator directly, bypassing the API
    pub fn seed_creator(&self, creator: Creator) {
        self.creators.lock().unwrap().push(creator);
    }

    /// Seed a message directly, bypassing the API (timestamps under test control)
    pub fn seed_message(&self, message: Message) {
        self.messages.lock().unwrap().push(message);
    }

    /// Seed a reply directly, bypassing the API
    pub fn seed_reply(&self, reply: Reply) {
        self.replies.lock().unwrap().push(reply);
    }

    /// Seed a reaction directly, bypassing the API
    pub fn seed_reaction(&self, reaction: Reaction) {
        self.reactions.lock().unwrap().push(reaction);
    }

    pub fn message_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

#[async_trait]
impl MessageRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Message>> {
        Ok(self
            .messages
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn find_by_creator(
        &self,
        creator_id: Uuid,
        company_id: &str,
        filter: MessageFilter,
    ) -> RepoResult<Vec<Message>> {
        let mut messages: Vec<Message> = self
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.creator_id == creator_id && m.company_id == company_id)
            .filter(|m| filter.reviewed.is_none_or(|r| m.reviewed == r))
            .filter(|m| filter.tag.is_none_or(|t| m.tag == t))
            .cloned()
            .collect();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
    }

    async fn find_hydrated(
        &self,
        creator_id: Uuid,
        company_id: &str,
        since: Option<DateTime<Utc>>,
    ) -> RepoResult<Vec<MessageWithRelations>> {
        let replies = self.replies.lock().unwrap();
        let reactions = self.reactions.lock().unwrap();

        let mut messages: Vec<Message> = self
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.creator_id == creator_id && m.company_id == company_id)
            .filter(|m| since.is_none_or(|cutoff| m.created_at >= cutoff))
            .cloned()
            .collect();
        messages.sort_by_key(|m| m.created_at);

        Ok(messages
            .into_iter()
            .map(|message| {
                let id = message.id;
                MessageWithRelations {
                    message,
                    replies: replies
                        .iter()
                        .filter(|r| r.message_id == id)
                        .cloned()
                        .collect(),
                    reactions: reactions
                        .iter()
                        .filter(|r| r.message_id == id)
                        .cloned()
                        .collect(),
                }
            })
            .collect())
    }

    async fn create(&self, message: &Message) -> RepoResult<()> {
        self.messages.lock().unwrap().push(message.clone());
        Ok(())
    }

    async fn set_reviewed(&self, id: Uuid, reviewed: bool) -> RepoResult<()> {
        let mut messages = self.messages.lock().unwrap();
        let message = messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(DomainError::MessageNotFound(id))?;
        message.reviewed = reviewed;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut messages = self.messages.lock().unwrap();
        let before = messages.len();
        messages.retain(|m| m.id != id);
        if messages.len() == before {
            return Err(DomainError::MessageNotFound(id));
        }
        // Cascade like the schema's foreign keys do
        self.replies.lock().unwrap().retain(|r| r.message_id != id);
        self.reactions.lock().unwrap().retain(|r| r.message_id != id);
        Ok(())
    }
}

#[async_trait]
impl ReplyRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Reply>> {
        Ok(self
            .replies
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn find_by_message(&self, message_id: Uuid, public_only: bool) -> RepoResult<Vec<Reply>> {
        let mut replies: Vec<Reply> = self
            .replies
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.message_id == message_id)
            .filter(|r| !public_only || r.is_public)
            .cloned()
            .collect();
        replies.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(replies)
    }

    async fn first_reply_times(&self) -> RepoResult<HashMap<Uuid, DateTime<Utc>>> {
        let mut first: HashMap<Uuid, DateTime<Utc>> = HashMap::new();
        for reply in self.replies.lock().unwrap().iter() {
            first
                .entry(reply.message_id)
                .and_modify(|t| {
                    if reply.created_at < *t {
                        *t = reply.created_at;
                    }
                })
                .or_insert(reply.created_at);
        }
        Ok(first)
    }

    async fn create(&self, reply: &Reply) -> RepoResult<()> {
        self.replies.lock().unwrap().push(reply.clone());
        Ok(())
    }

    async fn update(&self, reply: &Reply) -> RepoResult<()> {
        let mut replies = self.replies.lock().unwrap();
        let existing = replies
            .iter_mut()
            .find(|r| r.id == reply.id)
            .ok_or(DomainError::ReplyNotFound(reply.id))?;
        *existing = reply.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let mut replies = self.replies.lock().unwrap();
        let before = replies.len();
        replies.retain(|r| r.id != id);
        if replies.len() == before {
            return Err(DomainError::ReplyNotFound(id));
        }
        Ok(())
    }
}

#[async_trait]
impl ReactionRepository for InMemoryStore {
    async fn find(
        &self,
        message_id: Uuid,
        user_hash: &str,
        reaction_type: &str,
    ) -> RepoResult<Option<Reaction>> {
        Ok(self
            .reactions
            .lock()
            .unwrap()
            .iter()
            .find(|r| {
                r.message_id == message_id
                    && r.user_hash.as_deref() == Some(user_hash)
                    && r.reaction_type == reaction_type
            })
            .cloned())
    }

    async fn find_by_message(&self, message_id: Uuid) -> RepoResult<Vec<Reaction>> {
        Ok(self
            .reactions
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.message_id == message_id)
            .cloned()
            .collect())
    }

    async fn count_by_message(&self, message_id: Uuid) -> RepoResult<i64> {
        Ok(self
            .reactions
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.message_id == message_id)
            .count() as i64)
    }

    async fn create(&self, reaction: &Reaction) -> RepoResult<()> {
        let mut reactions = self.reactions.lock().unwrap();
        // Idempotent per (message, fingerprint, type), like the unique index
        let duplicate = reactions.iter().any(|r| {
            r.message_id == reaction.message_id
                && r.user_hash == reaction.user_hash
                && r.reaction_type == reaction.reaction_type
        });
        if !duplicate {
            reactions.push(reaction.clone());
        }
        Ok(())
    }

    async fn delete(
        &self,
        message_id: Uuid,
        user_hash: &str,
        reaction_type: &str,
    ) -> RepoResult<()> {
        self.reactions.lock().unwrap().retain(|r| {
            !(r.message_id == message_id
                && r.user_hash.as_deref() == Some(user_hash)
                && r.reaction_type == reaction_type)
        });
        Ok(())
    }
}

#[async_trait]
impl CreatorRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Creator>> {
        Ok(self
            .creators
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_by_feedback_link(&self, feedback_link: &str) -> RepoResult<Option<Creator>> {
        Ok(self
            .creators
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.feedback_link == feedback_link)
            .cloned())
    }

    async fn create(&self, creator: &Creator) -> RepoResult<()> {
        let mut creators = self.creators.lock().unwrap();
        if creators
            .iter()
            .any(|c| c.feedback_link == creator.feedback_link)
        {
            return Err(DomainError::FeedbackLinkExists(
                creator.feedback_link.clone(),
            ));
        }
        creators.push(creator.clone());
        Ok(())
    }
}

/// Platform access stub mapping well-known tokens to access levels
#[derive(Default)]
pub struct StubAccessProvider;

#[async_trait]
impl AccessProvider for StubAccessProvider {
    async fn verify_token(&self, token: &str) -> Result<VerifiedUser, DomainError> {
        match token {
            CREATOR_TOKEN => Ok(VerifiedUser {
                user_id: "user_creator".to_string(),
            }),
            MEMBER_TOKEN => Ok(VerifiedUser {
                user_id: "user_member".to_string(),
            }),
            _ => Err(DomainError::InvalidToken),
        }
    }

    async fn check_company_access(
        &self,
        user_id: &str,
        _company_id: &str,
    ) -> Result<AccessGrant, DomainError> {
        match user_id {
            "user_creator" => Ok(AccessGrant {
                has_access: true,
                level: AccessLevel::Admin,
            }),
            "user_member" => Ok(AccessGrant {
                has_access: true,
                level: AccessLevel::Customer,
            }),
            _ => Ok(AccessGrant::DENIED),
        }
    }
}
