//! Ports - interfaces the domain depends on

mod access;
mod repositories;

pub use access::{AccessGrant, AccessProvider, VerifiedUser};
pub use repositories::{
    CreatorRepository, MessageFilter, MessageRepository, ReactionRepository, ReplyRepository,
    RepoResult,
};
