//! Database models - SQLx-compatible structs for PostgreSQL tables

mod creator;
mod message;
mod reaction;
mod reply;

pub use creator::CreatorModel;
pub use message::MessageModel;
pub use reaction::ReactionModel;
pub use reply::{FirstReplyRow, ReplyModel};
