//! PostgreSQL repository implementations

mod creator;
mod error;
mod message;
mod reaction;
mod reply;

pub use creator::PgCreatorRepository;
pub use message::PgMessageRepository;
pub use reaction::PgReactionRepository;
pub use reply::PgReplyRepository;
