//! Entity <-> model mappers

mod creator;
mod message;
mod reaction;
mod reply;
