//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, text helpers and error types
//! that form the vocabulary of the movie night domain.

mod command;
mod errors;
mod ids;
mod text;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ChannelId, MessageId, MovieId, VoterId};
pub use text::{chunk_lines, chunk_with_header, numbered, DEFAULT_MESSAGE_LIMIT};
pub use timestamp::Timestamp;
