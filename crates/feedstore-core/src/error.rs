//! Error taxonomy for feedstore operations.
//!
//! Every failure is synchronous and leaves the store untouched: posts,
//! counters, the editor set, the owner and the event log are exactly as they
//! were before the call.

use crate::types::PostId;
use std::fmt;
use thiserror::Error;

/// Result type for store operations.
pub type FeedResult<T> = Result<T, FeedError>;

/// The role a caller needed for a rejected operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Owner,
    Editor,
    /// Owner, or the identity being acted on.
    OwnerOrSelf,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Owner => write!(f, "owner"),
            Role::Editor => write!(f, "editor"),
            Role::OwnerOrSelf => write!(f, "owner or self"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("caller is not authorized: {required} role required")]
    Unauthorized { required: Role },

    #[error("identity is already an editor")]
    AlreadyEditor,

    #[error("identity is not an editor")]
    NotEditor,

    #[error("post {id} does not exist or has been removed")]
    PostNotFound { id: PostId },

    #[error("offset {offset} is past the end of the feed ({next_id} posts)")]
    OffsetTooLarge { offset: u64, next_id: u64 },

    #[error("initial editor at position {index} is listed more than once")]
    DuplicateInitialEditor { index: usize },

    #[error("post uri must not be empty")]
    EmptyUri,

    #[error("identity must not be blank")]
    InvalidIdentity,
}

impl FeedError {
    /// Stable, machine-readable name of the error class.
    pub fn kind(&self) -> &'static str {
        match self {
            FeedError::Unauthorized { .. } => "unauthorized",
            FeedError::AlreadyEditor => "already_editor",
            FeedError::NotEditor => "not_editor",
            FeedError::PostNotFound { .. } => "post_not_found",
            FeedError::OffsetTooLarge { .. } => "offset_too_large",
            FeedError::DuplicateInitialEditor { .. } => "duplicate_initial_editor",
            FeedError::EmptyUri => "empty_uri",
            FeedError::InvalidIdentity => "invalid_identity",
        }
    }
}
