//! Core types for feedstore-core.
//!
//! This module defines the data structures shared across the ledger, the
//! access-control layer and the transport: the opaque [`Identity`], the
//! [`Principal`] bound the store is generic over, the explicit
//! [`PostSlot`] liveness model and the [`PostView`] read projection.

use crate::error::{FeedError, FeedResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Sequential post identifier. Assigned from 0 and never reused.
pub type PostId = u64;

/// Anything that can act as an owner or editor.
///
/// The store only ever compares and hashes identities; it never inspects
/// them. Blanket-implemented for every type that satisfies the bounds.
pub trait Principal: Clone + Eq + Hash + fmt::Debug {}

impl<T> Principal for T where T: Clone + Eq + Hash + fmt::Debug {}

/// Opaque string identity supplied by the transport layer (a signed sender,
/// an API key name, a public-key hash, ...).
///
/// Deserializing goes through [`Identity::parse`], so identities arriving on
/// the wire are trimmed and never blank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(String);

impl Identity {
    /// Wrap `value` verbatim.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Normalize untrusted input: surrounding whitespace is dropped and a
    /// blank result is [`FeedError::InvalidIdentity`].
    pub fn parse(raw: &str) -> FeedResult<Self> {
        match raw.trim() {
            "" => Err(FeedError::InvalidIdentity),
            trimmed => Ok(Self::new(trimmed)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl TryFrom<String> for Identity {
    type Error = FeedError;

    fn try_from(value: String) -> FeedResult<Self> {
        Self::parse(&value)
    }
}

impl From<Identity> for String {
    fn from(value: Identity) -> Self {
        value.0
    }
}

/// One allocated position in the post ledger.
///
/// A slot exists for every id below `next_id`. Removal turns a `Live` slot
/// into `Tombstoned`; the reverse transition never happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostSlot {
    Live {
        uri: String,
        /// `None` when the post was created without metadata.
        metadata: Option<String>,
    },
    Tombstoned,
}

impl PostSlot {
    pub fn is_live(&self) -> bool {
        matches!(self, PostSlot::Live { .. })
    }

    /// URI as rendered in the feed: empty for a tombstone.
    pub fn uri(&self) -> &str {
        match self {
            PostSlot::Live { uri, .. } => uri,
            PostSlot::Tombstoned => "",
        }
    }

    /// Metadata as rendered in the feed: empty when absent or tombstoned.
    pub fn metadata(&self) -> &str {
        match self {
            PostSlot::Live {
                metadata: Some(metadata),
                ..
            } => metadata,
            _ => "",
        }
    }
}

/// Read projection of a single slot, with liveness made explicit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostView {
    pub id: PostId,
    pub uri: String,
    pub metadata: String,
    pub live: bool,
}

impl PostView {
    pub(crate) fn from_slot(id: PostId, slot: &PostSlot) -> Self {
        Self {
            id,
            uri: slot.uri().to_string(),
            metadata: slot.metadata().to_string(),
            live: slot.is_live(),
        }
    }
}
