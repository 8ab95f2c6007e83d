//! Event log — ordered audit trail of every successful mutation.
//!
//! Each committed operation appends exactly one [`EventRecord`]. Sequence
//! numbers start at 1 and have no gaps, so an indexer can checkpoint the last
//! sequence it processed and resume with [`EventLog::since`].

use crate::types::{PostId, Principal};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A state change emitted by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedEvent<I> {
    PostCreated {
        id: PostId,
        uri: String,
    },
    PostCreatedWithMetadata {
        id: PostId,
        uri: String,
        metadata: String,
    },
    PostRemoved {
        id: PostId,
    },
    EditorAdded {
        identity: I,
    },
    /// `remover` is the caller: the owner, or `identity` itself.
    EditorRemoved {
        identity: I,
        remover: I,
    },
    OwnershipTransferred {
        previous: I,
        owner: I,
    },
}

impl<I> FeedEvent<I> {
    /// Pick the creation variant from whether metadata is present.
    pub fn post_created(id: PostId, uri: String, metadata: Option<String>) -> Self {
        match metadata {
            Some(metadata) if !metadata.is_empty() => {
                FeedEvent::PostCreatedWithMetadata { id, uri, metadata }
            }
            _ => FeedEvent::PostCreated { id, uri },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FeedEvent::PostCreated { .. } => "post_created",
            FeedEvent::PostCreatedWithMetadata { .. } => "post_created_with_metadata",
            FeedEvent::PostRemoved { .. } => "post_removed",
            FeedEvent::EditorAdded { .. } => "editor_added",
            FeedEvent::EditorRemoved { .. } => "editor_removed",
            FeedEvent::OwnershipTransferred { .. } => "ownership_transferred",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord<I> {
    pub sequence: u64,
    pub recorded_at: DateTime<Utc>,
    pub event: FeedEvent<I>,
}

#[derive(Debug, Clone)]
pub struct EventLog<I> {
    records: Vec<EventRecord<I>>,
}

impl<I> Default for EventLog<I> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<I: Principal> EventLog<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `event` and return its sequence number.
    pub fn record(&mut self, event: FeedEvent<I>) -> u64 {
        let sequence = self.last_sequence() + 1;
        tracing::trace!(sequence, event = event.name(), "event recorded");
        self.records.push(EventRecord {
            sequence,
            recorded_at: Utc::now(),
            event,
        });
        sequence
    }

    /// Sequence of the newest record, 0 when the log is empty.
    pub fn last_sequence(&self) -> u64 {
        self.records.len() as u64
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record with `sequence > after`, oldest first.
    pub fn since(&self, after: u64) -> &[EventRecord<I>] {
        // Sequence n lives at index n - 1, so records after `after` start at index `after`.
        let start = usize::try_from(after)
            .unwrap_or(usize::MAX)
            .min(self.records.len());
        &self.records[start..]
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeedEvent<I>> {
        self.records.iter().map(|r| &r.event)
    }
}
