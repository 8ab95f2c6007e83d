//! Post ledger — dense, append-only id space with tombstone deletion.
//!
//! Slot `n` holds post id `n`. Ids are never reused; removal flips a slot to
//! [`PostSlot::Tombstoned`] and bumps `num_deleted`.

use crate::error::{FeedError, FeedResult};
use crate::types::{PostId, PostSlot, PostView};

#[derive(Debug, Clone, Default)]
pub struct PostLedger {
    slots: Vec<PostSlot>,
    num_deleted: u64,
}

impl PostLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id to assign; also the total number of posts ever created.
    pub fn next_id(&self) -> u64 {
        self.slots.len() as u64
    }

    pub fn num_deleted(&self) -> u64 {
        self.num_deleted
    }

    /// Posts not yet tombstoned.
    pub fn num_posts(&self) -> u64 {
        debug_assert!(self.num_deleted <= self.next_id());
        self.next_id() - self.num_deleted
    }

    /// Slot for `id`, or `None` if the id was never allocated.
    pub fn slot(&self, id: PostId) -> Option<&PostSlot> {
        usize::try_from(id).ok().and_then(|i| self.slots.get(i))
    }

    pub fn get(&self, id: PostId) -> Option<PostView> {
        self.slot(id).map(|slot| PostView::from_slot(id, slot))
    }

    /// Allocate the next id. Empty metadata is stored as absent.
    pub fn append(&mut self, uri: String, metadata: Option<String>) -> FeedResult<PostId> {
        if uri.is_empty() {
            return Err(FeedError::EmptyUri);
        }
        let id = self.next_id();
        self.slots.push(PostSlot::Live {
            uri,
            metadata: metadata.filter(|m| !m.is_empty()),
        });
        Ok(id)
    }

    pub fn tombstone(&mut self, id: PostId) -> FeedResult<()> {
        let slot = usize::try_from(id)
            .ok()
            .and_then(|i| self.slots.get_mut(i))
            .filter(|slot| slot.is_live())
            .ok_or(FeedError::PostNotFound { id })?;
        *slot = PostSlot::Tombstoned;
        self.num_deleted += 1;
        Ok(())
    }
}
