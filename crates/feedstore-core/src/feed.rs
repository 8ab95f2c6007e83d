//! Feed query — paginated, reverse-chronological view over the post ledger.
//!
//! Position 0 of a page is the post `offset` places back from the newest id.
//! Tombstones keep their position and render as empty strings, so a page
//! always spans a contiguous run of ids.

use crate::error::{FeedError, FeedResult};
use crate::ledger::PostLedger;
use crate::types::{PostId, PostSlot};
use serde::{Deserialize, Serialize};

/// One page of the feed as three parallel sequences.
///
/// Index `k` of each vector describes the same post. A tombstoned post has an
/// empty `uri`; that is the only way the page exposes liveness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPage {
    pub uris: Vec<String>,
    pub metadatas: Vec<String>,
    pub ids: Vec<PostId>,
}

impl FeedPage {
    fn with_capacity(n: usize) -> Self {
        Self {
            uris: Vec::with_capacity(n),
            metadatas: Vec::with_capacity(n),
            ids: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, id: PostId, slot: &PostSlot) {
        self.uris.push(slot.uri().to_string());
        self.metadatas.push(slot.metadata().to_string());
        self.ids.push(id);
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate `(id, uri, metadata)` rows, newest first.
    pub fn rows(&self) -> impl Iterator<Item = (PostId, &str, &str)> {
        self.ids
            .iter()
            .zip(&self.uris)
            .zip(&self.metadatas)
            .map(|((id, uri), metadata)| (*id, uri.as_str(), metadata.as_str()))
    }
}

/// Number of entries a `(offset, depth)` request yields against `next_id`
/// posts. `depth == 0` means "everything from `offset` to the oldest post".
pub fn resolve_depth(next_id: u64, offset: u64, depth: u64) -> FeedResult<u64> {
    if offset > next_id {
        return Err(FeedError::OffsetTooLarge { offset, next_id });
    }
    let available = next_id - offset;
    if depth == 0 || depth > available {
        Ok(available)
    } else {
        Ok(depth)
    }
}

impl PostLedger {
    pub fn feed(&self, offset: u64, depth: u64) -> FeedResult<FeedPage> {
        let next_id = self.next_id();
        let depth = resolve_depth(next_id, offset, depth)?;

        // Ids covered, newest first: next_id - offset - 1 down to next_id - offset - depth.
        let newest_exclusive = next_id - offset;
        let oldest = newest_exclusive - depth;

        let mut page = FeedPage::with_capacity(depth as usize);
        for id in (oldest..newest_exclusive).rev() {
            if let Some(slot) = self.slot(id) {
                page.push(id, slot);
            }
        }
        Ok(page)
    }
}
