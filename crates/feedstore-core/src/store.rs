//! Store — the authoritative feed state machine.
//!
//! [`FeedStore`] owns the post ledger, the access-control state and the
//! event log. Every mutating method validates fully before it changes
//! anything, then applies the change and records exactly one event. Callers
//! that share a store across threads must serialize writers themselves (the
//! HTTP transport holds one write lock per mutation).

use crate::access::AccessControl;
use crate::error::{FeedError, FeedResult};
use crate::events::{EventLog, EventRecord, FeedEvent};
use crate::feed::FeedPage;
use crate::ledger::PostLedger;
use crate::types::{PostId, PostView, Principal};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct FeedStore<I: Principal> {
    access: AccessControl<I>,
    ledger: PostLedger,
    events: EventLog<I>,
}

impl<I: Principal> FeedStore<I> {
    /// Build a store owned by `owner` with `editors` pre-authorized.
    ///
    /// Each editor goes through the same insertion path as a successful
    /// [`add_editor`](Self::add_editor) and emits `EditorAdded`. A repeated
    /// identity aborts construction.
    pub fn new(owner: I, editors: impl IntoIterator<Item = I>) -> FeedResult<Self> {
        let mut store = Self {
            access: AccessControl::new(owner),
            ledger: PostLedger::new(),
            events: EventLog::new(),
        };
        for (index, editor) in editors.into_iter().enumerate() {
            store
                .access
                .bootstrap_editor(editor.clone())
                .map_err(|_| FeedError::DuplicateInitialEditor { index })?;
            store
                .events
                .record(FeedEvent::EditorAdded { identity: editor });
        }
        tracing::debug!(
            owner = ?store.access.owner(),
            editors = store.access.editor_count(),
            "feed store initialised"
        );
        Ok(store)
    }

    // -----------------------------------------------------------------------
    // Access control
    // -----------------------------------------------------------------------

    pub fn owner(&self) -> &I {
        self.access.owner()
    }

    pub fn is_editor(&self, identity: &I) -> bool {
        self.access.is_editor(identity)
    }

    pub fn editors(&self) -> HashSet<I> {
        self.access.editors().cloned().collect()
    }

    pub fn editor_count(&self) -> usize {
        self.access.editor_count()
    }

    pub fn add_editor(&mut self, caller: &I, target: I) -> FeedResult<()> {
        self.access
            .add_editor(caller, target.clone())
            .inspect_err(|err| tracing::warn!(?caller, ?target, %err, "add_editor rejected"))?;
        tracing::debug!(?caller, ?target, "editor added");
        self.events.record(FeedEvent::EditorAdded { identity: target });
        Ok(())
    }

    pub fn remove_editor(&mut self, caller: &I, target: &I) -> FeedResult<()> {
        self.access
            .remove_editor(caller, target)
            .inspect_err(|err| tracing::warn!(?caller, ?target, %err, "remove_editor rejected"))?;
        tracing::debug!(?caller, ?target, "editor removed");
        self.events.record(FeedEvent::EditorRemoved {
            identity: target.clone(),
            remover: caller.clone(),
        });
        Ok(())
    }

    pub fn transfer_ownership(&mut self, caller: &I, new_owner: I) -> FeedResult<()> {
        let previous = self
            .access
            .transfer_ownership(caller, new_owner.clone())
            .inspect_err(|err| tracing::warn!(?caller, %err, "ownership transfer rejected"))?;
        tracing::info!(?previous, owner = ?new_owner, "ownership transferred");
        self.events.record(FeedEvent::OwnershipTransferred {
            previous,
            owner: new_owner,
        });
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Post ledger
    // -----------------------------------------------------------------------

    /// Append a post and return its id. Empty `metadata` counts as absent.
    pub fn post(
        &mut self,
        caller: &I,
        uri: impl Into<String>,
        metadata: Option<String>,
    ) -> FeedResult<PostId> {
        self.access
            .require_editor(caller)
            .inspect_err(|err| tracing::warn!(?caller, %err, "post rejected"))?;
        let uri = uri.into();
        let id = self.ledger.append(uri.clone(), metadata.clone())?;
        tracing::debug!(?caller, id, uri = %uri, "post created");
        self.events.record(FeedEvent::post_created(id, uri, metadata));
        Ok(id)
    }

    pub fn remove_post(&mut self, caller: &I, id: PostId) -> FeedResult<()> {
        self.access
            .require_editor(caller)
            .inspect_err(|err| tracing::warn!(?caller, id, %err, "remove_post rejected"))?;
        self.ledger.tombstone(id)?;
        tracing::debug!(?caller, id, "post removed");
        self.events.record(FeedEvent::PostRemoved { id });
        Ok(())
    }

    pub fn num_posts(&self) -> u64 {
        self.ledger.num_posts()
    }

    pub fn next_id(&self) -> u64 {
        self.ledger.next_id()
    }

    pub fn num_deleted(&self) -> u64 {
        self.ledger.num_deleted()
    }

    /// Single-post lookup; `None` only for ids that were never allocated.
    pub fn get_post(&self, id: PostId) -> Option<PostView> {
        self.ledger.get(id)
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Reverse-chronological page; see [`crate::feed`]. Open to any caller.
    pub fn feed(&self, offset: u64, depth: u64) -> FeedResult<FeedPage> {
        self.ledger.feed(offset, depth)
    }

    pub fn events(&self) -> &EventLog<I> {
        &self.events
    }

    pub fn events_since(&self, after: u64) -> &[EventRecord<I>] {
        self.events.since(after)
    }
}
