//! Access control — a single transferable owner and an owner-managed editor set.
//!
//! The owner is not implicitly an editor. Editors may remove themselves; any
//! other change to the set needs the owner.

use crate::error::{FeedError, FeedResult, Role};
use crate::types::Principal;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct AccessControl<I: Principal> {
    owner: I,
    editors: HashSet<I>,
}

impl<I: Principal> AccessControl<I> {
    /// Start with `owner` and an empty editor set.
    pub fn new(owner: I) -> Self {
        Self {
            owner,
            editors: HashSet::new(),
        }
    }

    pub fn owner(&self) -> &I {
        &self.owner
    }

    pub fn is_owner(&self, identity: &I) -> bool {
        self.owner == *identity
    }

    pub fn is_editor(&self, identity: &I) -> bool {
        self.editors.contains(identity)
    }

    pub fn editors(&self) -> impl Iterator<Item = &I> {
        self.editors.iter()
    }

    pub fn editor_count(&self) -> usize {
        self.editors.len()
    }

    /// Insert without an authorization check. Used by construction and by
    /// the success branch of [`add_editor`](Self::add_editor).
    pub(crate) fn bootstrap_editor(&mut self, target: I) -> FeedResult<()> {
        if self.editors.contains(&target) {
            return Err(FeedError::AlreadyEditor);
        }
        self.editors.insert(target);
        Ok(())
    }

    pub fn add_editor(&mut self, caller: &I, target: I) -> FeedResult<()> {
        if !self.is_owner(caller) {
            return Err(FeedError::Unauthorized {
                required: Role::Owner,
            });
        }
        self.bootstrap_editor(target)
    }

    pub fn remove_editor(&mut self, caller: &I, target: &I) -> FeedResult<()> {
        if !self.is_owner(caller) && caller != target {
            return Err(FeedError::Unauthorized {
                required: Role::OwnerOrSelf,
            });
        }
        if !self.editors.remove(target) {
            return Err(FeedError::NotEditor);
        }
        Ok(())
    }

    /// Replace the owner, returning the previous one. Editors are untouched.
    pub fn transfer_ownership(&mut self, caller: &I, new_owner: I) -> FeedResult<I> {
        if !self.is_owner(caller) {
            return Err(FeedError::Unauthorized {
                required: Role::Owner,
            });
        }
        Ok(std::mem::replace(&mut self.owner, new_owner))
    }

    /// Fail unless `caller` is in the editor set.
    pub(crate) fn require_editor(&self, caller: &I) -> FeedResult<()> {
        if self.is_editor(caller) {
            Ok(())
        } else {
            Err(FeedError::Unauthorized {
                required: Role::Editor,
            })
        }
    }
}
