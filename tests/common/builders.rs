//! Test builders — ergonomic constructors for identities and populated stores.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use feedstore::{FeedStore, Identity};

/// Shorthand for an [`Identity`].
pub fn id(name: &str) -> Identity {
    Identity::from(name)
}

// ---------------------------------------------------------------------------
// StoreBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`FeedStore`] fixtures.
///
/// Posts and removals are performed by the first editor.
///
/// # Example
///
/// ```rust
/// let store = StoreBuilder::new()
///     .editors(["alice", "bob"])
///     .post("ipfs://a")
///     .post_with("ipfs://b", "title=b")
///     .removed(0)
///     .build();
/// ```
pub struct StoreBuilder {
    owner: Identity,
    editors: Vec<Identity>,
    posts: Vec<(String, Option<String>)>,
    removed: Vec<u64>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self {
            owner: id("owner"),
            editors: vec![id("editor")],
            posts: Vec::new(),
            removed: Vec::new(),
        }
    }

    pub fn owner(mut self, owner: &str) -> Self {
        self.owner = id(owner);
        self
    }

    /// Replace the initial editor list.
    pub fn editors<'a>(mut self, editors: impl IntoIterator<Item = &'a str>) -> Self {
        self.editors = editors.into_iter().map(id).collect();
        self
    }

    pub fn post(mut self, uri: impl Into<String>) -> Self {
        self.posts.push((uri.into(), None));
        self
    }

    pub fn post_with(mut self, uri: impl Into<String>, metadata: impl Into<String>) -> Self {
        self.posts.push((uri.into(), Some(metadata.into())));
        self
    }

    /// Append `n` posts whose uri is `u<id>`.
    pub fn posts(mut self, n: u64) -> Self {
        let start = self.posts.len();
        for i in 0..n as usize {
            self.posts.push((format!("u{}", start + i), None));
        }
        self
    }

    pub fn removed(mut self, post_id: u64) -> Self {
        self.removed.push(post_id);
        self
    }

    pub fn build(self) -> FeedStore<Identity> {
        let author = self.editors.first().cloned();
        let mut store = FeedStore::new(self.owner, self.editors).expect("valid initial editors");
        if self.posts.is_empty() && self.removed.is_empty() {
            return store;
        }
        let author = author.expect("StoreBuilder needs an editor to create posts");
        for (uri, metadata) in self.posts {
            store.post(&author, uri, metadata).expect("fixture post");
        }
        for post_id in self.removed {
            store.remove_post(&author, post_id).expect("fixture removal");
        }
        store
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
