//! Domain-specific assertion macros for feedstore harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* feed invariant was violated.

/// Assert that a page's three sequences have equal length and list exactly
/// the given ids, newest first.
///
/// ```rust
/// assert_page_ids!(page, [3, 2, 1]);
/// ```
#[macro_export]
macro_rules! assert_page_ids {
    ($page:expr, [$($id:expr),* $(,)?]) => {{
        let page: &feedstore::FeedPage = &$page;
        let expected: Vec<u64> = vec![$($id),*];
        if page.uris.len() != page.ids.len() || page.metadatas.len() != page.ids.len() {
            panic!(
                "assert_page_ids! failed: ragged page\n  ids: {}  uris: {}  metadatas: {}",
                page.ids.len(),
                page.uris.len(),
                page.metadatas.len()
            );
        }
        pretty_assertions::assert_eq!(page.ids, expected, "feed ids (newest first)");
    }};
}

/// Assert that a result failed with a specific [`feedstore::FeedError`] kind.
///
/// ```rust
/// assert_feed_err!(store.post(&id("x"), "u", None), "unauthorized");
/// ```
#[macro_export]
macro_rules! assert_feed_err {
    ($result:expr, $kind:expr) => {{
        match $result {
            Ok(value) => panic!(
                "assert_feed_err! failed: expected {:?} error, got Ok({:?})",
                $kind, value
            ),
            Err(err) => {
                let err: feedstore::FeedError = err;
                if err.kind() != $kind {
                    panic!(
                        "assert_feed_err! failed:\n  expected kind: {:?}\n  actual:        {:?} ({})",
                        $kind,
                        err.kind(),
                        err
                    );
                }
            }
        }
    }};
}

/// Assert that the counters agree with the slots: `num_posts` equals both
/// the live-slot count and `next_id - num_deleted`, and no live slot has an
/// empty uri.
#[macro_export]
macro_rules! assert_counters_consistent {
    ($store:expr) => {{
        let store = &$store;
        let live = (0..store.next_id())
            .filter_map(|i| store.get_post(i))
            .filter(|p| p.live)
            .inspect(|p| assert!(!p.uri.is_empty(), "live post {} has an empty uri", p.id))
            .count() as u64;
        assert!(
            store.num_deleted() <= store.next_id(),
            "num_deleted {} exceeds next_id {}",
            store.num_deleted(),
            store.next_id()
        );
        pretty_assertions::assert_eq!(store.num_posts(), live, "num_posts vs live slots");
        pretty_assertions::assert_eq!(
            store.num_posts(),
            store.next_id() - store.num_deleted(),
            "num_posts vs counters"
        );
    }};
}
