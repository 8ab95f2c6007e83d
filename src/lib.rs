//! feedstore — authority-gated, append-mostly feed store.
//!
//! This crate re-exports the core and transport crates so integration tests
//! and the binary can import everything from one place.
//!
//! # Architecture
//!
//! ```text
//! HTTP (feedstore-http) ──► RwLock<FeedStore> ──► PostLedger / AccessControl
//!                                   │
//!                                   └──► EventLog ──► /events (indexers)
//! ```

pub use feedstore_core::*;
pub use feedstore_http as http;
