//! feedstore-core — authority-gated, append-mostly feed store.
//!
//! This crate exposes the store's layers as public modules, plus the shared
//! types used across them.
//!
//! # Architecture
//!
//! ```text
//! AccessControl ──┐
//!                 ├──► FeedStore ──► EventLog
//! PostLedger ─────┘        │
//!      └──► feed (reverse-chronological pages)
//! ```
//!
//! [`FeedStore`] is a plain state machine: writes take `&mut self`, reads take
//! `&self`. Sharing it between tasks is the transport's job.

pub mod access;
pub mod config;
pub mod error;
pub mod events;
pub mod feed;
pub mod ledger;
pub mod store;
pub mod types;

pub use error::{FeedError, FeedResult, Role};
pub use events::{EventRecord, FeedEvent};
pub use feed::FeedPage;
pub use store::FeedStore;
pub use types::{Identity, PostId, PostView, Principal};
