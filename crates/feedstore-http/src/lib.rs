//! feedstore-http — HTTP transport for the feed store.
//!
//! Supplies caller identities from a trusted request header, serializes
//! writers behind one lock and maps [`feedstore_core::FeedError`] to status
//! codes. See [`routes`] for the endpoint table.

pub mod error;
pub mod extract;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use extract::{ApiJson, ApiPath, ApiQuery};
pub use routes::router;
pub use server::serve;
pub use state::{AppState, Caller, SharedStore};
