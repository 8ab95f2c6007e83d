//! Shared handler state and the caller-identity extractor.
//!
//! All handlers share one [`FeedStore`] behind a single `RwLock`. Mutating
//! handlers hold the write guard for the whole operation, which gives the
//! store the total write order it expects; reads share the read guard.

use crate::error::ApiError;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderName},
};
use feedstore_core::{FeedStore, Identity};
use std::sync::Arc;
use tokio::sync::RwLock;

pub type SharedStore = Arc<RwLock<FeedStore<Identity>>>;

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: SharedStore,
    caller_header: HeaderName,
}

impl AppState {
    /// Wrap `store` for sharing. `caller_header` names the request header the
    /// authentication layer in front of us fills with the caller identity.
    pub fn new(store: FeedStore<Identity>, caller_header: &str) -> anyhow::Result<Self> {
        Ok(Self {
            store: Arc::new(RwLock::new(store)),
            caller_header: HeaderName::try_from(caller_header)?,
        })
    }

    pub fn caller_header(&self) -> &HeaderName {
        &self.caller_header
    }
}

/// Identity of the caller, read from the configured header and normalized
/// with [`Identity::parse`].
///
/// The header is trusted; verifying it is the job of whatever sits in front
/// of this service.
#[derive(Debug, Clone)]
pub struct Caller(pub Identity);

impl FromRequestParts<AppState> for Caller {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(&state.caller_header)
            .ok_or(ApiError::MissingCaller)?;
        let value = value.to_str().map_err(|_| ApiError::InvalidCaller)?;
        Identity::parse(value)
            .map(Caller)
            .map_err(|_| ApiError::InvalidCaller)
    }
}
