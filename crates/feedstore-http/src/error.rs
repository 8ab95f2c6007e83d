//! Mapping from store errors to HTTP responses.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use feedstore_core::FeedError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error("missing caller identity header")]
    MissingCaller,

    #[error("caller identity header is empty or not valid UTF-8")]
    InvalidCaller,

    #[error(transparent)]
    Path(#[from] PathRejection),

    #[error(transparent)]
    Query(#[from] QueryRejection),

    #[error(transparent)]
    Body(#[from] JsonRejection),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingCaller | ApiError::InvalidCaller => StatusCode::UNAUTHORIZED,
            ApiError::Path(rejection) => rejection.status(),
            ApiError::Query(rejection) => rejection.status(),
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Feed(err) => match err {
                FeedError::Unauthorized { .. } => StatusCode::FORBIDDEN,
                FeedError::AlreadyEditor => StatusCode::CONFLICT,
                FeedError::NotEditor | FeedError::PostNotFound { .. } => StatusCode::NOT_FOUND,
                FeedError::OffsetTooLarge { .. } => StatusCode::BAD_REQUEST,
                FeedError::EmptyUri | FeedError::InvalidIdentity => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                FeedError::DuplicateInitialEditor { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Feed(err) => err.kind(),
            ApiError::MissingCaller => "missing_caller",
            ApiError::InvalidCaller => "invalid_caller",
            ApiError::Path(_) => "invalid_path",
            ApiError::Query(_) => "invalid_query",
            ApiError::Body(_) => "invalid_body",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.kind(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
