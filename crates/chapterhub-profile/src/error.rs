//! Error types for the profile service.
//!
//! Every failure becomes the same plain `404 Not Found` response. Whether a
//! profile is private, missing, or the store is down is only visible in logs.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::store::StoreError;

/// Body of every not-found response.
pub const NOT_FOUND_BODY: &str = "Not Found";

/// Profile service error type.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// The request path had no final segment.
    #[error("empty slug")]
    EmptySlug,

    /// No public profile has this slug (it may exist but be private).
    #[error("no public profile for slug")]
    NoSuchPublicProfile,

    /// The store could not be reached.
    #[error("profile store unavailable: {0}")]
    StoreUnavailable(#[source] StoreError),

    /// The store answered with an error or an unreadable body.
    #[error("profile store error: {0}")]
    Store(#[source] StoreError),

    /// More than one row shares the slug.
    #[error("slug {slug:?} matched {count} profiles")]
    AmbiguousSlug {
        /// The duplicated slug.
        slug: String,
        /// Number of rows the store returned.
        count: usize,
    },

    /// The record cannot be rendered (e.g. it has no name).
    #[error("malformed profile record: {0}")]
    MalformedRecord(String),
}

impl From<StoreError> for ProfileError {
    fn from(err: StoreError) -> Self {
        if err.is_unavailable() {
            Self::StoreUnavailable(err)
        } else {
            Self::Store(err)
        }
    }
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        match &self {
            Self::EmptySlug | Self::NoSuchPublicProfile => {
                tracing::debug!(reason = %self, "profile not found");
            }
            Self::MalformedRecord(_) => {
                tracing::warn!(error = %self, "unrenderable profile record");
            }
            Self::StoreUnavailable(_) | Self::Store(_) | Self::AmbiguousSlug { .. } => {
                tracing::error!(error = %self, "profile lookup failed");
            }
        }

        not_found()
    }
}

/// The uniform not-found response.
pub fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        )],
        NOT_FOUND_BODY,
    )
        .into_response()
}
