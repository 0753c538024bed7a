//! Error types shared by the fetch, parse, and selection layers.

use thiserror::Error;

/// A JSON document from the ratings API did not have the expected shape:
/// a required field was missing or carried the wrong type.
#[derive(Debug, Error)]
#[error("malformed {document} document: {source}")]
pub struct DataFormatError {
    pub document: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// Transport-level failure while retrieving a document.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("endpoint returned HTTP status {status}")]
    Status { status: u16 },
}

/// Errors surfaced by a [`RatingsApi`](crate::services::ratings_api::RatingsApi).
///
/// Transport failures are tagged by which document was unavailable so that
/// callers can report "directory unavailable" and "establishment data
/// unavailable" separately. Malformed documents keep their own variant.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authority directory unavailable: {0}")]
    DirectoryUnavailable(#[source] FetchError),

    #[error("establishment data unavailable for authority {authority_id}: {source}")]
    EstablishmentsUnavailable {
        authority_id: i64,
        #[source]
        source: FetchError,
    },

    #[error(transparent)]
    DataFormat(#[from] DataFormatError),

    #[error("failed to build http client: {0}")]
    Client(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of seconds, got '{value}'")]
    InvalidSeconds { var: &'static str, value: String },
}
