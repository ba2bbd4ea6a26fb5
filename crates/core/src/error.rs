//! Unified error types for pagecache.
//!
//! Store failures and fetch failures share one enum so the engine can
//! propagate either unchanged. Display strings carry a stable code prefix.

use tokio_rusqlite::rusqlite;

/// Unified error type for cache reads.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Database operation failed.
    #[error("CACHE_ERROR: {0}")]
    Database(tokio_rusqlite::Error),

    /// Migration failed to apply.
    #[error("CACHE_ERROR: migration failed: {0}")]
    MigrationFailed(String),

    /// A stored row had no content column value.
    #[error("CACHE_ERROR: missing content for {0}")]
    MissingContent(String),

    /// An update targeted a key with no stored record.
    #[error("CACHE_ERROR: no record to update for {0}")]
    RecordNotFound(String),

    /// Invalid URL.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// Fetch timeout.
    #[error("FETCH_TIMEOUT: {0}")]
    FetchTimeout(String),

    /// Fetch response too large.
    #[error("FETCH_TOO_LARGE: {0}")]
    FetchTooLarge(String),

    /// Transport failure or non-success HTTP status.
    #[error("HTTP_ERROR: {0}")]
    HttpError(String),
}

impl Error {
    /// True for failures raised by the persistence layer.
    pub fn is_store_error(&self) -> bool {
        matches!(
            self,
            Error::Database(_) | Error::MigrationFailed(_) | Error::MissingContent(_) | Error::RecordNotFound(_)
        )
    }

    /// True for failures raised while retrieving content.
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, Error::FetchTimeout(_) | Error::FetchTooLarge(_) | Error::HttpError(_))
    }
}

impl From<tokio_rusqlite::Error<Error>> for Error {
    fn from(err: tokio_rusqlite::Error<Error>) -> Self {
        match err {
            tokio_rusqlite::Error::Error(e) => e,
            tokio_rusqlite::Error::ConnectionClosed => Error::Database(tokio_rusqlite::Error::ConnectionClosed),
            tokio_rusqlite::Error::Close(c) => Error::Database(tokio_rusqlite::Error::Close(c)),
            _ => Error::Database(tokio_rusqlite::Error::ConnectionClosed),
        }
    }
}

impl From<tokio_rusqlite::Error<rusqlite::Error>> for Error {
    fn from(err: tokio_rusqlite::Error<rusqlite::Error>) -> Self {
        Error::Database(err)
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(tokio_rusqlite::Error::Error(err))
    }
}
