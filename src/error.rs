//! Error types for lead search.
//!
//! Unrecognized commands and malformed join/filter specifications are not
//! errors; they leave the query untouched so the caller can fall back to
//! free-text search. Everything here is fatal for the current request.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("Lookup failure: {0}")]
    LookupFailure(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl From<sqlx::Error> for SearchError {
    fn from(err: sqlx::Error) -> Self {
        SearchError::DatabaseError(err.to_string())
    }
}

impl From<::config::ConfigError> for SearchError {
    fn from(err: ::config::ConfigError) -> Self {
        SearchError::ConfigurationError(err.to_string())
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(error: serde_json::Error) -> Self {
        SearchError::InvalidParameter(format!("JSON serialization error: {error}"))
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
