//! Error types for the portfolio core

use thiserror::Error;

/// Top-level error type for the portfolio core
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors related to the static content model
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Phrase list is empty")]
    EmptyPhrases,

    #[error("Slide list is empty")]
    EmptySlides,

    #[error("Navigation list is empty")]
    EmptyNavigation,

    #[error("Invalid navigation href: {0}")]
    InvalidHref(String),

    #[error("Navigation item {id} points at {href}")]
    AnchorMismatch { id: String, href: String },

    #[error("Malformed content document: {0}")]
    Malformed(String),
}

/// Errors related to session storage
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, FolioError>;
