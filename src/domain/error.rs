//! Error types for Reelscout.
//!
//! This module defines the centralized error type [`ReelscoutError`] and a
//! type alias [`Result`] for convenient error handling throughout the crate.
//! All errors are implemented using the `thiserror` crate for automatic
//! `Error` trait implementation.

use thiserror::Error;

/// The main error type for Reelscout operations.
///
/// This enum consolidates all error conditions that can occur during a run,
/// from search requests to terminal I/O and configuration issues.
///
/// The controller treats every [`ReelscoutError::Search`] identically: a
/// failed lookup flips the error flag and fires one notification, whether
/// the underlying cause was a connection failure, a non-success status, or
/// a malformed response body.
#[derive(Debug, Error)]
pub enum ReelscoutError {
    /// A search request against the movie database failed.
    ///
    /// Wraps any `reqwest` failure: connect errors, non-2xx statuses
    /// surfaced by `error_for_status`, and body-decoding errors alike.
    #[error("Search request failed: {0}")]
    Search(#[from] reqwest::Error),

    /// Filesystem or terminal I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Communication with the background search worker failed.
    ///
    /// Occurs when the worker thread has exited and a channel endpoint is
    /// disconnected.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    ///
    /// The string describes the specific configuration problem, e.g. a
    /// missing API token or an unreadable config file.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Reelscout operations.
pub type Result<T> = std::result::Result<T, ReelscoutError>;
