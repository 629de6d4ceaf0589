//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the UI
//! thread and the background worker that performs search requests. Every
//! message carries the request id allocated by the controller so stale
//! resolutions can be recognized and discarded.

use crate::domain::Movie;

/// Messages sent from the UI thread to the worker thread.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerMessage {
    /// Perform a title search against the movie database.
    SearchMovies {
        /// The raw query text as submitted (already known non-blank).
        query: String,

        /// Monotonically increasing id allocated for this search; echoed
        /// back in the response.
        request_id: u64,
    },
}

impl WorkerMessage {
    /// Creates a `SearchMovies` message.
    #[must_use]
    pub fn search_movies(query: String, request_id: u64) -> Self {
        Self::SearchMovies { query, request_id }
    }
}

/// Responses sent from the worker thread back to the UI thread.
///
/// Exactly one response is produced per request; the controller compares
/// `request_id` against the latest allocated id and ignores anything older.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerResponse {
    /// The search resolved; `movies` may be empty.
    SearchCompleted {
        /// Id of the request this response answers.
        request_id: u64,

        /// Results in remote relevance order.
        movies: Vec<Movie>,
    },

    /// The search failed for any reason (network, authorization, malformed
    /// response). The controller does not branch on the cause.
    SearchFailed {
        /// Id of the request this response answers.
        request_id: u64,

        /// Human-readable failure description, for the log.
        message: String,
    },
}
