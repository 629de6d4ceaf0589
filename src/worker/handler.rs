//! Worker thread implementation for asynchronous search requests.
//!
//! The worker owns the HTTP client and a single-threaded tokio runtime.
//! Requests run to completion one at a time in arrival order; overlapping
//! searches are therefore answered in order, and the controller's request
//! ids decide which answer still matters.

use std::sync::mpsc::{channel, Receiver, Sender};

use crate::domain::Result;
use crate::tmdb::TmdbClient;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Worker state: the search client plus the runtime its futures run on.
pub struct SearchWorker {
    client: TmdbClient,
    runtime: tokio::runtime::Runtime,
}

impl SearchWorker {
    /// Creates a worker around the given client.
    ///
    /// # Errors
    ///
    /// Fails if the tokio runtime cannot be constructed.
    pub fn new(client: TmdbClient) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { client, runtime })
    }

    /// Processes one message and returns the response to post back.
    pub fn handle_message(&self, message: WorkerMessage) -> WorkerResponse {
        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::SearchMovies { query, request_id } => {
                self.handle_search(&query, request_id)
            }
        }
    }

    /// Runs a search to completion and maps the outcome to a response.
    fn handle_search(&self, query: &str, request_id: u64) -> WorkerResponse {
        match self.runtime.block_on(self.client.search_movies(query)) {
            Ok(movies) => {
                tracing::debug!(
                    request_id = request_id,
                    result_count = movies.len(),
                    "search succeeded"
                );
                WorkerResponse::SearchCompleted { request_id, movies }
            }
            Err(e) => {
                tracing::warn!(request_id = request_id, error = %e, "search failed");
                WorkerResponse::SearchFailed {
                    request_id,
                    message: e.to_string(),
                }
            }
        }
    }
}

/// Spawns the worker thread and returns its channel endpoints.
///
/// The thread drains requests until the returned sender is dropped, then
/// exits. Responses the UI no longer listens for are silently discarded.
///
/// # Errors
///
/// Fails if the worker runtime cannot be constructed.
pub fn spawn(client: TmdbClient) -> Result<(Sender<WorkerMessage>, Receiver<WorkerResponse>)> {
    let (request_tx, request_rx) = channel::<WorkerMessage>();
    let (response_tx, response_rx) = channel::<WorkerResponse>();

    let worker = SearchWorker::new(client)?;

    std::thread::Builder::new()
        .name("reelscout-search".to_string())
        .spawn(move || {
            tracing::debug!("search worker started");
            while let Ok(message) = request_rx.recv() {
                let response = worker.handle_message(message);
                if response_tx.send(response).is_err() {
                    break;
                }
            }
            tracing::debug!("search worker stopped");
        })?;

    Ok((request_tx, response_rx))
}

#[cfg(test)]
mod tests {
    use super::{spawn, SearchWorker};
    use crate::tmdb::TmdbClient;
    use crate::worker::{WorkerMessage, WorkerResponse};

    /// Base URL that is guaranteed to refuse connections: bind an ephemeral
    /// port, learn its number, then drop the listener.
    fn refused_base_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    fn unreachable_client() -> TmdbClient {
        TmdbClient::new(
            refused_base_url(),
            "token".to_string(),
            "en-US".to_string(),
            false,
        )
    }

    #[test]
    fn failures_map_to_search_failed_with_the_request_id() {
        let worker = SearchWorker::new(unreachable_client()).unwrap();

        let response = worker.handle_message(WorkerMessage::search_movies("matrix".into(), 7));

        match response {
            WorkerResponse::SearchFailed { request_id, message } => {
                assert_eq!(request_id, 7);
                assert!(!message.is_empty());
            }
            other => panic!("expected SearchFailed, got {other:?}"),
        }
    }

    #[test]
    fn spawned_worker_answers_over_the_response_channel() {
        let (tx, rx) = spawn(unreachable_client()).unwrap();

        tx.send(WorkerMessage::search_movies("matrix".into(), 1))
            .unwrap();

        let response = rx
            .recv_timeout(std::time::Duration::from_secs(10))
            .expect("worker should answer");
        assert!(matches!(
            response,
            WorkerResponse::SearchFailed { request_id: 1, .. }
        ));
    }
}
