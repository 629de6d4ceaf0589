//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! timer ticks, and worker responses, translating them into state changes
//! and action sequences. It serves as the primary control flow coordinator
//! for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the terminal or the worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Search Lifecycle
//!
//! Submitting a search clears the previous results and sets `loading`
//! immediately; the outcome arrives later as a [`WorkerResponse`]. Every
//! submission takes a fresh request id, and only the response carrying the
//! most recently issued id is applied. Responses of superseded searches are
//! dropped whole, so a slow early search can never overwrite a newer one,
//! and never surfaces a notification for a search the user has moved past.

use std::time::{Duration, Instant};

use crate::app::state::Toast;
use crate::app::{Action, AppState};
use crate::domain::Result;
use crate::worker::{WorkerMessage, WorkerResponse};

/// How long a notification stays on screen.
const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Toast shown when a search resolves with zero results.
pub const EMPTY_RESULTS_MESSAGE: &str = "No movies found for your request.";

/// Toast shown when a search fails for any reason.
pub const SEARCH_FAILED_MESSAGE: &str = "Something went wrong.";

/// Events triggered by user input, timer ticks, or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves the grid cursor down by one position (wraps to top).
    KeyDown,
    /// Moves the grid cursor up by one position (wraps to bottom).
    KeyUp,
    /// Exits the application.
    Quit,
    /// Submits the current query as a new search.
    SubmitSearch,
    /// Opens the details modal for the movie under the cursor.
    OpenDetails,
    /// Closes the details modal. No-op if it is already closed.
    CloseModal,
    /// Gives keyboard focus to the search bar.
    FocusSearch,
    /// Gives keyboard focus to the results grid.
    FocusResults,
    /// Appends a character to the query. Ignored outside search focus.
    Char(char),
    /// Removes the last character of the query. Ignored outside search focus.
    Backspace,
    /// Closes the modal if open, otherwise leaves the search bar.
    Escape,
    /// Periodic timer used to expire the active toast.
    Tick,
    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// # Returns
///
/// A `(should_render, actions)` pair. `should_render` is `false` when the
/// event left the state untouched, so callers can skip redraws.
///
/// # Errors
///
/// Currently infallible; the `Result` keeps the signature stable for
/// transitions that may grow side effects.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::SubmitSearch => handle_submit_search(state),
        Event::OpenDetails => {
            let Some(movie) = state.selected_result() else {
                tracing::debug!("no movie under cursor");
                return Ok((false, vec![]));
            };
            tracing::debug!(movie_id = movie.id, title = %movie.title, "opening details");
            state.selected_movie = Some(movie.clone());
            Ok((true, vec![]))
        }
        Event::CloseModal => {
            if state.selected_movie.take().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, vec![]))
        }
        Event::FocusSearch => {
            use super::modes::InputMode;
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            use super::modes::InputMode;
            state.input_mode = InputMode::Results;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            use super::modes::InputMode;

            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }

            state.query.push(*c);
            tracing::trace!(query = %state.query, char = %c, "query updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            use super::modes::InputMode;

            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }

            state.query.pop();
            Ok((true, vec![]))
        }
        Event::Escape => {
            use super::modes::InputMode;

            if state.selected_movie.take().is_some() {
                return Ok((true, vec![]));
            }
            if state.input_mode == InputMode::Search {
                state.input_mode = InputMode::Results;
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::Tick => {
            let expired = state
                .toast
                .as_ref()
                .is_some_and(|t| t.expires_at <= Instant::now());
            if expired {
                state.toast = None;
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::WorkerResponse(response) => handle_worker_response(state, response),
    }
}

/// Starts a new search: resets the lifecycle fields, allocates a request id,
/// and posts the query to the worker.
///
/// Blank queries (empty or whitespace only) are ignored entirely.
fn handle_submit_search(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    use super::modes::InputMode;

    let query = state.query.trim().to_string();
    if query.is_empty() {
        tracing::debug!("ignoring blank search submission");
        return Ok((false, vec![]));
    }

    state.next_request_id += 1;
    let request_id = state.next_request_id;
    state.latest_request_id = request_id;

    state.movies.clear();
    state.selected_index = 0;
    state.loading = true;
    state.errored = false;
    state.toast = None;
    state.input_mode = InputMode::Results;

    tracing::info!(request_id = request_id, query = %query, "search submitted");

    Ok((
        true,
        vec![Action::PostToWorker(WorkerMessage::search_movies(
            query, request_id,
        ))],
    ))
}

/// Applies a worker response, discarding it whole if a newer search has
/// been submitted since the request went out.
fn handle_worker_response(
    state: &mut AppState,
    response: &WorkerResponse,
) -> Result<(bool, Vec<Action>)> {
    match response {
        WorkerResponse::SearchCompleted { request_id, movies } => {
            if *request_id != state.latest_request_id {
                tracing::debug!(
                    request_id = request_id,
                    latest = state.latest_request_id,
                    "discarding stale search result"
                );
                return Ok((false, vec![]));
            }

            tracing::info!(
                request_id = request_id,
                result_count = movies.len(),
                "search completed"
            );

            state.loading = false;
            state.errored = false;
            state.movies = movies.clone();
            state.selected_index = 0;

            if state.movies.is_empty() {
                show_toast(state, EMPTY_RESULTS_MESSAGE);
            }

            Ok((true, vec![]))
        }
        WorkerResponse::SearchFailed { request_id, message } => {
            if *request_id != state.latest_request_id {
                tracing::debug!(
                    request_id = request_id,
                    latest = state.latest_request_id,
                    "discarding stale search failure"
                );
                return Ok((false, vec![]));
            }

            tracing::warn!(request_id = request_id, error = %message, "search failed");

            state.loading = false;
            state.errored = true;
            show_toast(state, SEARCH_FAILED_MESSAGE);

            Ok((true, vec![]))
        }
    }
}

fn show_toast(state: &mut AppState, message: &str) {
    state.toast = Some(Toast {
        message: message.to_string(),
        expires_at: Instant::now() + TOAST_DURATION,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::InputMode;
    use crate::domain::Movie;
    use crate::ui::theme::Theme;

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            overview: "An overview.".to_string(),
            release_date: "2010-07-16".to_string(),
            vote_average: 8.8,
            backdrop_path: None,
            poster_path: None,
        }
    }

    fn state() -> AppState {
        AppState::new(Theme::default())
    }

    fn submit(state: &mut AppState, query: &str) -> Vec<Action> {
        state.query = query.to_string();
        let (_, actions) = handle_event(state, &Event::SubmitSearch).unwrap();
        actions
    }

    fn completed(request_id: u64, movies: Vec<Movie>) -> Event {
        Event::WorkerResponse(WorkerResponse::SearchCompleted { request_id, movies })
    }

    fn failed(request_id: u64) -> Event {
        Event::WorkerResponse(WorkerResponse::SearchFailed {
            request_id,
            message: "connection refused".to_string(),
        })
    }

    #[test]
    fn submit_enters_loading_and_posts_to_worker() {
        let mut state = state();
        let actions = submit(&mut state, "inception");

        assert!(state.loading);
        assert!(!state.errored);
        assert!(state.movies.is_empty());
        assert!(state.toast.is_none());
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::search_movies(
                "inception".to_string(),
                1
            ))]
        );
    }

    #[test]
    fn submit_resets_state_regardless_of_what_came_before() {
        let mut state = state();

        // A failed search leaves results empty and errored set.
        submit(&mut state, "inception");
        handle_event(&mut state, &failed(1)).unwrap();
        assert!(state.errored);

        let actions = submit(&mut state, "tenet");
        assert!(state.loading);
        assert!(!state.errored);
        assert!(state.movies.is_empty());
        assert!(state.toast.is_none());
        assert_eq!(actions.len(), 1);

        // A successful search with results is also fully reset.
        handle_event(&mut state, &completed(2, vec![movie(1, "Tenet")])).unwrap();
        submit(&mut state, "dunkirk");
        assert!(state.loading);
        assert!(state.movies.is_empty());
    }

    #[test]
    fn submit_trims_and_ignores_blank_queries() {
        let mut state = state();

        let (rendered, actions) = handle_event(&mut state, &Event::SubmitSearch).unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());

        state.query = "   ".to_string();
        let (_, actions) = handle_event(&mut state, &Event::SubmitSearch).unwrap();
        assert!(actions.is_empty());
        assert!(!state.loading);
        assert_eq!(state.next_request_id, 0);

        let actions = submit(&mut state, "  heat  ");
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::search_movies(
                "heat".to_string(),
                1
            ))]
        );
    }

    #[test]
    fn successful_search_with_results_shows_no_toast() {
        let mut state = state();
        submit(&mut state, "heat");

        handle_event(&mut state, &completed(1, vec![movie(1, "Heat"), movie(2, "Heat 2")]))
            .unwrap();

        assert!(!state.loading);
        assert!(!state.errored);
        assert_eq!(state.movies.len(), 2);
        assert_eq!(state.selected_index, 0);
        assert!(state.toast.is_none());
    }

    #[test]
    fn empty_result_shows_the_no_movies_toast() {
        let mut state = state();
        submit(&mut state, "zzzzz");

        handle_event(&mut state, &completed(1, vec![])).unwrap();

        assert!(!state.loading);
        assert!(!state.errored);
        assert!(state.movies.is_empty());
        assert_eq!(
            state.toast.as_ref().map(|t| t.message.as_str()),
            Some(EMPTY_RESULTS_MESSAGE)
        );
    }

    #[test]
    fn failure_sets_errored_and_shows_the_error_toast() {
        let mut state = state();
        submit(&mut state, "heat");

        handle_event(&mut state, &failed(1)).unwrap();

        assert!(!state.loading);
        assert!(state.errored);
        assert!(state.movies.is_empty());
        assert_eq!(
            state.toast.as_ref().map(|t| t.message.as_str()),
            Some(SEARCH_FAILED_MESSAGE)
        );
    }

    #[test]
    fn stale_success_is_discarded_entirely() {
        let mut state = state();
        submit(&mut state, "alien");
        submit(&mut state, "aliens");

        // The first search resolves after the second was submitted.
        let (rendered, _) =
            handle_event(&mut state, &completed(1, vec![movie(1, "Alien")])).unwrap();
        assert!(!rendered);
        assert!(state.loading);
        assert!(state.movies.is_empty());
        assert!(state.toast.is_none());

        handle_event(&mut state, &completed(2, vec![movie(2, "Aliens")])).unwrap();
        assert_eq!(state.movies.len(), 1);
        assert_eq!(state.movies[0].title, "Aliens");
    }

    #[test]
    fn stale_failure_leaves_the_newer_search_untouched() {
        let mut state = state();
        submit(&mut state, "alien");
        submit(&mut state, "aliens");

        let (rendered, _) = handle_event(&mut state, &failed(1)).unwrap();
        assert!(!rendered);
        assert!(state.loading);
        assert!(!state.errored);
        assert!(state.toast.is_none());
    }

    #[test]
    fn stale_empty_result_shows_no_toast() {
        let mut state = state();
        submit(&mut state, "alien");
        submit(&mut state, "aliens");

        handle_event(&mut state, &completed(1, vec![])).unwrap();
        assert!(state.toast.is_none());
    }

    #[test]
    fn details_open_and_close_round_trip() {
        let mut state = state();
        state.movies = vec![movie(1, "Heat"), movie(2, "Ronin")];
        state.selected_index = 1;

        handle_event(&mut state, &Event::OpenDetails).unwrap();
        assert_eq!(state.selected_movie.as_ref().map(|m| m.id), Some(2));

        // Opening again while already open is harmless.
        handle_event(&mut state, &Event::OpenDetails).unwrap();
        assert_eq!(state.selected_movie.as_ref().map(|m| m.id), Some(2));

        let (rendered, _) = handle_event(&mut state, &Event::CloseModal).unwrap();
        assert!(rendered);
        assert!(state.selected_movie.is_none());

        let (rendered, _) = handle_event(&mut state, &Event::CloseModal).unwrap();
        assert!(!rendered);
    }

    #[test]
    fn open_details_without_results_is_a_noop() {
        let mut state = state();
        let (rendered, actions) = handle_event(&mut state, &Event::OpenDetails).unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
        assert!(state.selected_movie.is_none());
    }

    #[test]
    fn selection_is_independent_of_the_search_lifecycle() {
        let mut state = state();
        state.movies = vec![movie(1, "Heat")];
        handle_event(&mut state, &Event::OpenDetails).unwrap();

        submit(&mut state, "ronin");
        assert!(state.selected_movie.is_some());

        handle_event(&mut state, &failed(2)).unwrap();
        assert!(state.selected_movie.is_some());
    }

    #[test]
    fn escape_closes_the_modal_before_leaving_search_focus() {
        let mut state = state();
        state.movies = vec![movie(1, "Heat")];
        state.selected_movie = Some(state.movies[0].clone());
        state.input_mode = InputMode::Search;

        handle_event(&mut state, &Event::Escape).unwrap();
        assert!(state.selected_movie.is_none());
        assert_eq!(state.input_mode, InputMode::Search);

        handle_event(&mut state, &Event::Escape).unwrap();
        assert_eq!(state.input_mode, InputMode::Results);
    }

    #[test]
    fn typing_only_edits_the_query_in_search_focus() {
        let mut state = state();
        handle_event(&mut state, &Event::Char('h')).unwrap();
        handle_event(&mut state, &Event::Char('i')).unwrap();
        assert_eq!(state.query, "hi");

        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.query, "h");

        state.input_mode = InputMode::Results;
        let (rendered, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!rendered);
        assert_eq!(state.query, "h");
    }

    #[test]
    fn tick_expires_the_toast() {
        let mut state = state();
        state.toast = Some(Toast {
            message: "done".to_string(),
            expires_at: Instant::now() - Duration::from_millis(1),
        });

        let (rendered, _) = handle_event(&mut state, &Event::Tick).unwrap();
        assert!(rendered);
        assert!(state.toast.is_none());

        let (rendered, _) = handle_event(&mut state, &Event::Tick).unwrap();
        assert!(!rendered);
    }

    #[test]
    fn quit_emits_the_quit_action() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Quit).unwrap();
        assert_eq!(actions, vec![Action::Quit]);
    }
}
