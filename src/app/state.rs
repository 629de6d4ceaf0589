//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! application, along with methods for selection management and UI view model
//! generation. It serves as the single source of truth for all transient UI
//! state.
//!
//! # Architecture
//!
//! `AppState` separates the search lifecycle fields (`movies`, `loading`,
//! `errored`) from presentation concerns (selection cursor, input mode,
//! toast). View models are computed on-demand from state snapshots; the
//! renderer never reads `AppState` directly.
//!
//! # State Components
//!
//! - **Query**: Text accumulated in the search bar
//! - **Movies**: Results of the most recent completed search
//! - **Lifecycle Flags**: `loading` and `errored`, never both set
//! - **Selection**: Cursor position within the grid, plus the movie opened
//!   in the details modal
//! - **Request Ids**: Monotonic counter pair used to discard responses of
//!   superseded searches

use std::time::Instant;

use super::modes::InputMode;
use crate::domain::Movie;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{self, MainView, UIViewModel};

/// A transient notification with its expiry deadline.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    /// Text shown in the notification surface.
    pub message: String,
    /// Instant after which the toast is dropped by `Tick` handling.
    pub expires_at: Instant,
}

/// Central application state container.
///
/// Holds all transient UI state including the query, search results,
/// lifecycle flags, selection, and mode information. Mutated by the event
/// handler in response to user input and worker responses. View models are
/// computed on-demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current search bar contents.
    ///
    /// Accumulated by `Char` events, reduced by `Backspace` events. Kept
    /// across submissions so the last query stays visible.
    pub query: String,

    /// Results of the most recently completed search.
    ///
    /// Cleared the moment a new search is submitted and replaced atomically
    /// when its response arrives. Stale responses never touch this field.
    pub movies: Vec<Movie>,

    /// Whether a search is currently in flight.
    ///
    /// Set by search submission, cleared when the matching response arrives.
    /// While set, the grid and error surfaces are suppressed.
    pub loading: bool,

    /// Whether the most recent search failed.
    ///
    /// Cleared by every new submission. Mutually exclusive with `loading`
    /// by construction.
    pub errored: bool,

    /// Movie currently opened in the details modal, if any.
    ///
    /// Independent of the search lifecycle: an in-flight search does not
    /// close the modal, and closing the modal does not disturb results.
    pub selected_movie: Option<Movie>,

    /// Zero-based cursor position within `movies`.
    ///
    /// Reset to zero whenever new results arrive. Wraps around during
    /// navigation via `move_selection_up/down()`.
    pub selected_index: usize,

    /// Current input handling mode.
    ///
    /// Determines active keybindings and which surface the footer describes.
    pub input_mode: InputMode,

    /// Transient notification, if one is active.
    pub toast: Option<Toast>,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Id of the search whose response is still wanted.
    ///
    /// Responses carrying any other id are discarded in full, including
    /// their notifications.
    pub latest_request_id: u64,

    /// Next id to hand out. Incremented on every submission.
    pub next_request_id: u64,
}

impl AppState {
    /// Creates a new application state with the given theme.
    ///
    /// Starts idle: no query, no results, neither lifecycle flag set, and
    /// the search bar focused.
    ///
    /// # Example
    ///
    /// ```
    /// use reelscout::app::AppState;
    /// use reelscout::ui::theme::Theme;
    ///
    /// let state = AppState::new(Theme::default());
    /// assert!(!state.loading);
    /// assert!(state.movies.is_empty());
    /// ```
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            query: String::new(),
            movies: vec![],
            loading: false,
            errored: false,
            selected_movie: None,
            selected_index: 0,
            input_mode: InputMode::Search,
            toast: None,
            theme,
            latest_request_id: 0,
            next_request_id: 0,
        }
    }

    /// Moves the selection cursor down one row, wrapping to the top at the
    /// end. No-op while the results list is empty.
    pub fn move_selection_down(&mut self) {
        if self.movies.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.movies.len();
    }

    /// Moves the selection cursor up one row, wrapping to the bottom at the
    /// start. No-op while the results list is empty.
    pub fn move_selection_up(&mut self) {
        if self.movies.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.movies.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the movie under the grid cursor, if any.
    #[must_use]
    pub fn selected_result(&self) -> Option<&Movie> {
        self.movies.get(self.selected_index)
    }

    /// Computes a renderable UI view model from current state and terminal
    /// dimensions.
    ///
    /// The main area resolves to exactly one of four surfaces in priority
    /// order: loading indicator, error banner, results grid, empty state.
    /// The search bar, header, and footer are always present; the modal and
    /// toast overlay the base layout when active.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    ///
    /// # Windowing
    ///
    /// The grid shows a window of the results centered on the cursor,
    /// shifted near the start and end of the list to keep the window full.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let main_view = viewmodel::project(self.loading, self.errored, self.movies.len());

        let (display_items, selected_display_index) = if main_view == MainView::Grid {
            self.compute_grid_window(rows)
        } else {
            (vec![], 0)
        };

        let empty_state = if main_view == MainView::Empty {
            Some(self.compute_empty_state())
        } else {
            None
        };

        UIViewModel {
            main_view,
            display_items,
            selected_index: selected_display_index,
            header: self.compute_header(),
            footer: self.compute_footer(),
            search_bar: self.compute_search_bar(),
            empty_state,
            modal: self.selected_movie.as_ref().map(|m| Self::compute_modal(m, cols)),
            toast: self.toast.as_ref().map(|t| viewmodel::ToastInfo {
                message: t.message.clone(),
            }),
        }
    }

    /// Computes the visible slice of the results grid and the cursor's
    /// position within it.
    fn compute_grid_window(&self, rows: usize) -> (Vec<viewmodel::DisplayItem>, usize) {
        let available_rows = Self::calculate_available_rows(rows).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.movies.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && self.movies.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let display_items: Vec<viewmodel::DisplayItem> = self.movies[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, movie)| {
                let absolute_idx = visible_start + relative_idx;
                viewmodel::DisplayItem {
                    title: Self::truncate_title(&movie.title),
                    year: movie.release_year(),
                    rating: movie.rating_label(),
                    is_selected: absolute_idx == self.selected_index,
                }
            })
            .collect();

        (display_items, self.selected_index.saturating_sub(visible_start))
    }

    /// Computes the centered message shown when the grid has nothing to
    /// display.
    ///
    /// Before the first search this is an invitation to type; after a
    /// search that returned nothing it mirrors the toast in place.
    fn compute_empty_state(&self) -> viewmodel::EmptyStateInfo {
        if self.latest_request_id == 0 {
            viewmodel::EmptyStateInfo {
                message: "Search for a movie".to_string(),
                hint: "Type a title and press Enter".to_string(),
            }
        } else {
            viewmodel::EmptyStateInfo {
                message: "No movies found".to_string(),
                hint: "Try a different title".to_string(),
            }
        }
    }

    fn compute_header(&self) -> viewmodel::HeaderInfo {
        let title = if self.movies.is_empty() {
            " Reelscout ".to_string()
        } else {
            format!(" Reelscout ({}) ", self.movies.len())
        };
        viewmodel::HeaderInfo { title }
    }

    /// Computes footer keybinding hints for the current input mode, with the
    /// modal's bindings taking precedence while it is open.
    fn compute_footer(&self) -> viewmodel::FooterInfo {
        let keybindings = if self.selected_movie.is_some() {
            "ESC/q: close details".to_string()
        } else {
            match self.input_mode {
                InputMode::Search => {
                    "Enter: search  ESC: results  Type a movie title".to_string()
                }
                InputMode::Results => {
                    "j/k: navigate  Enter: details  /: search  q: quit".to_string()
                }
            }
        };
        viewmodel::FooterInfo { keybindings }
    }

    fn compute_search_bar(&self) -> viewmodel::SearchBarInfo {
        viewmodel::SearchBarInfo {
            query: self.query.clone(),
            focused: self.input_mode == InputMode::Search,
        }
    }

    /// Builds the modal contents for a movie, wrapping the overview to fit
    /// the modal's inner width.
    fn compute_modal(movie: &Movie, cols: usize) -> viewmodel::ModalInfo {
        let inner_width = viewmodel::modal_inner_width(cols);
        viewmodel::ModalInfo {
            title: movie.title.clone(),
            overview_lines: crate::ui::helpers::wrap_text(&movie.overview, inner_width),
            release_date: movie.release_date.clone(),
            rating: movie.rating_label(),
            image_url: movie.backdrop_url().or_else(|| movie.poster_url()),
        }
    }

    /// Rows left for the grid after the header, search bar, column header,
    /// footer, and surrounding borders.
    const fn calculate_available_rows(total_rows: usize) -> usize {
        total_rows.saturating_sub(10)
    }

    fn truncate_title(title: &str) -> String {
        const MAX_TITLE_CHARS: usize = 45;
        if title.chars().count() > MAX_TITLE_CHARS {
            let kept: String = title.chars().take(MAX_TITLE_CHARS - 3).collect();
            format!("{kept}...")
        } else {
            title.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            overview: "An overview.".to_string(),
            release_date: "1999-03-31".to_string(),
            vote_average: 8.2,
            backdrop_path: Some("/backdrop.jpg".to_string()),
            poster_path: Some("/poster.jpg".to_string()),
        }
    }

    fn state_with_movies(count: usize) -> AppState {
        let mut state = AppState::new(Theme::default());
        state.movies = (0..count as u64).map(|i| movie(i, &format!("Movie {i}"))).collect();
        state
    }

    #[test]
    fn selection_wraps_in_both_directions() {
        let mut state = state_with_movies(3);

        state.move_selection_up();
        assert_eq!(state.selected_index, 2);

        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
        state.move_selection_down();
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn selection_is_a_noop_without_results() {
        let mut state = AppState::new(Theme::default());
        state.move_selection_down();
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);
        assert!(state.selected_result().is_none());
    }

    #[test]
    fn viewmodel_picks_exactly_one_main_view() {
        let mut state = state_with_movies(2);
        assert_eq!(state.compute_viewmodel(24, 80).main_view, MainView::Grid);

        state.loading = true;
        assert_eq!(state.compute_viewmodel(24, 80).main_view, MainView::Loading);

        state.loading = false;
        state.errored = true;
        state.movies.clear();
        assert_eq!(state.compute_viewmodel(24, 80).main_view, MainView::Error);

        state.errored = false;
        assert_eq!(state.compute_viewmodel(24, 80).main_view, MainView::Empty);
    }

    #[test]
    fn grid_window_centers_on_the_cursor() {
        let mut state = state_with_movies(50);
        state.selected_index = 25;

        // 24 rows leaves 14 for the grid.
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items.len(), 14);
        assert!(vm.display_items[vm.selected_index].is_selected);
        assert_eq!(vm.display_items[vm.selected_index].title, "Movie 25");
    }

    #[test]
    fn grid_window_stays_full_near_the_end() {
        let mut state = state_with_movies(50);
        state.selected_index = 49;

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items.len(), 14);
        assert_eq!(vm.display_items.last().map(|i| i.title.as_str()), Some("Movie 49"));
    }

    #[test]
    fn empty_state_changes_after_the_first_search() {
        let mut state = AppState::new(Theme::default());

        let before = state.compute_viewmodel(24, 80);
        assert_eq!(before.empty_state.map(|e| e.message), Some("Search for a movie".to_string()));

        state.latest_request_id = 1;
        let after = state.compute_viewmodel(24, 80);
        assert_eq!(after.empty_state.map(|e| e.message), Some("No movies found".to_string()));
    }

    #[test]
    fn modal_appears_only_while_a_movie_is_selected() {
        let mut state = state_with_movies(1);
        assert!(state.compute_viewmodel(24, 80).modal.is_none());

        state.selected_movie = Some(state.movies[0].clone());
        let modal = state.compute_viewmodel(24, 80).modal.expect("modal");
        assert_eq!(modal.title, "Movie 0");
        assert_eq!(modal.rating, "8.2/10");
        assert_eq!(
            modal.image_url.as_deref(),
            Some("https://image.tmdb.org/t/p/original/backdrop.jpg")
        );
    }

    #[test]
    fn long_titles_are_truncated_with_an_ellipsis() {
        let mut state = state_with_movies(1);
        state.movies[0].title = "x".repeat(60);

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_items[0].title.len(), 45);
        assert!(vm.display_items[0].title.ends_with("..."));
    }
}
