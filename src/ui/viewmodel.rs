//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application
//! state, following the MVVM pattern. View models are optimized for
//! rendering and contain pre-computed display information like wrapped
//! overview text and selection state.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed
//! by the renderer. They contain no business logic, only display-ready
//! data. The [`project`] function decides which of the four mutually
//! exclusive main surfaces fills the area between the search bar and the
//! footer.

/// The four mutually exclusive states of the main display area.
///
/// Resolution order: an in-flight search wins over everything, a failed
/// search wins over results, and results win over the empty state. The
/// renderer matches on this once instead of re-deriving the precedence
/// from flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainView {
    /// A search is in flight; show the loading indicator.
    Loading,
    /// The most recent search failed; show the error banner.
    Error,
    /// Results are available; show the grid.
    Grid,
    /// Nothing to show; show the empty state message.
    Empty,
}

/// Projects the lifecycle fields onto a single main view.
///
/// # Example
///
/// ```
/// use reelscout::ui::viewmodel::{project, MainView};
///
/// assert_eq!(project(true, false, 5), MainView::Loading);
/// assert_eq!(project(false, true, 0), MainView::Error);
/// assert_eq!(project(false, false, 5), MainView::Grid);
/// assert_eq!(project(false, false, 0), MainView::Empty);
/// ```
#[must_use]
pub const fn project(loading: bool, errored: bool, result_count: usize) -> MainView {
    if loading {
        MainView::Loading
    } else if errored {
        MainView::Error
    } else if result_count > 0 {
        MainView::Grid
    } else {
        MainView::Empty
    }
}

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render the UI. The view model
/// is computed from `AppState` and includes pre-processed display items,
/// selection state, and the overlay elements (modal, toast) when active.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Which surface fills the main display area.
    pub main_view: MainView,

    /// Rows to display in the results grid. Empty unless `main_view` is
    /// [`MainView::Grid`].
    pub display_items: Vec<DisplayItem>,

    /// Index of the currently selected item within `display_items`.
    pub selected_index: usize,

    /// Header information (title, result count).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Search bar state. Always rendered.
    pub search_bar: SearchBarInfo,

    /// Empty state message, present when `main_view` is [`MainView::Empty`].
    pub empty_state: Option<EmptyStateInfo>,

    /// Details modal contents, present while a movie is selected.
    pub modal: Option<ModalInfo>,

    /// Active notification, if any.
    pub toast: Option<ToastInfo>,
}

/// Display information for a single row in the results grid.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Movie title, truncated to fit the title column.
    pub title: String,

    /// Four-digit release year, or a dash placeholder.
    pub year: String,

    /// Formatted rating (e.g., "8.2/10").
    pub rating: String,

    /// Whether this row is under the cursor.
    pub is_selected: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "j/k: navigate  Enter: details").
    pub keybindings: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current query text.
    pub query: String,

    /// Whether the search bar has keyboard focus (draws the cursor).
    pub focused: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyStateInfo {
    /// Primary message (e.g., "No movies found").
    pub message: String,

    /// Secondary explanatory text.
    pub hint: String,
}

/// Details modal contents for the selected movie.
#[derive(Debug, Clone)]
pub struct ModalInfo {
    /// Movie title shown in the modal header.
    pub title: String,

    /// Overview text, pre-wrapped to the modal's inner width.
    pub overview_lines: Vec<String>,

    /// Raw release date string (e.g., "1999-03-31").
    pub release_date: String,

    /// Formatted rating (e.g., "8.2/10").
    pub rating: String,

    /// Backdrop image URL, falling back to the poster. `None` when the
    /// movie has neither.
    pub image_url: Option<String>,
}

/// Toast display information.
#[derive(Debug, Clone)]
pub struct ToastInfo {
    /// Notification text.
    pub message: String,
}

/// Inner text width of the details modal for a given terminal width.
///
/// The modal takes most of the terminal width, capped so overview text
/// stays readable on wide screens.
#[must_use]
pub fn modal_inner_width(cols: usize) -> usize {
    const MAX_INNER_WIDTH: usize = 72;
    cols.saturating_sub(12).clamp(20, MAX_INNER_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_resolves_in_priority_order() {
        // Loading beats everything else.
        assert_eq!(project(true, false, 0), MainView::Loading);
        assert_eq!(project(true, true, 3), MainView::Loading);
        // Error beats results.
        assert_eq!(project(false, true, 3), MainView::Error);
        // Results beat the empty state.
        assert_eq!(project(false, false, 1), MainView::Grid);
        assert_eq!(project(false, false, 0), MainView::Empty);
    }

    #[test]
    fn modal_width_is_clamped() {
        assert_eq!(modal_inner_width(200), 72);
        assert_eq!(modal_inner_width(80), 68);
        assert_eq!(modal_inner_width(10), 20);
    }
}
