//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with result count
//! - [`footer`]: Help text and keybinding hints
//! - [`search`]: Search input box (border, query text, cursor)
//! - [`grid`]: Results table with columns (TITLE, YEAR, RATING)
//! - [`loader`]: Centered in-flight search indicator
//! - [`error`]: Centered failure banner
//! - [`empty`]: Centered empty state message
//! - [`modal`]: Movie details overlay
//! - [`toast`]: Transient top-right notification
//!
//! # Layout
//!
//! [`render_layout`] draws the base layout and main surface; the modal and
//! toast overlays are drawn afterwards by the top-level renderer.

mod empty;
mod error;
mod footer;
mod grid;
mod header;
mod loader;
mod modal;
mod search;
mod toast;

pub use modal::render_modal;
pub use toast::render_toast;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{MainView, UIViewModel};

use empty::render_empty_state;
use error::render_error;
use footer::render_footer;
use grid::{render_grid_headers, render_grid_rows};
use header::render_header;
use loader::render_loader;
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/search bar, main area/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the base layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Main area: loader | error banner | grid | empty state]
/// [Border]
/// [Footer]
/// ```
///
/// The main area fills everything between the search bar and the bottom
/// border; which surface occupies it is already decided by the view
/// model's `main_view`.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);
    let area_start = current_row;
    let area_rows = border_row.saturating_sub(area_start);

    match vm.main_view {
        MainView::Loading => render_loader(theme, area_start, area_rows, cols),
        MainView::Error => render_error(theme, area_start, area_rows, cols),
        MainView::Grid => {
            let headers_row = render_grid_headers(area_start, theme);
            render_grid_rows(headers_row, &vm.display_items, theme, cols);
        }
        MainView::Empty => {
            if let Some(empty) = &vm.empty_state {
                render_empty_state(empty, theme, area_start, area_rows, cols);
            }
        }
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
