//! Results grid component renderer.
//!
//! This module renders the search results as a three-column table with
//! TITLE, YEAR, and RATING columns, with full-row selection highlighting.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Fixed width of the TITLE column.
const TITLE_COLUMN_WIDTH: usize = 48;

/// Fixed width of the YEAR column.
const YEAR_COLUMN_WIDTH: usize = 6;

/// Renders the grid column headers at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_grid_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:<TITLE_COLUMN_WIDTH$} {:<YEAR_COLUMN_WIDTH$} {:<}",
        "TITLE", "YEAR", "RATING"
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all grid rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_grid_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_grid_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single grid row.
///
/// The row is padded to fill the entire terminal width so the selection
/// background covers the whole line. The rating column keeps its accent
/// color on unselected rows only.
fn render_grid_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!("{:<TITLE_COLUMN_WIDTH$}", item.title);
    print!(" {:<YEAR_COLUMN_WIDTH$}", item.year);

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.rating_fg));
    }
    print!(" {}", item.rating);

    let line_len = TITLE_COLUMN_WIDTH + 1 + YEAR_COLUMN_WIDTH + 1 + item.rating.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
