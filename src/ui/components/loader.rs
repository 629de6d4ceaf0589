//! Loading indicator component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

const LOADING_MESSAGE: &str = "Searching...";

/// Renders the centered loading indicator within the main display area.
///
/// Shown while a search is in flight, replacing the grid entirely.
pub fn render_loader(theme: &Theme, area_start: usize, area_rows: usize, cols: usize) {
    let row = area_start + area_rows / 3;

    let msg_len = LOADING_MESSAGE.len();
    let padding = (cols.saturating_sub(msg_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.loading_fg));
    print!("{}", " ".repeat(padding));
    print!("{LOADING_MESSAGE}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + msg_len)));
    print!("{}", Theme::reset());
}
