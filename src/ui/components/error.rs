//! Error banner component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

const ERROR_MESSAGE: &str = "Something went wrong.";
const ERROR_HINT: &str = "Press Enter to retry the search";

/// Renders the centered error banner within the main display area.
///
/// Shown after a failed search, replacing the grid entirely.
pub fn render_error(theme: &Theme, area_start: usize, area_rows: usize, cols: usize) {
    let row = area_start + area_rows / 3;

    let msg_len = ERROR_MESSAGE.len();
    let padding = (cols.saturating_sub(msg_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.error_fg));
    print!("{}", " ".repeat(padding));
    print!("{ERROR_MESSAGE}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + msg_len)));
    print!("{}", Theme::reset());

    let hint_len = ERROR_HINT.len();
    let hint_padding = (cols.saturating_sub(hint_len)) / 2;

    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(hint_padding));
    print!("{ERROR_HINT}");
    print!("{}", " ".repeat(cols.saturating_sub(hint_padding + hint_len)));
    print!("{}", Theme::reset());
}
