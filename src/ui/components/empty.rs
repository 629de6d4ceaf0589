//! Empty state component renderer.
//!
//! This module renders the centered message displayed when the grid has
//! nothing to show, either before the first search or after a search that
//! returned no movies.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyStateInfo;

/// Renders the empty state message within the main display area.
///
/// Displays a centered two-line message roughly a third of the way down the
/// area. The message uses the `empty_state_fg` theme color, the hint uses
/// `text_dim` with dim styling.
pub fn render_empty_state(
    empty: &EmptyStateInfo,
    theme: &Theme,
    area_start: usize,
    area_rows: usize,
    cols: usize,
) {
    let msg_row = area_start + area_rows / 3;

    let msg_len = empty.message.len();
    let msg_padding = (cols.saturating_sub(msg_len)) / 2;

    position_cursor(msg_row, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", empty.message);
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let hint_len = empty.hint.len();
    let hint_padding = (cols.saturating_sub(hint_len)) / 2;

    position_cursor(msg_row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(hint_padding));
    print!("{}", empty.hint);
    print!("{}", " ".repeat(cols.saturating_sub(hint_padding + hint_len)));
    print!("{}", Theme::reset());
}
