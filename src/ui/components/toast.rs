//! Toast notification component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ToastInfo;

/// Gap between the toast and the right edge of the terminal.
const RIGHT_MARGIN: usize = 2;

/// Renders the toast in the top-right corner of the terminal.
///
/// Drawn last so it overlays everything, including the modal. Expiry is
/// handled by the event loop's tick handling, not here.
pub fn render_toast(toast: &ToastInfo, theme: &Theme, cols: usize) {
    let text = format!(" {} ", toast.message);
    let text_len = text.chars().count();
    let col = cols.saturating_sub(text_len + RIGHT_MARGIN).max(1);

    position_cursor(1, col);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.toast_fg));
    print!("{}", Theme::bg(&theme.colors.toast_bg));
    print!("{text}");
    print!("{}", Theme::reset());
}
