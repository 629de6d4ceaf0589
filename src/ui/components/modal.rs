//! Details modal component renderer.
//!
//! This module renders the movie details overlay: a centered bordered box
//! drawn over the base layout, showing the title, overview, release date,
//! rating, and image location of the selected movie.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{modal_inner_width, ModalInfo};

/// Renders the details modal centered in the terminal.
///
/// Drawn after the base layout so it overlays whatever is underneath. The
/// box height tracks the wrapped overview, clamped so the modal always
/// leaves the header and footer visible. Overflowing overview lines are
/// dropped rather than scrolled.
pub fn render_modal(modal: &ModalInfo, theme: &Theme, rows: usize, cols: usize) {
    let inner_width = modal_inner_width(cols);
    let box_width = inner_width + 2;
    let left = (cols.saturating_sub(box_width)) / 2 + 1;

    // Title, blank, overview, blank, date, rating, image line.
    let wanted_rows = 6 + modal.overview_lines.len() + usize::from(modal.image_url.is_some());
    let max_inner_rows = rows.saturating_sub(6).max(5);
    let inner_rows = wanted_rows.min(max_inner_rows);
    let top = (rows.saturating_sub(inner_rows + 2)) / 2 + 1;

    let border = &theme.colors.modal_border;

    position_cursor(top, left);
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let mut lines: Vec<(String, String)> = Vec::new();
    lines.push((modal.title.clone(), format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg))));
    lines.push((String::new(), String::new()));
    for overview_line in &modal.overview_lines {
        lines.push((overview_line.clone(), Theme::fg(&theme.colors.text_normal)));
    }
    lines.push((String::new(), String::new()));
    lines.push((
        format!("Released: {}", modal.release_date),
        Theme::fg(&theme.colors.text_dim),
    ));
    lines.push((
        format!("Rating:   {}", modal.rating),
        Theme::fg(&theme.colors.rating_fg),
    ));
    if let Some(url) = &modal.image_url {
        lines.push((format!("Image:    {url}"), Theme::fg(&theme.colors.text_dim)));
    }

    for (i, (text, style)) in lines.iter().take(inner_rows).enumerate() {
        let truncated: String = text.chars().take(inner_width.saturating_sub(2)).collect();
        let text_len = truncated.chars().count();

        position_cursor(top + 1 + i, left);
        print!("{}", Theme::fg(border));
        print!("│");
        print!("{style} {truncated}");
        print!("{}", " ".repeat(inner_width.saturating_sub(text_len + 1)));
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(border));
        print!("│");
        print!("{}", Theme::reset());
    }

    position_cursor(top + 1 + inner_rows, left);
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}
