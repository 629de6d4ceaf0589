//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple
//! UI components: cursor positioning and greedy word wrapping for the
//! details modal.

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Wraps text into lines no wider than `width` characters.
///
/// Greedy word wrap: words are appended to the current line until the next
/// one would overflow. Words longer than the width get a line of their own
/// and are not split. Blank input produces no lines.
///
/// # Example
///
/// ```
/// use reelscout::ui::helpers::wrap_text;
///
/// let lines = wrap_text("a thief who steals corporate secrets", 12);
/// assert_eq!(lines, vec!["a thief who", "steals", "corporate", "secrets"]);
/// ```
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap_text("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn keeps_oversized_words_whole() {
        let lines = wrap_text("an extraordinarily long word", 5);
        assert_eq!(lines, vec!["an", "extraordinarily", "long", "word"]);
    }

    #[test]
    fn blank_text_produces_no_lines() {
        assert!(wrap_text("", 20).is_empty());
        assert!(wrap_text("   ", 20).is_empty());
    }

    #[test]
    fn collapses_internal_whitespace() {
        let lines = wrap_text("one   two\n three", 20);
        assert_eq!(lines, vec!["one two three"]);
    }
}
