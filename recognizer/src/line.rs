//! Line selection: every query considers exactly one line of the input.

/// Returns the last line of `text` (the substring after the last `\n`, or all of `text` if it
/// contains no newline). A trailing `\r` is left in place; callers that care about it strip it
/// themselves (the scanner treats `\r` as an ordinary, non-space character).
pub fn last_line(text: &str) -> &str {
    match text.rfind('\n') {
        Some(idx) => &text[idx + 1..],
        None => text,
    }
}

/// Returns the zero-based `index`-th line of `text`, or `None` if `index` is out of range.
pub fn select_line(text: &str, index: usize) -> Option<&str> {
    text.split('\n').nth(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_line_no_newline() {
        assert_eq!(last_line("hello"), "hello");
    }

    #[test]
    fn last_line_with_newlines() {
        assert_eq!(last_line("a\nb\nc"), "c");
        assert_eq!(last_line("a\n"), "");
    }

    #[test]
    fn select_line_in_range() {
        assert_eq!(select_line("a\nb\nc", 0), Some("a"));
        assert_eq!(select_line("a\nb\nc", 2), Some("c"));
    }

    #[test]
    fn select_line_out_of_range() {
        assert_eq!(select_line("a\nb", 5), None);
    }
}
