//! String formatting utilities for UI rendering.

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// One-line summary of note content: first non-blank line, truncated.
///
/// Content spanning several lines gets an ellipsis even when the first line
/// fits.
pub fn summary(content: &str, max_len: usize) -> String {
    let mut lines = content.lines().map(str::trim).filter(|l| !l.is_empty());
    let first = lines.next().unwrap_or("");
    if lines.next().is_none() || max_len <= 3 {
        return truncate(first, max_len);
    }
    let head: String = first.chars().take(max_len - 3).collect();
    format!("{}...", head)
}
