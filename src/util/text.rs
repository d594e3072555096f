//! Text helpers for card previews.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Shorten `text` to at most `max_chars` characters, appending an ellipsis
/// when anything was cut. Counts characters, not bytes, so multi-byte
/// content never splits mid-character.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}
