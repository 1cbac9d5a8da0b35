//! Free-text input handling shared by the service and the state machine.

/// Longest display name kept for either player.
pub const MAX_NAME_CHARS: usize = 40;
/// Longest edition name accepted from a client.
pub const MAX_EDITION_CHARS: usize = 60;
/// Longest answer or guess kept.
pub const MAX_ENTRY_CHARS: usize = 80;

/// Trim surrounding whitespace and cap the result at `max_chars` characters.
///
/// Truncation counts `char`s, never bytes, so multi-byte input cannot be
/// split mid-codepoint.
pub fn clean(raw: &str, max_chars: usize) -> String {
    let trimmed = raw.trim();
    match trimmed.char_indices().nth(max_chars) {
        Some((cut, _)) => trimmed[..cut].trim_end().to_string(),
        None => trimmed.to_string(),
    }
}

pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// Guess matching: trimmed, case-insensitive equality. Blank never matches.
pub fn entries_match(answer: &str, guess: &str) -> bool {
    let answer = answer.trim();
    let guess = guess.trim();
    !answer.is_empty() && answer.to_lowercase() == guess.to_lowercase()
}
