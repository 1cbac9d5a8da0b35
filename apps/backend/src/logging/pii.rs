use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Owner tokens are 32 hex characters; anything hex-like of 16+ is treated as one.
static HEX_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: vetted literal
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\b[A-Fa-f0-9]{16,}\b").unwrap()
});

/// Long opaque base64-ish runs (e.g. a token pasted into a free-text field).
static BASE64_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: vetted literal
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\b[A-Za-z0-9+/]{24,}={0,2}").unwrap()
});

/// Mask token-like substrings so they never reach the logs.
pub fn redact(input: &str) -> String {
    let hex_redacted = HEX_TOKEN_REGEX.replace_all(input, "[REDACTED_TOKEN]");
    BASE64_TOKEN_REGEX
        .replace_all(&hex_redacted, "[REDACTED_TOKEN]")
        .to_string()
}

/// Display wrapper that applies [`redact`] when formatted.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}
