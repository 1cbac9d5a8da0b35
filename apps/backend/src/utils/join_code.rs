//! Join code generation for sessions.
//!
//! Codes use Crockford's Base32 alphabet: digits and upper-case letters
//! without I, L, O, U, so they survive being read aloud or retyped.

use rand::Rng;

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ"; // no I, L, O, U

/// Default number of characters in a join code.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generate a random join code of `len` characters.
///
/// Uniqueness is not guaranteed here; the session store retries on collision.
///
/// # Example
/// ```
/// use knowme_backend::utils::join_code::generate_join_code;
///
/// let code = generate_join_code(6);
/// assert_eq!(code.len(), 6);
/// ```
pub fn generate_join_code(len: usize) -> String {
    let mut rng = rand::rng();

    let mut s = String::with_capacity(len);
    for _ in 0..len {
        s.push(CROCKFORD[rng.random_range(0..CROCKFORD.len())] as char);
    }
    s
}

/// Canonical form of a user-typed code: trimmed and upper-cased.
pub fn normalize_join_code(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}
