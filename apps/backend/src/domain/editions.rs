//! Built-in question sets, keyed by edition name.
//!
//! Lookup is trimmed and case-insensitive; callers get back the canonical
//! edition name alongside the prompts so responses echo a stable spelling.

/// Edition used when a client does not ask for one.
pub const DEFAULT_EDITION: &str = "Moyosola";

/// A named, fixed, ordered list of prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edition {
    pub name: &'static str,
    pub questions: &'static [&'static str],
}

impl Edition {
    /// Owned copy of the prompts, ready to be stored in a session.
    pub fn question_list(&self) -> Vec<String> {
        self.questions.iter().map(|q| q.to_string()).collect()
    }
}

const MOYOSOLA: &[&str] = &[
    "Your favorite color?",
    "Favorite food?",
    "Dream vacation spot?",
    "Morning or night person?",
    "Favorite music artist?",
    "Cats or dogs?",
    "Go-to comfort movie?",
    "Sweet or spicy?",
    "Ideal weekend activity?",
    "One word that describes you?",
];

const CLASSIC: &[&str] = &[
    "City you were born in?",
    "First concert you went to?",
    "Favorite season?",
    "Coffee or tea?",
    "Most-used emoji?",
    "Childhood nickname?",
    "Favorite board game?",
];

static EDITIONS: &[Edition] = &[
    Edition {
        name: DEFAULT_EDITION,
        questions: MOYOSOLA,
    },
    Edition {
        name: "Classic",
        questions: CLASSIC,
    },
];

/// Every edition this build knows about.
pub fn all() -> &'static [Edition] {
    EDITIONS
}

/// Find an edition by name, ignoring case and surrounding whitespace.
pub fn find(name: &str) -> Option<&'static Edition> {
    let wanted = name.trim();
    EDITIONS
        .iter()
        .find(|edition| edition.name.eq_ignore_ascii_case(wanted))
}
