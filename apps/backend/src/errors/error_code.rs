//! Error codes for the KnowMe backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the KnowMe backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Access
    /// Owner token presented but does not belong to the session
    InvalidOwnerToken,

    // Request Validation
    /// Blank answer, guess, or name
    EmptyInput,
    /// Edition has no question set
    UnknownEdition,
    /// Operation is not legal in the session's current phase
    PhaseMismatch,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// No live session for the given code
    GameNotFound,

    // Business Logic Conflicts
    /// Player 2 has already joined the session
    AlreadyJoined,
    /// Guessing requires Player 2 to have joined
    NotJoined,

    // System Errors
    /// Could not allocate an unused session code
    CodeSpaceExhausted,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidOwnerToken => "INVALID_OWNER_TOKEN",

            Self::EmptyInput => "EMPTY_INPUT",
            Self::UnknownEdition => "UNKNOWN_EDITION",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",

            Self::AlreadyJoined => "ALREADY_JOINED",
            Self::NotJoined => "NOT_JOINED",

            Self::CodeSpaceExhausted => "CODE_SPACE_EXHAUSTED",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
