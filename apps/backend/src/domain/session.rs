use serde::Serialize;
use time::OffsetDateTime;

use crate::errors::domain::DomainError;

/// Session progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Phase {
    /// Session allocated but not yet opened for answers.
    #[serde(rename = "created")]
    Created,
    /// Player 1 answers prompts in order; `current_index` is the next prompt.
    #[serde(rename = "p1_answer")]
    P1Answer,
    /// Player 2 guesses Player 1's answers; `current_index` is the next guess.
    #[serde(rename = "p2_guess")]
    P2Guess,
    /// Playthrough finished. Only a reset leaves this phase.
    #[serde(rename = "done")]
    Done,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::P1Answer => "p1_answer",
            Self::P2Guess => "p2_guess",
            Self::Done => "done",
        }
    }
}

/// Who is looking at a session, for answer redaction.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Viewer {
    /// Caller presented the session's owner token.
    Owner,
    /// Anyone else, including Player 2.
    Other,
}

/// One game instance, shared by a Player 1 / Player 2 pair.
#[derive(Debug, Clone)]
pub struct Session {
    /// Normalized (upper-case) join code.
    pub code: String,
    /// Canonical name of the edition the questions came from.
    pub edition: String,
    pub owner_name: String,
    /// Set exactly once, by join.
    pub guest_name: Option<String>,
    pub questions: Vec<String>,
    /// Player 1's answers, one per submitted prompt.
    pub answers: Vec<String>,
    /// Player 2's guesses for the current playthrough.
    pub guesses: Vec<String>,
    pub current_index: usize,
    pub phase: Phase,
    pub score: u32,
    pub created_at: OffsetDateTime,
    /// Capability handed to the creator; proves the caller is Player 1.
    owner_token: String,
}

impl Session {
    /// A fresh session in [`Phase::Created`]. The state machine opens it.
    pub fn new(
        code: String,
        edition: String,
        owner_name: String,
        questions: Vec<String>,
        owner_token: String,
    ) -> Self {
        Self {
            code,
            edition,
            owner_name,
            guest_name: None,
            questions,
            answers: Vec::new(),
            guesses: Vec::new(),
            current_index: 0,
            phase: Phase::Created,
            score: 0,
            created_at: OffsetDateTime::now_utc(),
            owner_token,
        }
    }

    pub fn max_score(&self) -> u32 {
        self.questions.len() as u32
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn owner_token(&self) -> &str {
        &self.owner_token
    }

    /// Resolve the caller's role from an optional owner token.
    ///
    /// No token means [`Viewer::Other`]; a token that does not belong to this
    /// session is rejected outright rather than silently downgraded.
    pub fn viewer_for(&self, token: Option<&str>) -> Result<Viewer, DomainError> {
        match token.map(str::trim) {
            None | Some("") => Ok(Viewer::Other),
            Some(t) if t == self.owner_token => Ok(Viewer::Owner),
            Some(_) => Err(DomainError::forbidden(format!(
                "Owner token does not match game {}",
                self.code
            ))),
        }
    }
}
