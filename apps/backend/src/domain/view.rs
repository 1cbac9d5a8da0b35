//! Caller-facing session snapshot with answer redaction.
//!
//! Player 1's answers stay hidden from anyone without the owner token until
//! Player 2 has guessed that question, or the playthrough is done.

use serde::Serialize;
use time::format_description::well_known::Rfc3339;

use crate::domain::session::{Phase, Session, Viewer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub code: String,
    pub edition: String,
    pub created_at: String,
    pub owner_name: String,
    pub guest_name: Option<String>,
    pub phase: Phase,
    pub current_index: usize,
    pub questions: Vec<String>,
    /// One slot per submitted answer; `None` where the caller may not see it.
    pub answers: Vec<Option<String>>,
    pub answered_count: usize,
    pub guesses: Vec<String>,
    pub score: u32,
    pub max_score: u32,
}

/// Whether `viewer` may see the answer at `index` in the session's current state.
pub fn answer_revealed(session: &Session, viewer: Viewer, index: usize) -> bool {
    match (viewer, session.phase) {
        (Viewer::Owner, _) => true,
        (_, Phase::Done) => true,
        (_, Phase::P2Guess) => index < session.current_index,
        _ => false,
    }
}

/// Build the snapshot `viewer` is allowed to see.
pub fn view(session: &Session, viewer: Viewer) -> SessionView {
    let answers = session
        .answers
        .iter()
        .enumerate()
        .map(|(i, answer)| answer_revealed(session, viewer, i).then(|| answer.clone()))
        .collect();

    SessionView {
        code: session.code.clone(),
        edition: session.edition.clone(),
        created_at: session
            .created_at
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown".to_string()),
        owner_name: session.owner_name.clone(),
        guest_name: session.guest_name.clone(),
        phase: session.phase,
        current_index: session.current_index,
        questions: session.questions.clone(),
        answers,
        answered_count: session.answers.len(),
        guesses: session.guesses.clone(),
        score: session.score,
        max_score: session.max_score(),
    }
}
