//! Phase transitions and scoring for a single session.
//!
//! Every function validates fully before touching the session, so an `Err`
//! always leaves it exactly as it was.

use crate::domain::session::{Phase, Session};
use crate::domain::text;
use crate::errors::domain::{ConflictKind, DomainError};

/// Result of a scored guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    /// Question index the guess was scored against.
    pub index: usize,
    pub matched: bool,
}

/// `created -> p1_answer`. Runs once, as part of session creation.
pub fn open(session: &mut Session) -> Result<(), DomainError> {
    require_phase(session, Phase::Created)?;
    if session.questions.is_empty() {
        return Err(DomainError::empty_input("question set"));
    }
    session.phase = Phase::P1Answer;
    session.current_index = 0;
    Ok(())
}

/// Player 2 takes the guest seat. Legal in any phase, exactly once.
pub fn join(session: &mut Session, name: &str) -> Result<(), DomainError> {
    if session.guest_name.is_some() {
        return Err(DomainError::conflict(
            ConflictKind::AlreadyJoined,
            format!("Game {} already has a second player", session.code),
        ));
    }
    if text::is_blank(name) {
        return Err(DomainError::empty_input("name"));
    }
    session.guest_name = Some(name.trim().to_string());
    Ok(())
}

/// Record Player 1's answer for the current prompt; returns its index.
pub fn submit_answer(session: &mut Session, answer: &str) -> Result<usize, DomainError> {
    require_phase(session, Phase::P1Answer)?;
    if text::is_blank(answer) {
        return Err(DomainError::empty_input("answer"));
    }

    let index = session.current_index;
    session.answers.push(answer.trim().to_string());
    session.current_index += 1;

    if session.current_index == session.question_count() {
        session.phase = Phase::P2Guess;
        session.current_index = 0;
    }
    Ok(index)
}

/// Score Player 2's guess against the answer at the current index.
pub fn submit_guess(session: &mut Session, guess: &str) -> Result<GuessOutcome, DomainError> {
    require_phase(session, Phase::P2Guess)?;
    if session.guest_name.is_none() {
        return Err(DomainError::conflict(
            ConflictKind::NotJoined,
            format!("Game {} has no second player yet", session.code),
        ));
    }
    if text::is_blank(guess) {
        return Err(DomainError::empty_input("guess"));
    }

    let index = session.current_index;
    let matched = session
        .answers
        .get(index)
        .is_some_and(|answer| text::entries_match(answer, guess));

    if matched {
        session.score += 1;
    }
    session.guesses.push(guess.trim().to_string());
    session.current_index += 1;

    if session.current_index == session.question_count() {
        session.phase = Phase::Done;
    }
    Ok(GuessOutcome { index, matched })
}

/// Replay: back to guessing the same answers from the top.
pub fn reset(session: &mut Session) -> Result<(), DomainError> {
    require_phase(session, Phase::Done)?;
    session.guesses.clear();
    session.score = 0;
    session.current_index = 0;
    session.phase = Phase::P2Guess;
    Ok(())
}

fn require_phase(session: &Session, expected: Phase) -> Result<(), DomainError> {
    if session.phase == expected {
        Ok(())
    } else {
        Err(DomainError::phase_mismatch(expected, session.phase))
    }
}
