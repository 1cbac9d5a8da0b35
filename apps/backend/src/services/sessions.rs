//! Session service: the six operations the client drives.
//!
//! Raw input is trimmed and checked here before anything is locked; the
//! state machine repeats the checks on the session itself. Every successful
//! call returns the snapshot the caller is allowed to see.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::editions;
use crate::domain::session::{Phase, Session, Viewer};
use crate::domain::text::{self, MAX_EDITION_CHARS, MAX_ENTRY_CHARS, MAX_NAME_CHARS};
use crate::domain::transitions;
use crate::domain::view::{view, SessionView};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::logging::security;
use crate::store::SessionStore;

/// What the creator gets back: the code to share and the owner token to keep.
#[derive(Debug, Clone)]
pub struct CreatedGame {
    pub code: String,
    pub owner_token: String,
    pub game: SessionView,
}

/// A scored guess together with the snapshot after it.
#[derive(Debug, Clone)]
pub struct GuessResult {
    pub game: SessionView,
    pub index: usize,
    pub matched: bool,
}

/// Façade over the session store and the state machine.
#[derive(Debug, Clone)]
pub struct SessionService {
    store: Arc<SessionStore>,
    default_edition: String,
}

impl SessionService {
    pub fn new(store: Arc<SessionStore>, default_edition: impl Into<String>) -> Self {
        Self {
            store,
            default_edition: default_edition.into(),
        }
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.store.len()
    }

    /// Player 1 opens a new session for an edition (the default when `None`).
    pub fn create_game(
        &self,
        owner_name: &str,
        edition: Option<&str>,
    ) -> Result<CreatedGame, DomainError> {
        let owner_name = require_text(owner_name, "ownerName", MAX_NAME_CHARS)?;
        let requested = edition
            .map(|e| text::clean(e, MAX_EDITION_CHARS))
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| self.default_edition.clone());

        let edition = editions::find(&requested).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::UnknownEdition,
                format!("No question set for edition '{requested}'"),
            )
        })?;

        let session = self
            .store
            .create(edition.name, &owner_name, edition.question_list())?;

        info!(
            code = %session.code,
            edition = edition.name,
            questions = session.question_count(),
            "game created"
        );

        Ok(CreatedGame {
            code: session.code.clone(),
            owner_token: session.owner_token().to_string(),
            game: view(&session, Viewer::Owner),
        })
    }

    /// Player 2 takes the guest seat. Does not change the phase.
    pub fn join_game(
        &self,
        code: &str,
        name: &str,
        owner_token: Option<&str>,
    ) -> Result<SessionView, DomainError> {
        let name = require_text(name, "name", MAX_NAME_CHARS)?;

        let (session, viewer) = self.store.mutate(code, |session| {
            let viewer = resolve_viewer(session, owner_token)?;
            transitions::join(session, &name)?;
            Ok(viewer)
        })?;

        info!(code = %session.code, "second player joined");
        Ok(view(&session, viewer))
    }

    /// Current snapshot; never modifies anything.
    pub fn get_state(
        &self,
        code: &str,
        owner_token: Option<&str>,
    ) -> Result<SessionView, DomainError> {
        let session = self.store.get(code)?;
        let viewer = resolve_viewer(&session, owner_token)?;
        Ok(view(&session, viewer))
    }

    /// Player 1 answers the current prompt.
    pub fn submit_answer(
        &self,
        code: &str,
        answer: &str,
        owner_token: Option<&str>,
    ) -> Result<SessionView, DomainError> {
        let answer = require_text(answer, "answer", MAX_ENTRY_CHARS)?;

        let (session, (viewer, index)) = self.store.mutate(code, |session| {
            let viewer = resolve_viewer(session, owner_token)?;
            let index = transitions::submit_answer(session, &answer)?;
            Ok((viewer, index))
        })?;

        debug!(code = %session.code, index, phase = session.phase.as_str(), "answer recorded");
        Ok(view(&session, viewer))
    }

    /// Player 2 guesses the answer at the current index.
    pub fn submit_guess(
        &self,
        code: &str,
        guess: &str,
        owner_token: Option<&str>,
    ) -> Result<GuessResult, DomainError> {
        let guess = require_text(guess, "guess", MAX_ENTRY_CHARS)?;

        let (session, (viewer, outcome)) = self.store.mutate(code, |session| {
            let viewer = resolve_viewer(session, owner_token)?;
            let outcome = transitions::submit_guess(session, &guess)?;
            Ok((viewer, outcome))
        })?;

        debug!(
            code = %session.code,
            index = outcome.index,
            matched = outcome.matched,
            "guess scored"
        );
        if session.phase == Phase::Done {
            info!(
                code = %session.code,
                score = session.score,
                max_score = session.max_score(),
                "playthrough finished"
            );
        }

        Ok(GuessResult {
            game: view(&session, viewer),
            index: outcome.index,
            matched: outcome.matched,
        })
    }

    /// Replay a finished game against the same answers.
    pub fn reset_game(
        &self,
        code: &str,
        owner_token: Option<&str>,
    ) -> Result<SessionView, DomainError> {
        let (session, viewer) = self.store.mutate(code, |session| {
            let viewer = resolve_viewer(session, owner_token)?;
            transitions::reset(session)?;
            Ok(viewer)
        })?;

        info!(code = %session.code, "game reset for replay");
        Ok(view(&session, viewer))
    }

    /// Raw snapshot for internal callers that need fields the view hides.
    pub fn session(&self, code: &str) -> Result<Session, DomainError> {
        self.store.get(code)
    }
}

/// Owner-token check with a security log line on mismatch.
fn resolve_viewer(session: &Session, owner_token: Option<&str>) -> Result<Viewer, DomainError> {
    session.viewer_for(owner_token).inspect_err(|_| {
        security::owner_token_rejected(&session.code, owner_token.unwrap_or_default());
    })
}

fn require_text(raw: &str, field: &str, max_chars: usize) -> Result<String, DomainError> {
    let cleaned = text::clean(raw, max_chars);
    if cleaned.is_empty() {
        return Err(DomainError::empty_input(field));
    }
    Ok(cleaned)
}
