//! Session store keyed by join code.
//!
//! The outer `DashMap` only guards membership; each session sits behind its
//! own mutex. Lookups clone the `Arc` out of the map before locking, so a
//! slow transition on one session never holds a map shard and never blocks
//! another session.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::session::Session;
use crate::domain::transitions;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::utils::join_code::{generate_join_code, normalize_join_code, DEFAULT_CODE_LENGTH};

/// Upper bound on fresh codes tried before giving up on `create`.
const MAX_CODE_ATTEMPTS: usize = 32;

#[derive(Debug)]
struct SessionSlot {
    session: Session,
    last_touched: Instant,
    /// Set by `evict_idle` under the slot lock. A caller that cloned the
    /// handle before eviction must treat the session as gone.
    evicted: bool,
}

/// Concurrency-safe registry mapping join code to session.
///
/// Construct one per process (or per test) and share it behind an `Arc`.
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<String, Arc<Mutex<SessionSlot>>>,
    code_length: usize,
}

impl SessionStore {
    pub fn new(code_length: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            code_length,
        }
    }

    /// Allocate a fresh code and insert an opened session for it.
    ///
    /// The returned session is already in `p1_answer`.
    pub fn create(
        &self,
        edition: &str,
        owner_name: &str,
        questions: Vec<String>,
    ) -> Result<Session, DomainError> {
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = generate_join_code(self.code_length);
            match self.sessions.entry(code) {
                Entry::Occupied(occupied) => {
                    warn!(code = %occupied.key(), attempt, "join code collision, retrying");
                }
                Entry::Vacant(vacant) => {
                    let mut session = Session::new(
                        vacant.key().clone(),
                        edition.to_string(),
                        owner_name.to_string(),
                        questions,
                        Uuid::new_v4().simple().to_string(),
                    );
                    transitions::open(&mut session)?;

                    let snapshot = session.clone();
                    vacant.insert(Arc::new(Mutex::new(SessionSlot {
                        session,
                        last_touched: Instant::now(),
                        evicted: false,
                    })));
                    return Ok(snapshot);
                }
            }
        }

        Err(DomainError::infra(
            InfraErrorKind::CodeSpaceExhausted,
            format!("No free join code after {MAX_CODE_ATTEMPTS} attempts"),
        ))
    }

    /// Read-only snapshot of the session for `code` (trimmed, case-insensitive).
    pub fn get(&self, code: &str) -> Result<Session, DomainError> {
        let slot = self.slot(code)?;
        let guard = slot.lock();
        if guard.evicted {
            return Err(DomainError::game_not_found(&guard.session.code));
        }
        Ok(guard.session.clone())
    }

    /// Apply `f` to the session for `code` under that session's lock.
    ///
    /// `f` works on a draft copy that is committed only when it returns
    /// `Ok`, so a failed transition leaves the stored session untouched.
    /// Returns the committed snapshot together with `f`'s output.
    pub fn mutate<F, R>(&self, code: &str, f: F) -> Result<(Session, R), DomainError>
    where
        F: FnOnce(&mut Session) -> Result<R, DomainError>,
    {
        let slot = self.slot(code)?;
        Self::apply(&slot, f)
    }

    /// Run `f` against an already resolved slot. Fails with not-found when
    /// the slot was evicted between lookup and locking.
    fn apply<F, R>(slot: &Mutex<SessionSlot>, f: F) -> Result<(Session, R), DomainError>
    where
        F: FnOnce(&mut Session) -> Result<R, DomainError>,
    {
        let mut guard = slot.lock();
        if guard.evicted {
            return Err(DomainError::game_not_found(&guard.session.code));
        }

        let mut draft = guard.session.clone();
        let out = f(&mut draft)?;

        guard.session = draft;
        guard.last_touched = Instant::now();
        Ok((guard.session.clone(), out))
    }

    /// Drop sessions nobody has touched for longer than `max_idle`.
    ///
    /// Sessions whose lock is currently held are in use and always kept.
    /// Returns the number of sessions removed.
    pub fn evict_idle(&self, max_idle: Duration) -> usize {
        let mut removed = 0;
        self.sessions.retain(|code, slot| match slot.try_lock() {
            Some(mut s) if s.last_touched.elapsed() > max_idle => {
                s.evicted = true;
                removed += 1;
                debug!(code = %code, "evicting idle session");
                false
            }
            _ => true,
        });
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn slot(&self, code: &str) -> Result<Arc<Mutex<SessionSlot>>, DomainError> {
        let key = normalize_join_code(code);
        self.sessions
            .get(&key)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| DomainError::game_not_found(&key))
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}
