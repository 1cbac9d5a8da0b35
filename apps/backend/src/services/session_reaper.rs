//! Background expiry of abandoned sessions.
//!
//! Runs outside the state machine: it only ever removes whole sessions from
//! the store, using the store's own idle bookkeeping.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use crate::store::SessionStore;

/// Spawn a task that evicts sessions idle for longer than `ttl`, checking
/// every `every`. Abort the returned handle to stop it.
pub fn spawn_session_reaper(
    store: Arc<SessionStore>,
    ttl: Duration,
    every: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let removed = store.evict_idle(ttl);
            if removed > 0 {
                info!(removed, remaining = store.len(), "expired idle sessions");
            }
        }
    })
}
