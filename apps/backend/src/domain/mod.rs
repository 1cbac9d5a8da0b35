//! Domain layer: session model, question sets and the phase state machine.
//!
//! Everything here is pure and synchronous; concurrency lives in the store.

pub mod editions;
pub mod session;
pub mod text;
pub mod transitions;
pub mod view;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_transitions;

// Re-exports for ergonomics
pub use editions::{Edition, DEFAULT_EDITION};
pub use session::{Phase, Session, Viewer};
pub use transitions::GuessOutcome;
pub use view::SessionView;
