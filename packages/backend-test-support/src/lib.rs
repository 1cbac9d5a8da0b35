//! Test support utilities for the KnowMe backend.
//!
//! Shared by the backend's integration test binaries: one-time logging
//! initialization and assertions for the Problem Details error contract.

pub mod logging;
pub mod problem_details;
