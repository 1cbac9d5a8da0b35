//! Web boundary helpers that are not middleware themselves.

pub mod trace_ctx;
