//! Roster Integration Tests
//!
//! End-to-end tests through the public facade: file loading, edits,
//! search and the session lifecycle.

mod common;

mod load_scenarios;
mod operations;
mod properties;
mod search;
mod session;
