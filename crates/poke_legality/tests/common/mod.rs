//! Shared test utilities for the encounter and table tests.
//!
//! Imported by each integration test binary with `mod common;`.

pub mod fixtures;
pub mod helpers;
