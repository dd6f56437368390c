//! Test support utilities for the trivia engine workspace.
//!
//! Provides unified logging initialization shared by unit tests and
//! integration tests.

pub mod logging;
