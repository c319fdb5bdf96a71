//! Test support utilities for the scorekeeper integration tests.

pub mod logging;
