#![cfg(test)]

//! Unit-test logging, shared with the integration test binaries.
//!
//! ```bash
//! TEST_LOG=debug cargo test -p scorekeeper engine
//! ```

pub use scorekeeper_test_support::logging::init;
