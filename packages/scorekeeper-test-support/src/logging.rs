//! Logging initialization shared by every scorekeeper test binary.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

/// Level used when neither `TEST_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_TEST_FILTER: &str = "warn";

static INITIALIZED: OnceCell<()> = OnceCell::new();

fn filter_from_env() -> EnvFilter {
    ["TEST_LOG", "RUST_LOG"]
        .into_iter()
        .find_map(|key| std::env::var(key).ok())
        .map_or_else(|| EnvFilter::new(DEFAULT_TEST_FILTER), EnvFilter::new)
}

/// Install a test-writer subscriber once per binary. Safe to call repeatedly.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        fmt()
            .with_env_filter(filter_from_env())
            .with_test_writer()
            .without_time()
            .try_init()
            .ok(); // another subscriber may already be installed
    });
}
