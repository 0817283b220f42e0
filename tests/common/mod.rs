//! Shared test infrastructure

pub mod builders;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing for test output. Safe to call from multiple tests.
#[allow(dead_code)]
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive("treelist=debug".parse().unwrap()),
            )
            .with_test_writer()
            .try_init();
    });
}
