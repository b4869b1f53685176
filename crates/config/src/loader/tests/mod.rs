//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test builder defaults and override precedence.
//! - Test environment variable resolution against the live process environment.
//! - Test `.env` loading and the `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - Snapshot-based resolution logic (tested in env.rs).
//! - Write-once storage (tested in registry.rs).
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
