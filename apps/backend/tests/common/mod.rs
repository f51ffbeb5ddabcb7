#![allow(dead_code)]

// tests/common/mod.rs
use guess_backend::domain::FixedTarget;
use guess_backend::AppState;

pub mod proptest_prelude;

// Logging is auto-installed for every test binary that includes this module.
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// State whose games always hide `target` (clamped into the requested range).
pub fn state_with_target(target: i32) -> AppState {
    AppState::with_targets(FixedTarget(target))
}
