//! Backend test support utilities
//!
//! Shared by the backend's unit and integration tests: one-time tracing
//! setup, Problem Details assertions and JSON body helpers.

pub mod json;
pub mod logging;
pub mod problem_details;
