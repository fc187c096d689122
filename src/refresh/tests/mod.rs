//! Unit tests for the refresh module.
#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

mod service_tests;
