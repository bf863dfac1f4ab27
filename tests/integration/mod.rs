//! Integration test module
//!
//! End-to-end tests against a gateway served on an ephemeral port.

pub mod common;
pub mod gateway_tests;
pub mod petpooja_tests;
