//! Property-based tests using proptest
//!
//! Invariants of the synthesized responses and configuration parsing.

pub mod config_tests;
pub mod range_tests;
