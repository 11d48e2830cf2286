//! Integration test support
//!
//! Spawns the real application in-process and drives it over HTTP.
//! No external services are required: the whole system is in-memory.

pub mod fixtures;
pub mod helpers;

pub use helpers::{assert_json, assert_status, test_config, TestServer};
