//! Common test utilities and helpers for integration tests.
//!
//! - Sample documents and scratch projects
//! - A mock data lake matching the sample `dataConfig`

pub mod fixtures;

pub use fixtures::*;
