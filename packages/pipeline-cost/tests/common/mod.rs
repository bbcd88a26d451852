//! Common test utilities for pipeline-cost
//!
//! Shared fixtures and builders for integration and property tests.

#![allow(dead_code)]

mod builders;
mod fixtures;

pub use builders::*;
pub use fixtures::*;
