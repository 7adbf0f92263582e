//! Shared fixtures for tenant filter tests.
//!
//! - [`collections`] - Collection definitions used across tests
//! - [`headers`] - Request header builders

// Each test binary uses a different subset of the fixtures
#![allow(dead_code)]

pub mod collections;
pub mod headers;
