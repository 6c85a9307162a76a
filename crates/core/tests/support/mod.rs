//! Test support utilities for core integration tests
//!
//! In-memory port implementations so the entry service can be exercised
//! without a workspace API.

#![allow(dead_code)]

pub mod ports;
