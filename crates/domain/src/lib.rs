//! # TimeSync Domain
//!
//! Business domain types and models for TimeSync.
//!
//! This crate contains:
//! - The inbound [`TimeEntry`] and the values derived from it
//! - Log and summary record shapes written to the workspace
//! - Stage outcome types reported by the entry service
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other TimeSync crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
