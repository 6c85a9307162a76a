//! # TimeSync Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the workspace databases
//! - The entry service that turns a time entry into log and summary writes
//!
//! ## Architecture Principles
//! - Only depends on `timesync-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits

pub mod entries;

pub use entries::ports::{ActivityLogPort, Clock, SummaryPort, SystemClock};
pub use entries::EntryService;
