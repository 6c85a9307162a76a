//! Time entry handling

pub mod ports;
pub mod service;

pub use service::EntryService;
