//! External service integrations

pub mod notion;
