//! Error handling
//!
//! Defines error types and status-code mapping for the station.

pub mod types;

pub use types::*;
