//! Error handling module
//!
//! Defines the hype error taxonomy with appropriate exit codes

pub mod types;

pub use types::*;
