//! Argument parser boundary
//!
//! The dispatch loop declares one argument per registered command and then
//! asks the parser, once, for the resolved values. This module provides the
//! trait the dispatch loop depends on, allowing the real clap-backed parser
//! to be swapped for an in-memory mock in tests.

use crate::command::types::ArgType;
use crate::error::HypeError;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

pub mod help;
pub mod mock;
#[cfg(feature = "clap")]
pub mod real;

pub use help::{DefaultHelp, HelpCommand};
pub use mock::MockParser;
#[cfg(feature = "clap")]
pub use real::ClapParser;

/// One expected argument, as forwarded from a command descriptor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArgumentSpec {
    pub name: String,
    pub description: Option<String>,
    /// Value used when the argument is absent
    pub value: Option<Value>,
    pub required: bool,
    #[serde(rename = "type")]
    pub arg_type: Option<ArgType>,
    pub deprecated: bool,
}

impl ArgumentSpec {
    /// Create an optional, untyped argument with no description
    #[must_use]
    #[inline]
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            description: None,
            value: None,
            required: false,
            arg_type: None,
            deprecated: false,
        }
    }

    /// Value for this argument when the input did not supply one
    #[must_use]
    #[inline]
    pub fn fallback(&self) -> Value {
        self.value.clone().unwrap_or(Value::Null)
    }
}

/// Trait for argument parsers driven by the dispatch loop
///
/// # Implementations
/// - `ClapParser`: Production implementation reading process arguments
/// - `MockParser`: Test implementation returning preset values
pub trait ArgumentParser {
    /// Register one expected argument; may be called many times before parsing
    fn declare_argument(&mut self, argument: ArgumentSpec);

    /// Consume the input once and return resolved values keyed by argument name
    ///
    /// # Errors
    ///
    /// Returns an option error on malformed input, or a help-requested error
    /// carrying rendered help text.
    fn parse_arguments(&mut self) -> Result<HashMap<String, Value>, HypeError>;
}
