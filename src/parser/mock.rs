//! Mock parser implementation for testing

use super::{ArgumentParser, ArgumentSpec};
use crate::error::HypeError;
use serde_json::Value;
use std::collections::HashMap;

/// In-memory implementation of `ArgumentParser` for testing
///
/// `MockParser` records every declared argument and answers the parse call
/// with preset values, so dispatch can be tested without process arguments.
///
/// # Example
/// ```
/// use hype::parser::{ArgumentParser, ArgumentSpec, MockParser};
/// use serde_json::json;
///
/// let mut parser = MockParser::new().with_value("greet", json!("World"));
/// parser.declare_argument(ArgumentSpec::new("greet"));
///
/// let values = parser.parse_arguments().unwrap();
/// assert_eq!(values["greet"], json!("World"));
/// assert_eq!(parser.parse_calls(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockParser {
    declared: Vec<ArgumentSpec>,
    values: HashMap<String, Value>,
    error: Option<HypeError>,
    parse_calls: usize,
}

impl MockParser {
    /// Create a new `MockParser` with no preset values
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset the value returned for `name` (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_value<S: Into<String>>(mut self, name: S, value: Value) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// Make every parse call fail with `error` (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_error(mut self, error: HypeError) -> Self {
        self.error = Some(error);
        self
    }

    /// Arguments declared so far, in declaration order
    #[must_use]
    #[inline]
    pub fn declared(&self) -> &[ArgumentSpec] {
        &self.declared
    }

    /// Number of times `parse_arguments` was called
    #[must_use]
    #[inline]
    pub const fn parse_calls(&self) -> usize {
        self.parse_calls
    }
}

impl ArgumentParser for MockParser {
    fn declare_argument(&mut self, argument: ArgumentSpec) {
        self.declared.push(argument);
    }

    fn parse_arguments(&mut self) -> Result<HashMap<String, Value>, HypeError> {
        self.parse_calls += 1;

        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        let mut resolved = HashMap::new();
        for argument in &self.declared {
            let value = match self.values.get(&argument.name) {
                Some(value) => value.clone(),
                None if argument.required => {
                    return Err(HypeError::option(format!(
                        "the following required argument was not provided: --{}",
                        argument.name
                    )));
                }
                None => argument.fallback(),
            };
            resolved.insert(argument.name.clone(), value);
        }

        Ok(resolved)
    }
}
