//! Command descriptor: the immutable record describing one registered command

use crate::command::function::{Function, Parameter};
use crate::command::types::ArgType;
use serde::Serialize;
use serde_json::Value;

/// Metadata and callable for one registered command
///
/// Built once at registration; all fields are read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct CommandDescriptor {
    name: String,
    params: Vec<Parameter>,
    description: Option<String>,
    default: Option<Value>,
    #[serde(rename = "type")]
    arg_type: Option<ArgType>,
    required: bool,
    deprecated: bool,
    #[serde(skip)]
    func: Function,
}

impl CommandDescriptor {
    #[expect(clippy::too_many_arguments, reason = "mirrors the registration options")]
    pub(crate) fn new(
        name: String,
        params: Vec<Parameter>,
        description: Option<String>,
        default: Option<Value>,
        arg_type: Option<ArgType>,
        required: bool,
        deprecated: bool,
        func: Function,
    ) -> Self {
        Self {
            name,
            params,
            description,
            default,
            arg_type,
            required,
            deprecated,
            func,
        }
    }

    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters with their effective types, in declaration order
    #[must_use]
    #[inline]
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    /// Whether the command can be invoked when its argument is absent
    ///
    /// False only when the first parameter cannot receive `null`.
    #[must_use]
    #[inline]
    pub fn accepts_missing(&self) -> bool {
        self.params.first().is_none_or(|param| param.nullable)
    }

    #[must_use]
    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    #[inline]
    pub const fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Effective type of the command as a whole
    #[must_use]
    #[inline]
    pub const fn arg_type(&self) -> Option<ArgType> {
        self.arg_type
    }

    #[must_use]
    #[inline]
    pub const fn required(&self) -> bool {
        self.required
    }

    #[must_use]
    #[inline]
    pub const fn deprecated(&self) -> bool {
        self.deprecated
    }

    /// The registered callable
    #[must_use]
    #[inline]
    pub const fn func(&self) -> &Function {
        &self.func
    }

    /// Metadata as JSON, without the callable
    #[must_use]
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
