//! Argument types and conversions between raw tokens, JSON values and Rust values

use crate::error::HypeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Declared type of a command argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgType {
    #[serde(rename = "str")]
    String,
    #[serde(rename = "int")]
    Integer,
    Float,
    #[serde(rename = "bool")]
    Boolean,
}

impl ArgType {
    /// Short name used in help output and serialisation
    #[must_use]
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "str",
            Self::Integer => "int",
            Self::Float => "float",
            Self::Boolean => "bool",
        }
    }

    /// Coerce a raw command-line token into a JSON value of this type
    ///
    /// # Errors
    ///
    /// Returns an option error naming `argument` if `raw` is not a valid
    /// literal for this type.
    pub fn coerce(self, argument: &str, raw: &str) -> Result<Value, HypeError> {
        let expected = self.as_str();
        let invalid = || {
            HypeError::option(format!(
                "--{argument} expects a value of type {expected}, got '{raw}'"
            ))
        };

        match self {
            Self::String => Ok(Value::String(raw.to_owned())),
            Self::Integer => raw
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| invalid()),
            Self::Float => {
                let parsed = raw.trim().parse::<f64>().map_err(|_| invalid())?;
                serde_json::Number::from_f64(parsed)
                    .map(Value::Number)
                    .ok_or_else(invalid)
            }
            Self::Boolean => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(Value::Bool(true)),
                "false" | "no" | "off" | "0" => Ok(Value::Bool(false)),
                _ => Err(invalid()),
            },
        }
    }

    /// Whether `value` already has this type (`null` never matches)
    #[must_use]
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Float => value.is_number(),
            Self::Boolean => value.is_boolean(),
        }
    }
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArgType {
    type Err = HypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "str" | "string" => Ok(Self::String),
            "int" | "integer" => Ok(Self::Integer),
            "float" => Ok(Self::Float),
            "bool" | "boolean" => Ok(Self::Boolean),
            other => Err(HypeError::option(format!(
                "Unknown argument type '{other}'. Expected one of: str, int, float, bool"
            ))),
        }
    }
}

/// A Rust type that can receive a dispatched argument value
///
/// The associated `ARG_TYPE` is the static annotation used when a typed
/// function is registered; `None` leaves the parameter untyped. `NULLABLE`
/// tells dispatch whether the type can stand for an absent argument.
pub trait ArgValue: Sized {
    /// Annotation contributed by this type
    const ARG_TYPE: Option<ArgType>;

    /// Whether `null` converts into this type
    const NULLABLE: bool = false;

    /// Convert a dispatched value into this type
    ///
    /// # Errors
    ///
    /// Returns an option error if `value` does not hold this type.
    fn from_value(parameter: &str, value: Value) -> Result<Self, HypeError>;
}

fn mismatch(parameter: &str, expected: &str, value: &Value) -> HypeError {
    HypeError::option(format!(
        "Parameter '{parameter}' expects {expected}, got {value}"
    ))
}

impl ArgValue for String {
    const ARG_TYPE: Option<ArgType> = Some(ArgType::String);

    fn from_value(parameter: &str, value: Value) -> Result<Self, HypeError> {
        match value {
            Value::String(text) => Ok(text),
            other => Err(mismatch(parameter, "str", &other)),
        }
    }
}

impl ArgValue for i64 {
    const ARG_TYPE: Option<ArgType> = Some(ArgType::Integer);

    fn from_value(parameter: &str, value: Value) -> Result<Self, HypeError> {
        value
            .as_i64()
            .ok_or_else(|| mismatch(parameter, "int", &value))
    }
}

impl ArgValue for f64 {
    const ARG_TYPE: Option<ArgType> = Some(ArgType::Float);

    fn from_value(parameter: &str, value: Value) -> Result<Self, HypeError> {
        value
            .as_f64()
            .ok_or_else(|| mismatch(parameter, "float", &value))
    }
}

impl ArgValue for bool {
    const ARG_TYPE: Option<ArgType> = Some(ArgType::Boolean);

    fn from_value(parameter: &str, value: Value) -> Result<Self, HypeError> {
        value
            .as_bool()
            .ok_or_else(|| mismatch(parameter, "bool", &value))
    }
}

impl ArgValue for Value {
    const ARG_TYPE: Option<ArgType> = None;
    const NULLABLE: bool = true;

    fn from_value(_parameter: &str, value: Value) -> Result<Self, HypeError> {
        Ok(value)
    }
}

impl<T: ArgValue> ArgValue for Option<T> {
    const ARG_TYPE: Option<ArgType> = T::ARG_TYPE;
    const NULLABLE: bool = true;

    fn from_value(parameter: &str, value: Value) -> Result<Self, HypeError> {
        if value.is_null() {
            return Ok(None);
        }
        T::from_value(parameter, value).map(Some)
    }
}
