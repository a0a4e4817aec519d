//! Signature inspection
//!
//! Resolves the effective type of every declared parameter of a function,
//! and the representative type of the command as a whole.

use crate::command::function::{Function, Parameter};
use crate::command::types::ArgType;

/// Result of inspecting a function's signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    /// Parameters with their effective types, in declaration order
    pub params: Vec<Parameter>,
    /// Command-level type after resolution
    pub arg_type: Option<ArgType>,
}

/// Inspect `function`, seeding the command-level type with `declared`
///
/// Resolution per parameter, in order:
/// - an annotated parameter keeps its annotation, and seeds the command-level
///   type if none is set yet
/// - an unannotated parameter takes the command-level type if one is set
/// - otherwise the parameter stays untyped
#[must_use]
pub fn inspect(function: &Function, declared: Option<ArgType>) -> Inspection {
    let mut arg_type = declared;

    let params = function
        .signature()
        .iter()
        .map(|param| {
            let ty = match param.ty {
                Some(annotation) => {
                    if arg_type.is_none() {
                        arg_type = Some(annotation);
                    }
                    Some(annotation)
                }
                None => arg_type,
            };
            Parameter {
                ty,
                ..param.clone()
            }
        })
        .collect();

    Inspection { params, arg_type }
}
