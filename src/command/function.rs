//! Callables with an explicitly declared signature
//!
//! A [`Function`] pairs a shared callable body with the parameter list the
//! signature inspector reads. Typed constructors derive each parameter's
//! annotation from its Rust type through [`ArgValue`].

use crate::command::types::{ArgType, ArgValue};
use crate::error::HypeError;
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::rc::Rc;

/// One declared parameter: its name and (optional) type
///
/// `nullable` is false when the receiving Rust type cannot represent an
/// absent argument; such a parameter is never bound to `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Option<ArgType>,
    #[serde(skip)]
    pub nullable: bool,
}

impl Parameter {
    /// A parameter that accepts `null`
    #[must_use]
    #[inline]
    pub fn new<S: Into<String>>(name: S, ty: Option<ArgType>) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable: true,
        }
    }

    /// Set whether `null` may be passed (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }
}

type Body = Rc<dyn Fn(Vec<Value>) -> Result<()>>;

/// A registrable callable
///
/// Cloning is cheap: clones share the same body, so the value returned from
/// registration is the same callable that was registered.
#[derive(Clone)]
pub struct Function {
    name: Option<String>,
    params: Vec<Parameter>,
    body: Body,
}

impl Function {
    /// Create a named function whose body receives the raw positional values
    #[inline]
    pub fn new<S, F>(name: S, body: F) -> Self
    where
        S: Into<String>,
        F: Fn(Vec<Value>) -> Result<()> + 'static,
    {
        Self {
            name: Some(name.into()),
            params: Vec::new(),
            body: Rc::new(body),
        }
    }

    /// Create a function with no identifier of its own
    #[inline]
    pub fn anonymous<F>(body: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<()> + 'static,
    {
        Self {
            name: None,
            params: Vec::new(),
            body: Rc::new(body),
        }
    }

    /// Create a named function that takes no parameters
    #[inline]
    pub fn nullary<S, F>(name: S, body: F) -> Self
    where
        S: Into<String>,
        F: Fn() -> Result<()> + 'static,
    {
        Self::new(name, move |_| body())
    }

    /// Create a named function with a single typed parameter
    ///
    /// The parameter's annotation is `T::ARG_TYPE`. Unless `T` is nullable
    /// (`Option<_>` or `Value`), dispatch skips the command when its argument
    /// is absent, so use `Option<T>` to be called either way.
    #[inline]
    pub fn unary<T, S, P, F>(name: S, param: P, body: F) -> Self
    where
        T: ArgValue + 'static,
        S: Into<String>,
        P: Into<String>,
        F: Fn(T) -> Result<()> + 'static,
    {
        let param = param.into();
        let param_name = param.clone();
        Self::new(name, move |args| {
            let value = args.into_iter().next().unwrap_or(Value::Null);
            body(T::from_value(&param_name, value)?)
        })
        .declare(Parameter::new(param, T::ARG_TYPE).with_nullable(T::NULLABLE))
    }

    /// Declare an annotated parameter (builder pattern)
    #[must_use]
    #[inline]
    pub fn param<S: Into<String>>(self, name: S, ty: ArgType) -> Self {
        self.declare(Parameter::new(name, Some(ty)))
    }

    /// Declare a parameter without annotation (builder pattern)
    #[must_use]
    #[inline]
    pub fn untyped<S: Into<String>>(self, name: S) -> Self {
        self.declare(Parameter::new(name, None))
    }

    fn declare(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    /// The function's own identifier, if it has one
    #[must_use]
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Declared parameters with their annotations, in declaration order
    #[must_use]
    #[inline]
    pub fn signature(&self) -> &[Parameter] {
        &self.params
    }

    /// Call the function with positional values
    ///
    /// Fewer values than declared parameters is allowed; the body sees only
    /// what was passed.
    ///
    /// # Errors
    ///
    /// Returns a too-many-arguments error if more values are passed than the
    /// function declares, otherwise whatever the body returns.
    pub fn call(&self, args: Vec<Value>) -> Result<()> {
        if args.len() > self.params.len() {
            return Err(HypeError::too_many_arguments(format!(
                "{} takes {} argument(s) but {} were given",
                self.name.as_deref().unwrap_or("<anonymous>"),
                self.params.len(),
                args.len()
            ))
            .into());
        }
        (self.body)(args)
    }

    /// Whether two handles share the same callable body
    #[must_use]
    #[inline]
    pub fn same_callable(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
