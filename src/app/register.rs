//! Registration: turning a function into a registered command

use crate::app::{App, DuplicatePolicy};
use crate::command::descriptor::CommandDescriptor;
use crate::command::function::Function;
use crate::command::inspect::inspect;
use crate::command::types::ArgType;
use crate::error::HypeError;
use serde_json::Value;
use tracing::{debug, warn};

/// Options for one registration, finished with [`CommandBuilder::register`]
#[must_use = "a command is only registered once `register` is called"]
pub struct CommandBuilder<'app> {
    app: &'app mut App,
    function: Function,
    name: Option<String>,
    description: Option<String>,
    value: Option<Value>,
    arg_type: Option<ArgType>,
    required: bool,
    deprecated: bool,
}

impl<'app> CommandBuilder<'app> {
    pub(crate) fn new(app: &'app mut App, function: Function) -> Self {
        Self {
            app,
            function,
            name: None,
            description: None,
            value: None,
            arg_type: None,
            required: false,
            deprecated: false,
        }
    }

    /// Command name; defaults to the function's own name
    #[inline]
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    #[inline]
    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Default value used when the argument is absent
    #[inline]
    pub fn value<V: Into<Value>>(mut self, value: V) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Command-level type, applied to unannotated parameters
    #[inline]
    pub fn arg_type(mut self, arg_type: ArgType) -> Self {
        self.arg_type = Some(arg_type);
        self
    }

    #[inline]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[inline]
    pub fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    /// Inspect the function, store its descriptor and hand the function back
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No name was given and the function is anonymous
    /// - The name is already registered and the app rejects duplicates
    /// - The function takes no parameters but a default value was given
    pub fn register(self) -> Result<Function, HypeError> {
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .or_else(|| self.function.name().map(ToOwned::to_owned))
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(HypeError::missing_name)?;

        if self.app.config.on_duplicate == DuplicatePolicy::Reject
            && self.app.registry.contains(&name)
        {
            return Err(HypeError::option(format!(
                "Command '{name}' is already registered"
            )));
        }

        let inspection = inspect(&self.function, self.arg_type);

        if let Some(value) = self.value.as_ref().filter(|value| !value.is_null()) {
            if inspection.params.is_empty() {
                return Err(HypeError::too_many_arguments(format!(
                    "{name} takes no arguments but has default value {value}"
                )));
            }
        }

        if let (Some(ty), Some(value)) = (inspection.arg_type, &self.value) {
            if !ty.accepts(value) {
                warn!("Default value {} for '{}' is not of type {}", value, name, ty);
            }
        }

        let descriptor = CommandDescriptor::new(
            name,
            inspection.params,
            self.description,
            self.value,
            inspection.arg_type,
            self.required,
            self.deprecated,
            self.function.clone(),
        );
        debug!("Registered command: {}", descriptor.to_json());

        if let Some(replaced) = self.app.registry.insert(descriptor) {
            warn!("Command '{}' was registered twice; keeping the later one", replaced.name());
        }

        Ok(self.function)
    }
}
