//! Dispatch: parse process input once and invoke every registered command

use crate::app::App;
use crate::app::registry::CommandRegistry;
use crate::command::descriptor::CommandDescriptor;
use crate::parser::{ArgumentParser, ArgumentSpec};
use anyhow::{Context as _, Result};
use serde_json::Value;
use tracing::{debug, warn};

impl App {
    /// Parse the process arguments and run every registered command
    ///
    /// Consumes the app: registration is closed once dispatch starts.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input is malformed or help was requested
    /// - Any command fails; later commands are not run
    /// - The crate was built without the `clap` feature
    #[cfg(feature = "clap")]
    pub fn run(self) -> Result<()> {
        use crate::parser::ClapParser;

        let mut parser = ClapParser::new(self.config.program)
            .with_banner(self.config.banner)
            .with_help(self.help);
        if let Some(version) = self.config.version {
            parser = parser.with_version(version);
        }

        dispatch(&self.registry, &mut parser)
    }

    /// Parse the process arguments and run every registered command
    ///
    /// # Errors
    ///
    /// Always fails: no argument parser is available in this build. Use
    /// [`App::run_with`] with a custom parser instead.
    #[cfg(not(feature = "clap"))]
    pub fn run(self) -> Result<()> {
        Err(crate::error::HypeError::plugin(
            "the clap argument parser is not installed; enable the `clap` feature or use App::run_with",
        )
        .into())
    }

    /// Run every registered command using `parser` for the input
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or any command fails. Parsing happens
    /// once for all commands, so a parse error means no command runs.
    pub fn run_with(self, parser: &mut dyn ArgumentParser) -> Result<()> {
        dispatch(&self.registry, parser)
    }
}

fn argument_spec(descriptor: &CommandDescriptor) -> ArgumentSpec {
    ArgumentSpec {
        name: descriptor.name().to_owned(),
        description: descriptor.description().map(ToOwned::to_owned),
        value: descriptor.default().cloned(),
        required: descriptor.required(),
        arg_type: descriptor.arg_type(),
        deprecated: descriptor.deprecated(),
    }
}

/// Declare every command, parse once, then invoke each command in order
pub(crate) fn dispatch(registry: &CommandRegistry, parser: &mut dyn ArgumentParser) -> Result<()> {
    for descriptor in registry {
        debug!("Declaring command: {}", descriptor.to_json());
        parser.declare_argument(argument_spec(descriptor));

        if descriptor.params().len() > 1 {
            warn!(
                "Command '{}' declares {} parameters; only the first one receives a value",
                descriptor.name(),
                descriptor.params().len()
            );
        }
    }

    let mut values = parser.parse_arguments()?;
    debug!("Parsed {} argument(s)", values.len());

    for descriptor in registry {
        let value = values.remove(descriptor.name()).unwrap_or(Value::Null);

        if value.is_null() && !descriptor.accepts_missing() {
            debug!("Skipping '{}': no value given", descriptor.name());
            continue;
        }

        // A command without parameters only runs bare; a supplied value is an
        // arity error reported by the call itself.
        let args = if descriptor.params().is_empty() && value.is_null() {
            Vec::new()
        } else {
            vec![value]
        };

        debug!("Invoking '{}' with {:?}", descriptor.name(), args);
        descriptor
            .func()
            .call(args)
            .with_context(|| format!("Command '{}' failed", descriptor.name()))?;
    }

    Ok(())
}
