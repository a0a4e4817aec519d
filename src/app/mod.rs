//! Application object
//!
//! An [`App`] owns its command registry, its configuration and its help
//! renderer. Commands are registered through [`App::command`]; the app is
//! consumed by [`App::run`] / [`App::run_with`], so nothing can be registered
//! once dispatch has begun.

pub mod dispatch;
pub mod register;
pub mod registry;

pub use register::CommandBuilder;
pub use registry::CommandRegistry;

use crate::command::function::Function;
use crate::error::HypeError;
use crate::parser::help::{DefaultHelp, HelpCommand};
use serde::{Deserialize, Serialize};

/// What registering an already-registered name does
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Replace the earlier command (last write wins)
    #[default]
    Overwrite,
    /// Fail the second registration
    Reject,
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Program name shown in usage lines
    #[serde(default = "default_program")]
    pub program: String,

    /// Version answered by `--version`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Banner shown above the help text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,

    #[serde(default)]
    pub on_duplicate: DuplicatePolicy,
}

fn default_program() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| std::path::Path::new(arg0).file_name())
        .and_then(|name| name.to_str())
        .map_or_else(|| "app".to_owned(), ToOwned::to_owned)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            version: None,
            banner: None,
            on_duplicate: DuplicatePolicy::default(),
        }
    }
}

/// A command-line application: registered commands plus settings
pub struct App {
    config: AppConfig,
    registry: CommandRegistry,
    help: Box<dyn HelpCommand>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create an application with default settings
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create an application with explicit settings
    #[must_use]
    #[inline]
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            registry: CommandRegistry::new(),
            help: Box::new(DefaultHelp),
        }
    }

    /// Use a custom help renderer (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_help(mut self, help: Box<dyn HelpCommand>) -> Self {
        self.help = help;
        self
    }

    /// Start registering `function` as a command
    ///
    /// # Example
    /// ```
    /// use hype::{App, ArgType, Function};
    ///
    /// let mut app = App::new();
    /// let greet = Function::unary("greet", "name", |name: String| {
    ///     println!("Hello {name}!");
    ///     Ok(())
    /// });
    ///
    /// app.command(&greet).description("Greet someone").register().unwrap();
    ///
    /// let descriptor = app.registry().get("greet").unwrap();
    /// assert_eq!(descriptor.arg_type(), Some(ArgType::String));
    /// ```
    #[inline]
    pub fn command<'app>(&'app mut self, function: &Function) -> CommandBuilder<'app> {
        CommandBuilder::new(self, function.clone())
    }

    /// Names of all registered commands, in registration order
    #[must_use]
    pub fn commands(&self) -> Vec<&str> {
        self.registry.names()
    }

    #[must_use]
    #[inline]
    pub const fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    #[must_use]
    #[inline]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    #[inline]
    pub fn banner(&self) -> Option<&str> {
        self.config.banner.as_deref()
    }

    /// Set the banner shown above the help text
    ///
    /// # Errors
    ///
    /// Returns an error if `banner` is empty.
    pub fn set_banner<S: Into<String>>(&mut self, banner: S) -> Result<(), HypeError> {
        let banner = banner.into();
        if banner.is_empty() {
            return Err(HypeError::hype("Banner cannot be empty"));
        }
        self.config.banner = Some(banner);
        Ok(())
    }
}
