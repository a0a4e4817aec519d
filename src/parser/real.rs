//! Real parser implementation using clap's builder API

use super::help::{DefaultHelp, HelpCommand};
use super::{ArgumentParser, ArgumentSpec};
use crate::command::types::ArgType;
use crate::error::HypeError;
use clap::{Arg, ArgAction, Command};
use serde_json::Value;
use std::collections::HashMap;
use std::ffi::OsString;
use tracing::{debug, warn};

const HELP_ID: &str = "help";
const VERSION_ID: &str = "version";

/// Production implementation of `ArgumentParser`
///
/// Every declared argument becomes a `--<name> <VALUE>` long option. Values
/// are read from the process arguments unless an explicit source is given
/// with [`ClapParser::with_args`].
pub struct ClapParser {
    program: String,
    version: Option<String>,
    banner: Option<String>,
    help: Box<dyn HelpCommand>,
    arguments: Vec<ArgumentSpec>,
    source: Option<Vec<OsString>>,
}

impl ClapParser {
    /// Create a parser for `program` using the default help renderer
    #[must_use]
    #[inline]
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
            version: None,
            banner: None,
            help: Box::new(DefaultHelp),
            arguments: Vec::new(),
            source: None,
        }
    }

    /// Answer `--version` / `-V` with this version (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_version<S: Into<String>>(mut self, version: S) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Banner passed to the help renderer (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_banner(mut self, banner: Option<String>) -> Self {
        self.banner = banner;
        self
    }

    /// Replace the help renderer (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_help(mut self, help: Box<dyn HelpCommand>) -> Self {
        self.help = help;
        self
    }

    /// Parse these arguments instead of the process arguments (builder pattern)
    ///
    /// The first item is the program name, as with `std::env::args_os`.
    #[must_use]
    #[inline]
    pub fn with_args<I, T>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        self.source = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Build the clap command for the arguments declared so far
    fn command(&self) -> Command {
        let mut command = Command::new(self.program.clone())
            .disable_help_flag(true)
            .disable_version_flag(true)
            .arg(
                Arg::new(HELP_ID)
                    .short('h')
                    .long(HELP_ID)
                    .action(ArgAction::SetTrue)
                    .help("Print help"),
            );

        if self.version.is_some() {
            command = command.arg(
                Arg::new(VERSION_ID)
                    .short('V')
                    .long(VERSION_ID)
                    .action(ArgAction::SetTrue)
                    .help("Print version"),
            );
        }

        for argument in &self.arguments {
            let value_name = argument
                .arg_type
                .map_or_else(|| "VALUE".to_owned(), |ty| ty.as_str().to_uppercase());

            let mut arg = Arg::new(argument.name.clone())
                .long(argument.name.clone())
                .value_name(value_name)
                .value_parser(clap::value_parser!(String))
                .action(ArgAction::Set)
                .allow_negative_numbers(matches!(
                    argument.arg_type,
                    Some(ArgType::Integer | ArgType::Float)
                ))
                .required(argument.required);

            if let Some(description) = &argument.description {
                arg = arg.help(description.clone());
            }

            command = command.arg(arg);
        }

        command
    }

    /// Reject names clap cannot turn into long options
    fn check_names(&self) -> Result<(), HypeError> {
        for argument in &self.arguments {
            let name = argument.name.as_str();

            let reserved =
                name == HELP_ID || (name == VERSION_ID && self.version.is_some());
            if reserved {
                return Err(HypeError::option(format!(
                    "--{name} is reserved and cannot be used as a command name"
                )));
            }

            let valid = name
                .chars()
                .next()
                .is_some_and(|first| first.is_ascii_alphanumeric())
                && name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
            if !valid {
                return Err(HypeError::option(format!(
                    "'{name}' cannot be used as a command-line option name"
                )));
            }
        }

        Ok(())
    }

    fn input(&self) -> Vec<OsString> {
        match &self.source {
            Some(args) => args.clone(),
            None => std::env::args_os().collect(),
        }
    }
}

/// Whether `long` or `short` appears before any `--` terminator
fn requested(input: &[OsString], long: &str, short: &str) -> bool {
    input
        .iter()
        .skip(1)
        .take_while(|token| *token != "--")
        .any(|token| token == long || token == short)
}

impl ArgumentParser for ClapParser {
    fn declare_argument(&mut self, argument: ArgumentSpec) {
        debug!("Declaring argument --{}", argument.name);
        self.arguments.push(argument);
    }

    fn parse_arguments(&mut self) -> Result<HashMap<String, Value>, HypeError> {
        self.check_names()?;

        let input = self.input();

        if requested(&input, "--help", "-h") {
            return Err(HypeError::help_requested(self.help.render(
                self.banner.as_deref(),
                &self.program,
                self.version.as_deref(),
                &self.arguments,
            )));
        }
        if let Some(version) = &self.version {
            if requested(&input, "--version", "-V") {
                return Err(HypeError::help_requested(format!(
                    "{} {version}\n",
                    self.program
                )));
            }
        }

        let matches = self
            .command()
            .try_get_matches_from(input)
            .map_err(|err| HypeError::option(err.to_string().trim_end().to_owned()))?;

        let mut values = HashMap::new();
        for argument in &self.arguments {
            let value = match matches.get_one::<String>(&argument.name) {
                Some(raw) => {
                    if argument.deprecated {
                        warn!("--{} is deprecated", argument.name);
                    }
                    match argument.arg_type {
                        Some(ty) => ty.coerce(&argument.name, raw)?,
                        None => Value::String(raw.clone()),
                    }
                }
                None => argument.fallback(),
            };
            values.insert(argument.name.clone(), value);
        }

        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn typed(name: &str, ty: ArgType) -> ArgumentSpec {
        ArgumentSpec {
            arg_type: Some(ty),
            ..ArgumentSpec::new(name)
        }
    }

    #[test]
    fn test_requested_stops_at_terminator() {
        let input: Vec<OsString> = ["app", "--", "--help"].iter().map(OsString::from).collect();
        assert!(!requested(&input, "--help", "-h"));

        let input: Vec<OsString> = ["app", "-h"].iter().map(OsString::from).collect();
        assert!(requested(&input, "--help", "-h"));
    }

    #[test]
    fn test_check_names_rejects_reserved_and_malformed() {
        let mut parser = ClapParser::new("app");
        parser.declare_argument(ArgumentSpec::new("help"));
        assert!(parser.check_names().is_err());

        let mut parser = ClapParser::new("app");
        parser.declare_argument(ArgumentSpec::new("two words"));
        assert!(parser.check_names().is_err());

        let mut parser = ClapParser::new("app");
        parser.declare_argument(ArgumentSpec::new("version"));
        assert!(parser.check_names().is_ok());
    }

    #[test]
    fn test_coerces_by_declared_type() {
        let mut parser = ClapParser::new("app").with_args(["app", "--count", "7"]);
        parser.declare_argument(typed("count", ArgType::Integer));
        parser.declare_argument(typed("ratio", ArgType::Float));

        let values = parser.parse_arguments().unwrap();
        assert_eq!(values["count"], json!(7));
        assert_eq!(values["ratio"], Value::Null);
    }
}
