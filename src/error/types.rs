//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for hype operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HypeError {
    /// Generic unexpected failure
    #[error("{message}")]
    Hype { message: String },

    /// Argument option problem reported by the parser layer
    #[error("Option error: {message}")]
    Option { message: String },

    /// More positional arguments were supplied than a command declares
    #[error("Too many arguments: {message}")]
    TooManyArguments { message: String },

    /// A required optional extension is not available
    #[error("Plugin error: {message}")]
    Plugin { message: String },

    /// Registration attempted with no derivable command name
    #[error("Missing name: {message}")]
    MissingName { message: String },

    /// Help or version output was requested; carries the rendered text
    #[error("{rendered}")]
    HelpRequested { rendered: String },
}

impl Default for HypeError {
    fn default() -> Self {
        Self::hype("Something went wrong with the Hype CLI")
    }
}

impl HypeError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::HelpRequested { .. } => 0,
            Self::Hype { .. } => 1,
            Self::Option { .. } => 2,
            Self::TooManyArguments { .. } => 3,
            Self::Plugin { .. } => 4,
            Self::MissingName { .. } => 5,
        }
    }

    /// Create a generic error
    #[inline]
    pub fn hype<S: Into<String>>(message: S) -> Self {
        Self::Hype {
            message: message.into(),
        }
    }

    /// Create an option error
    #[inline]
    pub fn option<S: Into<String>>(message: S) -> Self {
        Self::Option {
            message: message.into(),
        }
    }

    /// Create a too-many-arguments error
    #[inline]
    pub fn too_many_arguments<S: Into<String>>(message: S) -> Self {
        Self::TooManyArguments {
            message: message.into(),
        }
    }

    /// Create a plugin error
    #[inline]
    pub fn plugin<S: Into<String>>(message: S) -> Self {
        Self::Plugin {
            message: message.into(),
        }
    }

    /// Create a missing-name error
    #[must_use]
    #[inline]
    pub fn missing_name() -> Self {
        Self::MissingName {
            message: "command has no name and the function is anonymous".to_owned(),
        }
    }

    /// Wrap rendered help text
    #[inline]
    pub fn help_requested<S: Into<String>>(rendered: S) -> Self {
        Self::HelpRequested {
            rendered: rendered.into(),
        }
    }

    /// Whether this error only signals that help/version text should be shown
    #[must_use]
    #[inline]
    pub const fn is_help(&self) -> bool {
        matches!(*self, Self::HelpRequested { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            HypeError::default(),
            HypeError::option("bad"),
            HypeError::too_many_arguments("bad"),
            HypeError::plugin("bad"),
            HypeError::missing_name(),
            HypeError::help_requested("usage"),
        ];
        let mut codes: Vec<i32> = errors.iter().map(HypeError::exit_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            HypeError::default().to_string(),
            "Something went wrong with the Hype CLI"
        );
        assert_eq!(
            HypeError::option("--port expects int").to_string(),
            "Option error: --port expects int"
        );
        assert_eq!(HypeError::help_requested("usage: x").to_string(), "usage: x");
        assert!(HypeError::help_requested("usage: x").is_help());
        assert!(!HypeError::plugin("clap").is_help());
    }
}
