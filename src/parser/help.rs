//! Help rendering

use crate::parser::ArgumentSpec;

/// Renders help text when the parser sees `--help`
pub trait HelpCommand {
    /// Render help for `program` with its declared `arguments`
    ///
    /// `version` is set when the parser answers `--version`.
    fn render(
        &self,
        banner: Option<&str>,
        program: &str,
        version: Option<&str>,
        arguments: &[ArgumentSpec],
    ) -> String;
}

/// Plain-text help listing every declared argument
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHelp;

impl HelpCommand for DefaultHelp {
    fn render(
        &self,
        banner: Option<&str>,
        program: &str,
        version: Option<&str>,
        arguments: &[ArgumentSpec],
    ) -> String {
        let mut out = String::new();

        if let Some(banner) = banner {
            out.push_str(banner.trim_end());
            out.push_str("\n\n");
        }

        out.push_str(&format!("Usage: {program} [OPTIONS]\n\n"));
        out.push_str("Options:\n");

        let mut rows: Vec<(String, String)> = arguments
            .iter()
            .map(|argument| (flag_column(argument), detail_column(argument)))
            .collect();
        rows.push(("-h, --help".to_owned(), "Print help".to_owned()));
        if version.is_some() {
            rows.push(("-V, --version".to_owned(), "Print version".to_owned()));
        }

        let width = rows.iter().map(|(flag, _)| flag.len()).max().unwrap_or(0);
        for (flag, detail) in rows {
            let line = format!("  {flag:<width$}  {detail}");
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }
}

fn flag_column(argument: &ArgumentSpec) -> String {
    let value_name = argument
        .arg_type
        .map_or_else(|| "VALUE".to_owned(), |ty| ty.as_str().to_uppercase());
    format!("--{} <{value_name}>", argument.name)
}

fn detail_column(argument: &ArgumentSpec) -> String {
    let mut detail = argument.description.clone().unwrap_or_default();
    let mut push_marker = |marker: String| {
        if !detail.is_empty() {
            detail.push(' ');
        }
        detail.push_str(&marker);
    };

    if let Some(value) = &argument.value {
        push_marker(format!("[default: {value}]"));
    }
    if argument.required {
        push_marker("[required]".to_owned());
    }
    if argument.deprecated {
        push_marker("[deprecated]".to_owned());
    }

    detail
}
