//! Error adapter for converting CLI errors to miette diagnostics.
//!
//! TOML parse failures in scenario and configuration files keep their source
//! text and byte span, and render as snippets pointing at the offending
//! value. Every other error renders as a plain diagnostic with a code.

use std::{fmt, ops::Range, path::Path};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use incline::InclineError;

use crate::{CliError, ConfigError, ScenarioError};

/// Adapter for a TOML error with source location.
pub struct SourceDiagnostic<'a> {
    code: &'static str,
    path: &'a Path,
    message: &'a str,
    src: &'a str,
    span: Option<Range<usize>>,
}

impl<'a> SourceDiagnostic<'a> {
    /// Create a new source diagnostic.
    pub fn new(
        code: &'static str,
        path: &'a Path,
        message: &'a str,
        src: &'a str,
        span: Option<Range<usize>>,
    ) -> Self {
        Self {
            code,
            path,
            message,
            src,
            span,
        }
    }
}

impl fmt::Debug for SourceDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceDiagnostic")
            .field("code", &self.code)
            .field("path", &self.path)
            .field("message", &self.message)
            .field("span", &self.span)
            .finish()
    }
}

impl fmt::Display for SourceDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message.trim_end())
    }
}

impl std::error::Error for SourceDiagnostic<'_> {}

impl MietteDiagnostic for SourceDiagnostic<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = SourceSpan::from(self.span.clone()?);
        let label = LabeledSpan::new_primary_with_span(Some("here".to_string()), span);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for errors without source location.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CliError::Config(ConfigError::Parse { .. }) => "incline::config::parse",
            CliError::Config(ConfigError::MissingFile(_)) => "incline::config::missing",
            CliError::Config(ConfigError::Read { .. }) => "incline::config::read",
            CliError::Config(ConfigError::Validation(_)) => "incline::config::validation",
            CliError::Scenario(ScenarioError::Read { .. }) => "incline::scenario::read",
            CliError::Scenario(ScenarioError::Parse { .. }) => "incline::scenario::parse",
            CliError::Incline(InclineError::Io(_)) => "incline::io",
            CliError::Incline(InclineError::Config(_)) => "incline::config",
            CliError::Incline(InclineError::Export(_)) => "incline::export",
            CliError::Incline(InclineError::Tutorial(_)) => "incline::tutorial",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            CliError::Config(ConfigError::Validation(_)) => Some(Box::new(
                "background_color accepts CSS colors such as \"white\" or \"#f0f0f0\"",
            )),
            _ => None,
        }
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A TOML error with source location information.
    Source(SourceDiagnostic<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Source(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Source(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Source(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Source(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Source(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Source(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`CliError`] into a reportable error.
///
/// TOML parse errors become [`Reportable::Source`]; everything else becomes
/// [`Reportable::Error`].
pub fn to_reportable(err: &CliError) -> Reportable<'_> {
    match err {
        CliError::Scenario(ScenarioError::Parse {
            path,
            src,
            span,
            message,
        }) => Reportable::Source(SourceDiagnostic::new(
            "incline::scenario::parse",
            path,
            message,
            src,
            span.clone(),
        )),
        CliError::Config(ConfigError::Parse {
            path,
            src,
            span,
            message,
        }) => Reportable::Source(SourceDiagnostic::new(
            "incline::config::parse",
            path,
            message,
            src,
            span.clone(),
        )),
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}
