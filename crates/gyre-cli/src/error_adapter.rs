//! Error adapter for converting GyreError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use gyre::{GyreError, sequence::SequenceError};

/// Adapter that reports a [`GyreError`] through miette.
///
/// Every variant maps to a stable diagnostic code. Precondition,
/// configuration and export errors also carry a help message.
pub struct ErrorAdapter<'a>(pub &'a GyreError);

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
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            GyreError::Io(_) => "gyre::io",
            GyreError::Markup(_) => "gyre::markup",
            GyreError::Precondition(_) => "gyre::precondition",
            GyreError::Graph(_) => "gyre::graph",
            GyreError::Config(_) => "gyre::config",
            GyreError::Export(_) => "gyre::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            GyreError::Precondition(SequenceError::TooFewVertices { .. }) => {
                "use at least 2 vertices".to_string()
            }
            GyreError::Precondition(SequenceError::StepOutOfRange { vertices, .. }) => {
                format!("pick a step between 1 and {}", vertices - 1)
            }
            GyreError::Precondition(SequenceError::NotCoprime { vertices, .. }) => {
                format!("pick a step that shares no divisor with {vertices}, such as 1")
            }
            GyreError::Config(_) => {
                "check the configuration file or pass --config with a valid path".to_string()
            }
            GyreError::Export(_) => {
                "use a --name without path separators; --output-dir picks the directory"
                    .to_string()
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Wrap a [`GyreError`] for rendering by miette.
pub fn to_reportable(err: &GyreError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_code_and_help() {
        let err = GyreError::Precondition(SequenceError::NotCoprime {
            vertices: 6,
            coprime: 4,
            divisor: 2,
        });
        let adapter = to_reportable(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "gyre::precondition");
        assert_eq!(
            adapter.help().unwrap().to_string(),
            "pick a step that shares no divisor with 6, such as 1"
        );
        assert_eq!(
            adapter.to_string(),
            "Precondition violated: step 4 is not coprime with 6 vertices (both divisible by 2)"
        );
    }

    #[test]
    fn test_step_out_of_range_help() {
        let err = GyreError::Precondition(SequenceError::StepOutOfRange {
            vertices: 5,
            coprime: 9,
        });
        assert_eq!(
            to_reportable(&err).help().unwrap().to_string(),
            "pick a step between 1 and 4"
        );
    }

    #[test]
    fn test_io_error_has_no_help() {
        let err = GyreError::Io(std::io::Error::other("disk full"));
        let adapter = to_reportable(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "gyre::io");
        assert!(adapter.help().is_none());
        assert!(adapter.labels().is_none());
        assert_eq!(adapter.to_string(), "I/O error: disk full");
    }

    #[test]
    fn test_config_code() {
        let err = GyreError::Config("bad".to_string());
        assert_eq!(to_reportable(&err).code().unwrap().to_string(), "gyre::config");
    }

    #[test]
    fn test_export_code_and_help() {
        let err = GyreError::Export("destination `a/b.svg` is not a plain file name".into());
        let adapter = to_reportable(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "gyre::export");
        assert!(adapter.help().unwrap().to_string().contains("--output-dir"));
    }
}
