//! Error adapter for converting CliError to miette diagnostics.
//!
//! This module provides the bridge between the CLI's standard error type and
//! miette's rich diagnostic formatting. Document parse errors carry the
//! document source, so they are rendered with a labelled snippet.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use crate::{CliError, config::ConfigError};

/// Adapter rendering a [`CliError`] through miette.
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
        let code = match self.0 {
            CliError::Io(_) => "slidelab::io",
            CliError::Config(_) => "slidelab::config",
            CliError::Parse { .. } => "slidelab::parse",
            CliError::Document(_) => "slidelab::document",
            CliError::Serialize(_) => "slidelab::serialize",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            CliError::Config(ConfigError::MissingFile(_)) => {
                "check the --config path, or omit it to use the default search"
            }
            CliError::Parse { .. } => {
                "a document has a [slide] table and [[shapes]] entries with left, top, width and height"
            }
            CliError::Document(_) => "sizes must be non-negative and every value finite",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self.0 {
            CliError::Parse { src, .. } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let CliError::Parse { err, .. } = self.0 else {
            return None;
        };
        let span = err.span()?;
        let span = SourceSpan::new(span.start.into(), span.len());

        Some(Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
            Some(err.message().to_string()),
            span,
        ))))
    }
}

/// Wraps a [`CliError`] so it can be rendered by miette.
pub fn to_reportable(err: &CliError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error(src: &str) -> CliError {
        let err = toml::from_str::<slidelab::document::SlideDocument>(src)
            .expect_err("malformed document");
        CliError::new_parse_error(err, src)
    }

    #[test]
    fn test_parse_error_has_source_and_label() {
        let err = parse_error("[[shapes]]\nleft = \"far\"\n");
        let adapter = to_reportable(&err);

        assert!(adapter.source_code().is_some());
        let labels: Vec<_> = adapter.labels().expect("span is known").collect();
        assert_eq!(labels.len(), 1);
        assert!(labels[0].primary());
        assert_eq!(
            adapter.code().map(|c| c.to_string()),
            Some("slidelab::parse".to_string())
        );
    }

    #[test]
    fn test_io_error_has_no_source() {
        let err = CliError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "deck.toml",
        ));
        let adapter = to_reportable(&err);

        assert!(adapter.source_code().is_none());
        assert!(adapter.labels().is_none());
        assert!(adapter.help().is_none());
        assert_eq!(adapter.to_string(), "I/O error: deck.toml");
    }
}
