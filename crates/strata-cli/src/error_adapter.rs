//! Error adapter for converting StrataError to miette diagnostics.
//!
//! This module bridges the library's plain error types and miette's rich
//! diagnostic formatting used in the CLI. Document errors keep their source
//! text and are rendered with a labeled snippet; every other error is rendered
//! as a message with a code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use strata::{LayoutError, StrataError, document::DocumentError};

/// Adapter for a [`DocumentError`] together with the document source.
pub struct DocumentAdapter<'a> {
    err: &'a DocumentError,
    src: &'a str,
}

impl<'a> DocumentAdapter<'a> {
    /// Create a new document adapter.
    pub fn new(err: &'a DocumentError, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for DocumentAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for DocumentAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.err, f)
    }
}

impl std::error::Error for DocumentAdapter<'_> {}

impl MietteDiagnostic for DocumentAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.err {
            DocumentError::Syntax { .. } => "strata::document::syntax",
            DocumentError::InvalidColor { .. } => "strata::document::invalid_color",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.err {
            DocumentError::Syntax { .. } => return None,
            DocumentError::InvalidColor { .. } => {
                "use a CSS color such as `teal`, `#1FB8CD` or `rgb(31, 184, 205)`"
            }
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.err.span()?;
        let span = SourceSpan::new(span.start.into(), span.len());
        let label = LabeledSpan::new_primary_with_span(Some(self.err.label().to_string()), span);

        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for [`StrataError`] variants without source information.
pub struct ErrorAdapter<'a>(pub &'a StrataError);

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
            StrataError::Io(_) => "strata::io",
            StrataError::Document { .. } => "strata::document",
            StrataError::Layout(err) => layout_code(err),
            StrataError::Config(_) => "strata::config",
            StrataError::Export(_) => "strata::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            StrataError::Layout(LayoutError::DuplicateSlot { .. }) => {
                "every layer needs its own `slot` value"
            }
            StrataError::Layout(LayoutError::EmptyInput) => {
                "add at least one `[[layers]]` table to the document"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}

fn layout_code(err: &LayoutError) -> &'static str {
    match err {
        LayoutError::EmptyInput => "strata::layout::empty_input",
        LayoutError::DuplicateSlot { .. } => "strata::layout::duplicate_slot",
        LayoutError::InvalidComponent { .. } => "strata::layout::invalid_component",
        LayoutError::InvalidLayerName { .. } => "strata::layout::invalid_layer_name",
        LayoutError::SlotOutOfRange { .. } => "strata::layout::slot_out_of_range",
        LayoutError::InvalidConfig(_) => "strata::layout::invalid_config",
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A document error with a source snippet.
    Document(DocumentAdapter<'a>),
    /// An error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Document(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Document(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Document(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Document(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Document(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Document(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`StrataError`] into a list of reportable errors.
pub fn to_reportables(err: &StrataError) -> Vec<Reportable<'_>> {
    match err {
        StrataError::Document { err, src } => {
            vec![Reportable::Document(DocumentAdapter::new(err, src))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_of(reportable: &Reportable<'_>) -> String {
        reportable.code().map(|c| c.to_string()).unwrap_or_default()
    }

    #[test]
    fn test_document_error_has_label() {
        let src = "[[layers]]\nname = \"UI\"\ncolor = \"teal-ish\"\nslot = 0\n";
        let doc_err = DocumentError::InvalidColor {
            layer: "UI".to_string(),
            reason: "unknown color".to_string(),
            span: 31..41,
        };
        let err = StrataError::new_document_error(doc_err, src);

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        assert_eq!(code_of(&reportables[0]), "strata::document::invalid_color");
        assert!(reportables[0].source_code().is_some());

        let labels: Vec<_> = reportables[0].labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].label(), Some("not a CSS color"));
        assert_eq!(labels[0].offset(), 31);
        assert_eq!(labels[0].len(), 10);
        assert!(labels[0].primary());
    }

    #[test]
    fn test_syntax_error_without_span_has_no_labels() {
        let doc_err = DocumentError::Syntax {
            message: "missing field `slot`".to_string(),
            span: None,
        };
        let err = StrataError::new_document_error(doc_err, "");

        let reportables = to_reportables(&err);
        assert!(reportables[0].labels().is_none());
        assert_eq!(code_of(&reportables[0]), "strata::document::syntax");
    }

    #[test]
    fn test_layout_error_codes() {
        let cases = [
            (LayoutError::EmptyInput, "strata::layout::empty_input"),
            (
                LayoutError::DuplicateSlot {
                    slot: 1,
                    first: "A".to_string(),
                    second: "B".to_string(),
                },
                "strata::layout::duplicate_slot",
            ),
            (
                LayoutError::InvalidComponent {
                    layer: "A".to_string(),
                    index: 0,
                },
                "strata::layout::invalid_component",
            ),
            (
                LayoutError::InvalidLayerName { index: 2 },
                "strata::layout::invalid_layer_name",
            ),
            (
                LayoutError::SlotOutOfRange {
                    layer: "A".to_string(),
                    slot: 16_777_217,
                },
                "strata::layout::slot_out_of_range",
            ),
            (
                LayoutError::InvalidConfig("bad".to_string()),
                "strata::layout::invalid_config",
            ),
        ];

        for (layout_err, expected) in cases {
            let err = StrataError::Layout(layout_err);
            let reportables = to_reportables(&err);
            assert_eq!(reportables.len(), 1);
            assert_eq!(code_of(&reportables[0]), expected);
            assert!(reportables[0].source_code().is_none());
        }
    }

    #[test]
    fn test_config_error() {
        let err = StrataError::Config("Missing configuration file: x.toml".to_string());

        let reportables = to_reportables(&err);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(
                    e.to_string(),
                    "Configuration error: Missing configuration file: x.toml"
                );
            }
            Reportable::Document(_) => panic!("Expected Error"),
        }
        assert_eq!(code_of(&reportables[0]), "strata::config");
    }

    #[test]
    fn test_duplicate_slot_has_help() {
        let err = StrataError::Layout(LayoutError::DuplicateSlot {
            slot: 3,
            first: "A".to_string(),
            second: "B".to_string(),
        });

        let reportables = to_reportables(&err);
        assert!(reportables[0].help().is_some());
    }
}
