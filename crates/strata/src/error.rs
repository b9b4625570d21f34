//! Error types for Strata operations.
//!
//! This module provides the main error type [`StrataError`] which wraps the
//! failures of every stage: reading files, parsing documents, laying out
//! layers and rendering SVG.

use std::io;

use thiserror::Error;

use crate::{document::DocumentError, export, layout::LayoutError};

/// The main error type for Strata operations.
///
/// The `Document` variant keeps the source text next to the error so callers
/// can point at the offending span.
#[derive(Debug, Error)]
pub enum StrataError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Document { err: DocumentError, src: String },

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] export::Error),
}

impl StrataError {
    /// Create a new `Document` error with the associated source code.
    pub fn new_document_error(err: DocumentError, src: impl Into<String>) -> Self {
        Self::Document {
            err,
            src: src.into(),
        }
    }
}
