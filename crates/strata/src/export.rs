//! Renderers for laid out diagrams.

pub mod svg;

use thiserror::Error;

/// Rendering failures.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid style configuration: {0}")]
    Style(String),
}
