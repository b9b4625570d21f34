//! TOML diagram documents.
//!
//! A document names an optional diagram title and lists the layers top-down:
//!
//! ```toml
//! title = "Web App Architecture"
//!
//! [[layers]]
//! name = "UI Layer"
//! color = "#1FB8CD"
//! components = ["Cam Preview", "Touch Ctrl"]
//! slot = 1
//!
//! [[layers]]
//! name = "Storage"
//! color = "#B4413C"
//! slot = 0
//! ```
//!
//! Colors are resolved while parsing, so a [`Document`] always holds valid
//! [`LayerSpec`] values. Structural checks such as duplicate slots are left to
//! the layout engine.

use std::ops::Range;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use strata_core::color::Color;

use crate::layout::LayerSpec;

/// Errors raised while reading a document.
///
/// Both variants carry the byte span of the offending input when it is known.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("invalid diagram document: {message}")]
    Syntax {
        message: String,
        span: Option<Range<usize>>,
    },

    #[error("layer `{layer}` has an invalid color: {reason}")]
    InvalidColor {
        layer: String,
        reason: String,
        span: Range<usize>,
    },
}

impl DocumentError {
    /// Byte range of the source text that caused the error.
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            Self::Syntax { span, .. } => span.clone(),
            Self::InvalidColor { span, .. } => Some(span.clone()),
        }
    }

    /// Short text shown next to the highlighted span.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Syntax { .. } => "here",
            Self::InvalidColor { .. } => "not a CSS color",
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDocument {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    layers: Vec<RawLayer>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLayer {
    name: String,
    color: toml::Spanned<String>,
    #[serde(default)]
    components: Vec<String>,
    slot: i32,
}

/// A titled list of layers, ready for layout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    title: Option<String>,
    layers: Vec<LayerSpec>,
}

impl Document {
    /// Builds a document from already resolved layers.
    pub fn new(title: Option<String>, layers: Vec<LayerSpec>) -> Self {
        Self { title, layers }
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Syntax`] for malformed TOML, unknown keys or
    /// missing fields, and [`DocumentError::InvalidColor`] for colors the
    /// `color` crate cannot parse.
    pub fn parse(source: &str) -> Result<Self, DocumentError> {
        let raw: RawDocument = toml::from_str(source).map_err(|err| DocumentError::Syntax {
            message: err.message().to_string(),
            span: err.span(),
        })?;

        let layers = raw
            .layers
            .into_iter()
            .map(|layer| {
                let color = Color::new(layer.color.get_ref()).map_err(|reason| {
                    DocumentError::InvalidColor {
                        layer: layer.name.clone(),
                        reason,
                        span: layer.color.span(),
                    }
                })?;

                Ok(LayerSpec::new(layer.name, color, layer.slot).with_components(layer.components))
            })
            .collect::<Result<Vec<_>, DocumentError>>()?;

        debug!(layers_count = layers.len(); "Document parsed");

        Ok(Self::new(raw.title, layers))
    }

    /// Diagram title, if the document has one.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Layers in document order.
    pub fn layers(&self) -> &[LayerSpec] {
        &self.layers
    }
}
