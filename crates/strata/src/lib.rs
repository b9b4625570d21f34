//! Strata - layered architecture diagrams.
//!
//! Layout and rendering for diagrams made of stacked horizontal layers, each
//! with a title, a list of components and a connector to the next layer.
//!
//! The core operation is [`layout()`]: a pure function from an ordered list of
//! [`LayerSpec`] values to a flat list of [`DrawPrimitive`]s. [`DiagramBuilder`]
//! wraps it with document parsing and SVG rendering.

pub mod config;
pub mod document;
pub mod export;
pub mod layout;

mod error;

pub use strata_core::{color, draw, geometry};

pub use document::Document;
pub use error::StrataError;
pub use layout::{Canvas, LayerSpec, LayoutError, MAX_SLOT_MAGNITUDE, canvas, layout};

use log::{debug, info, trace};

use config::AppConfig;
use config::LayoutConfig;
use draw::DrawPrimitive;
use export::svg::SvgRenderer;

/// The result of laying out a diagram: its title, canvas and primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutDiagram {
    title: Option<String>,
    canvas: Canvas,
    primitives: Vec<DrawPrimitive>,
}

impl LaidOutDiagram {
    /// Lays out `layers` under an optional title.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if the layers or the configuration are invalid.
    pub fn new(
        title: Option<&str>,
        layers: &[LayerSpec],
        config: &LayoutConfig,
    ) -> Result<Self, LayoutError> {
        let (primitives, canvas) = layout::layout_with_canvas(layers, config)?;

        Ok(Self {
            title: title.map(str::to_string),
            canvas,
            primitives,
        })
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Primitives in drawing order.
    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }
}

/// Builder for parsing, laying out and rendering Strata diagrams.
///
/// # Examples
///
/// ```
/// use strata::{DiagramBuilder, config::AppConfig};
///
/// let source = r##"
///     title = "Web App"
///
///     [[layers]]
///     name = "UI"
///     color = "#1FB8CD"
///     components = ["Preview", "Gallery"]
///     slot = 1
///
///     [[layers]]
///     name = "Storage"
///     color = "#B4413C"
///     slot = 0
/// "##;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let document = builder.parse(source).expect("Failed to parse");
/// let svg = builder.render_svg(&document).expect("Failed to render");
/// assert!(svg.contains("Preview • Gallery"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a TOML diagram document.
    ///
    /// # Errors
    ///
    /// Returns [`StrataError::Document`], carrying `source`, for malformed
    /// documents and invalid colors.
    pub fn parse(&self, source: &str) -> Result<Document, StrataError> {
        info!("Parsing document");

        let document = Document::parse(source)
            .map_err(|err| StrataError::new_document_error(err, source))?;

        trace!(document:?; "Parsed document");

        Ok(document)
    }

    /// Lay out a parsed document.
    ///
    /// # Errors
    ///
    /// Returns [`StrataError::Layout`] if the layers fail validation.
    pub fn layout(&self, document: &Document) -> Result<LaidOutDiagram, StrataError> {
        info!(layers_count = document.layers().len(); "Laying out diagram");

        let diagram =
            LaidOutDiagram::new(document.title(), document.layers(), self.config.layout())?;

        debug!(primitives_count = diagram.primitives().len(); "Layout calculated");

        Ok(diagram)
    }

    /// Lay out a document and render it to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`StrataError::Layout`] for invalid layers and
    /// [`StrataError::Export`] for an invalid style configuration.
    pub fn render_svg(&self, document: &Document) -> Result<String, StrataError> {
        let diagram = self.layout(document)?;

        let renderer = SvgRenderer::new(self.config.style())?;
        let svg = renderer.render(&diagram).to_string();

        info!("SVG rendered successfully");
        Ok(svg)
    }
}
