//! Configuration types for Strata diagram layout and rendering.
//!
//! All types implement [`serde::Deserialize`] and every field is optional, so
//! a TOML file only needs to name the values it overrides.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Geometry and label settings consumed by [`layout`](crate::layout()).
//! - [`ConnectorConfig`] - Stroke and head of the connectors between layers.
//! - [`StyleConfig`] - Renderer settings such as background color and pixel scale.
//!
//! Colors are kept as strings and parsed when the configuration is used, so a
//! bad color is reported together with the setting it came from.
//!
//! # Example
//!
//! ```
//! # use strata::config::AppConfig;
//! let config: AppConfig = toml::from_str(r#"
//!     [layout]
//!     component_separator = " | "
//!
//!     [style]
//!     pixels_per_unit = 100.0
//! "#).unwrap();
//!
//! assert_eq!(config.layout().component_separator(), " | ");
//! assert_eq!(config.layout().canvas_width(), 10.0);
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Geometry and label settings for the layout engine.
///
/// | Field | Default |
/// |-------|---------|
/// | `canvas_width` | `10.0` |
/// | `box_half_height` | `0.4` |
/// | `box_opacity` | `0.7` |
/// | `canvas_margin` | `0.8` |
/// | `title_inset` | `0.5` |
/// | `component_offset` | `2.5` |
/// | `title_font_size` | `14` |
/// | `component_font_size` | `10` |
/// | `label_color` | `"white"` |
/// | `component_separator` | `" • "` |
/// | `max_label_chars` | unset |
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    canvas_width: f32,
    box_half_height: f32,
    box_opacity: f32,
    canvas_margin: f32,
    title_inset: f32,
    component_offset: f32,
    title_font_size: u16,
    component_font_size: u16,
    label_color: String,
    component_separator: String,
    max_label_chars: Option<usize>,
    connector: ConnectorConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 10.0,
            box_half_height: 0.4,
            box_opacity: 0.7,
            canvas_margin: 0.8,
            title_inset: 0.5,
            component_offset: 2.5,
            title_font_size: 14,
            component_font_size: 10,
            label_color: "white".to_string(),
            component_separator: " • ".to_string(),
            max_label_chars: None,
            connector: ConnectorConfig::default(),
        }
    }
}

impl LayoutConfig {
    /// Width of every layer band, in logical units.
    pub fn canvas_width(&self) -> f32 {
        self.canvas_width
    }

    /// Distance from a slot to the upper and lower edge of its band.
    pub fn box_half_height(&self) -> f32 {
        self.box_half_height
    }

    pub fn box_opacity(&self) -> f32 {
        self.box_opacity
    }

    /// Space kept below the lowest and above the highest slot.
    pub fn canvas_margin(&self) -> f32 {
        self.canvas_margin
    }

    /// Horizontal offset of the title label from the left edge of the band.
    pub fn title_inset(&self) -> f32 {
        self.title_inset
    }

    /// Horizontal offset of the component label from the left edge of the band.
    pub fn component_offset(&self) -> f32 {
        self.component_offset
    }

    pub fn title_font_size(&self) -> u16 {
        self.title_font_size
    }

    pub fn component_font_size(&self) -> u16 {
        self.component_font_size
    }

    /// Raw label color string.
    pub fn label_color(&self) -> &str {
        &self.label_color
    }

    pub fn component_separator(&self) -> &str {
        &self.component_separator
    }

    /// Character limit applied to every label, if any.
    pub fn max_label_chars(&self) -> Option<usize> {
        self.max_label_chars
    }

    pub fn connector(&self) -> &ConnectorConfig {
        &self.connector
    }

    pub fn with_canvas_width(mut self, canvas_width: f32) -> Self {
        self.canvas_width = canvas_width;
        self
    }

    pub fn with_box_half_height(mut self, box_half_height: f32) -> Self {
        self.box_half_height = box_half_height;
        self
    }

    pub fn with_box_opacity(mut self, box_opacity: f32) -> Self {
        self.box_opacity = box_opacity;
        self
    }

    pub fn with_label_color(mut self, label_color: impl Into<String>) -> Self {
        self.label_color = label_color.into();
        self
    }

    pub fn with_component_separator(mut self, separator: impl Into<String>) -> Self {
        self.component_separator = separator.into();
        self
    }

    pub fn with_max_label_chars(mut self, max_label_chars: Option<usize>) -> Self {
        self.max_label_chars = max_label_chars;
        self
    }

    pub fn with_connector(mut self, connector: ConnectorConfig) -> Self {
        self.connector = connector;
        self
    }
}

/// Connector stroke and head settings.
///
/// `style` accepts `solid`, `dashed`, `dotted` or a raw dasharray; `head`
/// accepts `arrow` or `none`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConnectorConfig {
    color: String,
    width: f32,
    style: String,
    head: String,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            color: "#333333".to_string(),
            width: 2.0,
            style: "solid".to_string(),
            head: "arrow".to_string(),
        }
    }
}

impl ConnectorConfig {
    pub fn new(
        color: impl Into<String>,
        width: f32,
        style: impl Into<String>,
        head: impl Into<String>,
    ) -> Self {
        Self {
            color: color.into(),
            width,
            style: style.into(),
            head: head.into(),
        }
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn head(&self) -> &str {
        &self.head
    }
}

/// Renderer settings.
///
/// | Field | Default |
/// |-------|---------|
/// | `background_color` | `"white"` |
/// | `box_outline_color` | `"white"` |
/// | `box_outline_width` | `2.0` |
/// | `font_family` | `"Arial"` |
/// | `pixels_per_unit` | `80.0` |
/// | `horizontal_margin` | `0.5` |
/// | `title_font_size` | `18` |
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    background_color: String,
    box_outline_color: String,
    box_outline_width: f32,
    font_family: String,
    pixels_per_unit: f32,
    horizontal_margin: f32,
    title_font_size: u16,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: "white".to_string(),
            box_outline_color: "white".to_string(),
            box_outline_width: 2.0,
            font_family: "Arial".to_string(),
            pixels_per_unit: 80.0,
            horizontal_margin: 0.5,
            title_font_size: 18,
        }
    }
}

impl StyleConfig {
    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    pub fn box_outline_color(&self) -> &str {
        &self.box_outline_color
    }

    pub fn box_outline_width(&self) -> f32 {
        self.box_outline_width
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Scale from logical units to SVG pixels.
    pub fn pixels_per_unit(&self) -> f32 {
        self.pixels_per_unit
    }

    /// Logical units of empty space left and right of the bands.
    pub fn horizontal_margin(&self) -> f32 {
        self.horizontal_margin
    }

    /// Font size of the diagram title.
    pub fn title_font_size(&self) -> u16 {
        self.title_font_size
    }

    pub fn with_pixels_per_unit(mut self, pixels_per_unit: f32) -> Self {
        self.pixels_per_unit = pixels_per_unit;
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }
}
