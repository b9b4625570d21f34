//! Layered diagram layout.
//!
//! [`layout()`] turns an ordered list of [`LayerSpec`] values into the flat
//! primitive list a renderer consumes. For every layer it emits, in order:
//!
//! 1. a [`GeometryBox`] spanning `[0, canvas_width]` and `slot ± box_half_height`,
//! 2. the title [`LabelPrimitive`] at `(title_inset, slot)`,
//! 3. the component [`LabelPrimitive`] at `(component_offset, slot)`,
//! 4. a [`ConnectorPrimitive`] to the next layer in the list, unless it is the last.
//!
//! Layers are never re-sorted: adjacency follows list order even when slots
//! are non-contiguous or unordered. A connector always joins the facing edges
//! of the two bands, so it runs downward for the usual top-down listing and
//! upward when the next layer sits higher.
//!
//! All input is validated before any primitive is built, so a call either
//! returns the complete primitive list or a [`LayoutError`].

use std::collections::HashMap;

use log::{debug, trace};
use thiserror::Error;

use strata_core::{
    color::Color,
    draw::{
        ConnectorHead, ConnectorPrimitive, ConnectorStyle, DrawPrimitive, GeometryBox,
        LabelPrimitive, LabelRole, StrokeDefinition, StrokeStyle, TextAnchor,
    },
    geometry::{Bounds, Point},
};

use crate::config::LayoutConfig;

/// Input description of one layer.
///
/// # Examples
///
/// ```
/// # use strata::{LayerSpec, color::Color};
/// let layer = LayerSpec::new("UI", Color::new("#1FB8CD").unwrap(), 1)
///     .with_components(["A", "B"]);
/// assert_eq!(layer.components(), ["A", "B"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSpec {
    name: String,
    color: Color,
    components: Vec<String>,
    slot: i32,
}

impl LayerSpec {
    /// Creates a layer with no components.
    pub fn new(name: impl Into<String>, color: Color, slot: i32) -> Self {
        Self {
            name: name.into(),
            color,
            components: Vec::new(),
            slot,
        }
    }

    /// Replaces the component labels (builder style).
    pub fn with_components<I, S>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.components = components.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Vertical position index. Higher slots are drawn higher.
    pub fn slot(&self) -> i32 {
        self.slot
    }
}

/// Largest accepted slot magnitude. Beyond it `f32` coordinates are too
/// coarse to keep `slot ± box_half_height` apart from neighbouring slots.
pub const MAX_SLOT_MAGNITUDE: u32 = 1 << 20;

/// Input validation failures reported by [`layout()`] and [`canvas()`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("cannot lay out an empty list of layers")]
    EmptyInput,

    #[error("layers `{first}` and `{second}` both use slot {slot}")]
    DuplicateSlot {
        slot: i32,
        first: String,
        second: String,
    },

    #[error("component #{index} of layer `{layer}` is empty")]
    InvalidComponent { layer: String, index: usize },

    #[error("layer #{index} has an empty name")]
    InvalidLayerName { index: usize },

    #[error("layer `{layer}` uses slot {slot}, slots must be within ±{}", MAX_SLOT_MAGNITUDE)]
    SlotOutOfRange { layer: String, slot: i32 },

    #[error("invalid layout configuration: {0}")]
    InvalidConfig(String),
}

/// Logical drawing area of a layout.
///
/// Horizontally the canvas is exactly `[0, canvas_width]`; vertically it
/// covers the slot range widened by `canvas_margin` on both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    bounds: Bounds,
}

impl Canvas {
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> f32 {
        self.bounds.width()
    }

    pub fn height(&self) -> f32 {
        self.bounds.height()
    }
}

/// Lays out `layers` and returns the primitives in drawing order.
///
/// # Errors
///
/// Returns [`LayoutError`] if `layers` is empty, two layers share a slot, a
/// layer name or component label is blank, or `config` is invalid.
///
/// # Examples
///
/// ```
/// # use strata::{LayerSpec, color::Color, config::LayoutConfig, layout};
/// let teal = Color::new("#1FB8CD").unwrap();
/// let layers = [
///     LayerSpec::new("UI", teal, 1).with_components(["A", "B"]),
///     LayerSpec::new("API", teal, 0),
/// ];
///
/// let primitives = layout(&layers, &LayoutConfig::default()).unwrap();
/// let connectors: Vec<_> = primitives.iter().filter_map(|p| p.as_connector()).collect();
/// assert_eq!(connectors.len(), 1);
/// ```
pub fn layout(
    layers: &[LayerSpec],
    config: &LayoutConfig,
) -> Result<Vec<DrawPrimitive>, LayoutError> {
    let params = validate(layers, config)?;
    Ok(params.primitives(layers))
}

/// Computes the canvas for `layers`, validating them exactly as [`layout()`] does.
///
/// # Errors
///
/// Returns the same [`LayoutError`]s as [`layout()`].
pub fn canvas(layers: &[LayerSpec], config: &LayoutConfig) -> Result<Canvas, LayoutError> {
    let params = validate(layers, config)?;
    Ok(params.canvas(layers))
}

/// Primitives and canvas from a single validation pass.
pub(crate) fn layout_with_canvas(
    layers: &[LayerSpec],
    config: &LayoutConfig,
) -> Result<(Vec<DrawPrimitive>, Canvas), LayoutError> {
    let params = validate(layers, config)?;
    Ok((params.primitives(layers), params.canvas(layers)))
}

fn validate<'a>(
    layers: &[LayerSpec],
    config: &'a LayoutConfig,
) -> Result<Params<'a>, LayoutError> {
    validate_layers(layers)?;
    Params::resolve(config)
}

fn validate_layers(layers: &[LayerSpec]) -> Result<(), LayoutError> {
    if layers.is_empty() {
        return Err(LayoutError::EmptyInput);
    }

    let mut seen_slots: HashMap<i32, &str> = HashMap::with_capacity(layers.len());

    for (index, layer) in layers.iter().enumerate() {
        if layer.name().trim().is_empty() {
            return Err(LayoutError::InvalidLayerName { index });
        }

        if layer.slot().unsigned_abs() > MAX_SLOT_MAGNITUDE {
            return Err(LayoutError::SlotOutOfRange {
                layer: layer.name().to_string(),
                slot: layer.slot(),
            });
        }

        if let Some(index) = layer
            .components()
            .iter()
            .position(|component| component.trim().is_empty())
        {
            return Err(LayoutError::InvalidComponent {
                layer: layer.name().to_string(),
                index,
            });
        }

        if let Some(first) = seen_slots.insert(layer.slot(), layer.name()) {
            return Err(LayoutError::DuplicateSlot {
                slot: layer.slot(),
                first: first.to_string(),
                second: layer.name().to_string(),
            });
        }
    }

    Ok(())
}

/// [`LayoutConfig`] with every value checked and every string parsed.
struct Params<'a> {
    width: f32,
    half_height: f32,
    opacity: f32,
    canvas_margin: f32,
    title_inset: f32,
    component_offset: f32,
    title_font_size: u16,
    component_font_size: u16,
    label_color: Color,
    separator: &'a str,
    max_label_chars: Option<usize>,
    connector: ConnectorStyle,
}

impl<'a> Params<'a> {
    fn resolve(config: &'a LayoutConfig) -> Result<Self, LayoutError> {
        let invalid = |msg: String| LayoutError::InvalidConfig(msg);

        let width = config.canvas_width();
        if !(width.is_finite() && width > 0.0) {
            return Err(invalid(format!(
                "canvas_width must be a positive number, got {width}"
            )));
        }

        // Unique integer slots are at least 1 apart, so bands cannot overlap
        let half_height = config.box_half_height();
        if !(half_height > 0.0 && half_height < 0.5) {
            return Err(invalid(format!(
                "box_half_height must be in (0, 0.5), got {half_height}"
            )));
        }

        let opacity = config.box_opacity();
        if !(0.0..=1.0).contains(&opacity) {
            return Err(invalid(format!(
                "box_opacity must be in [0, 1], got {opacity}"
            )));
        }

        let canvas_margin = config.canvas_margin();
        if !(canvas_margin.is_finite() && canvas_margin >= half_height) {
            return Err(invalid(format!(
                "canvas_margin must be at least box_half_height ({half_height}), \
                 got {canvas_margin}"
            )));
        }

        for (name, value) in [
            ("title_inset", config.title_inset()),
            ("component_offset", config.component_offset()),
        ] {
            if !value.is_finite() {
                return Err(invalid(format!("{name} must be finite, got {value}")));
            }
        }

        if config.title_font_size() == 0 || config.component_font_size() == 0 {
            return Err(invalid("font sizes must be greater than zero".to_string()));
        }

        if config.max_label_chars() == Some(0) {
            return Err(invalid("max_label_chars must be at least 1".to_string()));
        }

        let label_color = Color::new(config.label_color())
            .map_err(|err| invalid(format!("label_color: {err}")))?;

        let connector = config.connector();
        let connector_color = Color::new(connector.color())
            .map_err(|err| invalid(format!("connector color: {err}")))?;
        if !(connector.width().is_finite() && connector.width() > 0.0) {
            return Err(invalid(format!(
                "connector width must be a positive number, got {}",
                connector.width()
            )));
        }
        let connector_style: StrokeStyle = connector
            .style()
            .parse()
            .map_err(|err| invalid(format!("connector style: {err}")))?;
        let connector_head: ConnectorHead = connector
            .head()
            .parse()
            .map_err(|err| invalid(format!("connector head: {err}")))?;

        Ok(Self {
            width,
            half_height,
            opacity,
            canvas_margin,
            title_inset: config.title_inset(),
            component_offset: config.component_offset(),
            title_font_size: config.title_font_size(),
            component_font_size: config.component_font_size(),
            label_color,
            separator: config.component_separator(),
            max_label_chars: config.max_label_chars(),
            connector: ConnectorStyle::new(
                StrokeDefinition::new(connector_color, connector.width(), connector_style),
                connector_head,
            ),
        })
    }

    fn primitives(&self, layers: &[LayerSpec]) -> Vec<DrawPrimitive> {
        debug!(layers_count = layers.len(); "Laying out layers");

        let bands: Vec<Bounds> = layers.iter().map(|layer| self.band(layer)).collect();
        let mut primitives = Vec::with_capacity(layers.len() * 4);

        for (i, layer) in layers.iter().enumerate() {
            let band = bands[i];
            let center_y = band.center().y();

            primitives.push(GeometryBox::new(band, layer.color(), self.opacity).into());

            primitives.push(
                self.label(
                    LabelRole::Title,
                    Point::new(band.min_x() + self.title_inset, center_y),
                    layer.name().to_string(),
                )
                .into(),
            );

            primitives.push(
                self.label(
                    LabelRole::Components,
                    Point::new(band.min_x() + self.component_offset, center_y),
                    layer.components().join(self.separator),
                )
                .into(),
            );

            if let Some(next) = bands.get(i + 1) {
                primitives.push(self.connector(band, *next).into());
            }
        }

        trace!(primitives_count = primitives.len(); "Layout complete");

        primitives
    }

    fn canvas(&self, layers: &[LayerSpec]) -> Canvas {
        let (min_slot, max_slot) = layers
            .iter()
            .map(LayerSpec::slot)
            .fold((i32::MAX, i32::MIN), |(lo, hi), slot| (lo.min(slot), hi.max(slot)));

        let bounds = Bounds::from_corners(
            Point::new(0.0, min_slot as f32 - self.canvas_margin),
            Point::new(self.width, max_slot as f32 + self.canvas_margin),
        );

        Canvas { bounds }
    }

    fn band(&self, layer: &LayerSpec) -> Bounds {
        Bounds::horizontal_band(0.0, self.width, layer.slot() as f32, self.half_height)
    }

    fn label(&self, role: LabelRole, position: Point, text: String) -> LabelPrimitive {
        let font_size = match role {
            LabelRole::Title => self.title_font_size,
            LabelRole::Components => self.component_font_size,
        };

        LabelPrimitive::new(
            role,
            position,
            truncate_label(text, self.max_label_chars),
            font_size,
            self.label_color,
        )
        .with_anchor(TextAnchor::Start)
    }

    fn connector(&self, current: Bounds, next: Bounds) -> ConnectorPrimitive {
        let anchor = Point::new(self.width / 2.0, 0.0);
        let (from, to) = if next.center().y() < current.center().y() {
            (current.min_y(), next.max_y())
        } else {
            (current.max_y(), next.min_y())
        };

        ConnectorPrimitive::new(
            anchor.with_y(from),
            anchor.with_y(to),
            self.connector.clone(),
        )
    }
}

/// Cuts `text` to `max_chars` characters, the last of which becomes `…`.
fn truncate_label(text: String, max_chars: Option<usize>) -> String {
    match max_chars {
        Some(max) if text.chars().count() > max => {
            let mut truncated: String = text.chars().take(max.saturating_sub(1)).collect();
            truncated.push('…');
            truncated
        }
        _ => text,
    }
}
