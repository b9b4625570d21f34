//! The primitive set produced by the layout engine.
//!
//! Every primitive is expressed in logical, Y-up coordinates (see
//! [`geometry`](crate::geometry)). Primitives are plain values: they carry no
//! rendering state and compare by value, so two layouts of the same input can
//! be checked for deep equality.

use std::str::FromStr;

use crate::{
    color::Color,
    draw::StrokeDefinition,
    geometry::{Bounds, Point},
};

/// A filled rectangle covering one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryBox {
    bounds: Bounds,
    fill: Color,
    opacity: f32,
}

impl GeometryBox {
    pub fn new(bounds: Bounds, fill: Color, opacity: f32) -> Self {
        Self {
            bounds,
            fill,
            opacity,
        }
    }

    /// Returns the rectangle covered by this box.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Returns the fill color.
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Returns the fill opacity between 0.0 and 1.0.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

/// Horizontal anchoring of a label relative to its position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// The text starts at the position
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    /// Returns the SVG `text-anchor` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Which of the two per-layer labels a [`LabelPrimitive`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRole {
    /// The layer name
    Title,
    /// The joined component list
    Components,
}

/// A single line of text anchored at a point.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPrimitive {
    position: Point,
    text: String,
    font_size: u16,
    color: Color,
    anchor: TextAnchor,
    role: LabelRole,
}

impl LabelPrimitive {
    pub fn new(
        role: LabelRole,
        position: Point,
        text: impl Into<String>,
        font_size: u16,
        color: Color,
    ) -> Self {
        Self {
            position,
            text: text.into(),
            font_size,
            color,
            anchor: TextAnchor::default(),
            role,
        }
    }

    /// Sets the anchor (builder style).
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    pub fn role(&self) -> LabelRole {
        self.role
    }
}

/// Decoration at the `to` end of a connector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorHead {
    /// Filled triangular arrowhead
    #[default]
    Arrow,
    /// Plain line end
    None,
}

impl FromStr for ConnectorHead {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "arrow" => Ok(Self::Arrow),
            "none" => Ok(Self::None),
            other => Err(format!(
                "invalid connector head `{other}`, valid values: arrow, none"
            )),
        }
    }
}

/// Visual style of a connector.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorStyle {
    stroke: StrokeDefinition,
    head: ConnectorHead,
}

impl ConnectorStyle {
    pub fn new(stroke: StrokeDefinition, head: ConnectorHead) -> Self {
        Self { stroke, head }
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn head(&self) -> ConnectorHead {
        self.head
    }
}

impl Default for ConnectorStyle {
    /// A 2px `#333333` line with an arrowhead.
    fn default() -> Self {
        let color = Color::new("#333333").expect("'#333333' is a valid CSS color");
        Self::new(StrokeDefinition::solid(color, 2.0), ConnectorHead::Arrow)
    }
}

/// A directed segment joining two adjacent layers.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorPrimitive {
    from: Point,
    to: Point,
    style: ConnectorStyle,
}

impl ConnectorPrimitive {
    pub fn new(from: Point, to: Point, style: ConnectorStyle) -> Self {
        Self { from, to, style }
    }

    /// Start of the connector, on the edge of the earlier layer.
    pub fn from(&self) -> Point {
        self.from
    }

    /// End of the connector, on the edge of the later layer. Arrowheads point here.
    pub fn to(&self) -> Point {
        self.to
    }

    pub fn style(&self) -> &ConnectorStyle {
        &self.style
    }
}

/// Any primitive the layout engine can emit.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    Box(GeometryBox),
    Label(LabelPrimitive),
    Connector(ConnectorPrimitive),
}

impl DrawPrimitive {
    /// Returns the box if this primitive is one.
    pub fn as_box(&self) -> Option<&GeometryBox> {
        match self {
            Self::Box(geometry_box) => Some(geometry_box),
            _ => None,
        }
    }

    /// Returns the label if this primitive is one.
    pub fn as_label(&self) -> Option<&LabelPrimitive> {
        match self {
            Self::Label(label) => Some(label),
            _ => None,
        }
    }

    /// Returns the connector if this primitive is one.
    pub fn as_connector(&self) -> Option<&ConnectorPrimitive> {
        match self {
            Self::Connector(connector) => Some(connector),
            _ => None,
        }
    }
}

impl From<GeometryBox> for DrawPrimitive {
    fn from(value: GeometryBox) -> Self {
        Self::Box(value)
    }
}

impl From<LabelPrimitive> for DrawPrimitive {
    fn from(value: LabelPrimitive) -> Self {
        Self::Label(value)
    }
}

impl From<ConnectorPrimitive> for DrawPrimitive {
    fn from(value: ConnectorPrimitive) -> Self {
        Self::Connector(value)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_label_defaults_to_start_anchor() {
        let label = LabelPrimitive::new(
            LabelRole::Title,
            Point::new(0.5, 6.0),
            "UI Layer",
            14,
            Color::new("white").unwrap(),
        );

        assert_eq!(label.anchor(), TextAnchor::Start);
        assert_eq!(label.text(), "UI Layer");
        assert_eq!(label.role(), LabelRole::Title);
        assert_eq!(label.with_anchor(TextAnchor::Middle).anchor(), TextAnchor::Middle);
    }

    #[test]
    fn test_text_anchor_svg_values() {
        assert_eq!(TextAnchor::Start.to_svg_value(), "start");
        assert_eq!(TextAnchor::Middle.to_svg_value(), "middle");
        assert_eq!(TextAnchor::End.to_svg_value(), "end");
    }

    #[test]
    fn test_connector_head_from_str() {
        assert_eq!("arrow".parse::<ConnectorHead>().unwrap(), ConnectorHead::Arrow);
        assert_eq!("none".parse::<ConnectorHead>().unwrap(), ConnectorHead::None);

        let err = "circle".parse::<ConnectorHead>().unwrap_err();
        assert!(err.contains("invalid connector head"));
    }

    #[test]
    fn test_connector_style_default() {
        let style = ConnectorStyle::default();
        assert_approx_eq!(f32, style.stroke().width(), 2.0);
        assert_eq!(style.head(), ConnectorHead::Arrow);
    }

    #[test]
    fn test_primitive_accessors() {
        let geometry_box = GeometryBox::new(
            Bounds::horizontal_band(0.0, 10.0, 1.0, 0.4),
            Color::new("#1FB8CD").unwrap(),
            0.7,
        );
        let primitive = DrawPrimitive::from(geometry_box.clone());

        assert_eq!(primitive.as_box(), Some(&geometry_box));
        assert!(primitive.as_label().is_none());
        assert!(primitive.as_connector().is_none());
    }
}
