//! Stroke definitions for connectors and band outlines.
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"#333333"`, `1` |
//! | `width` | `stroke-width` | `2.0` |
//! | `style` | `stroke-dasharray` | `"5,5"` |
//!
//! Use [`apply_stroke!`](crate::apply_stroke!) to set all of them on an SVG element:
//!
//! ```
//! use strata_core::draw::StrokeDefinition;
//! use strata_core::color::Color;
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::solid(Color::new("#333333").unwrap(), 2.0);
//! let line = svg_element::Line::new().set("x1", 0).set("x2", 10);
//! let line = strata_core::apply_stroke!(line, &stroke);
//! ```

use std::str::FromStr;

use crate::color::Color;

/// Line pattern of a stroke.
///
/// | Variant | `stroke-dasharray` |
/// |---------|--------------------|
/// | `Solid` | none |
/// | `Dashed` | `5,5` |
/// | `Dotted` | `2,3` |
/// | `Custom(p)` | `p` |
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    /// Raw SVG dasharray such as `"10,5,2,5"`
    Custom(String),
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            "" => Err("empty stroke style, valid values: solid, dashed, dotted or a dasharray".to_string()),
            pattern => {
                let values: Vec<&str> = pattern
                    .split([',', ' '])
                    .filter(|part| !part.is_empty())
                    .collect();
                let valid = !values.is_empty()
                    && values
                        .iter()
                        .all(|part| part.parse::<f32>().is_ok_and(|v| v.is_finite() && v >= 0.0));
                if valid {
                    Ok(Self::Custom(pattern.to_string()))
                } else {
                    Err(format!(
                        "invalid stroke style `{pattern}`, valid values: solid, dashed, dotted or a dasharray"
                    ))
                }
            }
        }
    }
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5".to_string()),
            Self::Dotted => Some("2,3".to_string()),
            Self::Custom(pattern) => Some(pattern.clone()),
        }
    }
}

/// Color, width and pattern of a line.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a stroke with an explicit style.
    pub fn new(color: Color, width: f32, style: StrokeStyle) -> Self {
        Self {
            color,
            width,
            style,
        }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::solid(Color::default(), 1.0)
    }
}

/// Apply color, opacity, width and (for non-solid styles) dasharray to an SVG element.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}
