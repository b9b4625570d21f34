//! SVG rendering of laid out diagrams.
//!
//! The renderer maps the logical, Y-up canvas onto a pixel grid with Y
//! pointing down. A diagram title, when present, gets its own header band
//! above the canvas; the canvas itself is widened by the configured
//! horizontal margin on both sides.

mod markers;

use std::collections::BTreeMap;

use log::debug;
use svg::{Document, node::element as svg_element};

use strata_core::{
    apply_stroke,
    color::Color,
    draw::{
        ConnectorHead, ConnectorPrimitive, DrawPrimitive, GeometryBox, LabelPrimitive, LabelRole,
        LayeredOutput, RenderLayer, StrokeDefinition,
    },
    geometry::{Bounds, Point},
};

use crate::{LaidOutDiagram, config::StyleConfig, export};

/// Header height as a multiple of the title font size.
const TITLE_BAND_FACTOR: f32 = 2.5;

/// Renders [`LaidOutDiagram`]s as SVG documents.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    background: Color,
    box_outline: StrokeDefinition,
    font_family: String,
    pixels_per_unit: f32,
    horizontal_margin: f32,
    title_font_size: u16,
}

impl SvgRenderer {
    /// Creates a renderer from the style section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Style`] if a color does not parse or a numeric
    /// setting is out of range.
    pub fn new(style: &StyleConfig) -> Result<Self, export::Error> {
        let background = Color::new(style.background_color())
            .map_err(|err| export::Error::Style(format!("background_color: {err}")))?;
        let outline_color = Color::new(style.box_outline_color())
            .map_err(|err| export::Error::Style(format!("box_outline_color: {err}")))?;

        let outline_width = style.box_outline_width();
        if !(outline_width.is_finite() && outline_width >= 0.0) {
            return Err(export::Error::Style(format!(
                "box_outline_width must be zero or positive, got {outline_width}"
            )));
        }

        let pixels_per_unit = style.pixels_per_unit();
        if !(pixels_per_unit.is_finite() && pixels_per_unit > 0.0) {
            return Err(export::Error::Style(format!(
                "pixels_per_unit must be a positive number, got {pixels_per_unit}"
            )));
        }

        let horizontal_margin = style.horizontal_margin();
        if !(horizontal_margin.is_finite() && horizontal_margin >= 0.0) {
            return Err(export::Error::Style(format!(
                "horizontal_margin must be zero or positive, got {horizontal_margin}"
            )));
        }

        if style.title_font_size() == 0 {
            return Err(export::Error::Style(
                "title_font_size must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            background,
            box_outline: StrokeDefinition::solid(outline_color, outline_width),
            font_family: style.font_family().to_string(),
            pixels_per_unit,
            horizontal_margin,
            title_font_size: style.title_font_size(),
        })
    }

    /// Renders `diagram` into an SVG document.
    pub fn render(&self, diagram: &LaidOutDiagram) -> Document {
        let viewport = Viewport::new(
            diagram.canvas().bounds().expand(self.horizontal_margin, 0.0),
            self.pixels_per_unit,
            self.header_height(diagram.title()),
        );
        let (width, height) = viewport.pixel_size();

        debug!(width, height; "Rendering SVG");

        let mut output = LayeredOutput::new();

        output.add_to_layer(
            RenderLayer::Background,
            Box::new(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", self.background.to_string())
                    .set("fill-opacity", self.background.alpha()),
            ),
        );

        if let Some(title) = diagram.title() {
            output.add_to_layer(RenderLayer::Text, self.render_title(title, width, &viewport));
        }

        for primitive in diagram.primitives() {
            match primitive {
                DrawPrimitive::Box(geometry_box) => {
                    output.add_to_layer(RenderLayer::Band, self.render_box(geometry_box, &viewport))
                }
                DrawPrimitive::Label(label) => {
                    output.add_to_layer(RenderLayer::Text, self.render_label(label, &viewport))
                }
                DrawPrimitive::Connector(connector) => output.add_to_layer(
                    RenderLayer::Connector,
                    self.render_connector(connector, &viewport),
                ),
            }
        }

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        let arrow_colors = arrowhead_colors(diagram.primitives());
        if !arrow_colors.is_empty() {
            doc = doc.add(markers::create_marker_definitions(arrow_colors.values()));
        }

        output
            .render()
            .into_iter()
            .fold(doc, |doc, node| doc.add(node))
    }

    fn header_height(&self, title: Option<&str>) -> f32 {
        match title {
            Some(_) => f32::from(self.title_font_size) * TITLE_BAND_FACTOR,
            None => 0.0,
        }
    }

    fn render_title(&self, title: &str, width: f32, viewport: &Viewport) -> Box<dyn svg::Node> {
        Box::new(
            svg_element::Text::new(title)
                .set("x", width / 2.0)
                .set("y", viewport.header_height / 2.0)
                .set("text-anchor", "middle")
                .set("dominant-baseline", "central")
                .set("font-family", self.font_family.as_str())
                .set("font-size", self.title_font_size)
                .set("font-weight", "bold"),
        )
    }

    fn render_box(&self, geometry_box: &GeometryBox, viewport: &Viewport) -> Box<dyn svg::Node> {
        let bounds = viewport.to_pixels(geometry_box.bounds());
        let fill = geometry_box.fill();

        let rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("fill", fill.to_string())
            .set("fill-opacity", geometry_box.opacity() * fill.alpha());

        Box::new(apply_stroke!(rect, &self.box_outline))
    }

    fn render_label(&self, label: &LabelPrimitive, viewport: &Viewport) -> Box<dyn svg::Node> {
        let position = viewport.to_pixel(label.position());
        let color = label.color();

        let mut text = svg_element::Text::new(label.text())
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", label.anchor().to_svg_value())
            .set("dominant-baseline", "central")
            .set("font-family", self.font_family.as_str())
            .set("font-size", label.font_size())
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha());

        if label.role() == LabelRole::Title {
            text = text.set("font-weight", "bold");
        }

        Box::new(text)
    }

    fn render_connector(
        &self,
        connector: &ConnectorPrimitive,
        viewport: &Viewport,
    ) -> Box<dyn svg::Node> {
        let from = viewport.to_pixel(connector.from());
        let to = viewport.to_pixel(connector.to());
        let style = connector.style();

        let line = svg_element::Line::new()
            .set("x1", from.x())
            .set("y1", from.y())
            .set("x2", to.x())
            .set("y2", to.y());
        let line = apply_stroke!(line, style.stroke());

        match style.head() {
            ConnectorHead::Arrow => Box::new(line.set(
                "marker-end",
                markers::marker_reference(&style.stroke().color()),
            )),
            ConnectorHead::None => Box::new(line),
        }
    }
}

/// Distinct colors of connectors that end in an arrowhead, keyed by marker id
/// so the definitions come out in a stable order.
fn arrowhead_colors(primitives: &[DrawPrimitive]) -> BTreeMap<String, Color> {
    primitives
        .iter()
        .filter_map(DrawPrimitive::as_connector)
        .filter(|connector| connector.style().head() == ConnectorHead::Arrow)
        .map(|connector| {
            let color = connector.style().stroke().color();
            (color.to_id_safe_string(), color)
        })
        .collect()
}

/// Logical-to-pixel transform.
#[derive(Debug, Clone, Copy)]
struct Viewport {
    logical: Bounds,
    pixels_per_unit: f32,
    header_height: f32,
}

impl Viewport {
    fn new(logical: Bounds, pixels_per_unit: f32, header_height: f32) -> Self {
        Self {
            logical,
            pixels_per_unit,
            header_height,
        }
    }

    fn pixel_size(&self) -> (f32, f32) {
        let size = self.logical.to_size().scale(self.pixels_per_unit);
        (size.width(), size.height() + self.header_height)
    }

    fn to_pixel(&self, point: Point) -> Point {
        Point::new(
            (point.x() - self.logical.min_x()) * self.pixels_per_unit,
            self.header_height + (self.logical.max_y() - point.y()) * self.pixels_per_unit,
        )
    }

    /// Maps logical bounds to pixel bounds; the logical upper edge becomes the
    /// pixel `min_y`.
    fn to_pixels(&self, bounds: Bounds) -> Bounds {
        Bounds::from_corners(
            self.to_pixel(Point::new(bounds.min_x(), bounds.max_y())),
            self.to_pixel(Point::new(bounds.max_x(), bounds.min_y())),
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::{LayerSpec, config::LayoutConfig};

    fn diagram(title: Option<&str>) -> LaidOutDiagram {
        let teal = Color::new("#1FB8CD").unwrap();
        let layers = [
            LayerSpec::new("UI", teal, 1).with_components(["A", "B"]),
            LayerSpec::new("API", teal, 0),
        ];
        LaidOutDiagram::new(title, &layers, &LayoutConfig::default()).unwrap()
    }

    fn render(title: Option<&str>) -> String {
        SvgRenderer::new(&StyleConfig::default())
            .unwrap()
            .render(&diagram(title))
            .to_string()
    }

    #[test]
    fn test_viewport_flips_y() {
        let logical = Bounds::from_corners(Point::new(-0.5, -1.0), Point::new(10.5, 2.0));
        let viewport = Viewport::new(logical, 10.0, 0.0);

        let top_left = viewport.to_pixel(Point::new(-0.5, 2.0));
        assert_approx_eq!(f32, top_left.x(), 0.0);
        assert_approx_eq!(f32, top_left.y(), 0.0);

        let bottom_right = viewport.to_pixel(Point::new(10.5, -1.0));
        assert_approx_eq!(f32, bottom_right.x(), 110.0);
        assert_approx_eq!(f32, bottom_right.y(), 30.0);

        let (width, height) = viewport.pixel_size();
        assert_approx_eq!(f32, width, 110.0);
        assert_approx_eq!(f32, height, 30.0);
    }

    #[test]
    fn test_viewport_header_offsets_content() {
        let logical = Bounds::from_corners(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let viewport = Viewport::new(logical, 100.0, 45.0);

        let bounds = viewport.to_pixels(Bounds::horizontal_band(0.0, 1.0, 0.5, 0.25));
        assert_approx_eq!(f32, bounds.min_y(), 70.0);
        assert_approx_eq!(f32, bounds.max_y(), 120.0);
        assert_approx_eq!(f32, viewport.pixel_size().1, 145.0);
    }

    #[test]
    fn test_render_contains_every_primitive() {
        let svg = render(None);

        assert!(svg.contains("<svg"), "{svg}");
        // Background plus two bands
        assert_eq!(svg.matches("<rect").count(), 3);
        assert_eq!(svg.matches("<line").count(), 1);
        assert_eq!(svg.matches("<text").count(), 4);
        assert!(svg.contains("A • B"));
        assert!(svg.contains("marker-end"));
        assert_eq!(svg.matches("<marker").count(), 1);
        assert_eq!(svg.matches("font-weight=\"bold\"").count(), 2);
    }

    #[test]
    fn test_render_layers_in_z_order() {
        let svg = render(None);
        let band = svg.find("data-layer=\"band\"").unwrap();
        let connector = svg.find("data-layer=\"connector\"").unwrap();
        let text = svg.find("data-layer=\"text\"").unwrap();
        assert!(band < connector && connector < text);
    }

    #[test]
    fn test_render_title() {
        let svg = render(Some("Camera App"));
        assert!(svg.contains("Camera App"));
        assert_eq!(svg.matches("<text").count(), 5);
    }

    #[test]
    fn test_no_markers_without_arrowheads() {
        let teal = Color::new("#1FB8CD").unwrap();
        let layers = [LayerSpec::new("Only", teal, 0)];
        let diagram = LaidOutDiagram::new(None, &layers, &LayoutConfig::default()).unwrap();
        let svg = SvgRenderer::new(&StyleConfig::default())
            .unwrap()
            .render(&diagram)
            .to_string();

        assert!(!svg.contains("<marker"));
        assert!(!svg.contains("<line"));
    }

    #[test]
    fn test_invalid_style() {
        let style = StyleConfig::default().with_pixels_per_unit(0.0);
        assert!(matches!(
            SvgRenderer::new(&style),
            Err(export::Error::Style(_))
        ));

        let style = StyleConfig::default().with_background_color("nope");
        assert!(SvgRenderer::new(&style).is_err());
    }
}
