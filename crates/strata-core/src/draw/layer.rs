//! Z-ordered collection of SVG nodes.
//!
//! Primitives arrive from the layout engine in per-layer order (band, title,
//! components, connector). Rendered in that order, the band of the *next*
//! layer would paint over the arrowhead of the previous connector. Collecting
//! nodes into a [`LayeredOutput`] and emitting them by [`RenderLayer`] fixes
//! the stacking without reordering the primitive list itself.
//!
//! # Example
//!
//! ```
//! # use strata_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Line, Rectangle};
//! let mut output = LayeredOutput::new();
//!
//! output.add_to_layer(RenderLayer::Connector, Box::new(Line::new()));
//! output.add_to_layer(RenderLayer::Band, Box::new(Rectangle::new()));
//!
//! // Bands are emitted before connectors regardless of insertion order
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas background
    Background,
    /// Filled layer bands
    Band,
    /// Connectors between adjacent bands
    Connector,
    /// Layer titles, component lists and the diagram title
    Text,
}

impl RenderLayer {
    /// Returns the value used for the `data-layer` attribute of this layer's group.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Band => "band",
            Self::Connector => "connector",
            Self::Text => "text",
        }
    }
}

/// SVG nodes tagged with the layer they belong to.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to `layer`. Nodes keep their insertion order within a layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the output and returns one `<g data-layer="...">` group per
    /// non-empty layer, bottom layer first.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable: keeps insertion order inside each layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svg::node::element::{Line, Rectangle};

    fn render_to_string(output: LayeredOutput) -> String {
        output
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect()
    }

    #[test]
    fn test_layered_output_new_is_empty() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_groups_by_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Band, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Connector, Box::new(Line::new()));
        output.add_to_layer(RenderLayer::Band, Box::new(Rectangle::new()));

        assert_eq!(output.render().len(), 2);
    }

    #[test]
    fn test_layered_output_orders_bottom_to_top() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Connector, Box::new(Line::new()));
        output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));

        let rendered = render_to_string(output);
        let background = rendered.find("data-layer=\"background\"").unwrap();
        let connector = rendered.find("data-layer=\"connector\"").unwrap();
        let text = rendered.find("data-layer=\"text\"").unwrap();
        assert!(background < connector);
        assert!(connector < text);
    }
}
