//! Drawable output of the layout engine.
//!
//! The layout engine emits a flat, ordered list of [`DrawPrimitive`] values.
//! Renderers consume that list; the SVG renderer additionally uses
//! [`LayeredOutput`] to keep connectors above bands and text above both.

mod layer;
mod primitive;
mod stroke;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use primitive::{
    ConnectorHead, ConnectorPrimitive, ConnectorStyle, DrawPrimitive, GeometryBox, LabelPrimitive,
    LabelRole, TextAnchor,
};
pub use stroke::{StrokeDefinition, StrokeStyle};
