//! Arrowhead markers for connectors.

use svg::node::element::{Definitions, Marker, Path};

use strata_core::color::Color;

/// Creates one arrowhead marker per color.
pub fn create_marker_definitions<'a, I>(colors: I) -> Definitions
where
    I: IntoIterator<Item = &'a Color>,
{
    colors
        .into_iter()
        .fold(Definitions::new(), |defs, color| {
            let arrow = Marker::new()
                .set("id", marker_id(color))
                .set("viewBox", "0 0 10 10")
                .set("refX", 9)
                .set("refY", 5)
                .set("markerWidth", 6)
                .set("markerHeight", 6)
                .set("orient", "auto")
                .add(
                    Path::new()
                        .set("d", "M 0 0 L 10 5 L 0 10 z")
                        .set("fill", color.to_string()),
                );

            defs.add(arrow)
        })
}

/// Returns the `marker-end` reference for an arrowhead of `color`.
pub fn marker_reference(color: &Color) -> String {
    format!("url(#{})", marker_id(color))
}

fn marker_id(color: &Color) -> String {
    format!("arrow-{}", color.to_id_safe_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_reference_matches_definition() {
        let color = Color::new("#333333").unwrap();
        let defs = create_marker_definitions([&color]).to_string();

        let reference = marker_reference(&color);
        let id = reference
            .strip_prefix("url(#")
            .and_then(|r| r.strip_suffix(')'))
            .unwrap();
        assert!(defs.contains(&format!("id=\"{id}\"")), "{defs}");
    }

    #[test]
    fn test_one_marker_per_color() {
        let colors = [Color::new("black").unwrap(), Color::new("red").unwrap()];
        let defs = create_marker_definitions(&colors).to_string();
        assert_eq!(defs.matches("<marker").count(), 2);
    }
}
