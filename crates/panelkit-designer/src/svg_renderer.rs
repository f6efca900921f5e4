//! SVG renderer for the panel layout
//! Renders the outline and every cutout as an SVG document
//! Features:
//! - Outline rectangle in canvas pixels
//! - Cutout rings with clash and selection classes
//! - Keep-out zones hidden unless their zone is visible

use crate::model::Cutout;
use crate::placement::PlacementModel;
use crate::visuals::VisualRegistry;

/// Render a full circle as four SVG arc segments
pub fn circle_path(cx: f64, cy: f64, radius: f64) -> String {
    format!(
        "M {} {} A {} {} 0 0 1 {} {} A {} {} 0 0 1 {} {} A {} {} 0 0 1 {} {} A {} {} 0 0 1 {} {} Z",
        cx + radius, cy,
        radius, radius, cx, cy + radius,
        radius, radius, cx - radius, cy,
        radius, radius, cx, cy - radius,
        radius, radius, cx + radius, cy
    )
}

/// Render one cutout group. Node ids come from the registry when the
/// cutout has a visual.
pub fn render_cutout(model: &PlacementModel, registry: &VisualRegistry, cutout: &Cutout) -> String {
    let origin = model.viewport().panel_to_canvas(cutout.position());
    let visual = registry.visual(cutout.id());

    let mut classes = vec!["cutout"];
    if cutout.has_clash() {
        classes.push("clash");
    }
    if cutout.is_selected() {
        classes.push("selected");
    }

    let id_attr = |node: Option<&String>| {
        node.map(|id| format!(" id=\"{}\"", id)).unwrap_or_default()
    };

    let mut svg = format!(
        "<g class=\"{}\" data-cutout=\"{}\"{}>\n",
        classes.join(" "),
        cutout.id(),
        id_attr(visual.map(|v| &v.group))
    );

    // Non-numeric sizes draw nothing.
    if !cutout.diameter().is_nan() {
        svg.push_str(&format!(
            "  <path class=\"cutout-outline\"{} d=\"{}\"/>\n",
            id_attr(visual.map(|v| &v.outline_ring)),
            circle_path(origin.x, origin.y, cutout.radius())
        ));
        let display = if cutout.is_zone_visible() {
            ""
        } else {
            " style=\"display:none\""
        };
        svg.push_str(&format!(
            "  <path class=\"cutout-keepoutzone\"{}{} d=\"{}\"/>\n",
            id_attr(visual.map(|v| &v.keepout_ring)),
            display,
            circle_path(origin.x, origin.y, cutout.keepout_radius())
        ));
    }

    svg.push_str("</g>\n");
    svg
}

/// Render the outline and cutouts as a standalone SVG document
pub fn render_panel(model: &PlacementModel, registry: &VisualRegistry) -> String {
    let canvas = model.viewport().canvas();
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        canvas.width, canvas.height, canvas.width, canvas.height
    );

    if let Some(outline) = model.outline() {
        let top_left = outline.top_left();
        svg.push_str(&format!(
            "<rect class=\"outline\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/>\n",
            top_left.x, top_left.y, outline.width, outline.height
        ));
    }

    for cutout in model.cutouts() {
        svg.push_str(&render_cutout(model, registry, cutout));
    }

    svg.push_str("</svg>\n");
    svg
}
