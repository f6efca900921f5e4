//! Layout constants shared across the workspace.

/// Keep-out zone diameter as a multiple of the nominal cutout diameter.
pub const KEEPOUT_FACTOR: f64 = 2.0;

/// Pointer hit radius as a multiple of the cutout's visual extent.
pub const HIT_RADIUS_FACTOR: f64 = 0.7;

/// Default hosting canvas size in screen pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

/// Default panel size in model units (mm).
pub const DEFAULT_PANEL_WIDTH: f64 = 200.0;
pub const DEFAULT_PANEL_HEIGHT: f64 = 100.0;

/// Default nominal cutout diameter, as entered in the size field.
pub const DEFAULT_CUTOUT_SIZE: &str = "10";

/// Message shown when a placement is refused.
pub const CLASH_MESSAGE: &str = "Cutout has clashes, unable to place.";
