//! Coordinate transformation between pointer input and the panel.
//!
//! Handles conversion between screen coordinates (pointer events, origin
//! top-left, y down) and panel-local coordinates (origin at the outline's
//! lower-left corner, y up).

use std::fmt;

use crate::model::{CanvasRect, Point};

/// Maps screen positions onto the current panel.
///
/// The canvas rectangle is captured once; if the hosting canvas moves or
/// resizes, a new viewport (and model) must be built.
#[derive(Debug, Clone)]
pub struct Viewport {
    canvas: CanvasRect,
    /// Panel origin in canvas pixels.
    origin: Point,
}

impl Viewport {
    /// Creates a viewport whose panel origin sits at the canvas bottom-left
    /// until an outline is attached.
    pub fn new(canvas: CanvasRect) -> Self {
        Self {
            canvas,
            origin: Point::new(0.0, canvas.height),
        }
    }

    /// Gets the captured canvas rectangle.
    pub fn canvas(&self) -> &CanvasRect {
        &self.canvas
    }

    /// Gets the panel origin in canvas pixels.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Moves the panel origin (typically when a new outline is attached).
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Converts screen coordinates to canvas pixels (still y down).
    pub fn screen_to_canvas(&self, screen_x: f64, screen_y: f64) -> Point {
        Point::new(screen_x - self.canvas.left, screen_y - self.canvas.top)
    }

    /// Converts screen coordinates to panel-local coordinates.
    ///
    /// Formula:
    /// ```text
    /// panel_x = (screen_x - canvas_left) - origin_x
    /// panel_y = origin_y - (screen_y - canvas_top)   // Flip Y-axis
    /// ```
    pub fn screen_to_panel(&self, screen_x: f64, screen_y: f64) -> Point {
        let canvas = self.screen_to_canvas(screen_x, screen_y);
        self.canvas_to_panel(canvas)
    }

    /// Converts canvas pixels to panel-local coordinates.
    pub fn canvas_to_panel(&self, canvas: Point) -> Point {
        Point::new(canvas.x - self.origin.x, self.origin.y - canvas.y)
    }

    /// Converts panel-local coordinates to canvas pixels.
    pub fn panel_to_canvas(&self, panel: Point) -> Point {
        Point::new(panel.x + self.origin.x, self.origin.y - panel.y)
    }

    /// Converts panel-local coordinates back to screen coordinates.
    pub fn panel_to_screen(&self, panel: Point) -> (f64, f64) {
        let canvas = self.panel_to_canvas(panel);
        (canvas.x + self.canvas.left, canvas.y + self.canvas.top)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Canvas: {:.0}x{:.0} at ({:.1}, {:.1}) | Origin: ({:.1}, {:.1})",
            self.canvas.width,
            self.canvas.height,
            self.canvas.left,
            self.canvas.top,
            self.origin.x,
            self.origin.y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(CanvasRect::default())
    }
}
