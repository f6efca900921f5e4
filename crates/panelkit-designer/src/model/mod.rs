use serde::{Deserialize, Serialize};

mod cutout;
mod outline;

pub use cutout::{Cutout, CutoutId};
pub use outline::Outline;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned rectangle described by its center and half extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub center: Point,
    pub half_width: f64,
    pub half_height: f64,
}

impl BoundingBox {
    pub fn new(center: Point, half_width: f64, half_height: f64) -> Self {
        Self {
            center,
            half_width,
            half_height,
        }
    }

    /// Builds a box from its lower-left corner and full size.
    pub fn from_corner(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(
            Point::new(x + width / 2.0, y + height / 2.0),
            width / 2.0,
            height / 2.0,
        )
    }

    pub fn min_x(&self) -> f64 {
        self.center.x - self.half_width
    }

    pub fn max_x(&self) -> f64 {
        self.center.x + self.half_width
    }

    pub fn min_y(&self) -> f64 {
        self.center.y - self.half_height
    }

    pub fn max_y(&self) -> f64 {
        self.center.y + self.half_height
    }

    /// Corners in counter-clockwise order starting at the lower-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x(), self.min_y()),
            Point::new(self.max_x(), self.min_y()),
            Point::new(self.max_x(), self.max_y()),
            Point::new(self.min_x(), self.max_y()),
        ]
    }

    /// The four boundary edges as `(start, end)` segments.
    pub fn edges(&self) -> [(Point, Point); 4] {
        let [a, b, c, d] = self.corners();
        [(a, b), (b, c), (c, d), (d, a)]
    }
}

/// Screen-space rectangle of the hosting canvas.
///
/// `left`/`top` locate the canvas on screen; pointer events arrive in the
/// same screen space (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

impl Default for CanvasRect {
    fn default() -> Self {
        Self::new(
            0.0,
            0.0,
            panelkit_core::constants::DEFAULT_CANVAS_WIDTH,
            panelkit_core::constants::DEFAULT_CANVAS_HEIGHT,
        )
    }
}
