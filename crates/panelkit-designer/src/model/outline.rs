use serde::{Deserialize, Serialize};

use super::{BoundingBox, CanvasRect, Point};

/// Rectangular panel boundary.
///
/// Dimensions are taken as given; a non-positive width or height is
/// accepted and simply makes every placement clash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub width: f64,
    pub height: f64,
    /// Lower-left corner of the outline inside the canvas, in canvas
    /// pixels (origin top-left, y down).
    origin_offset: Point,
}

impl Outline {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            origin_offset: Point::new(0.0, height),
        }
    }

    /// Centers the outline inside the canvas.
    pub fn attach(&mut self, canvas: &CanvasRect) {
        let x_offset = (canvas.width - self.width) / 2.0;
        let y_offset = (canvas.height - self.height) / 2.0;
        self.origin_offset = Point::new(x_offset, y_offset + self.height);
    }

    pub fn origin_offset(&self) -> Point {
        self.origin_offset
    }

    /// Top-left corner in canvas pixels, where a renderer anchors the rect.
    pub fn top_left(&self) -> Point {
        Point::new(self.origin_offset.x, self.origin_offset.y - self.height)
    }

    /// Bounding box in panel-local coordinates.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_corner(0.0, 0.0, self.width, self.height)
    }
}
