//! Geometry kernel for clash detection.
//!
//! Pure functions over panel-local coordinates. All comparisons are
//! inclusive (touching counts as a clash) and no tolerance is applied, so
//! a `NaN` radius makes every test return `false`.

use crate::model::{BoundingBox, Point};

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance_to(&b)
}

/// True when two circles overlap or touch.
pub fn circles_overlap(c1: Point, r1: f64, c2: Point, r2: f64) -> bool {
    distance(c1, c2) <= r1 + r2
}

/// Shortest distance from `p` to the segment `a`-`b`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return distance(p, a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    distance(p, Point::new(a.x + t * dx, a.y + t * dy))
}

/// True when the circumference meets the segment `a`-`b`.
///
/// The distance from the center to a point on the segment varies
/// continuously between its minimum and the farthest endpoint, so the
/// circle crosses the segment exactly when the radius lies in that range.
pub fn circle_crosses_segment(center: Point, radius: f64, a: Point, b: Point) -> bool {
    let nearest = distance_to_segment(center, a, b);
    let farthest = distance(center, a).max(distance(center, b));
    nearest <= radius && radius <= farthest
}

/// Boundary test of a circle against an axis-aligned rectangle.
///
/// Returns `true` when the circumference crosses any rectangle edge, or when
/// the nearest point of the rectangle is farther than `radius` from the
/// center (the two shapes are fully separated, corners included).
pub fn circle_intersects_rect(center: Point, radius: f64, rect: &BoundingBox) -> bool {
    let nearest = Point::new(
        center.x.max(rect.min_x()).min(rect.max_x()),
        center.y.max(rect.min_y()).min(rect.max_y()),
    );
    if distance(center, nearest) > radius {
        return true;
    }

    rect.edges()
        .iter()
        .any(|&(a, b)| circle_crosses_segment(center, radius, a, b))
}

/// True when every corner of the rectangle lies inside or on the circle.
pub fn circle_contains_rect(center: Point, radius: f64, rect: &BoundingBox) -> bool {
    rect.corners()
        .iter()
        .all(|&corner| distance(center, corner) <= radius)
}
