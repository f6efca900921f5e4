use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use panelkit_core::constants::{HIT_RADIUS_FACTOR, KEEPOUT_FACTOR};
use panelkit_core::units::parse_size;

use super::Point;

/// Opaque cutout handle assigned by the placement model.
///
/// Handles increase monotonically and are never reused, so a handle kept
/// after removal can never alias a newer cutout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CutoutId(u64);

impl CutoutId {
    /// Placeholder carried by a cutout that has not been added to a model.
    pub const UNASSIGNED: CutoutId = CutoutId(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CutoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cutout-{}", self.0)
    }
}

impl FromStr for CutoutId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("cutout-")
            .and_then(|n| n.parse::<u64>().ok())
            .map(CutoutId)
            .ok_or_else(|| format!("Invalid cutout id: {}", s))
    }
}

/// A circular cutout with its keep-out zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cutout {
    pub(crate) id: CutoutId,
    size: String,
    diameter: f64,
    keepout_diameter: f64,
    pub(crate) position: Point,
    selected: bool,
    has_clash: bool,
    zone_visible: bool,
}

impl Cutout {
    /// Creates a cutout from the size text entered by the user.
    pub fn new(size: &str) -> Self {
        let diameter = parse_size(size);
        Self {
            id: CutoutId::UNASSIGNED,
            size: size.to_string(),
            diameter,
            keepout_diameter: diameter * KEEPOUT_FACTOR,
            position: Point::default(),
            selected: false,
            has_clash: false,
            zone_visible: true,
        }
    }

    /// Changes the nominal size. Clash state is not re-evaluated here.
    pub fn resize(&mut self, size: &str) {
        self.size = size.to_string();
        self.diameter = parse_size(size);
        self.keepout_diameter = self.diameter * KEEPOUT_FACTOR;
    }

    pub fn id(&self) -> CutoutId {
        self.id
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn radius(&self) -> f64 {
        self.diameter * 0.5
    }

    pub fn width(&self) -> f64 {
        self.diameter
    }

    pub fn height(&self) -> f64 {
        self.diameter
    }

    pub fn keepout_diameter(&self) -> f64 {
        self.keepout_diameter
    }

    pub fn keepout_radius(&self) -> f64 {
        self.keepout_diameter * 0.5
    }

    /// Radius within which a pointer press grabs this cutout.
    pub fn hit_radius(&self) -> f64 {
        self.width().max(self.height()) * HIT_RADIUS_FACTOR
    }

    /// Center in panel-local coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn has_clash(&self) -> bool {
        self.has_clash
    }

    pub fn is_zone_visible(&self) -> bool {
        self.zone_visible
    }

    /// Returns `true` when the flag actually changed.
    pub(crate) fn set_selected(&mut self, selected: bool) -> bool {
        std::mem::replace(&mut self.selected, selected) != selected
    }

    pub(crate) fn set_clash(&mut self, clash: bool) -> bool {
        std::mem::replace(&mut self.has_clash, clash) != clash
    }

    pub(crate) fn set_zone_visible(&mut self, visible: bool) -> bool {
        std::mem::replace(&mut self.zone_visible, visible) != visible
    }
}
