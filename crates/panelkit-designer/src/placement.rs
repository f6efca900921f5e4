//! Placement model: the panel outline, its cutouts, and clash detection.

use tracing::{debug, info, warn};

use panelkit_core::{DesignerError, DesignerResult};

use crate::changes::{Change, ChangeSet};
use crate::cutout_store::CutoutStore;
use crate::geometry;
use crate::info::{CutoutInfo, Placement};
use crate::model::{CanvasRect, Cutout, CutoutId, Outline, Point};
use crate::viewport::Viewport;
use crate::visuals::VisualRegistry;

/// Owns one panel outline and the cutouts placed on it.
///
/// Every operation runs to completion synchronously. Clash flags on a
/// cutout reflect the state as of the last move that involved it, so
/// removing a cutout does not clear the flags it caused on others.
#[derive(Debug, Clone)]
pub struct PlacementModel {
    outline: Option<Outline>,
    cutouts: CutoutStore,
    viewport: Viewport,
}

impl PlacementModel {
    /// Creates an empty model for a canvas at the given screen rectangle.
    pub fn new(canvas: CanvasRect) -> Self {
        Self {
            outline: None,
            cutouts: CutoutStore::new(),
            viewport: Viewport::new(canvas),
        }
    }

    pub fn outline(&self) -> Option<&Outline> {
        self.outline.as_ref()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn cutout_count(&self) -> usize {
        self.cutouts.len()
    }

    /// All cutouts in insertion order.
    pub fn cutouts(&self) -> impl Iterator<Item = &Cutout> {
        self.cutouts.iter()
    }

    /// Replaces the outline and discards every cutout.
    pub fn add_outline(&mut self, width: f64, height: f64) -> ChangeSet {
        let mut outline = Outline::new(width, height);
        outline.attach(self.viewport.canvas());
        self.viewport.set_origin(outline.origin_offset());

        let discarded = self.cutouts.len();
        self.cutouts.clear();
        self.outline = Some(outline);

        info!(
            "New panel {}x{} (discarded {} cutouts)",
            width, height, discarded
        );
        ChangeSet::cleared()
    }

    /// Appends a cutout at its current position without checking clashes.
    pub fn add_cutout(&mut self, cutout: Cutout) -> CutoutId {
        let id = self.cutouts.insert(cutout);
        debug!("Added {}", id);
        id
    }

    pub fn cutout(&self, id: CutoutId) -> Option<&Cutout> {
        self.cutouts.get(id)
    }

    pub fn contains_cutout(&self, id: CutoutId) -> bool {
        self.cutouts.contains(id)
    }

    /// Resolves a rendering node id (group or ring) to its cutout.
    pub fn cutout_by_visual(&self, registry: &VisualRegistry, node_id: &str) -> Option<&Cutout> {
        registry.resolve(node_id).and_then(|id| self.cutouts.get(id))
    }

    /// Converts screen coordinates to panel-local coordinates.
    pub fn screen_to_panel(&self, screen_x: f64, screen_y: f64) -> Point {
        self.viewport.screen_to_panel(screen_x, screen_y)
    }

    /// Converts panel-local coordinates to screen coordinates.
    pub fn panel_to_screen(&self, panel: Point) -> (f64, f64) {
        self.viewport.panel_to_screen(panel)
    }

    /// Finds the cutout nearest to a pointer position.
    ///
    /// Only cutouts whose hit radius covers the point qualify. Ties go to
    /// the earliest inserted cutout.
    pub fn cutout_from_point(&self, screen_x: f64, screen_y: f64) -> Option<CutoutId> {
        let point = self.viewport.screen_to_panel(screen_x, screen_y);
        let mut best: Option<(CutoutId, f64)> = None;

        for cutout in self.cutouts.iter() {
            let dist = geometry::distance(point, cutout.position());
            if dist > cutout.hit_radius() {
                continue;
            }
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((cutout.id(), dist)),
            }
        }

        best.map(|(id, _)| id)
    }

    /// Centers a cutout on the pointer and recomputes clashes.
    ///
    /// The moved cutout clashes when its keep-out circle crosses the
    /// outline, lies clear of it, or swallows it, or when it overlaps any
    /// peer's keep-out circle. Every peer's clash and zone visibility is
    /// recomputed against the moved cutout.
    pub fn move_cutout(
        &mut self,
        id: CutoutId,
        screen_x: f64,
        screen_y: f64,
    ) -> DesignerResult<ChangeSet> {
        let position = self.viewport.screen_to_panel(screen_x, screen_y);
        self.place_at(id, position)
    }

    /// Moves a cutout to a panel-local position and recomputes clashes.
    pub fn move_cutout_to(&mut self, id: CutoutId, position: Point) -> DesignerResult<ChangeSet> {
        self.place_at(id, position)
    }

    /// Changes a cutout's size and re-runs the clash check in place.
    pub fn resize_cutout(&mut self, id: CutoutId, size: &str) -> DesignerResult<ChangeSet> {
        let cutout = self
            .cutouts
            .get_mut(id)
            .ok_or_else(|| DesignerError::unknown_cutout(id.value()))?;
        cutout.resize(size);
        let position = cutout.position();

        let mut changes = ChangeSet::new();
        changes.push(Change::Resized { id });
        if self.outline.is_some() {
            changes.merge(self.place_at(id, position)?);
        }
        Ok(changes)
    }

    /// Removes a cutout. Remaining clash flags are left as they are.
    pub fn remove_cutout(&mut self, id: CutoutId) -> DesignerResult<Cutout> {
        let removed = self
            .cutouts
            .remove(id)
            .ok_or_else(|| DesignerError::unknown_cutout(id.value()))?;
        debug!("Removed {}", id);
        Ok(removed)
    }

    /// Sets or clears a cutout's selection flag. Other selections are kept.
    pub fn select_cutout(&mut self, id: CutoutId, select: bool) -> DesignerResult<ChangeSet> {
        let cutout = self
            .cutouts
            .get_mut(id)
            .ok_or_else(|| DesignerError::unknown_cutout(id.value()))?;

        let mut changes = ChangeSet::new();
        if cutout.set_selected(select) {
            changes.push(Change::Selection {
                id,
                selected: select,
            });
        }
        Ok(changes)
    }

    /// Shows or hides a cutout's keep-out zone.
    pub fn show_zone(&mut self, id: CutoutId, visible: bool) -> DesignerResult<ChangeSet> {
        let cutout = self
            .cutouts
            .get_mut(id)
            .ok_or_else(|| DesignerError::unknown_cutout(id.value()))?;

        let mut changes = ChangeSet::new();
        if cutout.set_zone_visible(visible) {
            changes.push(Change::ZoneVisibility { id, visible });
        }
        Ok(changes)
    }

    /// Selected cutouts in collection order.
    pub fn selection(&self) -> Vec<CutoutId> {
        self.cutouts
            .iter()
            .filter(|c| c.is_selected())
            .map(|c| c.id())
            .collect()
    }

    /// Snapshot of every cutout's id, center, and size text.
    pub fn cutout_info(&self) -> Vec<CutoutInfo> {
        self.cutouts
            .iter()
            .map(|c| CutoutInfo {
                id: c.id().to_string(),
                placement: Placement {
                    x: c.position().x,
                    y: c.position().y,
                },
                size: c.size().to_string(),
            })
            .collect()
    }

    fn place_at(&mut self, id: CutoutId, position: Point) -> DesignerResult<ChangeSet> {
        let panel = self
            .outline
            .as_ref()
            .ok_or(DesignerError::NoOutline)?
            .bounding_box();

        let moved = self
            .cutouts
            .get_mut(id)
            .ok_or_else(|| DesignerError::unknown_cutout(id.value()))?;
        moved.position = position;
        let radius = moved.keepout_radius();

        let mut changes = ChangeSet::new();
        changes.push(Change::Moved { id, position });

        let boundary_clash = geometry::circle_intersects_rect(position, radius, &panel)
            || geometry::circle_contains_rect(position, radius, &panel);

        let mut peer_clashes = 0usize;
        for other in self.cutouts.iter_mut().filter(|c| c.id() != id) {
            let overlap = geometry::circles_overlap(
                position,
                radius,
                other.position(),
                other.keepout_radius(),
            );
            if overlap {
                peer_clashes += 1;
            }
            if other.set_clash(overlap) {
                changes.push(Change::Clash {
                    id: other.id(),
                    clash: overlap,
                });
            }
            if other.set_zone_visible(overlap) {
                changes.push(Change::ZoneVisibility {
                    id: other.id(),
                    visible: overlap,
                });
            }
        }

        let clash = boundary_clash || peer_clashes > 0;
        if let Some(moved) = self.cutouts.get_mut(id) {
            if moved.set_clash(clash) {
                changes.push(Change::Clash { id, clash });
            }
        }

        if clash {
            debug!(
                "{} at ({:.3}, {:.3}) clashes (boundary: {}, peers: {})",
                id, position.x, position.y, boundary_clash, peer_clashes
            );
        } else {
            debug!("{} at ({:.3}, {:.3}) is clear", id, position.x, position.y);
        }
        if radius.is_nan() {
            warn!("{} has no numeric size; clash checks are skipped", id);
        }

        Ok(changes)
    }
}

impl Default for PlacementModel {
    fn default() -> Self {
        Self::new(CanvasRect::default())
    }
}
