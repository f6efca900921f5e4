//! Rendering handles for cutouts.
//!
//! Each cutout is drawn as a group holding two rings: the physical
//! cutout outline and its keep-out zone. Pointer hits land on any of the
//! three nodes, so the registry maps every node id back to the cutout.

use std::collections::HashMap;

use uuid::Uuid;

use crate::changes::ChangeSet;
use crate::model::CutoutId;
use crate::placement::PlacementModel;

/// Node ids of one cutout's composite visual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutoutVisual {
    pub group: String,
    pub outline_ring: String,
    pub keepout_ring: String,
}

impl CutoutVisual {
    fn generate() -> Self {
        Self {
            group: Uuid::new_v4().to_string(),
            outline_ring: Uuid::new_v4().to_string(),
            keepout_ring: Uuid::new_v4().to_string(),
        }
    }

    fn node_ids(&self) -> [&str; 3] {
        [&self.group, &self.outline_ring, &self.keepout_ring]
    }
}

/// Owns the visuals of every drawn cutout.
#[derive(Debug, Clone, Default)]
pub struct VisualRegistry {
    visuals: HashMap<CutoutId, CutoutVisual>,
    nodes: HashMap<String, CutoutId>,
}

impl VisualRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the visual for `id`, creating it on first use.
    pub fn ensure(&mut self, id: CutoutId) -> &CutoutVisual {
        let nodes = &mut self.nodes;
        self.visuals.entry(id).or_insert_with(|| {
            let visual = CutoutVisual::generate();
            for node in visual.node_ids() {
                nodes.insert(node.to_string(), id);
            }
            visual
        })
    }

    pub fn visual(&self, id: CutoutId) -> Option<&CutoutVisual> {
        self.visuals.get(&id)
    }

    /// Maps a group or ring node id to the cutout that owns it.
    pub fn resolve(&self, node_id: &str) -> Option<CutoutId> {
        self.nodes.get(node_id).copied()
    }

    pub fn unregister(&mut self, id: CutoutId) -> Option<CutoutVisual> {
        let visual = self.visuals.remove(&id)?;
        for node in visual.node_ids() {
            self.nodes.remove(node);
        }
        Some(visual)
    }

    pub fn clear(&mut self) {
        self.visuals.clear();
        self.nodes.clear();
    }

    pub fn len(&self) -> usize {
        self.visuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visuals.is_empty()
    }

    /// Drops visuals whose cutout is no longer in `model`. Returns how many
    /// were dropped.
    pub fn prune(&mut self, model: &PlacementModel) -> usize {
        let stale: Vec<CutoutId> = self
            .visuals
            .keys()
            .copied()
            .filter(|id| !model.contains_cutout(*id))
            .collect();
        for id in &stale {
            self.unregister(*id);
        }
        stale.len()
    }

    /// Applies a change set: visuals of removed cutouts go, touched ones
    /// are created if missing.
    pub fn sync(&mut self, changes: &ChangeSet) {
        if changes.scene_cleared {
            self.clear();
        }
        let removed: Vec<CutoutId> = changes.removed().collect();
        for id in &removed {
            self.unregister(*id);
        }
        for id in changes.affected() {
            if !removed.contains(&id) {
                self.ensure(id);
            }
        }
    }
}
