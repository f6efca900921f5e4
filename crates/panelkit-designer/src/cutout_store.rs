//! Storage for the cutouts of one layout.

use std::collections::BTreeMap;

use crate::model::{Cutout, CutoutId};

/// Cutouts keyed by handle.
///
/// Handles are allocated in increasing order, so iterating the map yields
/// cutouts in insertion order.
#[derive(Debug, Clone)]
pub struct CutoutStore {
    cutouts: BTreeMap<CutoutId, Cutout>,
    next_id: u64,
}

impl CutoutStore {
    pub fn new() -> Self {
        Self {
            cutouts: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Assigns a fresh handle to `cutout` and stores it.
    pub fn insert(&mut self, mut cutout: Cutout) -> CutoutId {
        let id = CutoutId::new(self.next_id);
        self.next_id += 1;
        cutout.id = id;
        self.cutouts.insert(id, cutout);
        id
    }

    pub fn get(&self, id: CutoutId) -> Option<&Cutout> {
        self.cutouts.get(&id)
    }

    pub fn get_mut(&mut self, id: CutoutId) -> Option<&mut Cutout> {
        self.cutouts.get_mut(&id)
    }

    pub fn contains(&self, id: CutoutId) -> bool {
        self.cutouts.contains_key(&id)
    }

    pub fn remove(&mut self, id: CutoutId) -> Option<Cutout> {
        self.cutouts.remove(&id)
    }

    /// Drops every cutout. Handles already issued stay retired.
    pub fn clear(&mut self) {
        self.cutouts.clear();
    }

    pub fn len(&self) -> usize {
        self.cutouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cutouts.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Cutout> {
        self.cutouts.values()
    }

    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut Cutout> {
        self.cutouts.values_mut()
    }
}

impl Default for CutoutStore {
    fn default() -> Self {
        Self::new()
    }
}
