//! Change sets reported by placement operations.
//!
//! A renderer can redraw only the cutouts named in a change set instead of
//! rescanning the whole layout after every command.

use crate::model::{CutoutId, Point};

/// A single observable state change on a cutout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Change {
    Moved { id: CutoutId, position: Point },
    Resized { id: CutoutId },
    Clash { id: CutoutId, clash: bool },
    ZoneVisibility { id: CutoutId, visible: bool },
    Selection { id: CutoutId, selected: bool },
    Removed { id: CutoutId },
}

impl Change {
    pub fn id(&self) -> CutoutId {
        match self {
            Change::Moved { id, .. }
            | Change::Resized { id }
            | Change::Clash { id, .. }
            | Change::ZoneVisibility { id, .. }
            | Change::Selection { id, .. }
            | Change::Removed { id } => *id,
        }
    }
}

/// Everything one command changed, in the order it happened.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeSet {
    /// The outline was replaced and every previous visual must go.
    pub scene_cleared: bool,
    changes: Vec<Change>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cleared() -> Self {
        Self {
            scene_cleared: true,
            changes: Vec::new(),
        }
    }

    pub fn push(&mut self, change: Change) {
        self.changes.push(change);
    }

    /// Appends another change set, keeping the order of both.
    pub fn merge(&mut self, other: ChangeSet) {
        self.scene_cleared |= other.scene_cleared;
        self.changes.extend(other.changes);
    }

    pub fn is_empty(&self) -> bool {
        !self.scene_cleared && self.changes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Change> {
        self.changes.iter()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Distinct cutouts touched, in first-seen order.
    pub fn affected(&self) -> Vec<CutoutId> {
        let mut ids: Vec<CutoutId> = Vec::new();
        for change in &self.changes {
            let id = change.id();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    pub fn removed(&self) -> impl Iterator<Item = CutoutId> + '_ {
        self.changes.iter().filter_map(|c| match c {
            Change::Removed { id } => Some(*id),
            _ => None,
        })
    }

    /// Latest clash state reported for `id`, if it changed.
    pub fn clash_of(&self, id: CutoutId) -> Option<bool> {
        self.changes.iter().rev().find_map(|c| match c {
            Change::Clash { id: cid, clash } if *cid == id => Some(*clash),
            _ => None,
        })
    }
}
