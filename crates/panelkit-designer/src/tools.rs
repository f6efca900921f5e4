//! Interactive tools driving the placement model.
//!
//! A tool is one user action bound to a toolbar button. The
//! [`ToolController`] forwards pointer events to the active tool and
//! stops it as soon as it answers [`ToolResponse::Finish`].

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use panelkit_core::constants::CLASH_MESSAGE;
use panelkit_core::{DesignerError, DesignerResult};

use crate::changes::{Change, ChangeSet};
use crate::info::format_listing;
use crate::model::{CanvasRect, Cutout, CutoutId};
use crate::placement::PlacementModel;

/// Whether a tool stays active after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolResponse {
    Continue,
    Finish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Warning,
}

/// Message a tool wants shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: message.into(),
        }
    }
}

/// Result of dispatching one event to a tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutcome {
    pub response: ToolResponse,
    pub changes: ChangeSet,
    pub notification: Option<Notification>,
}

impl ToolOutcome {
    pub fn proceed(changes: ChangeSet) -> Self {
        Self {
            response: ToolResponse::Continue,
            changes,
            notification: None,
        }
    }

    pub fn finish(changes: ChangeSet) -> Self {
        Self {
            response: ToolResponse::Finish,
            changes,
            notification: None,
        }
    }

    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notification = Some(notification);
        self
    }

    pub fn is_finished(&self) -> bool {
        self.response == ToolResponse::Finish
    }
}

impl Default for ToolOutcome {
    fn default() -> Self {
        Self::proceed(ChangeSet::new())
    }
}

/// A user action. Every hook is optional.
pub trait Tool: fmt::Debug {
    fn name(&self) -> &'static str;

    /// Called when the tool becomes active.
    fn start(&mut self, _model: &mut PlacementModel) -> DesignerResult<ToolOutcome> {
        Ok(ToolOutcome::default())
    }

    /// Called when the tool is deactivated, including after it finishes.
    fn stop(&mut self, _model: &mut PlacementModel) -> DesignerResult<ChangeSet> {
        Ok(ChangeSet::new())
    }

    fn on_pointer_move(
        &mut self,
        _model: &mut PlacementModel,
        _x: f64,
        _y: f64,
    ) -> DesignerResult<ToolOutcome> {
        Ok(ToolOutcome::default())
    }

    fn on_click(
        &mut self,
        _model: &mut PlacementModel,
        _x: f64,
        _y: f64,
    ) -> DesignerResult<ToolOutcome> {
        Ok(ToolOutcome::default())
    }

    /// Called when the cutout size input changes while the tool is active.
    fn set_size(&mut self, _model: &mut PlacementModel, _size: &str) -> DesignerResult<ToolOutcome> {
        Ok(ToolOutcome::default())
    }
}

/// Places a new cutout under the pointer.
///
/// The cutout is created on the first pointer move and follows the
/// pointer until a click lands it somewhere clash-free.
#[derive(Debug, Clone)]
pub struct PlaceTool {
    size: String,
    pending: Option<CutoutId>,
}

impl PlaceTool {
    pub fn new(size: impl Into<String>) -> Self {
        Self {
            size: size.into(),
            pending: None,
        }
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    /// Cutout following the pointer, if one has been created.
    pub fn pending(&self) -> Option<CutoutId> {
        self.pending
    }
}

impl Tool for PlaceTool {
    fn name(&self) -> &'static str {
        "place"
    }

    fn stop(&mut self, model: &mut PlacementModel) -> DesignerResult<ChangeSet> {
        let mut changes = ChangeSet::new();
        if let Some(id) = self.pending.take() {
            // Unconfirmed cutouts leave with the tool.
            if model.remove_cutout(id).is_ok() {
                changes.push(Change::Removed { id });
            }
        }
        Ok(changes)
    }

    fn on_pointer_move(
        &mut self,
        model: &mut PlacementModel,
        x: f64,
        y: f64,
    ) -> DesignerResult<ToolOutcome> {
        let id = match self.pending {
            Some(id) => id,
            None => {
                let id = model.add_cutout(Cutout::new(&self.size));
                self.pending = Some(id);
                id
            }
        };
        Ok(ToolOutcome::proceed(model.move_cutout(id, x, y)?))
    }

    fn on_click(
        &mut self,
        model: &mut PlacementModel,
        _x: f64,
        _y: f64,
    ) -> DesignerResult<ToolOutcome> {
        let Some(id) = self.pending else {
            return Ok(ToolOutcome::default());
        };
        let clash = model
            .cutout(id)
            .ok_or_else(|| DesignerError::unknown_cutout(id.value()))?
            .has_clash();

        if clash {
            warn!("Rejected placement of {}", id);
            return Ok(
                ToolOutcome::default().with_notification(Notification::warning(CLASH_MESSAGE))
            );
        }

        let changes = model.show_zone(id, false)?;
        self.pending = None;
        info!("Placed {}", id);
        Ok(ToolOutcome::finish(changes))
    }

    fn set_size(&mut self, model: &mut PlacementModel, size: &str) -> DesignerResult<ToolOutcome> {
        self.size = size.to_string();
        let changes = match self.pending {
            Some(id) => model.resize_cutout(id, size)?,
            None => ChangeSet::new(),
        };
        Ok(ToolOutcome::proceed(changes))
    }
}

/// Toggles selection of the cutout under the pointer.
#[derive(Debug, Clone, Default)]
pub struct SelectTool;

impl SelectTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for SelectTool {
    fn name(&self) -> &'static str {
        "select"
    }

    fn on_click(
        &mut self,
        model: &mut PlacementModel,
        x: f64,
        y: f64,
    ) -> DesignerResult<ToolOutcome> {
        let Some(id) = model.cutout_from_point(x, y) else {
            return Ok(ToolOutcome::default());
        };
        let selected = model.cutout(id).is_some_and(|c| c.is_selected());
        Ok(ToolOutcome::proceed(model.select_cutout(id, !selected)?))
    }
}

/// Removes every selected cutout as soon as it starts.
#[derive(Debug, Clone, Default)]
pub struct DeleteTool;

impl DeleteTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for DeleteTool {
    fn name(&self) -> &'static str {
        "delete"
    }

    fn start(&mut self, model: &mut PlacementModel) -> DesignerResult<ToolOutcome> {
        let mut changes = ChangeSet::new();
        for id in model.selection() {
            model.remove_cutout(id)?;
            changes.push(Change::Removed { id });
        }
        info!("Deleted {} cutouts", changes.len());
        Ok(ToolOutcome::finish(changes))
    }
}

/// Drags the first selected cutout with its keep-out zone shown.
#[derive(Debug, Clone, Default)]
pub struct MoveTool {
    target: Option<CutoutId>,
}

impl MoveTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Option<CutoutId> {
        self.target
    }
}

impl Tool for MoveTool {
    fn name(&self) -> &'static str {
        "move"
    }

    fn start(&mut self, model: &mut PlacementModel) -> DesignerResult<ToolOutcome> {
        let Some(id) = model.selection().first().copied() else {
            return Ok(ToolOutcome::finish(ChangeSet::new()));
        };
        self.target = Some(id);
        Ok(ToolOutcome::proceed(model.show_zone(id, true)?))
    }

    fn stop(&mut self, model: &mut PlacementModel) -> DesignerResult<ChangeSet> {
        match self.target.take() {
            Some(id) if model.cutout(id).is_some() => model.show_zone(id, false),
            _ => Ok(ChangeSet::new()),
        }
    }

    fn on_pointer_move(
        &mut self,
        model: &mut PlacementModel,
        x: f64,
        y: f64,
    ) -> DesignerResult<ToolOutcome> {
        let Some(id) = self.target else {
            return Ok(ToolOutcome::finish(ChangeSet::new()));
        };
        Ok(ToolOutcome::proceed(model.move_cutout(id, x, y)?))
    }

    fn on_click(
        &mut self,
        model: &mut PlacementModel,
        _x: f64,
        _y: f64,
    ) -> DesignerResult<ToolOutcome> {
        let changes = match self.target {
            Some(id) => model.select_cutout(id, false)?,
            None => ChangeSet::new(),
        };
        Ok(ToolOutcome::finish(changes))
    }
}

/// Collects the cutout listing for the info panel.
#[derive(Debug, Clone, Default)]
pub struct ListTool {
    listing: String,
}

impl ListTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text produced by the last start.
    pub fn listing(&self) -> &str {
        &self.listing
    }
}

impl Tool for ListTool {
    fn name(&self) -> &'static str {
        "list"
    }

    fn start(&mut self, model: &mut PlacementModel) -> DesignerResult<ToolOutcome> {
        self.listing = format_listing(&model.cutout_info())
            .map_err(|e| DesignerError::other(format!("Failed to encode listing: {}", e)))?;
        Ok(ToolOutcome::default().with_notification(Notification::info(self.listing.clone())))
    }
}

/// Serializable tool selector, one variant per toolbar button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "lowercase")]
pub enum ToolKind {
    Place { size: String },
    Select,
    Delete,
    Move,
    List,
}

impl ToolKind {
    pub fn into_tool(self) -> Box<dyn Tool> {
        match self {
            ToolKind::Place { size } => Box::new(PlaceTool::new(size)),
            ToolKind::Select => Box::new(SelectTool::new()),
            ToolKind::Delete => Box::new(DeleteTool::new()),
            ToolKind::Move => Box::new(MoveTool::new()),
            ToolKind::List => Box::new(ListTool::new()),
        }
    }
}

/// Owns the model and the active tool.
#[derive(Debug)]
pub struct ToolController {
    model: PlacementModel,
    active: Option<Box<dyn Tool>>,
}

impl ToolController {
    pub fn new(canvas: CanvasRect) -> Self {
        Self {
            model: PlacementModel::new(canvas),
            active: None,
        }
    }

    pub fn model(&self) -> &PlacementModel {
        &self.model
    }

    pub fn active_tool(&self) -> Option<&str> {
        self.active.as_ref().map(|t| t.name())
    }

    /// Replaces the panel outline. The active tool is stopped first.
    pub fn new_panel(&mut self, width: f64, height: f64) -> ChangeSet {
        let mut changes = match self.stop_tool() {
            Ok(changes) => changes,
            Err(err) => {
                warn!("Tool stop failed: {}", err);
                ChangeSet::new()
            }
        };
        changes.merge(self.model.add_outline(width, height));
        changes
    }

    /// Activates `tool`, stopping the current one first.
    pub fn start_tool(&mut self, tool: Box<dyn Tool>) -> DesignerResult<ToolOutcome> {
        let mut changes = self.stop_tool()?;
        info!("Starting {} tool", tool.name());
        let tool = self.active.insert(tool);
        let outcome = tool.start(&mut self.model);
        let mut outcome = self.settle(outcome)?;
        changes.merge(std::mem::take(&mut outcome.changes));
        outcome.changes = changes;
        Ok(outcome)
    }

    /// Deactivates the current tool, if any.
    pub fn stop_tool(&mut self) -> DesignerResult<ChangeSet> {
        match self.active.take() {
            Some(mut tool) => {
                info!("Stopping {} tool", tool.name());
                tool.stop(&mut self.model)
            }
            None => Ok(ChangeSet::new()),
        }
    }

    /// Forwards a pointer move. Without an active tool nothing happens.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> DesignerResult<ToolOutcome> {
        let Some(tool) = self.active.as_mut() else {
            return Ok(ToolOutcome::default());
        };
        let outcome = tool.on_pointer_move(&mut self.model, x, y);
        self.settle(outcome)
    }

    /// Forwards a click. Without an active tool nothing happens.
    pub fn click(&mut self, x: f64, y: f64) -> DesignerResult<ToolOutcome> {
        let Some(tool) = self.active.as_mut() else {
            return Ok(ToolOutcome::default());
        };
        let outcome = tool.on_click(&mut self.model, x, y);
        self.settle(outcome)
    }

    /// Forwards a cutout size change to the active tool.
    pub fn set_cutout_size(&mut self, size: &str) -> DesignerResult<ToolOutcome> {
        let tool = self.active.as_mut().ok_or(DesignerError::NoActiveTool)?;
        let outcome = tool.set_size(&mut self.model, size);
        self.settle(outcome)
    }

    /// Stops the tool when it finished or failed, folding in its stop changes.
    fn settle(&mut self, outcome: DesignerResult<ToolOutcome>) -> DesignerResult<ToolOutcome> {
        match outcome {
            Ok(mut outcome) => {
                if outcome.is_finished() {
                    outcome.changes.merge(self.stop_tool()?);
                }
                Ok(outcome)
            }
            Err(err) => {
                warn!("Tool failed: {}", err);
                if let Err(stop_err) = self.stop_tool() {
                    warn!("Tool stop failed: {}", stop_err);
                }
                Err(err)
            }
        }
    }
}

impl Default for ToolController {
    fn default() -> Self {
        Self::new(CanvasRect::default())
    }
}
