//! Scripted sessions
//!
//! A session script is a recorded list of user actions (toolbar buttons,
//! pointer moves, clicks) replayed against a [`ToolController`]. Pointer
//! coordinates are screen coordinates relative to the configured canvas.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use panelkit_core::{Error, Result};
use panelkit_designer::svg_renderer::render_panel;
use panelkit_designer::{
    CanvasRect, CutoutInfo, DesignerResult, NotificationLevel, ToolController, ToolKind,
    ToolOutcome, VisualRegistry,
};
use panelkit_settings::Config;

/// One recorded user action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionStep {
    /// Replace the panel; missing dimensions come from the configuration
    NewPanel {
        #[serde(default)]
        width: Option<f64>,
        #[serde(default)]
        height: Option<f64>,
    },
    /// Start the place tool; a missing size uses the configured default
    Place {
        #[serde(default)]
        size: Option<String>,
    },
    Select,
    Delete,
    Move,
    List,
    PointerMove {
        x: f64,
        y: f64,
    },
    Click {
        x: f64,
        y: f64,
    },
    SetSize {
        size: String,
    },
    Stop,
}

/// A replayable list of steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionScript {
    pub steps: Vec<SessionStep>,
}

impl SessionScript {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
            .map_err(|e| Error::other(format!("Invalid session {}: {}", path.display(), e)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventLevel {
    Info,
    Warning,
    Error,
}

impl From<NotificationLevel> for EventLevel {
    fn from(level: NotificationLevel) -> Self {
        match level {
            NotificationLevel::Info => Self::Info,
            NotificationLevel::Warning => Self::Warning,
        }
    }
}

/// Something the user would have seen while a step ran
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEvent {
    /// Zero-based step index
    pub step: usize,
    pub level: EventLevel,
    pub message: String,
}

/// Outcome of a full replay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub events: Vec<SessionEvent>,
    pub cutouts: Vec<CutoutInfo>,
}

impl SessionReport {
    pub fn has_errors(&self) -> bool {
        self.events.iter().any(|e| e.level == EventLevel::Error)
    }
}

/// Live replay state: the controller and the visuals it has produced
#[derive(Debug)]
pub struct Session {
    controller: ToolController,
    registry: VisualRegistry,
    config: Config,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        let canvas = CanvasRect::new(
            config.canvas.left,
            config.canvas.top,
            config.canvas.width,
            config.canvas.height,
        );
        Self {
            controller: ToolController::new(canvas),
            registry: VisualRegistry::new(),
            config: config.clone(),
        }
    }

    pub fn controller(&self) -> &ToolController {
        &self.controller
    }

    pub fn registry(&self) -> &VisualRegistry {
        &self.registry
    }

    /// Runs one step and keeps the visual registry in sync with it.
    pub fn apply(&mut self, step: &SessionStep) -> DesignerResult<ToolOutcome> {
        match self.dispatch(step) {
            Ok(outcome) => {
                self.registry.sync(&outcome.changes);
                Ok(outcome)
            }
            Err(err) => {
                // A failed tool is stopped without reporting its changes.
                let dropped = self.registry.prune(self.controller.model());
                if dropped > 0 {
                    debug!("Dropped {} stale visuals", dropped);
                }
                Err(err)
            }
        }
    }

    fn dispatch(&mut self, step: &SessionStep) -> DesignerResult<ToolOutcome> {
        Ok(match step {
            SessionStep::NewPanel { width, height } => {
                let width = width.unwrap_or(self.config.panel.width);
                let height = height.unwrap_or(self.config.panel.height);
                ToolOutcome::proceed(self.controller.new_panel(width, height))
            }
            SessionStep::Place { size } => {
                let size = size
                    .clone()
                    .unwrap_or_else(|| self.config.cutout.default_size.clone());
                self.controller
                    .start_tool(ToolKind::Place { size }.into_tool())?
            }
            SessionStep::Select => self.controller.start_tool(ToolKind::Select.into_tool())?,
            SessionStep::Delete => self.controller.start_tool(ToolKind::Delete.into_tool())?,
            SessionStep::Move => self.controller.start_tool(ToolKind::Move.into_tool())?,
            SessionStep::List => self.controller.start_tool(ToolKind::List.into_tool())?,
            SessionStep::PointerMove { x, y } => self.controller.pointer_move(*x, *y)?,
            SessionStep::Click { x, y } => self.controller.click(*x, *y)?,
            SessionStep::SetSize { size } => self.controller.set_cutout_size(size)?,
            SessionStep::Stop => ToolOutcome::finish(self.controller.stop_tool()?),
        })
    }

    /// Replays every step. A failing step is reported and the replay goes on.
    pub fn run(&mut self, script: &SessionScript) -> SessionReport {
        let mut events = Vec::new();
        for (index, step) in script.steps.iter().enumerate() {
            debug!("Step {}: {:?}", index, step);
            match self.apply(step) {
                Ok(outcome) => {
                    if let Some(notification) = outcome.notification {
                        events.push(SessionEvent {
                            step: index,
                            level: notification.level.into(),
                            message: notification.message,
                        });
                    }
                }
                Err(err) => {
                    warn!("Step {} failed: {}", index, err);
                    events.push(SessionEvent {
                        step: index,
                        level: EventLevel::Error,
                        message: err.to_string(),
                    });
                }
            }
        }

        SessionReport {
            events,
            cutouts: self.controller.model().cutout_info(),
        }
    }

    pub fn render_svg(&self) -> String {
        render_panel(self.controller.model(), &self.registry)
    }
}
