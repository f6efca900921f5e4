//! # PanelKit Designer
//!
//! This crate lays out circular cutouts on a rectangular panel and keeps
//! each cutout's keep-out zone clear of the panel edge and of every other
//! keep-out zone.
//!
//! ## Core Components
//!
//! - **Geometry**: Distance, circle overlap, circle/rectangle tests
//! - **Model**: Panel outline and circular cutouts with keep-out zones
//! - **Placement**: Hit testing, moves, clash detection, selection
//! - **Viewport**: Screen to panel coordinate mapping
//! - **Tools**: Place, select, delete, move and list actions
//! - **Rendering**: Visual node registry and SVG output
//!
//! ## Architecture
//!
//! ```text
//! ToolController (Active tool, pointer dispatch)
//!   └── PlacementModel (Outline + cutouts)
//!         ├── CutoutStore (Handles in insertion order)
//!         ├── Viewport (Screen <-> panel)
//!         └── Geometry (Clash tests)
//!
//! VisualRegistry + svg_renderer (Consume ChangeSet and flags)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use panelkit_designer::{CanvasRect, Cutout, PlacementModel};
//!
//! let mut model = PlacementModel::new(CanvasRect::new(0.0, 0.0, 400.0, 300.0));
//! model.add_outline(200.0, 100.0);
//!
//! let id = model.add_cutout(Cutout::new("10"));
//! model.move_cutout(id, 150.0, 150.0).unwrap();
//! assert!(!model.cutout(id).unwrap().has_clash());
//! ```

pub mod changes;
pub mod cutout_store;
pub mod geometry;
pub mod info;
pub mod model;
pub mod placement;
pub mod svg_renderer;
pub mod tools;
pub mod viewport;
pub mod visuals;

pub use changes::{Change, ChangeSet};
pub use cutout_store::CutoutStore;
pub use info::{format_listing, format_table, CutoutInfo, Placement};
pub use model::{BoundingBox, CanvasRect, Cutout, CutoutId, Outline, Point};
pub use placement::PlacementModel;
pub use tools::{
    DeleteTool, ListTool, MoveTool, Notification, NotificationLevel, PlaceTool, SelectTool, Tool,
    ToolController, ToolKind, ToolOutcome, ToolResponse,
};
pub use viewport::Viewport;
pub use visuals::{CutoutVisual, VisualRegistry};

pub use panelkit_core::{DesignerError, DesignerResult};
