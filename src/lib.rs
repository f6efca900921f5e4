//! # PanelKit
//!
//! Lay out circular cutouts on a rectangular panel while keeping every
//! cutout's keep-out zone clear of the panel edge and of its neighbours.
//!
//! ## Architecture
//!
//! PanelKit is organized as a workspace with multiple crates:
//!
//! 1. **panelkit-core** - Errors, layout constants, unit handling
//! 2. **panelkit-designer** - Geometry, placement model, tools, rendering
//! 3. **panelkit-settings** - Configuration files and validation
//! 4. **panelkit** - Session replay binary that integrates all crates
//!
//! ## Features
//!
//! - **Clash Detection**: Keep-out zones checked against the panel edge and peers
//! - **Hit Testing**: Nearest cutout under the pointer
//! - **Tools**: Place, select, delete, move and list, as toolbar actions
//! - **Rendering**: SVG output with clash and selection styling
//! - **Replay**: Scripted sessions for reproducible layouts

pub mod cli;
pub mod session;

pub use panelkit_core::{DesignerError, DesignerResult, Error, MeasurementSystem, Result};

pub use panelkit_designer::{
    CanvasRect, Change, ChangeSet, Cutout, CutoutId, CutoutInfo, PlacementModel, Point, Tool,
    ToolController, ToolKind, ToolOutcome, ToolResponse, VisualRegistry,
};

pub use panelkit_settings::{Config, LoggingSettings, SettingsError};

pub use session::{Session, SessionReport, SessionScript, SessionStep};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging from the logging settings
///
/// Sets up structured logging with:
/// - Output on stderr, so reports on stdout stay clean
/// - RUST_LOG environment variable support, falling back to the configured level
/// - Pretty or JSON formatting
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))?;

    if settings.json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .json();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
