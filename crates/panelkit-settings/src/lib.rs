//! PanelKit Settings Crate
//!
//! Handles application configuration: canvas and panel defaults, cutout
//! defaults, and logging, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{
    CanvasSettings, Config, ConfigFormat, CutoutSettings, LoggingSettings, MeasurementSystem,
    PanelSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
