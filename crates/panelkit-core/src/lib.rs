//! # PanelKit Core
//!
//! Core types and utilities shared by the PanelKit crates.
//! Provides the error types, layout constants, and unit handling
//! used by the designer engine and the settings layer.

pub mod constants;
pub mod error;
pub mod units;

pub use error::{DesignerError, DesignerResult, Error, Result};
pub use units::MeasurementSystem;
