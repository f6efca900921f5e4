//! Error handling for PanelKit
//!
//! Provides the error types for the layout layers:
//! - Designer errors (placement model and command tools)
//! - A unified [`Error`] used by the outer surfaces
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Designer error type
///
/// Raised by the placement model and the command tools when an operation
/// cannot be applied to the current layout.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignerError {
    /// A placement was attempted before any panel outline exists
    #[error("No panel outline has been created")]
    NoOutline,

    /// The cutout handle does not belong to this layout (removed or foreign)
    #[error("Unknown cutout {id}")]
    UnknownCutout {
        /// The raw handle value.
        id: u64,
    },

    /// A command needed an active tool but none was running
    #[error("No active tool")]
    NoActiveTool,

    /// Generic designer error
    #[error("Designer error: {message}")]
    Other {
        /// The error message.
        message: String,
    },
}

impl DesignerError {
    /// Create an unknown-cutout error from a raw handle value
    pub fn unknown_cutout(id: u64) -> Self {
        DesignerError::UnknownCutout { id }
    }

    /// Create a generic designer error
    pub fn other(message: impl Into<String>) -> Self {
        DesignerError::Other {
            message: message.into(),
        }
    }
}

/// Main error type for PanelKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Designer error
    #[error(transparent)]
    Designer(#[from] DesignerError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a designer error
    pub fn is_designer_error(&self) -> bool {
        matches!(self, Error::Designer(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

/// Result type for placement model and tool operations
pub type DesignerResult<T> = std::result::Result<T, DesignerError>;
