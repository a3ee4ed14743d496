//! Error types for the device model and the rotation search.

use thiserror::Error;

/// Result type alias for device and search operations
pub type Result<T> = std::result::Result<T, ComputerError>;

/// Errors raised while rotating layers or summing grid columns
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputerError {
    /// A rotation was requested for a layer the device does not have
    #[error("invalid layer index {index} (device has {layer_count} layers)")]
    InvalidLayerIndex { index: usize, layer_count: usize },

    /// A column total touched a cell that no layer fills
    #[error("undefined cell sum: row {row}, column {col} has no value")]
    UndefinedCellSum { row: usize, col: usize },
}
