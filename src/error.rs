//! Error types for dirfield.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::fmt;
use thiserror::Error;

/// Result type alias for dirfield operations.
pub type Result<T> = std::result::Result<T, FieldError>;

/// Boxed error produced by a derivative function.
pub type DerivativeError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// One of the two plotted axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Errors that can occur while sampling or drawing a direction field.
#[derive(Debug, Error)]
pub enum FieldError {
    /// The derivative function failed at a grid node.
    #[error("derivative evaluation failed at ({x}, {y}): {source}")]
    Derivative {
        x: f64,
        y: f64,
        #[source]
        source: DerivativeError,
    },

    /// The derivative function returned a vector of the wrong length.
    #[error("derivative returned {actual} components, expected {expected}")]
    DerivativeLength { expected: usize, actual: usize },

    /// An axis has zero extent, so vectors cannot be scaled to it.
    #[error("{axis} axis has zero span, cannot scale vectors to axes")]
    ZeroAxisSpan { axis: Axis },

    /// An axis index does not address a slot of the state vector.
    #[error("axis index {index} is out of range for a state of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Both axes were mapped to the same state slot.
    #[error("x and y axes both use state index {index}")]
    DuplicateAxisIndex { index: usize },

    /// The grid has no nodes.
    #[error("grid must have at least one node per axis (got {nx}x{ny})")]
    EmptyGrid { nx: usize, ny: usize },

    /// Axis limits are unusable.
    #[error("invalid {axis} limits ({lo}, {hi})")]
    InvalidLimits { axis: Axis, lo: f64, hi: f64 },

    /// The plot surface refused the draw call.
    #[error("plot surface error: {0}")]
    Surface(String),

    /// Unrecognized color name.
    #[error("unknown color: {0}")]
    InvalidColor(String),
}

impl FieldError {
    /// Create a Derivative error for the node at `(x, y)`.
    pub fn derivative(x: f64, y: f64, source: DerivativeError) -> Self {
        Self::Derivative { x, y, source }
    }

    /// Create an InvalidColor error.
    pub fn invalid_color(name: impl Into<String>) -> Self {
        Self::InvalidColor(name.into())
    }
}
