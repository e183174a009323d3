//! Plot surface contract.
//!
//! A plot surface is anything that knows its current axis limits and can
//! draw a mesh of arrows. [`crate::plot::PhasePlot`] is the terminal
//! implementation; tests use recording surfaces.

use ndarray::Array2;
use ratatui::style::Color;

/// Where an arrow sits relative to its grid node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pivot {
    /// Arrow tail on the node.
    Tail,
    /// Arrow midpoint on the node.
    #[default]
    Middle,
    /// Arrow tip on the node.
    Tip,
}

/// Sampled direction field: node coordinates and vector components.
///
/// All four matrices share the shape `(ny, nx)`: rows follow the Y samples,
/// columns follow the X samples.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionField {
    /// X coordinate of every node.
    pub x: Array2<f64>,
    /// Y coordinate of every node.
    pub y: Array2<f64>,
    /// Horizontal vector component.
    pub u: Array2<f64>,
    /// Vertical vector component.
    pub v: Array2<f64>,
}

impl DirectionField {
    /// Mesh shape as `(rows, cols)`, i.e. `(ny, nx)`.
    pub fn shape(&self) -> (usize, usize) {
        self.x.dim()
    }

    /// Number of grid nodes.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the field has no nodes.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate nodes as `(x, y, u, v)` in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = (f64, f64, f64, f64)> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .zip(self.u.iter().zip(self.v.iter()))
            .map(|((&x, &y), (&u, &v))| (x, y, u, v))
    }
}

/// A single vector-field draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct Quiver {
    /// Arrows to draw.
    pub field: DirectionField,
    /// Arrow placement relative to its node.
    pub pivot: Pivot,
    /// Arrow color.
    pub color: Color,
}

/// A 2D plot that direction fields can be drawn onto.
pub trait PlotSurface {
    /// Current X axis limits as `(left, right)`.
    fn xlim(&self) -> (f64, f64);

    /// Current Y axis limits as `(bottom, top)`.
    fn ylim(&self) -> (f64, f64);

    /// Draw a mesh of arrows.
    fn quiver(&mut self, quiver: Quiver) -> crate::Result<()>;
}
