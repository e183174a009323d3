//! Sampling grid over the plot's axis ranges.

use ndarray::{Array1, Array2};

use crate::error::{FieldError, Result};

/// Evenly spaced node coordinates along each axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// X samples, length `nx`.
    pub x: Array1<f64>,
    /// Y samples, length `ny`.
    pub y: Array1<f64>,
}

impl Grid {
    /// Sample `nx` by `ny` nodes over the given limits.
    ///
    /// With `clip_negative` a negative lower limit is raised to zero on each
    /// axis independently. Endpoints are inclusive; a single sample sits on
    /// the lower limit.
    pub fn sample(
        xlim: (f64, f64),
        ylim: (f64, f64),
        nx: usize,
        ny: usize,
        clip_negative: bool,
    ) -> Result<Self> {
        if nx == 0 || ny == 0 {
            return Err(FieldError::EmptyGrid { nx, ny });
        }

        let (xlim, ylim) = if clip_negative {
            (clip_lower(xlim), clip_lower(ylim))
        } else {
            (xlim, ylim)
        };

        tracing::debug!(?xlim, ?ylim, nx, ny, "sampling grid");

        Ok(Self {
            x: Array1::linspace(xlim.0, xlim.1, nx),
            y: Array1::linspace(ylim.0, ylim.1, ny),
        })
    }

    /// Number of X samples.
    pub fn nx(&self) -> usize {
        self.x.len()
    }

    /// Number of Y samples.
    pub fn ny(&self) -> usize {
        self.y.len()
    }

    /// Full cross-product mesh as `(x_mesh, y_mesh)`, each of shape `(ny, nx)`.
    pub fn mesh(&self) -> (Array2<f64>, Array2<f64>) {
        let shape = (self.ny(), self.nx());
        let x_mesh = Array2::from_shape_fn(shape, |(_, j)| self.x[j]);
        let y_mesh = Array2::from_shape_fn(shape, |(i, _)| self.y[i]);
        (x_mesh, y_mesh)
    }
}

/// Raise a negative lower limit to zero.
pub fn clip_lower((lo, hi): (f64, f64)) -> (f64, f64) {
    if lo < 0.0 {
        (0.0, hi)
    } else {
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clips_negative_lower_limit() {
        let grid = Grid::sample((-5.0, 5.0), (-1.0, 3.0), 6, 4, true).unwrap();
        assert_eq!(grid.x[0], 0.0);
        assert_eq!(grid.x[5], 5.0);
        assert_eq!(grid.y[0], 0.0);
        assert_eq!(grid.y[3], 3.0);
    }

    #[test]
    fn non_negative_lower_limit_is_untouched() {
        let grid = Grid::sample((2.0, 4.0), (0.0, 1.0), 3, 2, true).unwrap();
        assert_eq!(grid.x.to_vec(), vec![2.0, 3.0, 4.0]);
        assert_eq!(grid.y.to_vec(), vec![0.0, 1.0]);
    }

    #[test]
    fn clipping_disabled_keeps_negative_range() {
        let grid = Grid::sample((-2.0, 2.0), (-2.0, 2.0), 3, 3, false).unwrap();
        assert_eq!(grid.x.to_vec(), vec![-2.0, 0.0, 2.0]);
        assert_eq!(grid.y.to_vec(), vec![-2.0, 0.0, 2.0]);
    }

    #[test]
    fn single_sample_sits_on_lower_limit() {
        let grid = Grid::sample((1.0, 9.0), (3.0, 4.0), 1, 1, false).unwrap();
        assert_eq!(grid.x.to_vec(), vec![1.0]);
        assert_eq!(grid.y.to_vec(), vec![3.0]);
    }

    #[test]
    fn mesh_rows_follow_y() {
        let grid = Grid::sample((0.0, 2.0), (10.0, 20.0), 3, 2, false).unwrap();
        let (xm, ym) = grid.mesh();
        assert_eq!(xm.dim(), (2, 3));
        assert_eq!(ym.dim(), (2, 3));
        assert_eq!(xm[[1, 2]], 2.0);
        assert_eq!(ym[[1, 2]], 20.0);
        assert_eq!(ym[[0, 2]], 10.0);
    }

    #[test]
    fn empty_grid_is_rejected() {
        let err = Grid::sample((0.0, 1.0), (0.0, 1.0), 0, 5, false).unwrap_err();
        assert!(matches!(err, FieldError::EmptyGrid { nx: 0, ny: 5 }));
    }
}
