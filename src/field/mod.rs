//! Direction field sampling and drawing.
//!
//! [`draw_direction_field`] reads the surface's current axis limits, samples
//! the derivative function on a regular grid, rescales the vectors and issues
//! a single quiver draw call. Set the plot limits before calling it: changing
//! them afterwards leaves the arrows scaled for the old axes.

mod derivative;
mod grid;
mod scaling;

pub use derivative::{Derivative, Fallible};
pub use grid::{clip_lower, Grid};
pub use scaling::{axis_spans, Scaling};

use ndarray::Array2;
use ratatui::style::Color;

use crate::error::{FieldError, Result};
use crate::surface::{DirectionField, Pivot, PlotSurface, Quiver};

/// State slots plotted on the X and Y axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisIndices {
    /// State slot on the X axis.
    pub x: usize,
    /// State slot on the Y axis.
    pub y: usize,
}

/// Options for [`draw_direction_field`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOptions {
    /// State slot plotted on X. `None` means slot 0.
    pub x_index: Option<usize>,
    /// State slot plotted on Y. `None` means slot 1.
    pub y_index: Option<usize>,
    /// Plot slot 1 on X and slot 0 on Y, overriding the explicit indices.
    pub switch_axes: bool,
    /// Full state vector; the two axis slots are overwritten per node.
    pub s0: Option<Vec<f64>>,
    /// Time passed to the derivative function.
    pub t: f64,
    /// Arrow color.
    pub color: Color,
    /// Number of samples along X.
    pub nx: usize,
    /// Number of samples along Y.
    pub ny: usize,
    /// Draw all arrows with the same length.
    pub normalise: bool,
    /// Length exponent between 0 (uniform) and 1 (proportional).
    pub dynamic_range: Option<f64>,
    /// Skip the negative part of each axis.
    pub clip_negative: bool,
    /// Divide components by the axis spans so arrows follow trajectories.
    pub scale_to_axes: bool,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            x_index: None,
            y_index: None,
            switch_axes: false,
            s0: None,
            t: 0.0,
            color: Color::Black,
            nx: 30,
            ny: 30,
            normalise: false,
            dynamic_range: None,
            clip_negative: true,
            scale_to_axes: true,
        }
    }
}

impl FieldOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the state slots plotted on X and Y.
    pub fn indices(mut self, x: usize, y: usize) -> Self {
        self.x_index = Some(x);
        self.y_index = Some(y);
        self
    }

    /// Swap the default axes.
    pub fn switch_axes(mut self, on: bool) -> Self {
        self.switch_axes = on;
        self
    }

    /// Set the full initial state.
    pub fn s0(mut self, s0: Vec<f64>) -> Self {
        self.s0 = Some(s0);
        self
    }

    /// Set the evaluation time.
    pub fn time(mut self, t: f64) -> Self {
        self.t = t;
        self
    }

    /// Set the arrow color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the grid resolution.
    pub fn resolution(mut self, nx: usize, ny: usize) -> Self {
        self.nx = nx;
        self.ny = ny;
        self
    }

    /// Enable or disable normalisation.
    pub fn normalise(mut self, on: bool) -> Self {
        self.normalise = on;
        self
    }

    /// Set the dynamic range exponent.
    pub fn dynamic_range(mut self, dynamic_range: f64) -> Self {
        self.dynamic_range = Some(dynamic_range);
        self
    }

    /// Enable or disable negative clipping.
    pub fn clip_negative(mut self, on: bool) -> Self {
        self.clip_negative = on;
        self
    }

    /// Enable or disable axis scaling.
    pub fn scale_to_axes(mut self, on: bool) -> Self {
        self.scale_to_axes = on;
        self
    }

    /// Resolve the plotted state slots.
    ///
    /// `switch_axes` takes precedence over explicit indices.
    pub fn axis_indices(&self) -> AxisIndices {
        if self.switch_axes {
            AxisIndices { x: 1, y: 0 }
        } else {
            AxisIndices {
                x: self.x_index.unwrap_or(0),
                y: self.y_index.unwrap_or(1),
            }
        }
    }

    /// The scratch state buffer used for sampling.
    ///
    /// Slots other than the axis slots are NaN unless `s0` is given.
    fn initial_state(&self) -> Vec<f64> {
        self.s0.clone().unwrap_or_else(|| vec![f64::NAN; 2])
    }
}

/// Sample and rescale the direction field without drawing it.
pub fn sample_field<S, D, P>(
    surface: &S,
    derivative: &D,
    params: &P,
    options: &FieldOptions,
) -> Result<DirectionField>
where
    S: PlotSurface + ?Sized,
    D: Derivative<P> + ?Sized,
    P: ?Sized,
{
    let axes = options.axis_indices();
    let mut state = options.initial_state();
    check_indices(axes, state.len())?;

    let grid = Grid::sample(
        surface.xlim(),
        surface.ylim(),
        options.nx,
        options.ny,
        options.clip_negative,
    )?;
    let (x, y) = grid.mesh();
    let (mut u, mut v) = evaluate(&grid, &mut state, axes, derivative, params, options.t)?;

    let scaling = Scaling::resolve(options.normalise, options.dynamic_range);
    let spans = if options.scale_to_axes {
        Some(axis_spans(surface.xlim(), surface.ylim())?)
    } else {
        None
    };
    scaling.apply(&mut u, &mut v, spans);

    tracing::debug!(
        nx = grid.nx(),
        ny = grid.ny(),
        x_index = axes.x,
        y_index = axes.y,
        dynamic_range = scaling.dynamic_range,
        "sampled direction field"
    );

    Ok(DirectionField { x, y, u, v })
}

/// Draw a direction field for `derivative` onto `surface`.
///
/// Arrows are centered on their grid nodes. The caller's `options.s0` is
/// left untouched.
///
/// # Example
///
/// ```
/// use dirfield::{draw_direction_field, FieldOptions, PhasePlot};
///
/// let mut plot = PhasePlot::new((-2.0, 2.0), (-2.0, 2.0))?;
/// let oscillator = |s: &[f64], _t: f64, _p: &()| vec![s[1], -s[0]];
/// draw_direction_field(&mut plot, &oscillator, &(), &FieldOptions::new().clip_negative(false))?;
/// assert_eq!(plot.quivers().len(), 1);
/// # Ok::<(), dirfield::FieldError>(())
/// ```
pub fn draw_direction_field<S, D, P>(
    surface: &mut S,
    derivative: &D,
    params: &P,
    options: &FieldOptions,
) -> Result<()>
where
    S: PlotSurface + ?Sized,
    D: Derivative<P> + ?Sized,
    P: ?Sized,
{
    let field = sample_field(&*surface, derivative, params, options)?;
    surface.quiver(Quiver {
        field,
        pivot: Pivot::Middle,
        color: options.color,
    })
}

fn check_indices(axes: AxisIndices, len: usize) -> Result<()> {
    if axes.x == axes.y {
        return Err(FieldError::DuplicateAxisIndex { index: axes.x });
    }
    for index in [axes.x, axes.y] {
        if index >= len {
            return Err(FieldError::IndexOutOfRange { index, len });
        }
    }
    Ok(())
}

/// Evaluate the derivative at every node, Y outer and X inner.
fn evaluate<D, P>(
    grid: &Grid,
    state: &mut [f64],
    axes: AxisIndices,
    derivative: &D,
    params: &P,
    t: f64,
) -> Result<(Array2<f64>, Array2<f64>)>
where
    D: Derivative<P> + ?Sized,
    P: ?Sized,
{
    let shape = (grid.ny(), grid.nx());
    let mut u = Array2::zeros(shape);
    let mut v = Array2::zeros(shape);

    for (i, &yi) in grid.y.iter().enumerate() {
        for (j, &xi) in grid.x.iter().enumerate() {
            state[axes.x] = xi;
            state[axes.y] = yi;
            let ds = derivative
                .derivative(state, t, params)
                .map_err(|source| FieldError::derivative(xi, yi, source))?;
            if ds.len() != state.len() {
                return Err(FieldError::DerivativeLength {
                    expected: state.len(),
                    actual: ds.len(),
                });
            }
            u[[i, j]] = ds[axes.x];
            v[[i, j]] = ds[axes.y];
        }
    }

    Ok((u, v))
}
