//! dirfield - direction fields for two-variable dynamical systems.
//!
//! Given a derivative function `ds/dt = f(s, t, params)` and a plot whose axes
//! show two of the state variables, dirfield samples a grid over the plot's
//! current axis ranges, evaluates the derivative at every node, rescales the
//! vectors and draws them as arrows.
//!
//! # Features
//!
//! - Any [`PlotSurface`] can receive the field; [`PhasePlot`] renders in the terminal
//! - Optional clipping of negative axis ranges
//! - Normalised or dynamic-range compressed arrow lengths
//! - Axis-aspect correction so arrows follow trajectories
//! - Built-in classic systems for quick exploration
//!
//! # Example
//!
//! ```
//! use dirfield::{sample_field, FieldOptions, PhasePlot};
//!
//! let plot = PhasePlot::new((-2.0, 2.0), (-2.0, 2.0))?;
//! let oscillator = |s: &[f64], _t: f64, _p: &()| vec![s[1], -s[0]];
//! let options = FieldOptions::new()
//!     .resolution(3, 3)
//!     .clip_negative(false)
//!     .scale_to_axes(false);
//!
//! let field = sample_field(&plot, &oscillator, &(), &options)?;
//! assert_eq!(field.shape(), (3, 3));
//! assert_eq!((field.u[[1, 2]], field.v[[1, 2]]), (0.0, -2.0));
//! # Ok::<(), dirfield::FieldError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod error;
pub mod field;
pub mod plot;
pub mod surface;
pub mod systems;
pub mod ui;
pub mod util;

pub use error::{Axis, FieldError, Result};
pub use field::{draw_direction_field, sample_field, Derivative, Fallible, FieldOptions};
pub use plot::PhasePlot;
pub use surface::{DirectionField, Pivot, PlotSurface, Quiver};
pub use systems::System;
