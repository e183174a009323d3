//! Terminal phase plot.
//!
//! [`PhasePlot`] is a [`PlotSurface`] that keeps its axis limits and the
//! quiver layers drawn onto it. [`ui`] renders it with ratatui.

mod arrows;
pub mod ui;

pub use arrows::{layout_arrows, Arrow, Segment};

use crate::error::{Axis, FieldError, Result};
use crate::surface::{PlotSurface, Quiver};
use crate::util::ArrowLayoutConfig;

/// A 2D phase plot with fixed axis limits and quiver layers.
#[derive(Debug, Clone)]
pub struct PhasePlot {
    xlim: (f64, f64),
    ylim: (f64, f64),
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    quivers: Vec<Quiver>,
    arrow_layout: ArrowLayoutConfig,
}

impl PhasePlot {
    /// Create an empty plot with the given limits.
    pub fn new(xlim: (f64, f64), ylim: (f64, f64)) -> Result<Self> {
        check_limits(Axis::X, xlim)?;
        check_limits(Axis::Y, ylim)?;
        Ok(Self {
            xlim,
            ylim,
            title: None,
            x_label: None,
            y_label: None,
            quivers: Vec::new(),
            arrow_layout: ArrowLayoutConfig::default(),
        })
    }

    /// Set the plot title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the axis labels.
    pub fn with_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.set_labels(x, y);
        self
    }

    /// Replace the axis labels.
    pub fn set_labels(&mut self, x: impl Into<String>, y: impl Into<String>) {
        self.x_label = Some(x.into());
        self.y_label = Some(y.into());
    }

    /// Replace the arrow geometry settings.
    pub fn with_arrow_layout(mut self, layout: ArrowLayoutConfig) -> Self {
        self.arrow_layout = layout;
        self
    }

    /// Plot title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// X axis label.
    pub fn x_label(&self) -> Option<&str> {
        self.x_label.as_deref()
    }

    /// Y axis label.
    pub fn y_label(&self) -> Option<&str> {
        self.y_label.as_deref()
    }

    /// Set the X limits. Requires finite `lo < hi`.
    pub fn set_xlim(&mut self, xlim: (f64, f64)) -> Result<()> {
        check_limits(Axis::X, xlim)?;
        self.xlim = xlim;
        Ok(())
    }

    /// Set the Y limits. Requires finite `lo < hi`.
    pub fn set_ylim(&mut self, ylim: (f64, f64)) -> Result<()> {
        check_limits(Axis::Y, ylim)?;
        self.ylim = ylim;
        Ok(())
    }

    /// Shift the view by fractions of the current spans.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        let sx = (self.xlim.1 - self.xlim.0) * dx;
        let sy = (self.ylim.1 - self.ylim.0) * dy;
        self.xlim = (self.xlim.0 + sx, self.xlim.1 + sx);
        self.ylim = (self.ylim.0 + sy, self.ylim.1 + sy);
    }

    /// Scale both spans about the view center. `factor > 1` zooms out.
    pub fn zoom(&mut self, factor: f64) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }
        self.xlim = scale_about_center(self.xlim, factor);
        self.ylim = scale_about_center(self.ylim, factor);
    }

    /// Remove all quiver layers.
    pub fn clear(&mut self) {
        self.quivers.clear();
    }

    /// Quiver layers in draw order.
    pub fn quivers(&self) -> &[Quiver] {
        &self.quivers
    }

    /// Arrows of every layer, laid out against the current limits.
    pub fn arrows(&self) -> Vec<Arrow> {
        self.quivers
            .iter()
            .flat_map(|q| layout_arrows(q, self.xlim, self.ylim, &self.arrow_layout))
            .collect()
    }
}

impl PlotSurface for PhasePlot {
    fn xlim(&self) -> (f64, f64) {
        self.xlim
    }

    fn ylim(&self) -> (f64, f64) {
        self.ylim
    }

    fn quiver(&mut self, quiver: Quiver) -> Result<()> {
        tracing::trace!(nodes = quiver.field.len(), "quiver layer added");
        self.quivers.push(quiver);
        Ok(())
    }
}

fn check_limits(axis: Axis, (lo, hi): (f64, f64)) -> Result<()> {
    if lo.is_finite() && hi.is_finite() && lo < hi {
        Ok(())
    } else {
        Err(FieldError::InvalidLimits { axis, lo, hi })
    }
}

fn scale_about_center((lo, hi): (f64, f64), factor: f64) -> (f64, f64) {
    let center = (lo + hi) / 2.0;
    let half = (hi - lo) / 2.0 * factor;
    (center - half, center + half)
}
