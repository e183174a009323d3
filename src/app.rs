//! Application state and logic.

use crate::error::Result;
use crate::field::{draw_direction_field, FieldOptions};
use crate::plot::PhasePlot;
use crate::surface::PlotSurface;
use crate::systems::System;
use crate::util::LayoutConfig;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// System being plotted.
    pub system: System,
    /// Parameters passed to the system.
    pub params: Vec<f64>,
    /// Field options, edited by key presses.
    pub options: FieldOptions,
    /// Plot surface the field is drawn onto.
    pub plot: PhasePlot,
    /// Limits restored by [`App::reset_view`].
    pub home: ((f64, f64), (f64, f64)),
    /// Layout configuration.
    pub layout: LayoutConfig,
    /// Status message.
    pub status: String,
    /// Error message from the last redraw.
    pub error_message: Option<String>,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create a new application instance and draw the first field.
    pub fn new(
        system: System,
        params: Vec<f64>,
        options: FieldOptions,
        limits: ((f64, f64), (f64, f64)),
    ) -> Result<Self> {
        let layout = LayoutConfig::default();
        let (x_label, y_label) = axis_labels(system, &options);
        let plot = PhasePlot::new(limits.0, limits.1)?
            .with_title(system.name())
            .with_labels(x_label, y_label)
            .with_arrow_layout(layout.arrows.clone());

        let mut app = Self {
            system,
            params,
            options,
            plot,
            home: limits,
            layout,
            status: "Ready".to_string(),
            error_message: None,
            theme: Theme::GruvboxDark,
        };
        app.redraw();
        Ok(app)
    }

    /// Clear the plot and draw the field again with the current options.
    pub fn redraw(&mut self) {
        self.plot.clear();
        match draw_direction_field(&mut self.plot, &self.system, &self.params[..], &self.options) {
            Ok(()) => self.error_message = None,
            Err(e) => {
                tracing::error!("Error drawing direction field: {}", e);
                self.error_message = Some(e.to_string());
            },
        }
    }

    /// Pan by whole steps along each axis.
    pub fn pan(&mut self, steps_x: i32, steps_y: i32) {
        let step = self.layout.navigation.pan_fraction;
        self.plot.pan(f64::from(steps_x) * step, f64::from(steps_y) * step);
        self.redraw();
        self.status = self.limits_status();
    }

    /// Zoom in (`true`) or out (`false`) by one step.
    pub fn zoom(&mut self, zoom_in: bool) {
        let factor = self.layout.navigation.zoom_factor;
        self.plot.zoom(if zoom_in { 1.0 / factor } else { factor });
        self.redraw();
        self.status = self.limits_status();
    }

    /// Restore the initial limits.
    pub fn reset_view(&mut self) {
        let (xlim, ylim) = self.home;
        if let Err(e) = self.plot.set_xlim(xlim).and_then(|_| self.plot.set_ylim(ylim)) {
            self.error_message = Some(e.to_string());
            return;
        }
        self.redraw();
        self.status = "View reset".to_string();
    }

    /// Toggle arrow normalisation.
    pub fn toggle_normalise(&mut self) {
        self.options.normalise = !self.options.normalise;
        self.redraw();
        self.status = format!("Normalise: {}", on_off(self.options.normalise));
    }

    /// Step the dynamic range, clamped to `[0, 1]`. Unset counts as 1.
    pub fn step_dynamic_range(&mut self, up: bool) {
        let step = self.layout.navigation.dynamic_range_step;
        let current = self.options.dynamic_range.unwrap_or(1.0);
        let next = if up { current + step } else { current - step };
        // keep one decimal so repeated steps land on round values
        let next = ((next.clamp(0.0, 1.0)) * 10.0).round() / 10.0;
        self.options.dynamic_range = Some(next);
        self.redraw();
        self.status = if self.options.normalise {
            format!("Dynamic range: {next} (ignored while normalised)")
        } else {
            format!("Dynamic range: {next}")
        };
    }

    /// Unset the dynamic range.
    pub fn clear_dynamic_range(&mut self) {
        self.options.dynamic_range = None;
        self.redraw();
        self.status = "Dynamic range: default".to_string();
    }

    /// Toggle scaling vectors to the axis spans.
    pub fn toggle_scale_to_axes(&mut self) {
        self.options.scale_to_axes = !self.options.scale_to_axes;
        self.redraw();
        self.status = format!("Scale to axes: {}", on_off(self.options.scale_to_axes));
    }

    /// Toggle clipping of negative axis ranges.
    pub fn toggle_clip_negative(&mut self) {
        self.options.clip_negative = !self.options.clip_negative;
        self.redraw();
        self.status = format!("Clip negative: {}", on_off(self.options.clip_negative));
    }

    /// Toggle switched axes.
    pub fn toggle_switch_axes(&mut self) {
        self.options.switch_axes = !self.options.switch_axes;
        let (x_label, y_label) = axis_labels(self.system, &self.options);
        self.plot.set_labels(x_label, y_label);
        self.redraw();
        self.status = format!("Switch axes: {}", on_off(self.options.switch_axes));
    }

    /// Cycle the theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    fn limits_status(&self) -> String {
        let (x0, x1) = self.plot.xlim();
        let (y0, y1) = self.plot.ylim();
        format!("x: [{x0:.3}, {x1:.3}]  y: [{y0:.3}, {y1:.3}]")
    }
}

fn axis_labels(system: System, options: &FieldOptions) -> (String, String) {
    let labels = system.labels();
    let axes = options.axis_indices();
    let name = |index: usize| match index {
        0 => labels.0.to_string(),
        1 => labels.1.to_string(),
        other => format!("s[{other}]"),
    };
    (name(axes.x), name(axes.y))
}

fn on_off(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}
