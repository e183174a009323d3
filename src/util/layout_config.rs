//! Layout configuration constants for the phase plot viewer.

/// Configuration for arrow geometry.
#[derive(Debug, Clone)]
pub struct ArrowLayoutConfig {
    /// Length of the longest arrow as a fraction of one grid cell.
    pub cell_fraction: f64,
    /// Arrowhead barb length as a fraction of the arrow length.
    pub head_fraction: f64,
    /// Angle between shaft and barb, in degrees.
    pub head_angle_deg: f64,
}

impl Default for ArrowLayoutConfig {
    fn default() -> Self {
        Self {
            cell_fraction: 0.9,
            head_fraction: 0.35,
            head_angle_deg: 25.0,
        }
    }
}

/// Configuration for interactive navigation.
#[derive(Debug, Clone)]
pub struct NavigationConfig {
    /// Fraction of the visible span moved per pan step.
    pub pan_fraction: f64,
    /// Span multiplier per zoom-out step (zoom-in uses the reciprocal).
    pub zoom_factor: f64,
    /// Dynamic range change per key press.
    pub dynamic_range_step: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            pan_fraction: 0.1,
            zoom_factor: 1.25,
            dynamic_range_step: 0.1,
        }
    }
}

/// Combined layout configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Arrow geometry.
    pub arrows: ArrowLayoutConfig,
    /// Pan, zoom and option steps.
    pub navigation: NavigationConfig,
}
