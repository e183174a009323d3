//! Arrow geometry for quiver layers.
//!
//! Vector components are read as fractions of the axes (display space), the
//! way a quiver plot reads them, and autoscaled so the longest arrow spans
//! [`ArrowLayoutConfig::cell_fraction`] of a grid cell.

use ratatui::style::Color;

use crate::surface::{Pivot, Quiver};
use crate::util::ArrowLayoutConfig;

/// Straight line in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start X.
    pub x1: f64,
    /// Start Y.
    pub y1: f64,
    /// End X.
    pub x2: f64,
    /// End Y.
    pub y2: f64,
}

/// One drawable arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    /// Tail to tip.
    pub shaft: Segment,
    /// The two arrowhead strokes, both starting at the tip.
    pub barbs: [Segment; 2],
    /// Stroke color.
    pub color: Color,
}

/// Lay out every arrow of `quiver` against the given axis limits.
///
/// Zero-length and non-finite vectors produce no arrow.
pub fn layout_arrows(
    quiver: &Quiver,
    xlim: (f64, f64),
    ylim: (f64, f64),
    config: &ArrowLayoutConfig,
) -> Vec<Arrow> {
    let (x_span, y_span) = (xlim.1 - xlim.0, ylim.1 - ylim.0);
    if x_span == 0.0 || y_span == 0.0 || !x_span.is_finite() || !y_span.is_finite() {
        return Vec::new();
    }

    let max_len = quiver
        .field
        .u
        .iter()
        .zip(quiver.field.v.iter())
        .map(|(u, v)| u.hypot(*v))
        .filter(|l| l.is_finite())
        .fold(0.0_f64, f64::max);
    if max_len == 0.0 {
        return Vec::new();
    }

    let (rows, cols) = quiver.field.shape();
    let scale = config.cell_fraction / rows.max(cols) as f64 / max_len;
    let (sin, cos) = config.head_angle_deg.to_radians().sin_cos();

    quiver
        .field
        .nodes()
        .filter_map(|(x, y, u, v)| {
            if ![x, y, u, v].iter().all(|c| c.is_finite()) {
                return None;
            }

            // display-space vector, as a fraction of the axes
            let (sx, sy) = (u * scale, v * scale);
            let len = sx.hypot(sy);
            if len == 0.0 {
                return None;
            }

            let (ax, ay) = (sx * x_span, sy * y_span);
            let (tail, tip) = match quiver.pivot {
                Pivot::Tail => ((x, y), (x + ax, y + ay)),
                Pivot::Middle => ((x - ax / 2.0, y - ay / 2.0), (x + ax / 2.0, y + ay / 2.0)),
                Pivot::Tip => ((x - ax, y - ay), (x, y)),
            };

            let head = config.head_fraction * len;
            let (bx, by) = (-sx / len, -sy / len);
            let barb = |sin: f64| {
                let rx = (bx * cos - by * sin) * head;
                let ry = (bx * sin + by * cos) * head;
                Segment {
                    x1: tip.0,
                    y1: tip.1,
                    x2: tip.0 + rx * x_span,
                    y2: tip.1 + ry * y_span,
                }
            };

            Some(Arrow {
                shaft: Segment {
                    x1: tail.0,
                    y1: tail.1,
                    x2: tip.0,
                    y2: tip.1,
                },
                barbs: [barb(sin), barb(-sin)],
                color: quiver.color,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::DirectionField;
    use approx::assert_relative_eq;
    use ndarray::arr2;

    fn single(u: f64, v: f64, pivot: Pivot) -> Quiver {
        Quiver {
            field: DirectionField {
                x: arr2(&[[5.0]]),
                y: arr2(&[[5.0]]),
                u: arr2(&[[u]]),
                v: arr2(&[[v]]),
            },
            pivot,
            color: Color::White,
        }
    }

    #[test]
    fn middle_pivot_centres_the_shaft() {
        let quiver = single(3.0, 0.0, Pivot::Middle);
        let arrows = layout_arrows(&quiver, (0.0, 10.0), (0.0, 10.0), &ArrowLayoutConfig::default());
        assert_eq!(arrows.len(), 1);

        let shaft = arrows[0].shaft;
        assert_relative_eq!(shaft.x1, 0.5);
        assert_relative_eq!(shaft.x2, 9.5);
        assert_relative_eq!(shaft.y1, 5.0);
        assert_relative_eq!(shaft.y2, 5.0);
    }

    #[test]
    fn barbs_point_back_from_the_tip() {
        let quiver = single(1.0, 0.0, Pivot::Tail);
        let arrows = layout_arrows(&quiver, (0.0, 10.0), (0.0, 10.0), &ArrowLayoutConfig::default());
        let arrow = arrows[0];

        assert_relative_eq!(arrow.shaft.x1, 5.0);
        for barb in arrow.barbs {
            assert_relative_eq!(barb.x1, arrow.shaft.x2);
            assert!(barb.x2 < barb.x1);
        }
        assert_relative_eq!(arrow.barbs[0].y2 - 5.0, 5.0 - arrow.barbs[1].y2, epsilon = 1e-12);
    }

    #[test]
    fn tip_pivot_ends_on_the_node() {
        let quiver = single(0.0, -2.0, Pivot::Tip);
        let arrows = layout_arrows(&quiver, (0.0, 10.0), (0.0, 10.0), &ArrowLayoutConfig::default());
        assert_relative_eq!(arrows[0].shaft.x2, 5.0);
        assert_relative_eq!(arrows[0].shaft.y2, 5.0);
        assert!(arrows[0].shaft.y1 > 5.0);
    }

    #[test]
    fn display_space_follows_axis_spans() {
        let quiver = single(1.0, 1.0, Pivot::Tail);
        let arrows = layout_arrows(&quiver, (0.0, 10.0), (0.0, 100.0), &ArrowLayoutConfig::default());
        let shaft = arrows[0].shaft;
        assert_relative_eq!((shaft.y2 - shaft.y1) / (shaft.x2 - shaft.x1), 10.0);
    }

    #[test]
    fn degenerate_vectors_are_skipped() {
        let config = ArrowLayoutConfig::default();
        assert!(layout_arrows(&single(0.0, 0.0, Pivot::Middle), (0.0, 1.0), (0.0, 1.0), &config).is_empty());
        assert!(layout_arrows(&single(f64::NAN, 1.0, Pivot::Middle), (0.0, 1.0), (0.0, 1.0), &config).is_empty());
        assert!(layout_arrows(&single(1.0, 1.0, Pivot::Middle), (1.0, 1.0), (0.0, 1.0), &config).is_empty());
    }
}
