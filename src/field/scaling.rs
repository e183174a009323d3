//! Arrow length policy: axis scaling and dynamic-range compression.

use ndarray::{Array2, Zip};

use crate::error::{Axis, FieldError, Result};

/// Resolved vector rescaling policy.
///
/// Arrow length ends up proportional to `gradient ^ dynamic_range`: `0.0`
/// gives uniform lengths, `1.0` keeps lengths proportional to the gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling {
    /// Exponent applied to vector magnitudes.
    pub dynamic_range: f64,
    /// True when a requested dynamic range was overridden by normalisation.
    pub dynamic_range_ignored: bool,
}

impl Scaling {
    /// Combine the `normalise` and `dynamic_range` options.
    ///
    /// Normalisation wins over an explicit dynamic range; the conflict is
    /// logged and recorded in [`Scaling::dynamic_range_ignored`].
    pub fn resolve(normalise: bool, dynamic_range: Option<f64>) -> Self {
        let dynamic_range_ignored = normalise && dynamic_range.is_some();
        if let (true, Some(requested)) = (normalise, dynamic_range) {
            tracing::warn!(
                requested,
                "cannot use a dynamic range when arrows are normalised, ignoring dynamic range value"
            );
        }

        let dynamic_range = if normalise {
            0.0
        } else {
            dynamic_range.unwrap_or(1.0)
        };

        Self {
            dynamic_range,
            dynamic_range_ignored,
        }
    }

    /// Whether magnitudes are compressed at all.
    pub fn compresses(&self) -> bool {
        self.dynamic_range != 1.0
    }

    /// Rescale a single vector. `spans` divides the components first when set.
    pub fn rescale(&self, dx: f64, dy: f64, spans: Option<(f64, f64)>) -> (f64, f64) {
        let (mut dx, mut dy) = match spans {
            Some((x_range, y_range)) => (dx / x_range, dy / y_range),
            None => (dx, dy),
        };

        if self.compresses() {
            let l = (dx * dx + dy * dy).sqrt();
            // zero-length vectors stay put
            if l != 0.0 {
                let divisor = l.powf(1.0 - self.dynamic_range);
                dx /= divisor;
                dy /= divisor;
            }
        }

        (dx, dy)
    }

    /// Rescale a whole field in place.
    pub fn apply(&self, u: &mut Array2<f64>, v: &mut Array2<f64>, spans: Option<(f64, f64)>) {
        Zip::from(u).and(v).for_each(|dx, dy| {
            let (sx, sy) = self.rescale(*dx, *dy, spans);
            *dx = sx;
            *dy = sy;
        });
    }
}

/// Axis spans for scale-to-axes, rejecting zero-width axes.
pub fn axis_spans(xlim: (f64, f64), ylim: (f64, f64)) -> Result<(f64, f64)> {
    let x_range = xlim.1 - xlim.0;
    let y_range = ylim.1 - ylim.0;
    if x_range == 0.0 {
        return Err(FieldError::ZeroAxisSpan { axis: Axis::X });
    }
    if y_range == 0.0 {
        return Err(FieldError::ZeroAxisSpan { axis: Axis::Y });
    }
    Ok((x_range, y_range))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_to_proportional_lengths() {
        let s = Scaling::resolve(false, None);
        assert_eq!(s.dynamic_range, 1.0);
        assert!(!s.dynamic_range_ignored);
        assert!(!s.compresses());
    }

    #[test]
    fn normalise_overrides_dynamic_range() {
        let s = Scaling::resolve(true, Some(0.5));
        assert_eq!(s.dynamic_range, 0.0);
        assert!(s.dynamic_range_ignored);
        assert_eq!(s.dynamic_range, Scaling::resolve(true, None).dynamic_range);
    }

    #[test]
    fn explicit_dynamic_range_is_kept() {
        let s = Scaling::resolve(false, Some(0.25));
        assert_eq!(s.dynamic_range, 0.25);
        assert!(!s.dynamic_range_ignored);
    }

    #[test]
    fn normalised_vectors_have_unit_length() {
        let s = Scaling::resolve(true, None);
        let (dx, dy) = s.rescale(3.0, 4.0, None);
        assert_relative_eq!(dx, 0.6);
        assert_relative_eq!(dy, 0.8);
    }

    #[test]
    fn half_range_takes_square_root_of_length() {
        let s = Scaling::resolve(false, Some(0.5));
        let (dx, dy) = s.rescale(0.0, 4.0, None);
        assert_relative_eq!(dx, 0.0);
        assert_relative_eq!(dy, 2.0);
    }

    #[test]
    fn zero_vector_is_left_alone() {
        let s = Scaling::resolve(true, None);
        assert_eq!(s.rescale(0.0, 0.0, Some((2.0, 4.0))), (0.0, 0.0));
    }

    #[test]
    fn axis_scaling_divides_by_span() {
        let s = Scaling::resolve(false, None);
        let (dx, dy) = s.rescale(2.0, 2.0, Some((4.0, 8.0)));
        assert_relative_eq!(dx, 0.5);
        assert_relative_eq!(dy, 0.25);
    }

    #[test]
    fn zero_span_is_an_error() {
        assert!(matches!(
            axis_spans((1.0, 1.0), (0.0, 1.0)),
            Err(FieldError::ZeroAxisSpan { axis: Axis::X })
        ));
        assert!(matches!(
            axis_spans((0.0, 1.0), (-3.0, -3.0)),
            Err(FieldError::ZeroAxisSpan { axis: Axis::Y })
        ));
        assert_eq!(axis_spans((2.0, -2.0), (0.0, 1.0)).unwrap(), (-4.0, 1.0));
    }
}
