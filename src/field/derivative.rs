//! Derivative functions of a dynamical system.

use crate::error::DerivativeError;

/// Right-hand side of `ds/dt = f(s, t, params)`.
///
/// Implemented for any `Fn(&[f64], f64, &P) -> Vec<f64>`. Wrap closures that
/// can fail in [`Fallible`].
///
/// # Example
///
/// ```
/// use dirfield::Derivative;
///
/// let oscillator = |s: &[f64], _t: f64, _p: &()| vec![s[1], -s[0]];
/// assert_eq!(oscillator.derivative(&[2.0, 0.0], 0.0, &()).unwrap(), vec![0.0, -2.0]);
/// ```
pub trait Derivative<P: ?Sized> {
    /// Evaluate the derivative at `state` and time `t`.
    ///
    /// The returned vector has the same length as `state`.
    fn derivative(&self, state: &[f64], t: f64, params: &P) -> Result<Vec<f64>, DerivativeError>;
}

impl<P, F> Derivative<P> for F
where
    P: ?Sized,
    F: Fn(&[f64], f64, &P) -> Vec<f64>,
{
    fn derivative(&self, state: &[f64], t: f64, params: &P) -> Result<Vec<f64>, DerivativeError> {
        Ok(self(state, t, params))
    }
}

/// Adapter for derivative closures that return a `Result`.
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<P, F, E> Derivative<P> for Fallible<F>
where
    P: ?Sized,
    F: Fn(&[f64], f64, &P) -> Result<Vec<f64>, E>,
    E: Into<DerivativeError>,
{
    fn derivative(&self, state: &[f64], t: f64, params: &P) -> Result<Vec<f64>, DerivativeError> {
        (self.0)(state, t, params).map_err(Into::into)
    }
}
