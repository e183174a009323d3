//! Built-in two-variable dynamical systems.
//!
//! Each [`System`] is a [`Derivative`] over a slice of parameters, so it can
//! be handed straight to [`crate::draw_direction_field`].

use clap::ValueEnum;
use thiserror::Error;

use crate::error::DerivativeError;
use crate::field::Derivative;

/// Errors raised while evaluating a built-in system.
#[derive(Debug, Error)]
pub enum SystemError {
    /// Wrong number of parameters.
    #[error("{system} expects {expected} parameter(s) [{names}], got {actual}")]
    Parameters {
        system: &'static str,
        names: String,
        expected: usize,
        actual: usize,
    },

    /// State has fewer than two slots.
    #[error("{system} needs at least two state variables, got {len}")]
    State { system: &'static str, len: usize },
}

/// Classic planar systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum System {
    /// Simple harmonic oscillator: x' = y, y' = -ω²x.
    #[default]
    Harmonic,
    /// Damped pendulum: θ' = ω, ω' = -γω - (g/L) sin θ.
    Pendulum,
    /// Predator-prey: x' = αx - βxy, y' = δxy - γy.
    LotkaVolterra,
    /// Van der Pol oscillator: x' = y, y' = μ(1 - x²)y - x.
    VanDerPol,
}

impl System {
    /// Get the next system in the cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Harmonic => Self::Pendulum,
            Self::Pendulum => Self::LotkaVolterra,
            Self::LotkaVolterra => Self::VanDerPol,
            Self::VanDerPol => Self::Harmonic,
        }
    }

    /// Get the system name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Harmonic => "Harmonic oscillator",
            Self::Pendulum => "Damped pendulum",
            Self::LotkaVolterra => "Lotka-Volterra",
            Self::VanDerPol => "Van der Pol",
        }
    }

    /// Parameter names, in the order the parameter slice uses.
    pub fn param_names(self) -> &'static [&'static str] {
        match self {
            Self::Harmonic => &["omega"],
            Self::Pendulum => &["gamma", "g/L"],
            Self::LotkaVolterra => &["alpha", "beta", "delta", "gamma"],
            Self::VanDerPol => &["mu"],
        }
    }

    /// Default parameters.
    pub fn default_params(self) -> Vec<f64> {
        match self {
            Self::Harmonic => vec![1.0],
            Self::Pendulum => vec![0.2, 1.0],
            Self::LotkaVolterra => vec![1.0, 1.0, 1.0, 1.0],
            Self::VanDerPol => vec![1.0],
        }
    }

    /// Default `(xlim, ylim)` for a phase plot of this system.
    pub fn default_limits(self) -> ((f64, f64), (f64, f64)) {
        match self {
            Self::Harmonic => ((-2.0, 2.0), (-2.0, 2.0)),
            Self::Pendulum => ((-7.0, 7.0), (-3.0, 3.0)),
            Self::LotkaVolterra => ((0.0, 3.0), (0.0, 3.0)),
            Self::VanDerPol => ((-3.0, 3.0), (-4.0, 4.0)),
        }
    }

    /// Axis labels for state slots 0 and 1.
    pub fn labels(self) -> (&'static str, &'static str) {
        match self {
            Self::Harmonic | Self::VanDerPol => ("x", "y"),
            Self::Pendulum => ("θ", "ω"),
            Self::LotkaVolterra => ("prey", "predators"),
        }
    }

    /// Check the parameter count.
    pub fn check_params(self, params: &[f64]) -> Result<(), SystemError> {
        let names = self.param_names();
        if params.len() == names.len() {
            Ok(())
        } else {
            Err(SystemError::Parameters {
                system: self.name(),
                names: names.join(", "),
                expected: names.len(),
                actual: params.len(),
            })
        }
    }

    fn rates(self, x: f64, y: f64, p: &[f64]) -> (f64, f64) {
        match self {
            Self::Harmonic => (y, -p[0] * p[0] * x),
            Self::Pendulum => (y, -p[0] * y - p[1] * x.sin()),
            Self::LotkaVolterra => (p[0] * x - p[1] * x * y, p[2] * x * y - p[3] * y),
            Self::VanDerPol => (y, p[0] * (1.0 - x * x) * y - x),
        }
    }
}

impl Derivative<[f64]> for System {
    /// Slots beyond the first two are held constant.
    fn derivative(&self, state: &[f64], _t: f64, params: &[f64]) -> Result<Vec<f64>, DerivativeError> {
        self.check_params(params)?;
        if state.len() < 2 {
            return Err(SystemError::State {
                system: self.name(),
                len: state.len(),
            }
            .into());
        }

        let (dx, dy) = self.rates(state[0], state[1], params);
        let mut ds = vec![0.0; state.len()];
        ds[0] = dx;
        ds[1] = dy;
        Ok(ds)
    }
}
