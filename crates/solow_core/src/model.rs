//! Model parameters and the Solow growth law.

use crate::error::{SolowError, SolowResult};
use crate::traits::{Scalar, VectorField};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural parameters and initial conditions of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Savings rate.
    pub s: f64,
    /// Depreciation rate.
    pub delta: f64,
    /// Population growth rate.
    pub n: f64,
    /// Output elasticity of capital.
    pub alpha: f64,
    /// Initial capital per worker.
    pub k0: f64,
    /// Initial labor force.
    #[serde(rename = "L0")]
    pub l0: f64,
    /// Number of periods to simulate.
    #[serde(rename = "T")]
    pub periods: usize,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            s: 0.18,
            delta: 0.03,
            n: 0.01,
            alpha: 1.0 / 3.0,
            k0: 10.0,
            l0: 30.0,
            periods: 1500,
        }
    }
}

impl ModelParameters {
    /// Effective depreciation of capital per worker, `n + delta`.
    pub fn effective_depreciation(&self) -> f64 {
        self.n + self.delta
    }

    pub fn with_periods(self, periods: usize) -> Self {
        Self { periods, ..self }
    }

    /// Checks every structural precondition. Nothing is computed when this fails.
    pub fn validate(&self) -> SolowResult<()> {
        if self.periods == 0 {
            return Err(SolowError::invalid(
                "T",
                0.0,
                "at least one period must be simulated",
            ));
        }

        let fields = [
            ("s", self.s),
            ("delta", self.delta),
            ("n", self.n),
            ("alpha", self.alpha),
            ("k0", self.k0),
            ("L0", self.l0),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SolowError::invalid(name, value, "must be finite"));
            }
        }

        if self.s <= 0.0 || self.s >= 1.0 {
            return Err(SolowError::invalid(
                "s",
                self.s,
                "savings rate must lie strictly between 0 and 1",
            ));
        }
        if self.delta < 0.0 {
            return Err(SolowError::invalid(
                "delta",
                self.delta,
                "depreciation rate must be non-negative",
            ));
        }
        if self.n <= -1.0 {
            return Err(SolowError::invalid(
                "n",
                self.n,
                "population growth rate must exceed -1",
            ));
        }
        if self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(SolowError::invalid(
                "alpha",
                self.alpha,
                "capital share must lie strictly between 0 and 1",
            ));
        }
        if self.effective_depreciation() == 0.0 {
            return Err(SolowError::invalid(
                "n + delta",
                self.effective_depreciation(),
                "steady state is undefined without effective depreciation",
            ));
        }
        if self.k0 <= 0.0 {
            return Err(SolowError::invalid(
                "k0",
                self.k0,
                "initial capital per worker must be positive",
            ));
        }
        if self.l0 <= 0.0 {
            return Err(SolowError::invalid(
                "L0",
                self.l0,
                "initial labor force must be positive",
            ));
        }

        Ok(())
    }
}

impl fmt::Display for ModelParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "s={}, delta={}, n={}, alpha={}, k0={}, L0={}, T={}",
            self.s, self.delta, self.n, self.alpha, self.k0, self.l0, self.periods
        )
    }
}

/// Cobb-Douglas output per worker, `y = k^alpha`.
pub fn output_per_worker<T: Scalar>(k: T, alpha: T) -> T {
    k.powf(alpha)
}

/// The continuous Solow law of motion for capital per worker:
///
/// ```text
/// dk/dt = s * k^alpha - (n + delta) * k
/// ```
///
/// The labor force is exogenous and grows geometrically, so it is not part of the state.
#[derive(Debug, Clone, Copy)]
pub struct SolowGrowth<T: Scalar> {
    pub s: T,
    pub delta: T,
    pub n: T,
    pub alpha: T,
}

impl<T: Scalar> SolowGrowth<T> {
    pub fn new(s: T, delta: T, n: T, alpha: T) -> Self {
        Self { s, delta, n, alpha }
    }
}

impl From<&ModelParameters> for SolowGrowth<f64> {
    fn from(params: &ModelParameters) -> Self {
        Self::new(params.s, params.delta, params.n, params.alpha)
    }
}

impl<T: Scalar> VectorField<T> for SolowGrowth<T> {
    fn dimension(&self) -> usize {
        1
    }

    fn rates(&self, _t: T, x: &[T], out: &mut [T]) {
        let k = x[0];
        let y = output_per_worker(k, self.alpha);
        out[0] = self.s * y - (self.n + self.delta) * k;
    }
}
