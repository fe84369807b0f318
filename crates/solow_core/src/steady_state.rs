//! Closed-form steady state of the accumulation equation.
//!
//! Solving `s * k^alpha = (n + delta) * k` for `k > 0` gives
//!
//! ```text
//! k* = (s / (n + delta)) ^ (1 / (1 - alpha))
//! ```
//!
//! The values here never look at a simulated path; they are the reference the
//! trajectory is compared against.

use crate::error::{SolowError, SolowResult};
use crate::model::{output_per_worker, ModelParameters};
use serde::{Deserialize, Serialize};

/// Per-capita values at the fixed point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteadyState {
    #[serde(rename = "k*")]
    pub k: f64,
    #[serde(rename = "y*")]
    pub y: f64,
    #[serde(rename = "sy*")]
    pub sy: f64,
    #[serde(rename = "c*")]
    pub c: f64,
}

pub fn steady_state(s: f64, delta: f64, n: f64, alpha: f64) -> SolowResult<SteadyState> {
    for (name, value) in [("s", s), ("delta", delta), ("n", n), ("alpha", alpha)] {
        if !value.is_finite() {
            return Err(SolowError::domain(None, name, value, "must be finite"));
        }
    }
    if alpha == 1.0 {
        return Err(SolowError::domain(
            None,
            "alpha",
            alpha,
            "exponent 1 / (1 - alpha) is undefined",
        ));
    }
    let effective = n + delta;
    if effective == 0.0 {
        return Err(SolowError::domain(
            None,
            "n + delta",
            effective,
            "division by zero effective depreciation",
        ));
    }

    let base = s / effective;
    let exponent = 1.0 / (1.0 - alpha);
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(SolowError::domain(
            None,
            "s / (n + delta)",
            base,
            "negative base raised to a fractional power",
        ));
    }

    let k = base.powf(exponent);
    let y = output_per_worker(k, alpha);
    if !k.is_finite() {
        return Err(SolowError::domain(None, "k*", k, "fixed point is not finite"));
    }
    if !y.is_finite() {
        return Err(SolowError::domain(None, "y*", y, "output at the fixed point is not finite"));
    }

    Ok(SteadyState {
        k,
        y,
        sy: s * y,
        c: (1.0 - s) * y,
    })
}

/// Steady state under the consumption-maximizing savings rate `s = alpha`.
pub fn golden_rule(delta: f64, n: f64, alpha: f64) -> SolowResult<SteadyState> {
    steady_state(alpha, delta, n, alpha)
}

impl SteadyState {
    pub fn from_params(params: &ModelParameters) -> SolowResult<Self> {
        steady_state(params.s, params.delta, params.n, params.alpha)
    }

    /// `s * y* - (n + delta) * k*`, zero up to rounding at a true fixed point.
    pub fn residual(&self, s: f64, delta: f64, n: f64) -> f64 {
        s * self.y - (n + delta) * self.k
    }
}

/// Linearized behaviour of the unit-step recurrence around `k*`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stability {
    /// Derivative of `k_t -> k_{t+1}` at the fixed point, `1 - (1 - alpha)(n + delta)`.
    pub multiplier: f64,
    /// `ln |multiplier|`; negative when deviations shrink. `None` when the multiplier is
    /// zero, i.e. a first-order deviation is eliminated in a single period.
    pub exponent: Option<f64>,
    /// Periods for a deviation to halve. `None` unless the fixed point attracts.
    pub half_life: Option<f64>,
    pub locally_stable: bool,
    /// Deviations keep their sign (no oscillation around `k*`).
    pub monotone: bool,
}

impl Stability {
    pub fn new(delta: f64, n: f64, alpha: f64) -> Self {
        let multiplier = 1.0 - (1.0 - alpha) * (n + delta);
        let exponent = (multiplier != 0.0).then(|| multiplier.abs().ln());
        let locally_stable = multiplier.abs() < 1.0;
        let half_life = match exponent {
            _ if !locally_stable => None,
            Some(exponent) => Some(std::f64::consts::LN_2 / -exponent),
            None => Some(0.0),
        };
        Self {
            multiplier,
            exponent,
            half_life,
            locally_stable,
            monotone: multiplier > 0.0,
        }
    }

    pub fn from_params(params: &ModelParameters) -> Self {
        Self::new(params.delta, params.n, params.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::{golden_rule, steady_state, Stability, SteadyState};
    use crate::error::SolowError;
    use crate::model::{ModelParameters, SolowGrowth};
    use crate::solvers::ForwardEuler;
    use crate::traits::{Integrator, VectorField};

    fn assert_domain_error(result: crate::error::SolowResult<SteadyState>, quantity: &str) {
        match result {
            Err(SolowError::NumericDomain {
                quantity: q,
                period,
                ..
            }) => {
                assert_eq!(q, quantity);
                assert_eq!(period, None);
            }
            other => panic!("expected NumericDomain for {quantity}, got {other:?}"),
        }
    }

    #[test]
    fn baseline_matches_closed_form() {
        let steady = steady_state(0.18, 0.03, 0.01, 1.0 / 3.0).expect("steady state");
        // s / (n + delta) = 4.5, exponent 1.5, so y* = sqrt(4.5).
        let expected_k = 4.5_f64.powf(1.5);
        let expected_y = 4.5_f64.sqrt();
        assert!((steady.k - expected_k).abs() < 1e-12);
        assert!((steady.y - expected_y).abs() < 1e-12);
        assert!((steady.k - 9.5459).abs() < 1e-4);
        assert!((steady.y - 2.1213).abs() < 1e-4);
        assert!((steady.sy - 0.3818).abs() < 1e-4);
        assert!((steady.c - 1.7395).abs() < 1e-4);
    }

    #[test]
    fn fixed_point_equation_holds() {
        for (s, delta, n, alpha) in [
            (0.18, 0.03, 0.01, 1.0 / 3.0),
            (0.3, 0.05, 0.01, 0.3),
            (0.6, 0.1, 0.0, 0.75),
            (0.25, 0.08, -0.02, 0.4),
        ] {
            let steady = steady_state(s, delta, n, alpha).expect("steady state");
            let scale = (n + delta) * steady.k;
            assert!(
                steady.residual(s, delta, n).abs() <= 1e-12 * scale.max(1.0),
                "residual too large for s={s} delta={delta} n={n} alpha={alpha}"
            );
            assert!((steady.y - (steady.sy + steady.c)).abs() < 1e-12);
        }
    }

    #[test]
    fn steady_state_ignores_initial_conditions_and_horizon() {
        let a = ModelParameters::default();
        let b = ModelParameters {
            k0: 0.5,
            l0: 1000.0,
            periods: 3,
            ..a
        };
        assert_eq!(
            SteadyState::from_params(&a).expect("a"),
            SteadyState::from_params(&b).expect("b")
        );
    }

    #[test]
    fn degenerate_inputs_are_domain_errors() {
        assert_domain_error(steady_state(0.18, 0.03, 0.01, 1.0), "alpha");
        assert_domain_error(steady_state(0.18, 0.02, -0.02, 0.3), "n + delta");
        assert_domain_error(steady_state(0.18, -0.05, 0.01, 0.3), "s / (n + delta)");
        assert_domain_error(steady_state(f64::NAN, 0.03, 0.01, 0.3), "s");
    }

    #[test]
    fn golden_rule_maximizes_steady_state_consumption() {
        let (delta, n, alpha) = (0.03, 0.01, 1.0 / 3.0);
        let golden = golden_rule(delta, n, alpha).expect("golden rule");
        for s in [0.1, 0.2, 0.3, 0.4, 0.5, 0.6] {
            let other = steady_state(s, delta, n, alpha).expect("steady state");
            assert!(other.c <= golden.c + 1e-12, "s = {s} beats the golden rule");
        }
    }

    #[test]
    fn stability_multiplier_matches_numerical_derivative() {
        let params = ModelParameters::default();
        let steady = SteadyState::from_params(&params).expect("steady state");
        let stability = Stability::from_params(&params);

        let field = SolowGrowth::from(&params);
        let mut solver = ForwardEuler::new(field.dimension());
        let step = |k: f64, solver: &mut ForwardEuler<f64>| {
            let mut state = [k];
            let mut t = 0.0;
            solver.advance(&field, &mut t, &mut state, 1.0);
            state[0]
        };

        let h = 1e-6;
        let derivative =
            (step(steady.k + h, &mut solver) - step(steady.k - h, &mut solver)) / (2.0 * h);
        assert!((derivative - stability.multiplier).abs() < 1e-7);
        assert!(stability.locally_stable);
        assert!(stability.monotone);
    }

    #[test]
    fn half_life_describes_decay_of_the_gap() {
        let stability = Stability::new(0.03, 0.01, 1.0 / 3.0);
        let half_life = stability.half_life.expect("stable fixed point");
        assert!((stability.multiplier.powf(half_life) - 0.5).abs() < 1e-12);
        assert!(stability.exponent.expect("non-zero multiplier") < 0.0);
    }

    #[test]
    fn heavy_depreciation_oscillates_or_diverges() {
        let oscillating = Stability::new(1.6, 0.0, 0.25);
        assert!(oscillating.locally_stable);
        assert!(!oscillating.monotone);

        let unstable = Stability::new(3.0, 0.0, 0.2);
        assert!(!unstable.locally_stable);
        assert_eq!(unstable.half_life, None);
    }

    #[test]
    fn zero_multiplier_has_no_exponent_and_instant_half_life() {
        // (1 - alpha)(n + delta) = 0.5 * 2.0 = 1
        let stability = Stability::new(2.0, 0.0, 0.5);
        assert_eq!(stability.multiplier, 0.0);
        assert_eq!(stability.exponent, None);
        assert_eq!(stability.half_life, Some(0.0));
        assert!(stability.locally_stable);
        assert!(!stability.monotone);

        let json = serde_json::to_value(stability).expect("serialize");
        assert!(json["exponent"].is_null());
        assert_eq!(json["half_life"], 0.0);
        assert_eq!(json["multiplier"], 0.0);
    }
}
