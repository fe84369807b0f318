use crate::traits::{Integrator, Scalar, VectorField};

/// Explicit (forward) Euler solver.
///
/// Computes `x_{t+dt} = x_t + dt * f(t, x_t)`. The growth simulation always
/// drives it with `dt = 1`, which turns the continuous Solow equation into the
/// period-by-period accumulation recurrence.
pub struct ForwardEuler<T: Scalar> {
    rate: Vec<T>,
}

impl<T: Scalar> ForwardEuler<T> {
    pub fn new(dim: usize) -> Self {
        Self {
            rate: vec![T::zero(); dim],
        }
    }
}

impl<T: Scalar> Integrator<T> for ForwardEuler<T> {
    fn advance(&mut self, field: &impl VectorField<T>, t: &mut T, state: &mut [T], dt: T) {
        // f(t, x)
        field.rates(*t, state, &mut self.rate);

        for (x, rate) in state.iter_mut().zip(self.rate.iter()) {
            *x = *x + dt * *rate;
        }

        *t = *t + dt;
    }
}
