use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// Numeric type the growth law and its integrators are generic over.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// Right-hand side of an autonomous or time-dependent ODE `dx/dt = f(t, x)`.
pub trait VectorField<T: Scalar> {
    /// Number of state components `rates` reads and writes.
    fn dimension(&self) -> usize;

    /// Writes `f(t, x)` into `out`.
    fn rates(&self, t: T, x: &[T], out: &mut [T]);
}

/// Fixed-step explicit integrator.
pub trait Integrator<T: Scalar> {
    /// Replaces `state` by its value one step of size `dt` later and moves `t` forward.
    fn advance(&mut self, field: &impl VectorField<T>, t: &mut T, state: &mut [T], dt: T);
}
