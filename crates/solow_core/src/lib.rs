pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod simulation;
pub mod solvers;
pub mod steady_state;
/// The `solow_core` crate provides the numerical engine for discrete-time Solow-Swan
/// growth simulations. It is presentation-agnostic: callers supply a parameter set and
/// receive typed series and steady-state values back.
///
/// Key components:
/// - **Traits**: `Scalar` (numeric type abstraction), `VectorField` (ODE right-hand sides), `Integrator` (fixed-step solvers).
/// - **Model**: `ModelParameters` and the `SolowGrowth` vector field.
/// - **Simulation**: the incremental `Simulator` and the `simulate` batch entry point.
/// - **Steady State**: closed-form fixed point and its local stability.
/// - **Report**: parameter sources and renderers that adapt the engine to a front end.
pub mod traits;

pub use error::{SolowError, SolowResult};
pub use model::ModelParameters;
pub use simulation::{simulate, PeriodRecord, Series, SimulationTrace, Simulator};
pub use steady_state::{golden_rule, steady_state, Stability, SteadyState};
