//! Forward simulation of the Solow recurrence.
//!
//! Capital per worker is advanced with a unit-step [`ForwardEuler`] solver over the
//! [`SolowGrowth`] vector field; the labor force grows geometrically alongside it:
//!
//! ```text
//! k_{t+1} = k_t + s * y_t - (n + delta) * k_t
//! L_{t+1} = L_t * (1 + n)
//! ```
//!
//! Every period emits a [`PeriodRecord`] with the per-capita and aggregate quantities
//! derived from the state at the start of that period.

use crate::error::{SolowError, SolowResult};
use crate::model::{output_per_worker, ModelParameters, SolowGrowth};
use crate::solvers::ForwardEuler;
use crate::steady_state::SteadyState;
use crate::traits::{Integrator, VectorField};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Step size of the accumulation recurrence. Not configurable.
const UNIT_STEP: f64 = 1.0;

/// One row of the simulation table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecord {
    #[serde(rename = "Period")]
    pub period: usize,
    pub k: f64,
    pub y: f64,
    pub sy: f64,
    pub c: f64,
    #[serde(rename = "L")]
    pub labor: f64,
    #[serde(rename = "K")]
    pub capital: f64,
    #[serde(rename = "Y")]
    pub output: f64,
    #[serde(rename = "sY")]
    pub investment: f64,
    #[serde(rename = "C")]
    pub consumption: f64,
}

impl PeriodRecord {
    fn derive(period: usize, k: f64, labor: f64, s: f64, alpha: f64) -> Self {
        let y = output_per_worker(k, alpha);
        let sy = s * y;
        let c = (1.0 - s) * y;
        Self {
            period,
            k,
            y,
            sy,
            c,
            labor,
            capital: k * labor,
            output: y * labor,
            investment: sy * labor,
            consumption: c * labor,
        }
    }

    pub fn get(&self, series: Series) -> f64 {
        match series {
            Series::Period => self.period as f64,
            Series::CapitalPerWorker => self.k,
            Series::OutputPerWorker => self.y,
            Series::InvestmentPerWorker => self.sy,
            Series::ConsumptionPerWorker => self.c,
            Series::Labor => self.labor,
            Series::Capital => self.capital,
            Series::Output => self.output,
            Series::Investment => self.investment,
            Series::Consumption => self.consumption,
        }
    }
}

/// Columns of the simulation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Series {
    Period,
    CapitalPerWorker,
    OutputPerWorker,
    InvestmentPerWorker,
    ConsumptionPerWorker,
    Labor,
    Capital,
    Output,
    Investment,
    Consumption,
}

impl Series {
    pub const ALL: [Series; 10] = [
        Series::Period,
        Series::CapitalPerWorker,
        Series::OutputPerWorker,
        Series::InvestmentPerWorker,
        Series::ConsumptionPerWorker,
        Series::Labor,
        Series::Capital,
        Series::Output,
        Series::Investment,
        Series::Consumption,
    ];

    /// Every column except the period index.
    pub const VALUES: [Series; 9] = [
        Series::CapitalPerWorker,
        Series::OutputPerWorker,
        Series::InvestmentPerWorker,
        Series::ConsumptionPerWorker,
        Series::Labor,
        Series::Capital,
        Series::Output,
        Series::Investment,
        Series::Consumption,
    ];

    pub const PER_CAPITA: [Series; 4] = [
        Series::CapitalPerWorker,
        Series::OutputPerWorker,
        Series::InvestmentPerWorker,
        Series::ConsumptionPerWorker,
    ];

    pub const AGGREGATE: [Series; 4] = [
        Series::Capital,
        Series::Output,
        Series::Investment,
        Series::Consumption,
    ];

    /// Column header as it appears in the table.
    pub fn column(self) -> &'static str {
        match self {
            Series::Period => "Period",
            Series::CapitalPerWorker => "k",
            Series::OutputPerWorker => "y",
            Series::InvestmentPerWorker => "sy",
            Series::ConsumptionPerWorker => "c",
            Series::Labor => "L",
            Series::Capital => "K",
            Series::Output => "Y",
            Series::Investment => "sY",
            Series::Consumption => "C",
        }
    }
}

/// The full table produced by one run, ordered by period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimulationTrace {
    records: Vec<PeriodRecord>,
}

impl SimulationTrace {
    pub fn records(&self) -> &[PeriodRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&PeriodRecord> {
        self.records.last()
    }

    /// One column of the table.
    pub fn series(&self, series: Series) -> Vec<f64> {
        self.records.iter().map(|r| r.get(series)).collect()
    }

    /// Signed distance `k_t - k*` for every period.
    pub fn gap_to(&self, steady: &SteadyState) -> Vec<f64> {
        self.records.iter().map(|r| r.k - steady.k).collect()
    }

    /// First period from which `|k_t - k*|` stays within `tolerance` until the end of the run.
    pub fn first_period_within(&self, steady: &SteadyState, tolerance: f64) -> Option<usize> {
        let mut first = None;
        for record in self.records.iter().rev() {
            if (record.k - steady.k).abs() > tolerance {
                break;
            }
            first = Some(record.period);
        }
        first
    }
}

/// Incremental simulator yielding one [`PeriodRecord`] per period.
///
/// After yielding an error the simulator is exhausted.
pub struct Simulator {
    params: ModelParameters,
    system: SolowGrowth<f64>,
    solver: ForwardEuler<f64>,
    capital: [f64; 1],
    labor: f64,
    t: f64,
    period: usize,
    failed: bool,
}

impl Simulator {
    pub fn new(params: ModelParameters) -> SolowResult<Self> {
        params.validate()?;
        let system = SolowGrowth::from(&params);
        Ok(Self {
            solver: ForwardEuler::new(system.dimension()),
            system,
            capital: [params.k0],
            labor: params.l0,
            t: 0.0,
            period: 0,
            failed: false,
            params,
        })
    }

    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    /// Index of the next period to be emitted.
    pub fn period(&self) -> usize {
        self.period
    }

    pub fn remaining(&self) -> usize {
        if self.failed {
            0
        } else {
            self.params.periods - self.period
        }
    }

    pub fn is_done(&self) -> bool {
        self.remaining() == 0
    }

    fn check_capital(&self) -> SolowResult<()> {
        let k = self.capital[0];
        if !k.is_finite() || k <= 0.0 {
            return Err(SolowError::domain(
                Some(self.period),
                "k",
                k,
                "capital per worker must stay positive and finite",
            ));
        }
        Ok(())
    }
}

impl Iterator for Simulator {
    type Item = SolowResult<PeriodRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_done() {
            return None;
        }

        if let Err(err) = self.check_capital() {
            warn!(%err, "simulation left the model domain");
            self.failed = true;
            return Some(Err(err));
        }

        let record = PeriodRecord::derive(
            self.period,
            self.capital[0],
            self.labor,
            self.params.s,
            self.params.alpha,
        );

        if self.period + 1 < self.params.periods {
            self.solver
                .advance(&self.system, &mut self.t, &mut self.capital, UNIT_STEP);
            self.labor *= 1.0 + self.params.n;
        }
        self.period += 1;

        Some(Ok(record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}

/// Runs the full horizon and collects the table.
pub fn simulate(params: &ModelParameters) -> SolowResult<SimulationTrace> {
    let simulator = Simulator::new(*params)?;
    debug!(periods = params.periods, "starting Solow simulation");

    let records = simulator.collect::<SolowResult<Vec<_>>>()?;

    if let Some(last) = records.last() {
        debug!(k = last.k, labor = last.labor, "simulation finished");
    }
    Ok(SimulationTrace { records })
}
