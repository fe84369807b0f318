//! Adapters between the engine and a front end.
//!
//! A run is `ParameterSource -> GrowthReport -> Renderer`. Sources decide where the
//! numbers come from (constants, preset plus overrides, JSON); renderers decide how
//! the result is shown. Neither touches the numerics.

use crate::config::{ParameterOverrides, Preset};
use crate::error::SolowResult;
use crate::model::ModelParameters;
use crate::simulation::{simulate, Series, SimulationTrace};
use crate::steady_state::{Stability, SteadyState};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use tracing::info;

/// Everything a front end needs to display one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthReport {
    pub parameters: ModelParameters,
    pub steady_state: SteadyState,
    pub stability: Stability,
    pub trace: SimulationTrace,
}

impl GrowthReport {
    pub fn build(params: &ModelParameters) -> SolowResult<Self> {
        let trace = simulate(params)?;
        let steady_state = SteadyState::from_params(params)?;
        Ok(Self {
            parameters: *params,
            steady_state,
            stability: Stability::from_params(params),
            trace,
        })
    }
}

pub trait ParameterSource {
    fn parameters(&self) -> Result<ModelParameters>;
}

/// Constants supplied up front.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedParameters(pub ModelParameters);

impl ParameterSource for FixedParameters {
    fn parameters(&self) -> Result<ModelParameters> {
        Ok(self.0)
    }
}

/// A preset adjusted by user input, snapped onto the preset's controls.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverrideSource {
    pub preset: Preset,
    pub overrides: ParameterOverrides,
}

impl ParameterSource for OverrideSource {
    fn parameters(&self) -> Result<ModelParameters> {
        Ok(self.overrides.apply_within(self.preset))
    }
}

/// A complete parameter set as JSON text.
#[derive(Debug, Clone)]
pub struct JsonParameters(pub String);

impl ParameterSource for JsonParameters {
    fn parameters(&self) -> Result<ModelParameters> {
        serde_json::from_str(&self.0).context("Failed to parse model parameters from JSON.")
    }
}

pub trait Renderer {
    fn render(&mut self, report: &GrowthReport, out: &mut dyn Write) -> Result<()>;
}

/// Plain text: the steady-state block, then optionally every `stride`-th table row.
/// The table always starts with the period column, followed by `columns`.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    pub stride: Option<usize>,
    pub columns: &'static [Series],
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            stride: None,
            columns: &Series::VALUES,
        }
    }
}

const COLUMN_WIDTH: usize = 12;

impl TextRenderer {
    fn write_steady_state(&self, report: &GrowthReport, out: &mut dyn Write) -> Result<()> {
        let steady = &report.steady_state;
        writeln!(out, "=== Steady State Values ===")?;
        writeln!(out, "k*  = {:.4}", steady.k)?;
        writeln!(out, "y*  = {:.4}", steady.y)?;
        writeln!(out, "sy* = {:.4}", steady.sy)?;
        writeln!(out, "c*  = {:.4}", steady.c)?;

        let stability = &report.stability;
        match stability.half_life {
            Some(half_life) => writeln!(
                out,
                "convergence: multiplier {:.4}, half-life {:.1} periods",
                stability.multiplier, half_life
            )?,
            None => writeln!(
                out,
                "convergence: multiplier {:.4}, steady state does not attract",
                stability.multiplier
            )?,
        }
        Ok(())
    }

    fn write_table(
        &self,
        trace: &SimulationTrace,
        stride: usize,
        out: &mut dyn Write,
    ) -> Result<()> {
        write!(out, "{:>width$}", Series::Period.column(), width = COLUMN_WIDTH)?;
        for series in self.columns {
            write!(out, "{:>width$}", series.column(), width = COLUMN_WIDTH)?;
        }
        writeln!(out)?;

        let last = trace.len().saturating_sub(1);
        for record in trace.records() {
            if record.period % stride != 0 && record.period != last {
                continue;
            }
            write!(out, "{:>width$}", record.period, width = COLUMN_WIDTH)?;
            for series in self.columns {
                write!(out, "{:>width$.4}", record.get(*series), width = COLUMN_WIDTH)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, report: &GrowthReport, out: &mut dyn Write) -> Result<()> {
        self.write_steady_state(report, out)?;
        if let Some(stride) = self.stride {
            writeln!(out)?;
            self.write_table(&report.trace, stride.max(1), out)?;
        }
        Ok(())
    }
}

/// The whole report as one JSON document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl Renderer for JsonRenderer {
    fn render(&mut self, report: &GrowthReport, out: &mut dyn Write) -> Result<()> {
        let written = if self.pretty {
            serde_json::to_writer_pretty(&mut *out, report)
        } else {
            serde_json::to_writer(&mut *out, report)
        };
        written.context("Failed to serialize growth report.")?;
        writeln!(out)?;
        Ok(())
    }
}

/// Acquires parameters, runs the engine, and renders the result.
/// Nothing is written to `out` when acquisition or computation fails.
pub fn run(
    source: &dyn ParameterSource,
    renderer: &mut dyn Renderer,
    out: &mut dyn Write,
) -> Result<GrowthReport> {
    let params = source
        .parameters()
        .context("Failed to acquire model parameters.")?;
    info!(%params, "running Solow model");

    let report = GrowthReport::build(&params)
        .with_context(|| format!("Solow model failed for parameters ({params})."))?;

    renderer.render(&report, out)?;
    Ok(report)
}
