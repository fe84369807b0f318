//! Stepped simulation runner.

use crate::model::{parse_overrides, resolve_parameters};
use crate::to_js_error;
use anyhow::Context;
use serde_wasm_bindgen::to_value;
use solow_core::{PeriodRecord, Simulator};
use wasm_bindgen::prelude::*;

/// WASM-exported runner that advances the simulation in batches of periods,
/// so the front end can draw the trajectory progressively.
#[wasm_bindgen]
pub struct WasmSolowRunner {
    simulator: Simulator,
    records: Vec<PeriodRecord>,
}

impl WasmSolowRunner {
    pub(crate) fn from_simulator(simulator: Simulator) -> Self {
        let capacity = simulator.remaining();
        Self {
            simulator,
            records: Vec::with_capacity(capacity),
        }
    }

    /// Advances up to `batch` periods and returns the records produced by this call.
    pub(crate) fn advance(&mut self, batch: usize) -> anyhow::Result<&[PeriodRecord]> {
        let start = self.records.len();
        for result in self.simulator.by_ref().take(batch) {
            let record = result.context("Simulation stopped.")?;
            self.records.push(record);
        }
        Ok(&self.records[start..])
    }
}

#[wasm_bindgen]
impl WasmSolowRunner {
    #[wasm_bindgen(constructor)]
    pub fn new(preset: &str, overrides: JsValue) -> Result<WasmSolowRunner, JsValue> {
        console_error_panic_hook::set_once();

        let overrides = parse_overrides(overrides).map_err(to_js_error)?;
        let params = resolve_parameters(preset, overrides).map_err(to_js_error)?;
        let simulator = Simulator::new(params).map_err(|err| to_js_error(err.into()))?;
        Ok(Self::from_simulator(simulator))
    }

    /// Runs the next `batch` periods and returns them as an array of rows.
    pub fn run_steps(&mut self, batch: u32) -> Result<JsValue, JsValue> {
        let rows = self.advance(batch as usize).map_err(to_js_error)?;
        to_value(rows)
            .map_err(|err| JsValue::from_str(&format!("Failed to serialize rows: {err}")))
    }

    pub fn is_done(&self) -> bool {
        self.simulator.is_done()
    }

    /// Index of the next period to be produced.
    pub fn period(&self) -> usize {
        self.simulator.period()
    }

    pub fn total_periods(&self) -> usize {
        self.simulator.params().periods
    }

    /// All rows produced so far.
    pub fn trace(&self) -> Result<JsValue, JsValue> {
        to_value(&self.records)
            .map_err(|err| JsValue::from_str(&format!("Failed to serialize trace: {err}")))
    }
}
