//! One-shot model evaluation for the dashboard.

use crate::to_js_error;
use anyhow::{anyhow, Context};
use serde_wasm_bindgen::{from_value, to_value};
use solow_core::config::{ParameterOverrides, Preset};
use solow_core::report::GrowthReport;
use solow_core::ModelParameters;
use wasm_bindgen::prelude::*;

pub(crate) fn parse_preset(name: &str) -> anyhow::Result<Preset> {
    Preset::from_name(name).ok_or_else(|| anyhow!("Unknown preset: {name}"))
}

pub(crate) fn parse_overrides(value: JsValue) -> anyhow::Result<ParameterOverrides> {
    if value.is_undefined() || value.is_null() {
        return Ok(ParameterOverrides::default());
    }
    from_value(value).map_err(|err| anyhow!("Invalid parameter overrides: {err}"))
}

/// Preset plus slider input, snapped onto the preset's ranges and validated.
pub(crate) fn resolve_parameters(
    preset: &str,
    overrides: ParameterOverrides,
) -> anyhow::Result<ModelParameters> {
    let params = overrides.apply_within(parse_preset(preset)?);
    params
        .validate()
        .with_context(|| format!("Rejected parameters ({params})."))?;
    Ok(params)
}

pub(crate) fn build_report(
    preset: &str,
    overrides: ParameterOverrides,
) -> anyhow::Result<GrowthReport> {
    let params = resolve_parameters(preset, overrides)?;
    GrowthReport::build(&params)
        .with_context(|| format!("Solow model failed for parameters ({params})."))
}

fn serialize<T: serde::Serialize>(value: &T, what: &str) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|err| JsValue::from_str(&format!("Failed to serialize {what}: {err}")))
}

/// Runs the full horizon and returns `{ parameters, steady_state, stability, trace }`.
#[wasm_bindgen]
pub fn simulate(preset: &str, overrides: JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let overrides = parse_overrides(overrides).map_err(to_js_error)?;
    let report = build_report(preset, overrides).map_err(to_js_error)?;
    serialize(&report, "growth report")
}

#[wasm_bindgen]
pub fn steady_state(s: f64, delta: f64, n: f64, alpha: f64) -> Result<JsValue, JsValue> {
    let steady = solow_core::steady_state(s, delta, n, alpha)
        .context("Steady state is undefined.")
        .map_err(to_js_error)?;
    serialize(&steady, "steady state")
}

/// Slider descriptors for the given preset.
#[wasm_bindgen]
pub fn parameter_controls(preset: &str) -> Result<JsValue, JsValue> {
    let preset = parse_preset(preset).map_err(to_js_error)?;
    serialize(&preset.controls(), "parameter controls")
}

#[wasm_bindgen]
pub fn default_parameters(preset: &str) -> Result<JsValue, JsValue> {
    let preset = parse_preset(preset).map_err(to_js_error)?;
    serialize(&preset.parameters(), "default parameters")
}
