//! Named calibrations, partial overrides, and input-control descriptors.

use crate::model::ModelParameters;
use serde::{Deserialize, Serialize};

/// Named parameter sets with documented defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// `s = 0.18, delta = 0.03, n = 0.01, alpha = 1/3, k0 = 10, L0 = 30, T = 1500`.
    #[default]
    Baseline,
    /// `s = 0.3, delta = 0.05, n = 0.01, alpha = 0.3, k0 = 1, L0 = 1, T = 100`.
    Classroom,
}

impl Preset {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "baseline" => Some(Preset::Baseline),
            "classroom" => Some(Preset::Classroom),
            _ => None,
        }
    }

    pub fn parameters(self) -> ModelParameters {
        match self {
            Preset::Baseline => ModelParameters::default(),
            Preset::Classroom => ModelParameters {
                s: 0.3,
                delta: 0.05,
                n: 0.01,
                alpha: 0.3,
                k0: 1.0,
                l0: 1.0,
                periods: 100,
            },
        }
    }

    /// Input controls for a front end, in display order.
    pub fn controls(self) -> Vec<ParameterControl> {
        let p = self.parameters();
        match self {
            Preset::Baseline => vec![
                ParameterControl::new("s", "Savings rate (s)", 0.01, 0.99, 0.01, p.s),
                ParameterControl::new("delta", "Depreciation rate (δ)", 0.001, 0.2, 0.001, p.delta),
                ParameterControl::new("n", "Population growth rate (n)", 0.001, 0.1, 0.001, p.n),
                ParameterControl::new("alpha", "Capital share (α)", 0.01, 0.99, 0.01, p.alpha),
                ParameterControl::new("k0", "Initial capital per worker (k₀)", 0.1, 100.0, 0.1, p.k0),
                ParameterControl::new("L0", "Initial labor force (L₀)", 1.0, 1000.0, 1.0, p.l0),
                ParameterControl::fixed("T", "Number of periods (T)", p.periods as f64),
            ],
            Preset::Classroom => vec![
                ParameterControl::new("s", "Savings rate (s)", 0.01, 0.99, 0.01, p.s),
                ParameterControl::new("delta", "Depreciation rate (δ)", 0.0, 0.2, 0.005, p.delta),
                ParameterControl::new("n", "Population growth rate (n)", 0.0, 0.1, 0.005, p.n),
                ParameterControl::new("alpha", "Capital share in output (α)", 0.01, 0.99, 0.01, p.alpha),
                ParameterControl::new("k0", "Initial capital per worker (k₀)", 0.1, 10.0, 0.1, p.k0),
                ParameterControl::new("L0", "Initial labor force (L₀)", 1.0, 1000.0, 1.0, p.l0),
                ParameterControl::new("T", "Number of periods (T)", 20.0, 300.0, 10.0, p.periods as f64),
            ],
        }
    }
}

/// Range and default of a single input, e.g. a slider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterControl {
    pub key: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    /// The value is not user-adjustable (`min == max == default`).
    pub fixed: bool,
}

impl ParameterControl {
    fn new(
        key: &'static str,
        label: &'static str,
        min: f64,
        max: f64,
        step: f64,
        default: f64,
    ) -> Self {
        Self {
            key,
            label,
            min,
            max,
            step,
            default,
            fixed: false,
        }
    }

    fn fixed(key: &'static str, label: &'static str, value: f64) -> Self {
        Self {
            key,
            label,
            min: value,
            max: value,
            step: 0.0,
            default: value,
            fixed: true,
        }
    }

    /// Snaps a raw value onto the control's grid and range.
    pub fn clamp(&self, value: f64) -> f64 {
        if self.fixed || !value.is_finite() {
            return self.default;
        }
        let snapped = if self.step > 0.0 {
            self.min + ((value - self.min) / self.step).round() * self.step
        } else {
            value
        };
        snapped.clamp(self.min, self.max)
    }
}

/// Partial parameter set; absent fields keep the base value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterOverrides {
    pub s: Option<f64>,
    pub delta: Option<f64>,
    pub n: Option<f64>,
    pub alpha: Option<f64>,
    pub k0: Option<f64>,
    #[serde(rename = "L0")]
    pub l0: Option<f64>,
    #[serde(rename = "T")]
    pub periods: Option<usize>,
}

impl ParameterOverrides {
    pub fn apply(&self, base: ModelParameters) -> ModelParameters {
        ModelParameters {
            s: self.s.unwrap_or(base.s),
            delta: self.delta.unwrap_or(base.delta),
            n: self.n.unwrap_or(base.n),
            alpha: self.alpha.unwrap_or(base.alpha),
            k0: self.k0.unwrap_or(base.k0),
            l0: self.l0.unwrap_or(base.l0),
            periods: self.periods.unwrap_or(base.periods),
        }
    }

    /// Applies the overrides after snapping each one onto the preset's controls.
    pub fn apply_within(&self, preset: Preset) -> ModelParameters {
        let mut snapped = *self;
        for control in preset.controls() {
            let slot = match control.key {
                "s" => &mut snapped.s,
                "delta" => &mut snapped.delta,
                "n" => &mut snapped.n,
                "alpha" => &mut snapped.alpha,
                "k0" => &mut snapped.k0,
                "L0" => &mut snapped.l0,
                "T" => {
                    snapped.periods = snapped
                        .periods
                        .map(|t| control.clamp(t as f64).round() as usize);
                    continue;
                }
                _ => continue,
            };
            *slot = slot.map(|value| control.clamp(value));
        }
        snapped.apply(preset.parameters())
    }
}

#[cfg(test)]
mod tests {
    use super::{ParameterOverrides, Preset};
    use crate::model::ModelParameters;

    #[test]
    fn presets_are_valid_and_distinct() {
        for preset in [Preset::Baseline, Preset::Classroom] {
            assert!(preset.parameters().validate().is_ok(), "{preset:?}");
        }
        assert_eq!(Preset::Baseline.parameters(), ModelParameters::default());
        assert_eq!(Preset::Classroom.parameters().periods, 100);
        assert_eq!(Preset::default(), Preset::Baseline);
    }

    #[test]
    fn preset_names_parse_case_insensitively() {
        assert_eq!(Preset::from_name("Classroom"), Some(Preset::Classroom));
        assert_eq!(Preset::from_name(" baseline "), Some(Preset::Baseline));
        assert_eq!(Preset::from_name("dashboard"), None);
    }

    #[test]
    fn controls_start_at_preset_defaults() {
        for preset in [Preset::Baseline, Preset::Classroom] {
            let params = preset.parameters();
            let controls = preset.controls();
            assert_eq!(controls.len(), 7);
            for control in &controls {
                assert!(control.min <= control.default && control.default <= control.max);
            }
            let s = controls.iter().find(|c| c.key == "s").expect("s control");
            assert_eq!(s.default, params.s);
        }

        let horizon = Preset::Baseline
            .controls()
            .into_iter()
            .find(|c| c.key == "T")
            .expect("T control");
        assert!(horizon.fixed);
        assert_eq!(horizon.clamp(20.0), 1500.0);
    }

    #[test]
    fn clamp_snaps_to_grid_and_range() {
        let controls = Preset::Classroom.controls();
        let delta = controls.iter().find(|c| c.key == "delta").expect("delta");
        assert!((delta.clamp(0.0312) - 0.03).abs() < 1e-12);
        assert_eq!(delta.clamp(5.0), 0.2);
        assert_eq!(delta.clamp(-1.0), 0.0);
        assert_eq!(delta.clamp(f64::NAN), delta.default);
    }

    #[test]
    fn overrides_replace_only_present_fields() {
        let overrides: ParameterOverrides =
            serde_json::from_str(r#"{"s": 0.25, "T": 40}"#).expect("overrides");
        let params = overrides.apply(ModelParameters::default());
        assert_eq!(params.s, 0.25);
        assert_eq!(params.periods, 40);
        assert_eq!(params.alpha, ModelParameters::default().alpha);
        assert_eq!(params.l0, 30.0);
    }

    #[test]
    fn apply_within_respects_control_ranges() {
        let overrides = ParameterOverrides {
            s: Some(1.5),
            periods: Some(1000),
            ..ParameterOverrides::default()
        };
        let params = overrides.apply_within(Preset::Classroom);
        assert!((params.s - 0.99).abs() < 1e-12);
        assert_eq!(params.periods, 300);
        assert_eq!(params.k0, 1.0);
        assert!(params.validate().is_ok());
    }
}
