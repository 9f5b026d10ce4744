//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during prediction and sweeping
//! - exported to JSON/CSV
//! - reloaded later for plotting without recomputation

use std::path::PathBuf;

use nalgebra::SVector;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Number of input parameters the network was trained on.
pub const PARAM_COUNT: usize = 13;

/// Normalized network input vector, in [`ParamKey`] index order.
pub type InputVector = SVector<f64, PARAM_COUNT>;

/// The thirteen corbel input parameters.
///
/// The variant set is closed: the network weights were trained against exactly
/// these features, in exactly this order. Each key carries an explicit
/// [`index`](ParamKey::index) that fixes its column in the input vector —
/// vector assembly is defined by that index, never by container iteration
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKey {
    /// √(f_ck) — square root of concrete compressive strength.
    SqrtFck,
    /// a_v — shear span.
    ShearSpan,
    /// b — width of the section.
    SectionWidth,
    /// w_c — width of the column.
    ColumnWidth,
    /// d — effective depth.
    EffectiveDepth,
    /// h — total depth.
    TotalDepth,
    /// a/d — shear span-to-depth ratio.
    SpanDepthRatio,
    /// ρ_f — longitudinal reinforcement ratio.
    RhoLongitudinal,
    /// ρ_h — horizontal reinforcement ratio.
    RhoHorizontal,
    /// ρ_v — vertical reinforcement ratio.
    RhoVertical,
    /// f_yt — yield strength of transverse reinforcement.
    FyTransverse,
    /// f_yh — yield strength of horizontal reinforcement.
    FyHorizontal,
    /// f_yv — yield strength of vertical reinforcement.
    FyVertical,
}

impl ParamKey {
    /// All keys, in network input order.
    pub const ALL: [ParamKey; PARAM_COUNT] = [
        ParamKey::SqrtFck,
        ParamKey::ShearSpan,
        ParamKey::SectionWidth,
        ParamKey::ColumnWidth,
        ParamKey::EffectiveDepth,
        ParamKey::TotalDepth,
        ParamKey::SpanDepthRatio,
        ParamKey::RhoLongitudinal,
        ParamKey::RhoHorizontal,
        ParamKey::RhoVertical,
        ParamKey::FyTransverse,
        ParamKey::FyHorizontal,
        ParamKey::FyVertical,
    ];

    /// Column of this parameter in the network input vector.
    pub const fn index(self) -> usize {
        match self {
            ParamKey::SqrtFck => 0,
            ParamKey::ShearSpan => 1,
            ParamKey::SectionWidth => 2,
            ParamKey::ColumnWidth => 3,
            ParamKey::EffectiveDepth => 4,
            ParamKey::TotalDepth => 5,
            ParamKey::SpanDepthRatio => 6,
            ParamKey::RhoLongitudinal => 7,
            ParamKey::RhoHorizontal => 8,
            ParamKey::RhoVertical => 9,
            ParamKey::FyTransverse => 10,
            ParamKey::FyHorizontal => 11,
            ParamKey::FyVertical => 12,
        }
    }

    /// Conventional symbol, as used in the corbel literature.
    pub const fn label(self) -> &'static str {
        match self {
            ParamKey::SqrtFck => "√(f_ck)",
            ParamKey::ShearSpan => "a_v",
            ParamKey::SectionWidth => "b",
            ParamKey::ColumnWidth => "w_c",
            ParamKey::EffectiveDepth => "d",
            ParamKey::TotalDepth => "h",
            ParamKey::SpanDepthRatio => "a/d",
            ParamKey::RhoLongitudinal => "ρ_f",
            ParamKey::RhoHorizontal => "ρ_h",
            ParamKey::RhoVertical => "ρ_v",
            ParamKey::FyTransverse => "f_yt",
            ParamKey::FyHorizontal => "f_yh",
            ParamKey::FyVertical => "f_yv",
        }
    }

    /// ASCII spelling accepted on the command line.
    pub const fn cli_name(self) -> &'static str {
        match self {
            ParamKey::SqrtFck => "sqrt-fck",
            ParamKey::ShearSpan => "av",
            ParamKey::SectionWidth => "b",
            ParamKey::ColumnWidth => "wc",
            ParamKey::EffectiveDepth => "d",
            ParamKey::TotalDepth => "h",
            ParamKey::SpanDepthRatio => "ad",
            ParamKey::RhoLongitudinal => "rho-f",
            ParamKey::RhoHorizontal => "rho-h",
            ParamKey::RhoVertical => "rho-v",
            ParamKey::FyTransverse => "fyt",
            ParamKey::FyHorizontal => "fyh",
            ParamKey::FyVertical => "fyv",
        }
    }

    /// Resolve a user-supplied key string.
    ///
    /// Accepts either the ASCII CLI spelling (case-insensitive, `_` treated
    /// as `-`) or the literature symbol (e.g. `a/d`, `ρ_f`).
    pub fn parse_key(s: &str) -> Result<ParamKey, EngineError> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        for key in ParamKey::ALL {
            if normalized == key.cli_name() || s.trim() == key.label() {
                return Ok(key);
            }
        }
        Err(EngineError::UnknownParameter {
            key: s.trim().to_string(),
        })
    }
}

impl std::fmt::Display for ParamKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Static metadata for one input parameter.
///
/// The `[min, max]` range is the envelope of the experimental database the
/// network was trained on; inputs outside it are rejected rather than
/// extrapolated. Every range in the catalog has nonzero width.
#[derive(Debug, Clone, Copy)]
pub struct ParameterDefinition {
    pub key: ParamKey,
    /// Network input column. Matches `key.index()`; duplicated here so the
    /// catalog table is self-describing.
    pub index: usize,
    pub description: &'static str,
    pub min: f64,
    pub max: f64,
}

impl ParameterDefinition {
    /// Range width. Never zero for catalog entries.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint of the valid range (the default baseline value).
    pub fn midpoint(&self) -> f64 {
        self.min + 0.5 * self.width()
    }
}

/// A complete set of raw (physical-unit) input values, one per parameter,
/// stored in network input order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawInputSet {
    values: [f64; PARAM_COUNT],
}

impl RawInputSet {
    pub fn from_values(values: [f64; PARAM_COUNT]) -> Self {
        Self { values }
    }

    /// Build from a slice in network input order.
    ///
    /// Fails with [`EngineError::DimensionMismatch`] unless the slice has
    /// exactly [`PARAM_COUNT`] components. This is the entry point for
    /// callers that assemble inputs dynamically.
    pub fn from_slice(values: &[f64]) -> Result<Self, EngineError> {
        let values: [f64; PARAM_COUNT] =
            values
                .try_into()
                .map_err(|_| EngineError::DimensionMismatch {
                    expected: PARAM_COUNT,
                    got: values.len(),
                })?;
        Ok(Self { values })
    }

    /// Every parameter at the midpoint of its valid range.
    pub fn midpoint() -> Self {
        let mut values = [0.0; PARAM_COUNT];
        for def in crate::catalog::definitions() {
            values[def.index] = def.midpoint();
        }
        Self { values }
    }

    pub fn get(&self, key: ParamKey) -> f64 {
        self.values[key.index()]
    }

    pub fn set(&mut self, key: ParamKey, value: f64) {
        self.values[key.index()] = value;
    }

    /// Copy of this set with one component replaced.
    pub fn with(&self, key: ParamKey, value: f64) -> Self {
        let mut out = *self;
        out.set(key, value);
        out
    }

    pub fn values(&self) -> &[f64; PARAM_COUNT] {
        &self.values
    }
}

/// One point on a sensitivity curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepSample {
    /// Raw (physical-unit) value of the varying parameter.
    pub raw_value: f64,
    /// Predicted shear capacity (kN).
    pub predicted: f64,
}

/// A saved sweep file (JSON).
///
/// The "portable" representation of a sensitivity curve: the varying key, the
/// baseline the other parameters were held at, and the computed samples. Lets
/// `corbel plot` re-render a curve without recomputation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepFile {
    pub tool: String,
    pub param: ParamKey,
    pub param_label: String,
    /// Baseline raw values in network input order.
    pub baseline: Vec<f64>,
    pub samples: Vec<SweepSample>,
}

/// Sweep run configuration, derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub param: ParamKey,
    pub steps: usize,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
    pub export: Option<PathBuf>,
    pub export_curve: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_indices_match_declared_order() {
        for (i, key) in ParamKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }

    #[test]
    fn parse_key_accepts_cli_and_symbol_spellings() {
        assert_eq!(ParamKey::parse_key("av").unwrap(), ParamKey::ShearSpan);
        assert_eq!(ParamKey::parse_key("a_v").unwrap(), ParamKey::ShearSpan);
        assert_eq!(ParamKey::parse_key("a/d").unwrap(), ParamKey::SpanDepthRatio);
        assert_eq!(ParamKey::parse_key("ρ_f").unwrap(), ParamKey::RhoLongitudinal);
        assert_eq!(ParamKey::parse_key("SQRT-FCK").unwrap(), ParamKey::SqrtFck);
    }

    #[test]
    fn parse_key_rejects_unknown() {
        let err = ParamKey::parse_key("torsion").unwrap_err();
        assert!(matches!(err, EngineError::UnknownParameter { .. }));
    }

    #[test]
    fn from_slice_enforces_dimension() {
        let err = RawInputSet::from_slice(&[1.0; 12]).unwrap_err();
        assert_eq!(
            err,
            EngineError::DimensionMismatch {
                expected: PARAM_COUNT,
                got: 12
            }
        );
        assert!(RawInputSet::from_slice(&[1.0; PARAM_COUNT]).is_ok());
    }

    #[test]
    fn with_replaces_a_single_component() {
        let base = RawInputSet::midpoint();
        let modified = base.with(ParamKey::SectionWidth, 200.0);
        assert_eq!(modified.get(ParamKey::SectionWidth), 200.0);
        for key in ParamKey::ALL {
            if key != ParamKey::SectionWidth {
                assert_eq!(modified.get(key), base.get(key));
            }
        }
    }
}
