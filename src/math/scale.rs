//! Min-max scaling between physical units and the network's `[0, 1]` domain.
//!
//! The network was trained on min-max-normalized features, so every raw input
//! passes through `(raw - min) / (max - min)` before the forward pass, and the
//! scalar output is mapped back through the inverse affine with the fixed
//! empirical capacity range.
//!
//! Out-of-range inputs are rejected, never clamped: a clamped value would
//! silently misrepresent the model's trained domain.

use crate::catalog;
use crate::domain::{InputVector, RawInputSet};
use crate::error::EngineError;

/// Absolute tolerance for range validation.
///
/// Accepts exact boundary values under floating-point noise (e.g. a sweep grid
/// endpoint computed as `min + (steps-1) * step`) while rejecting anything
/// materially outside the range.
pub const RANGE_TOL: f64 = 1e-9;

/// Affine map from `[min, max]` to `[0, 1]`.
///
/// The caller guarantees `max > min`; every catalog range has nonzero width.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min)
}

/// Inverse affine map: `value * (max - min) + min`.
pub fn denormalize(value: f64, min: f64, max: f64) -> f64 {
    value * (max - min) + min
}

/// Validate a raw input set against the catalog and assemble the normalized
/// network input vector, in explicit index order.
pub fn normalize_input(raw: &RawInputSet) -> Result<InputVector, EngineError> {
    let mut x = InputVector::zeros();
    for def in catalog::definitions() {
        let value = raw.get(def.key);
        if value < def.min - RANGE_TOL || value > def.max + RANGE_TOL {
            return Err(EngineError::OutOfRange {
                key: def.key,
                value,
                min: def.min,
                max: def.max,
            });
        }
        x[def.index] = normalize(value, def.min, def.max);
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ParamKey;

    #[test]
    fn normalize_denormalize_round_trip_all_parameters() {
        for def in catalog::definitions() {
            for frac in [0.0, 0.25, 0.5, 0.75, 1.0] {
                let v = def.min + frac * def.width();
                let round = denormalize(normalize(v, def.min, def.max), def.min, def.max);
                assert!(
                    (round - v).abs() < 1e-9,
                    "{}: {v} round-tripped to {round}",
                    def.key
                );
            }
        }
    }

    #[test]
    fn midpoint_normalizes_to_half() {
        let x = normalize_input(&RawInputSet::midpoint()).unwrap();
        for i in 0..x.len() {
            assert!((x[i] - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn out_of_range_is_rejected_not_clamped() {
        let raw = RawInputSet::midpoint().with(ParamKey::SectionWidth, 10.0);
        let err = normalize_input(&raw).unwrap_err();
        match err {
            EngineError::OutOfRange {
                key, value, min, max,
            } => {
                assert_eq!(key, ParamKey::SectionWidth);
                assert_eq!(value, 10.0);
                assert_eq!((min, max), (115.0, 600.0));
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn boundary_values_pass_validation() {
        let (min, max) = catalog::range_of(ParamKey::ShearSpan);
        assert!(normalize_input(&RawInputSet::midpoint().with(ParamKey::ShearSpan, min)).is_ok());
        assert!(normalize_input(&RawInputSet::midpoint().with(ParamKey::ShearSpan, max)).is_ok());
        // Just past the tolerance band fails.
        assert!(
            normalize_input(&RawInputSet::midpoint().with(ParamKey::ShearSpan, max + 1e-6))
                .is_err()
        );
    }
}
