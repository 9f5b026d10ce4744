//! One-parameter sensitivity sweep.
//!
//! Traces how predicted capacity responds to a single parameter while the
//! other twelve are held at caller-chosen baseline values. Each grid point is
//! an independent single prediction, so the loop parallelizes trivially; the
//! emitted sequence is always ordered by ascending grid value regardless of
//! execution order.

use rayon::prelude::*;

use crate::ann::AnnPredictor;
use crate::catalog;
use crate::domain::{ParamKey, RawInputSet, SweepSample};
use crate::error::EngineError;

/// Default grid resolution for sensitivity curves.
pub const DEFAULT_STEPS: usize = 100;

/// Generate `steps` evenly spaced points between `min` and `max` (inclusive).
pub fn lin_space(min: f64, max: f64, steps: usize) -> Result<Vec<f64>, EngineError> {
    if !(min.is_finite() && max.is_finite() && max > min) {
        return Err(EngineError::InvalidArgument(format!(
            "Invalid sweep range: min={min}, max={max} (must be finite and max>min)."
        )));
    }
    if steps < 2 {
        return Err(EngineError::InvalidArgument(format!(
            "Sweep steps must be >= 2 (got {steps})."
        )));
    }

    let step = (max - min) / (steps as f64 - 1.0);
    let mut out = Vec::with_capacity(steps);
    for i in 0..steps {
        out.push(min + step * i as f64);
    }
    Ok(out)
}

/// Sweep `key` across its full valid range, holding the rest of `baseline`
/// fixed.
///
/// The baseline value of `key` itself is irrelevant (it is replaced at every
/// grid point); all other baseline components are range-validated by the
/// per-point prediction.
pub fn sweep(
    predictor: &AnnPredictor,
    baseline: &RawInputSet,
    key: ParamKey,
    steps: usize,
) -> Result<Vec<SweepSample>, EngineError> {
    let (min, max) = catalog::range_of(key);
    let grid = lin_space(min, max, steps)?;

    // Independent predictions; the indexed parallel map keeps sample order
    // aligned with the grid.
    grid.par_iter()
        .map(|&raw_value| {
            let input = baseline.with(key, raw_value);
            let predicted = predictor.predict(&input)?;
            Ok(SweepSample {
                raw_value,
                predicted,
            })
        })
        .collect()
}

/// [`sweep`] with a string key, for callers that take parameter names from
/// user input. Unknown keys fail with [`EngineError::UnknownParameter`].
pub fn sweep_by_key(
    predictor: &AnnPredictor,
    baseline: &RawInputSet,
    key: &str,
    steps: usize,
) -> Result<Vec<SweepSample>, EngineError> {
    let key = ParamKey::parse_key(key)?;
    sweep(predictor, baseline, key, steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lin_space_includes_endpoints() {
        let v = lin_space(0.11, 1.69, 100).unwrap();
        assert_eq!(v.len(), 100);
        assert!((v[0] - 0.11).abs() < 1e-12);
        assert!((v[99] - 1.69).abs() < 1e-12);
    }

    #[test]
    fn lin_space_rejects_degenerate_configs() {
        assert!(matches!(
            lin_space(0.0, 1.0, 1),
            Err(EngineError::InvalidArgument(_))
        ));
        assert!(lin_space(1.0, 0.0, 10).is_err());
        assert!(lin_space(0.0, f64::INFINITY, 10).is_err());
    }

    #[test]
    fn sweep_produces_an_ordered_full_range_grid() {
        let predictor = AnnPredictor::corbel();
        let baseline = RawInputSet::midpoint();
        let samples = sweep(&predictor, &baseline, ParamKey::ShearSpan, 100).unwrap();

        assert_eq!(samples.len(), 100);
        let (min, max) = catalog::range_of(ParamKey::ShearSpan);
        assert!((samples[0].raw_value - min).abs() < 1e-9);
        assert!((samples[99].raw_value - max).abs() < 1e-9);

        let step = (max - min) / 99.0;
        for (i, pair) in samples.windows(2).enumerate() {
            assert!(pair[1].raw_value > pair[0].raw_value);
            let gap = pair[1].raw_value - pair[0].raw_value;
            assert!((gap - step).abs() < 1e-9, "uneven gap at {i}");
        }
    }

    #[test]
    fn sweep_endpoints_match_direct_prediction() {
        let predictor = AnnPredictor::corbel();
        let baseline = RawInputSet::midpoint();
        let key = ParamKey::SectionWidth;
        let (min, max) = catalog::range_of(key);

        let samples = sweep(&predictor, &baseline, key, 50).unwrap();
        let at_min = predictor.predict(&baseline.with(key, min)).unwrap();
        let at_max = predictor.predict(&baseline.with(key, max)).unwrap();

        assert!((samples[0].predicted - at_min).abs() < 1e-9);
        assert!((samples[49].predicted - at_max).abs() < 1e-9);
    }

    #[test]
    fn sweep_is_deterministic_under_parallel_execution() {
        let predictor = AnnPredictor::corbel();
        let baseline = RawInputSet::midpoint();
        let a = sweep(&predictor, &baseline, ParamKey::EffectiveDepth, 100).unwrap();
        let b = sweep(&predictor, &baseline, ParamKey::EffectiveDepth, 100).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_key_fails_before_the_loop() {
        let predictor = AnnPredictor::corbel();
        let baseline = RawInputSet::midpoint();
        let err = sweep_by_key(&predictor, &baseline, "torsion", 100).unwrap_err();
        assert!(matches!(err, EngineError::UnknownParameter { .. }));
    }

    #[test]
    fn out_of_range_baseline_component_fails() {
        let predictor = AnnPredictor::corbel();
        // b is out of range and is not the varying key, so every grid point
        // fails validation.
        let baseline = RawInputSet::midpoint().with(ParamKey::SectionWidth, 10.0);
        let err = sweep(&predictor, &baseline, ParamKey::ShearSpan, 10).unwrap_err();
        assert!(matches!(err, EngineError::OutOfRange { .. }));
    }
}
