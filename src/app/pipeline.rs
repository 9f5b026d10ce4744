//! Shared prediction/sweep pipeline used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! validate inputs -> normalize -> forward pass -> de-normalize (-> sweep grid)
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use crate::ann::AnnPredictor;
use crate::domain::{ParamKey, RawInputSet, SweepSample};
use crate::error::AppError;

/// Output of a single end-to-end prediction.
#[derive(Debug, Clone)]
pub struct PredictOutput {
    pub inputs: RawInputSet,
    /// Predicted ultimate shear capacity (kN).
    pub vn_kn: f64,
}

/// Output of a sensitivity sweep run.
#[derive(Debug, Clone)]
pub struct SweepOutput {
    pub param: ParamKey,
    pub baseline: RawInputSet,
    pub samples: Vec<SweepSample>,
}

/// Predict capacity for one raw input set.
pub fn run_predict(predictor: &AnnPredictor, inputs: RawInputSet) -> Result<PredictOutput, AppError> {
    let vn_kn = predictor.predict(&inputs)?;
    Ok(PredictOutput { inputs, vn_kn })
}

/// Sweep one parameter across its valid range.
pub fn run_sweep(
    predictor: &AnnPredictor,
    baseline: RawInputSet,
    param: ParamKey,
    steps: usize,
) -> Result<SweepOutput, AppError> {
    let samples = crate::sweep::sweep(predictor, &baseline, param, steps)?;
    Ok(SweepOutput {
        param,
        baseline,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_and_sweep_agree_at_the_baseline() {
        let predictor = AnnPredictor::corbel();
        let baseline = RawInputSet::midpoint();
        let predicted = run_predict(&predictor, baseline).unwrap().vn_kn;

        // A sweep over any parameter with an odd step count hits the exact
        // midpoint, which must reproduce the direct prediction.
        let out = run_sweep(&predictor, baseline, ParamKey::TotalDepth, 101).unwrap();
        let mid = out.samples[50];
        assert!((mid.predicted - predicted).abs() < 1e-9);
    }
}
