//! Forward pass and end-to-end prediction.
//!
//! The predictor is a pure function of its inputs and the injected
//! [`NetworkParameters`]: no internal state is retained between calls, so
//! identical inputs always yield bit-identical output.

use crate::ann::weights::{NetworkParameters, OUTPUT_MAX_KN, OUTPUT_MIN_KN};
use crate::domain::{InputVector, RawInputSet};
use crate::error::EngineError;
use crate::math::{denormalize, normalize_input, tansig};

/// Deterministic forward-pass evaluator over fixed weights.
#[derive(Debug, Clone)]
pub struct AnnPredictor {
    params: NetworkParameters,
}

impl AnnPredictor {
    pub fn new(params: NetworkParameters) -> Self {
        Self { params }
    }

    /// Predictor loaded with the trained corbel model.
    pub fn corbel() -> Self {
        Self::new(NetworkParameters::corbel())
    }

    /// Run the three-layer forward pass on a normalized input vector.
    ///
    /// `A1 = tansig(W1·X + B1)`, `A2 = tansig(W2·A1 + B2)`, then a linear
    /// output `W3·A2 + B3`. Returns the normalized capacity (no units).
    pub fn forward(&self, x: &InputVector) -> f64 {
        let p = &self.params;
        let a1 = (p.w1 * x + p.b1).map(tansig);
        let a2 = (p.w2 * a1 + p.b2).map(tansig);
        (p.w3 * a2)[(0, 0)] + p.b3
    }

    /// End-to-end prediction: validate + normalize the raw inputs, run the
    /// forward pass, de-normalize to kN.
    pub fn predict(&self, raw: &RawInputSet) -> Result<f64, EngineError> {
        let x = normalize_input(raw)?;
        Ok(denormalize(self.forward(&x), OUTPUT_MIN_KN, OUTPUT_MAX_KN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ParamKey;

    #[test]
    fn predict_is_deterministic() {
        let predictor = AnnPredictor::corbel();
        let raw = RawInputSet::midpoint().with(ParamKey::ShearSpan, 120.0);
        let a = predictor.predict(&raw).unwrap();
        let b = predictor.predict(&raw).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn midpoint_prediction_matches_reference() {
        // Reference value computed independently from the same weight
        // constants; reproducible to well past 6 significant figures.
        let vn = AnnPredictor::corbel()
            .predict(&RawInputSet::midpoint())
            .unwrap();
        assert!((vn - 1427.5564433209536).abs() < 1e-6, "got {vn}");
        assert!((OUTPUT_MIN_KN..=OUTPUT_MAX_KN).contains(&vn));
    }

    #[test]
    fn forward_output_is_finite_across_the_unit_cube_corners() {
        let predictor = AnnPredictor::corbel();
        for corner in [0.0, 1.0] {
            let x = InputVector::from_element(corner);
            assert!(predictor.forward(&x).is_finite());
        }
    }

    #[test]
    fn out_of_range_input_propagates() {
        let predictor = AnnPredictor::corbel();
        let raw = RawInputSet::midpoint().with(ParamKey::SectionWidth, 10.0);
        assert!(matches!(
            predictor.predict(&raw),
            Err(EngineError::OutOfRange { .. })
        ));
    }
}
