//! Trained network parameters.
//!
//! Three layers: 13 → 10 (tansig) → 9 (tansig) → 1 (linear). The weight and
//! bias values are the trained state of the corbel capacity model; they are
//! never mutated after construction. Shapes are encoded in the types, so a
//! mismatched multiply is a compile error rather than a runtime panic.
//!
//! Column order of `W1` follows [`ParamKey::index`](crate::domain::ParamKey::index).

use nalgebra::{SMatrix, SVector};

use crate::domain::PARAM_COUNT;

/// First hidden layer width.
pub const HIDDEN1: usize = 10;
/// Second hidden layer width.
pub const HIDDEN2: usize = 9;

/// Empirical capacity range (kN) the output normalization was fit against.
pub const OUTPUT_MIN_KN: f64 = 51.0;
pub const OUTPUT_MAX_KN: f64 = 2817.0;

#[rustfmt::skip]
const W1: [[f64; PARAM_COUNT]; HIDDEN1] = [
    [-0.857,  -1.8555, -1.7843,  1.3438, -0.7501, -0.1004,  1.3384, -0.6314,  0.6611, -0.1014, -1.1344,  0.48,    0.2732],
    [ 2.088,   0.893,  -0.3714,  0.0288,  0.4978,  1.365,  -0.1418,  0.3566,  1.1395,  0.4936,  0.9285,  0.0154, -1.4623],
    [-1.0935, -0.5067, -0.6966, -0.8442,  1.1677,  0.5412,  1.1516, -0.0431,  0.2999, -0.2702,  1.8377, -0.8287,  0.2188],
    [-0.0983, -0.0726,  0.4051, -0.8092, -0.2254, -1.0904, -0.1668,  0.9218, -2.378,  -1.2443, -1.108,  -2.0322, -0.3192],
    [ 0.0417,  0.9866,  1.0395,  0.483,   0.9853,  0.4549, -0.5149,  2.1451,  0.3961, -0.6155, -0.3212, -1.3314, -0.5588],
    [ 0.5504,  1.0666,  1.0758, -0.3431,  0.2757, -1.5934,  0.4455, -2.6158, -0.9969,  1.3799,  1.284,  -0.1074, -1.952 ],
    [ 0.429,   0.767,   1.3301, -0.3974, -0.2283,  1.8197, -1.6468, -0.3421, -1.3205, -0.3855,  0.5053,  0.2671,  1.0721],
    [ 0.3467, -0.7774, -0.2492, -1.8511, -0.6145, -2.1708,  0.641,  -1.9226, -0.4238, -0.934,   0.1103,  0.0587,  0.681 ],
    [ 1.3998,  0.0039,  2.0116,  0.1473, -0.3997,  0.2102, -1.3228, -0.1925,  1.2611, -1.5971,  0.0281,  0.8871, -1.4558],
    [-0.5919,  0.5765,  0.755,   1.0143, -2.1026, -0.0925,  0.6412,  0.2713,  0.6718,  1.7243, -0.1475,  0.8652,  1.598 ],
];

#[rustfmt::skip]
const B1: [f64; HIDDEN1] = [
    1.9628, -4.7316, 2.6417, 3.3912, 0.1861, -0.369, 0.2887, 2.9229, -1.2502, -3.4438,
];

#[rustfmt::skip]
const W2: [[f64; HIDDEN1]; HIDDEN2] = [
    [ 0.8128,  0.5497, -0.3654,  0.0523, -0.4269, -0.3089, -1.0734, -0.1305,  0.6526,  0.6145],
    [-0.9653,  0.5534, -0.5805, -0.3921, -0.6196,  0.6622, -0.6217, -0.2844, -0.7128,  0.1383],
    [-0.6277,  1.2147, -0.8423,  0.1506,  0.135,   0.6732, -0.3792,  0.5254,  0.362,   1.0536],
    [ 0.2601, -0.7762,  0.989,  -0.7996, -0.5325,  1.114,  -0.1785, -0.5904, -0.0641,  0.0926],
    [ 0.5478, -1.0013,  0.5577, -1.0751, -0.4083,  1.2723, -0.1499, -0.9048,  0.1191, -0.0497],
    [-1.4048, -0.2243, -0.5184, -0.5061,  0.5336, -1.1036,  0.8138, -0.1046, -0.1222,  1.0099],
    [-0.5414,  0.957,  -0.8039, -0.4263,  0.1208,  0.4027, -0.5892, -0.7088, -0.3365, -0.1322],
    [ 2.1116,  0.1318,  0.8281,  0.086,  -0.508,   1.4086, -0.9856, -1.8136, -0.4433, -0.4073],
    [-0.1352, -0.5088, -0.3798, -0.4733, -0.651,   0.8054, -0.8273, -0.5509, -0.4711, -0.0384],
];

#[rustfmt::skip]
const B2: [f64; HIDDEN2] = [
    -1.7159, 1.3111, 0.5415, -0.3307, 0.2794, -0.6069, -0.9185, 1.9076, -1.8871,
];

#[rustfmt::skip]
const W3: [f64; HIDDEN2] = [
    -0.2839, 0.2487, 0.0105, -0.6244, 0.5289, 0.3096, -0.3237, -1.389, -0.4037,
];

const B3: f64 = 0.8576;

/// Immutable weight matrices and bias vectors for the three layers.
///
/// Constructed once at process start and passed explicitly to the predictor;
/// safe to share read-only across any number of concurrent callers.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkParameters {
    pub w1: SMatrix<f64, HIDDEN1, PARAM_COUNT>,
    pub b1: SVector<f64, HIDDEN1>,
    pub w2: SMatrix<f64, HIDDEN2, HIDDEN1>,
    pub b2: SVector<f64, HIDDEN2>,
    pub w3: SMatrix<f64, 1, HIDDEN2>,
    pub b3: f64,
}

impl NetworkParameters {
    /// The trained corbel shear-capacity model.
    pub fn corbel() -> Self {
        Self {
            w1: SMatrix::from_fn(|i, j| W1[i][j]),
            b1: SVector::from_column_slice(&B1),
            w2: SMatrix::from_fn(|i, j| W2[i][j]),
            b2: SVector::from_column_slice(&B2),
            w3: SMatrix::from_fn(|_, j| W3[j]),
            b3: B3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrices_are_laid_out_row_major() {
        let p = NetworkParameters::corbel();
        assert_eq!(p.w1[(0, 0)], -0.857);
        assert_eq!(p.w1[(0, 12)], 0.2732);
        assert_eq!(p.w1[(9, 0)], -0.5919);
        assert_eq!(p.w2[(7, 0)], 2.1116);
        assert_eq!(p.w3[(0, 8)], -0.4037);
        assert_eq!(p.b1[1], -4.7316);
        assert_eq!(p.b2[8], -1.8871);
        assert_eq!(p.b3, 0.8576);
    }

    #[test]
    fn output_range_is_ordered() {
        assert!(OUTPUT_MIN_KN < OUTPUT_MAX_KN);
    }
}
