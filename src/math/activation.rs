//! The `tansig` squashing function used by both hidden layers.
//!
//! `tansig(x) = 2 / (1 + exp(-2x)) - 1`
//!
//! This is mathematically the hyperbolic tangent; we keep the exponential form
//! the network was trained with so predictions reproduce bit-for-bit across
//! implementations. The output layer is deliberately linear (no activation):
//! capacity magnitude must scan the full dynamic range without saturating.

/// Bounded, strictly increasing map from ℝ to `(-1, 1)`.
pub fn tansig(x: f64) -> f64 {
    2.0 / (1.0 + (-2.0 * x).exp()) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tansig_is_zero_at_zero() {
        assert_eq!(tansig(0.0), 0.0);
    }

    #[test]
    fn tansig_is_strictly_increasing_and_bounded() {
        // Past |x| ≈ 19 the f64 result saturates to exactly ±1, so the strict
        // checks sample the representable interior.
        let mut prev = f64::NEG_INFINITY;
        let mut x = -8.0;
        while x <= 8.0 {
            let y = tansig(x);
            assert!(y > -1.0 && y < 1.0, "tansig({x}) = {y} out of (-1, 1)");
            assert!(y > prev, "tansig not increasing at x = {x}");
            prev = y;
            x += 0.25;
        }
    }

    #[test]
    fn tansig_matches_tanh() {
        for &x in &[-5.0, -1.3, -0.1, 0.4, 2.0, 8.0] {
            assert!((tansig(x) - x.tanh()).abs() < 1e-12);
        }
    }

    #[test]
    fn tansig_saturates_symmetrically() {
        assert!((tansig(50.0) - 1.0).abs() < 1e-12);
        assert!((tansig(-50.0) + 1.0).abs() < 1e-12);
        assert!((tansig(1.5) + tansig(-1.5)).abs() < 1e-12);
    }
}
