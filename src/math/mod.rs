//! Numeric primitives: the tansig activation and min-max scaling.

pub mod activation;
pub mod scale;

pub use activation::tansig;
pub use scale::{denormalize, normalize, normalize_input};
