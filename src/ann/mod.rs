//! The fixed-weight feed-forward network.
//!
//! No training happens anywhere in this crate: the weights in
//! [`weights::NetworkParameters::corbel`] are the trained state, compiled in
//! as constants. [`predictor::AnnPredictor`] runs the deterministic forward
//! pass over them.

pub mod predictor;
pub mod weights;

pub use predictor::AnnPredictor;
pub use weights::{NetworkParameters, OUTPUT_MAX_KN, OUTPUT_MIN_KN};
