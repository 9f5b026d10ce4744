//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the closed set of corbel input parameters (`ParamKey`)
//! - parameter metadata (`ParameterDefinition`)
//! - the raw thirteen-component input set (`RawInputSet`)
//! - sweep outputs (`SweepSample`, `SweepFile`, etc.)

pub mod types;

pub use types::*;
