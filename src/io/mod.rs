//! File exports: sweep CSV and sweep JSON.

pub mod curve;
pub mod export;
