//! Terminal plotting.

pub mod ascii;

pub use ascii::{render_ascii_sweep, render_ascii_sweep_from_file};
