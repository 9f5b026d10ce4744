//! Command-line parsing for the corbel capacity predictor.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "corbel",
    version,
    about = "RC Corbel Ultimate Shear Capacity (ANN-based)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Predict Vn (kN) for one set of inputs.
    Predict(InputArgs),
    /// Sweep one parameter across its valid range and report/plot the curve.
    Sweep(SweepArgs),
    /// Print the input parameter definitions and valid ranges.
    Params,
    /// Plot a previously exported sweep JSON.
    Plot(PlotArgs),
    /// Launch the interactive TUI.
    ///
    /// This uses the same underlying prediction pipeline as `corbel predict`,
    /// but renders inputs and the sensitivity chart in a terminal UI.
    Tui(InputArgs),
}

/// Baseline input options shared by `predict`, `sweep`, and `tui`.
#[derive(Debug, Parser, Clone)]
pub struct InputArgs {
    /// Set a parameter (KEY=VALUE, repeatable; see `corbel params` for keys).
    ///
    /// Parameters left unset default to the midpoint of their valid range.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,
}

/// Options for sensitivity sweeps.
#[derive(Debug, Parser, Clone)]
pub struct SweepArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Parameter to vary (e.g. `av`, `b`, `a/d`, `rho-f`).
    #[arg(short = 'p', long)]
    pub param: String,

    /// Number of grid points across the parameter's valid range.
    #[arg(long, default_value_t = 100)]
    pub steps: usize,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export sweep samples to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the sweep (param + baseline + samples) to JSON.
    #[arg(long = "export-curve")]
    pub export_curve: Option<PathBuf>,
}

/// Options for plotting a saved sweep.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Sweep JSON file produced by `corbel sweep --export-curve`.
    #[arg(long, value_name = "JSON")]
    pub curve: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}
