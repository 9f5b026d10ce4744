//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - builds the baseline input set
//! - runs prediction / sweep pipelines
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::ann::AnnPredictor;
use crate::cli::{Command, InputArgs, PlotArgs, SweepArgs};
use crate::domain::{ParamKey, RawInputSet, SweepConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `corbel` binary.
pub fn run() -> Result<(), AppError> {
    // We want bare `corbel` (and `corbel --set b=300`) to behave like
    // `corbel tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    // The trained weights are constructed once and shared read-only from here.
    let predictor = AnnPredictor::corbel();

    match cli.command {
        Command::Predict(args) => handle_predict(&predictor, args),
        Command::Sweep(args) => handle_sweep(&predictor, args),
        Command::Params => {
            println!("{}", crate::report::format_definitions());
            Ok(())
        }
        Command::Plot(args) => handle_plot(args),
        Command::Tui(args) => {
            let baseline = baseline_from_args(&args)?;
            crate::tui::run(&predictor, baseline)
        }
    }
}

fn handle_predict(predictor: &AnnPredictor, args: InputArgs) -> Result<(), AppError> {
    let inputs = baseline_from_args(&args)?;
    let output = pipeline::run_predict(predictor, inputs)?;
    println!("{}", crate::report::format_prediction(&output));
    Ok(())
}

fn handle_sweep(predictor: &AnnPredictor, args: SweepArgs) -> Result<(), AppError> {
    let baseline = baseline_from_args(&args.input)?;
    let config = sweep_config_from_args(&args)?;
    let output = pipeline::run_sweep(predictor, baseline, config.param, config.steps)?;

    println!("{}", crate::report::format_sweep_summary(&output));

    if config.plot {
        let plot = crate::plot::render_ascii_sweep(
            &output.samples,
            output.param,
            Some(baseline.get(output.param)),
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &config.export {
        crate::io::export::write_sweep_csv(path, &output)?;
    }
    if let Some(path) = &config.export_curve {
        crate::io::curve::write_sweep_json(path, &output)?;
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let sweep = crate::io::curve::read_sweep_json(&args.curve)?;
    let plot = crate::plot::render_ascii_sweep_from_file(&sweep, args.width, args.height);
    println!("{plot}");
    Ok(())
}

/// Build the baseline input set from `--set KEY=VALUE` flags.
///
/// Unset parameters default to the midpoint of their valid range, so a single
/// prediction never requires typing all thirteen values. Range validation
/// happens in the core, not here.
pub fn baseline_from_args(args: &InputArgs) -> Result<RawInputSet, AppError> {
    let mut inputs = RawInputSet::midpoint();
    for pair in &args.set {
        let (key_str, value_str) = pair.split_once('=').ok_or_else(|| {
            AppError::new(2, format!("Invalid --set '{pair}' (expected KEY=VALUE)."))
        })?;
        let key = ParamKey::parse_key(key_str)?;
        let value: f64 = value_str.trim().parse().map_err(|e| {
            AppError::new(2, format!("Invalid value in --set '{pair}': {e}"))
        })?;
        inputs.set(key, value);
    }
    Ok(inputs)
}

fn sweep_config_from_args(args: &SweepArgs) -> Result<SweepConfig, AppError> {
    let param = ParamKey::parse_key(&args.param)?;
    Ok(SweepConfig {
        param,
        steps: args.steps,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export: args.export.clone(),
        export_curve: args.export_curve.clone(),
    })
}

/// Rewrite argv so `corbel` defaults to `corbel tui`.
///
/// Rules:
/// - `corbel`                      -> `corbel tui`
/// - `corbel --set b=300 ...`      -> `corbel tui --set b=300 ...`
/// - `corbel --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(
        arg1.as_str(),
        "predict" | "sweep" | "params" | "plot" | "tui"
    );
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(set: &[&str]) -> InputArgs {
        InputArgs {
            set: set.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn baseline_defaults_to_midpoints() {
        let inputs = baseline_from_args(&args(&[])).unwrap();
        assert_eq!(inputs, RawInputSet::midpoint());
    }

    #[test]
    fn set_flags_override_individual_keys() {
        let inputs = baseline_from_args(&args(&["b=300", "av=120.5"])).unwrap();
        assert_eq!(inputs.get(ParamKey::SectionWidth), 300.0);
        assert_eq!(inputs.get(ParamKey::ShearSpan), 120.5);
        assert_eq!(
            inputs.get(ParamKey::TotalDepth),
            RawInputSet::midpoint().get(ParamKey::TotalDepth)
        );
    }

    #[test]
    fn malformed_set_flags_are_rejected() {
        assert!(baseline_from_args(&args(&["b:300"])).is_err());
        assert!(baseline_from_args(&args(&["torsion=1"])).is_err());
        assert!(baseline_from_args(&args(&["b=wide"])).is_err());
    }

    #[test]
    fn bare_invocation_rewrites_to_tui() {
        let argv = rewrite_args(vec!["corbel".into()]);
        assert_eq!(argv, vec!["corbel".to_string(), "tui".to_string()]);

        let argv = rewrite_args(vec!["corbel".into(), "--set".into(), "b=300".into()]);
        assert_eq!(argv[1], "tui");
    }

    #[test]
    fn explicit_subcommands_and_help_pass_through() {
        let argv = rewrite_args(vec!["corbel".into(), "predict".into()]);
        assert_eq!(argv, vec!["corbel".to_string(), "predict".to_string()]);

        let argv = rewrite_args(vec!["corbel".into(), "--help".into()]);
        assert_eq!(argv, vec!["corbel".to_string(), "--help".to_string()]);
    }
}
