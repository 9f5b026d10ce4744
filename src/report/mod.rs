//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math/prediction code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::app::pipeline::{PredictOutput, SweepOutput};
use crate::catalog;

/// Format a single prediction with the inputs echoed back.
pub fn format_prediction(output: &PredictOutput) -> String {
    let mut out = String::new();

    out.push_str("=== corbel - Ultimate Shear Capacity ===\n");
    out.push_str("Inputs:\n");
    for def in catalog::definitions() {
        out.push_str(&format!(
            "  {:<8} = {:>10} {}\n",
            def.key.label(),
            fmt_value(output.inputs.get(def.key)),
            def.description,
        ));
    }
    out.push_str(&format!("\nPredicted Vn: {:.2} kN\n", output.vn_kn));
    out
}

/// Format a sweep run summary (range, sample count, capacity extremes).
pub fn format_sweep_summary(output: &SweepOutput) -> String {
    let mut out = String::new();
    let def = catalog::definition_of(output.param);

    out.push_str(&format!(
        "=== corbel - Vn sensitivity to {} ===\n",
        def.key.label()
    ));
    out.push_str(&format!("{} | range [{}, {}]\n", def.description, def.min, def.max));
    out.push_str(&format!(
        "Samples: n={} | others held at baseline\n",
        output.samples.len()
    ));

    if let (Some(lo), Some(hi)) = (
        output
            .samples
            .iter()
            .min_by(|a, b| a.predicted.total_cmp(&b.predicted)),
        output
            .samples
            .iter()
            .max_by(|a, b| a.predicted.total_cmp(&b.predicted)),
    ) {
        out.push_str(&format!(
            "Vn min: {:.2} kN at {} = {}\n",
            lo.predicted,
            def.key.label(),
            fmt_value(lo.raw_value)
        ));
        out.push_str(&format!(
            "Vn max: {:.2} kN at {} = {}\n",
            hi.predicted,
            def.key.label(),
            fmt_value(hi.raw_value)
        ));
    }

    out
}

/// Format the static parameter definitions table.
pub fn format_definitions() -> String {
    let mut out = String::new();
    out.push_str("=== corbel - Input parameters ===\n");
    out.push_str(&format!(
        "{:<4} {:<10} {:<10} {:<22} {}\n",
        "#", "key", "symbol", "range", "description"
    ));
    for def in catalog::definitions() {
        out.push_str(&format!(
            "{:<4} {:<10} {:<10} {:<22} {}\n",
            def.index,
            def.key.cli_name(),
            def.key.label(),
            format!("[{}, {}]", def.min, def.max),
            def.description,
        ));
    }
    out
}

fn fmt_value(v: f64) -> String {
    // Trim trailing zeros for readability while keeping short decimals exact.
    let s = format!("{v:.4}");
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ann::AnnPredictor;
    use crate::app::pipeline;
    use crate::domain::{ParamKey, RawInputSet};

    #[test]
    fn definitions_table_lists_every_parameter() {
        let table = format_definitions();
        for key in ParamKey::ALL {
            assert!(table.contains(key.cli_name()), "missing {key:?}");
        }
    }

    #[test]
    fn prediction_report_echoes_inputs_and_result() {
        let predictor = AnnPredictor::corbel();
        let output = pipeline::run_predict(&predictor, RawInputSet::midpoint()).unwrap();
        let report = format_prediction(&output);
        assert!(report.contains("Predicted Vn: 1427.56 kN"));
        assert!(report.contains("√(f_ck)"));
    }

    #[test]
    fn sweep_summary_reports_extremes() {
        let predictor = AnnPredictor::corbel();
        let output =
            pipeline::run_sweep(&predictor, RawInputSet::midpoint(), ParamKey::ShearSpan, 50)
                .unwrap();
        let report = format_sweep_summary(&output);
        assert!(report.contains("n=50"));
        assert!(report.contains("Vn min:"));
        assert!(report.contains("Vn max:"));
    }
}
