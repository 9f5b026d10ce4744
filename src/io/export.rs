//! Export sweep samples to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts: one row per grid point, ordered by ascending raw value.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::app::pipeline::SweepOutput;
use crate::error::AppError;

/// Write sweep samples to a CSV file.
pub fn write_sweep_csv(path: &Path, output: &SweepOutput) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create export CSV '{}': {e}", path.display()),
        )
    })?;

    writeln!(file, "{},vn_kn", output.param.cli_name())
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for s in &output.samples {
        writeln!(file, "{:.10},{:.6}", s.raw_value, s.predicted)
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ann::AnnPredictor;
    use crate::app::pipeline::run_sweep;
    use crate::domain::{ParamKey, RawInputSet};

    #[test]
    fn csv_has_header_plus_one_row_per_sample() {
        let predictor = AnnPredictor::corbel();
        let output =
            run_sweep(&predictor, RawInputSet::midpoint(), ParamKey::RhoVertical, 25).unwrap();

        let path = std::env::temp_dir().join("corbel_sweep_export_test.csv");
        write_sweep_csv(&path, &output).unwrap();

        let body = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 26);
        assert_eq!(lines[0], "rho-v,vn_kn");

        let _ = std::fs::remove_file(&path);
    }
}
