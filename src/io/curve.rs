//! Read/write sweep JSON files.
//!
//! Sweep JSON is the "portable" representation of a sensitivity curve:
//! - the varying parameter
//! - the baseline the other parameters were held at
//! - the computed (raw value, predicted capacity) samples
//!
//! The schema is defined by `domain::SweepFile`.

use std::fs::File;
use std::path::Path;

use crate::app::pipeline::SweepOutput;
use crate::domain::SweepFile;
use crate::error::AppError;

/// Write a sweep JSON file.
pub fn write_sweep_json(path: &Path, output: &SweepOutput) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create sweep JSON '{}': {e}", path.display()),
        )
    })?;

    let sweep = SweepFile {
        tool: "corbel".to_string(),
        param: output.param,
        param_label: output.param.label().to_string(),
        baseline: output.baseline.values().to_vec(),
        samples: output.samples.clone(),
    };

    serde_json::to_writer_pretty(file, &sweep)
        .map_err(|e| AppError::new(2, format!("Failed to write sweep JSON: {e}")))?;

    Ok(())
}

/// Read a sweep JSON file.
pub fn read_sweep_json(path: &Path) -> Result<SweepFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to open sweep JSON '{}': {e}", path.display()),
        )
    })?;
    let sweep: SweepFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid sweep JSON: {e}")))?;
    Ok(sweep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ann::AnnPredictor;
    use crate::app::pipeline::run_sweep;
    use crate::domain::{ParamKey, RawInputSet};

    #[test]
    fn sweep_json_round_trips() {
        let predictor = AnnPredictor::corbel();
        let output =
            run_sweep(&predictor, RawInputSet::midpoint(), ParamKey::SpanDepthRatio, 20).unwrap();

        let path = std::env::temp_dir().join("corbel_sweep_json_test.json");
        write_sweep_json(&path, &output).unwrap();
        let loaded = read_sweep_json(&path).unwrap();

        assert_eq!(loaded.tool, "corbel");
        assert_eq!(loaded.param, ParamKey::SpanDepthRatio);
        assert_eq!(loaded.param_label, "a/d");
        assert_eq!(loaded.baseline.len(), 13);
        assert_eq!(loaded.samples, output.samples);

        let _ = std::fs::remove_file(&path);
    }
}
