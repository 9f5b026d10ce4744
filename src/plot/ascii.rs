//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - sensitivity curve: `o`
//! - baseline value marker: `X`

use crate::domain::{ParamKey, SweepFile, SweepSample};

/// Render a sweep curve for an in-memory sample sequence.
///
/// `baseline_value` marks the current value of the varying parameter on the
/// curve (the sweep replaces it at every grid point, but the marker shows
/// where the caller's baseline sits).
pub fn render_ascii_sweep(
    samples: &[SweepSample],
    key: ParamKey,
    baseline_value: Option<f64>,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    if samples.len() < 2 {
        return format!("(not enough samples to plot {})\n", key.label());
    }

    let x_min = samples[0].raw_value;
    let x_max = samples[samples.len() - 1].raw_value;
    let (y_min, y_max) = padded_y_range(samples);

    let mut grid = vec![vec![' '; width]; height];

    // One curve point per column: samples are evenly spaced in x, so the
    // nearest sample for a column is an index computation, not a search.
    let step = (x_max - x_min) / (samples.len() as f64 - 1.0);
    for col in 0..width {
        let x = x_min + (col as f64 + 0.5) / width as f64 * (x_max - x_min);
        let idx = (((x - x_min) / step).round() as usize).min(samples.len() - 1);
        let row = y_to_row(samples[idx].predicted, y_min, y_max, height);
        grid[row][col] = 'o';
    }

    if let Some(bv) = baseline_value {
        if bv >= x_min && bv <= x_max {
            let col = x_to_col(bv, x_min, x_max, width);
            let idx = (((bv - x_min) / step).round() as usize).min(samples.len() - 1);
            let row = y_to_row(samples[idx].predicted, y_min, y_max, height);
            grid[row][col] = 'X';
        }
    }

    let mut out = String::new();
    out.push_str(&format!("Vn (kN) vs. {}\n", key.label()));
    for (i, row) in grid.iter().enumerate() {
        let label = if i == 0 {
            format!("{y_max:>9.1}")
        } else if i == height - 1 {
            format!("{y_min:>9.1}")
        } else {
            " ".repeat(9)
        };
        out.push_str(&label);
        out.push('|');
        out.push_str(&row.iter().collect::<String>());
        out.push('\n');
    }
    out.push_str(&" ".repeat(9));
    out.push('+');
    out.push_str(&"-".repeat(width));
    out.push('\n');
    out.push_str(&format!(
        "{:>10}{:>width$.4}\n",
        format!("{x_min:.4}"),
        x_max,
        width = width
    ));
    out
}

/// Render a sweep curve from a saved sweep JSON file.
pub fn render_ascii_sweep_from_file(file: &SweepFile, width: usize, height: usize) -> String {
    render_ascii_sweep(&file.samples, file.param, None, width, height)
}

fn padded_y_range(samples: &[SweepSample]) -> (f64, f64) {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for s in samples {
        y_min = y_min.min(s.predicted);
        y_max = y_max.max(s.predicted);
    }
    // Pad so the curve does not sit on the frame; widen degenerate ranges.
    let span = (y_max - y_min).max(1e-6);
    (y_min - 0.05 * span, y_max + 0.05 * span)
}

fn y_to_row(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let frac = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // Row 0 is the top of the chart.
    ((1.0 - frac) * (height as f64 - 1.0)).round() as usize
}

fn x_to_col(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let frac = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    ((frac * (width as f64 - 1.0)).round() as usize).min(width - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ann::AnnPredictor;
    use crate::domain::RawInputSet;
    use crate::sweep::sweep;

    fn sample_sweep() -> Vec<SweepSample> {
        let predictor = AnnPredictor::corbel();
        sweep(&predictor, &RawInputSet::midpoint(), ParamKey::ShearSpan, 100).unwrap()
    }

    #[test]
    fn plot_is_deterministic() {
        let samples = sample_sweep();
        let a = render_ascii_sweep(&samples, ParamKey::ShearSpan, Some(461.5), 80, 20);
        let b = render_ascii_sweep(&samples, ParamKey::ShearSpan, Some(461.5), 80, 20);
        assert_eq!(a, b);
    }

    #[test]
    fn plot_contains_curve_and_marker() {
        let samples = sample_sweep();
        let plot = render_ascii_sweep(&samples, ParamKey::ShearSpan, Some(461.5), 80, 20);
        assert!(plot.contains('o'));
        assert!(plot.contains('X'));
        assert!(plot.contains("a_v"));
    }

    #[test]
    fn tiny_dimensions_are_clamped() {
        let samples = sample_sweep();
        let plot = render_ascii_sweep(&samples, ParamKey::ShearSpan, None, 1, 1);
        // Clamped to the minimum 10x5 grid rather than panicking.
        assert!(plot.lines().count() >= 5);
    }
}
