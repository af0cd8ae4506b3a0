//! Export the sampled response curves to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::domain::OscillatorResponse;
use crate::error::AppError;

/// CSV header, one row per sweep sample.
pub const CSV_HEADER: &str = "index,frequency_ratio,magnification,phase_angle_deg";

/// Write the sampled curves to a CSV file.
pub fn write_response_csv(path: &Path, response: &OscillatorResponse) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    let mut out = BufWriter::new(file);
    write_response_csv_to(&mut out, response)?;
    out.flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush export CSV: {e}")))?;
    info!(path = %path.display(), rows = response.sweep.len(), "wrote response CSV");
    Ok(())
}

/// Write the CSV body to any writer.
pub fn write_response_csv_to<W: Write>(out: &mut W, response: &OscillatorResponse) -> Result<(), AppError> {
    writeln!(out, "{CSV_HEADER}")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    let rows = response
        .sweep
        .ratios
        .iter()
        .zip(&response.curve.magnification)
        .zip(&response.curve.phase_angle_deg);
    for (i, ((r, m), phi)) in rows.enumerate() {
        writeln!(out, "{i},{r:.10},{m:.10},{phi:.10}")
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_response;

    #[test]
    fn csv_has_header_and_one_row_per_sample() {
        let run = run_response("Ada", 1.0, 0.2, 1.0).unwrap();
        let mut buf = Vec::new();
        write_response_csv_to(&mut buf, &run.response).unwrap();
        let txt = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = txt.lines().collect();

        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines.len(), 1 + 500);
        assert_eq!(lines[1], "0,0.0000000000,1.0000000000,0.0000000000");
        assert!(lines[500].starts_with("499,5.0000000000,"));
    }

    #[test]
    fn csv_file_round_trips_to_disk() {
        let run = run_response("Ada", 2.0, 1.0, 8.0).unwrap();
        let path = std::env::temp_dir().join(format!("vmatt_export_{}.csv", std::process::id()));
        write_response_csv(&path, &run.response).unwrap();
        let txt = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(txt.lines().count(), 501);
    }
}
