//! Read/write response JSON files.
//!
//! Response JSON is the "portable" representation of one submission:
//! - validated inputs and derived values (ωn, ζ)
//! - the resonance summary
//! - the full sampled grid for quick re-plotting
//!
//! The schema is defined by `domain::ResponseFile`.

use std::fs::File;
use std::path::Path;

use chrono::Local;
use tracing::info;

use crate::app::pipeline::RunOutput;
use crate::domain::{ResponseFile, ResponseGrid};
use crate::error::AppError;

/// Package a run as a response file, stamped with the current local time.
pub fn build_response_file(run: &RunOutput) -> ResponseFile {
    let r = &run.response;
    ResponseFile {
        tool: "vmatt".to_string(),
        generated_at: Local::now().fixed_offset(),
        name: (!run.name.is_empty()).then(|| run.name.clone()),
        parameters: r.parameters,
        natural_frequency: r.natural_frequency,
        damping_ratio: r.damping_ratio,
        resonance: r.resonance,
        grid: ResponseGrid {
            frequency_ratio: r.sweep.ratios.clone(),
            magnification: r.curve.magnification.clone(),
            phase_angle_deg: r.curve.phase_angle_deg.clone(),
        },
    }
}

/// Write a response JSON file.
pub fn write_response_json(path: &Path, run: &RunOutput) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create response JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &build_response_file(run))
        .map_err(|e| AppError::new(2, format!("Failed to write response JSON: {e}")))?;

    info!(path = %path.display(), "wrote response JSON");
    Ok(())
}

/// Read a response JSON file.
///
/// The stored parameters go through the same validation as user input, and the
/// grid columns must all have the same length.
pub fn read_response_json(path: &Path) -> Result<ResponseFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open response JSON '{}': {e}", path.display())))?;
    let response: ResponseFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid response JSON: {e}")))?;

    let g = &response.grid;
    if g.magnification.len() != g.frequency_ratio.len() || g.phase_angle_deg.len() != g.frequency_ratio.len() {
        return Err(AppError::new(
            2,
            format!(
                "Invalid response JSON: grid columns differ in length (r={}, M={}, phi={}).",
                g.frequency_ratio.len(),
                g.magnification.len(),
                g.phase_angle_deg.len()
            ),
        ));
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_response;

    fn temp_path(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("vmatt_{tag}_{}.json", std::process::id()))
    }

    #[test]
    fn response_json_reads_back() {
        let run = run_response("Ada", 1.0, 0.2, 1.0).unwrap();
        let path = temp_path("roundtrip");
        write_response_json(&path, &run).unwrap();
        let file = read_response_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(file.tool, "vmatt");
        assert_eq!(file.name.as_deref(), Some("Ada"));
        assert_eq!(file.parameters, run.response.parameters);
        assert_eq!(file.resonance, run.response.resonance);
        assert_eq!(file.grid.frequency_ratio, run.response.sweep.ratios);
        assert_eq!(file.grid.magnification, run.response.curve.magnification);
    }

    #[test]
    fn rejects_stored_zero_parameters() {
        let run = run_response("Ada", 1.0, 0.2, 1.0).unwrap();
        let mut value = serde_json::to_value(build_response_file(&run)).unwrap();
        value["parameters"]["damping"] = serde_json::json!(0.0);

        let path = temp_path("zero");
        std::fs::write(&path, value.to_string()).unwrap();
        let err = read_response_json(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().starts_with("Invalid response JSON"));
    }

    #[test]
    fn rejects_ragged_grid() {
        let run = run_response("Ada", 1.0, 0.2, 1.0).unwrap();
        let mut file = build_response_file(&run);
        file.grid.phase_angle_deg.pop();

        let path = temp_path("ragged");
        std::fs::write(&path, serde_json::to_string(&file).unwrap()).unwrap();
        let err = read_response_json(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(err.to_string().contains("differ in length"));
    }
}
