//! CSV export for parsed IGC logs
//!
//! Writes two files next to the input log (or into an override directory):
//! a track CSV indexed by elapsed seconds since the first fix, and a
//! `.headers.csv` with the verbatim header records.

use crate::error::{IgcError, Result};
use crate::types::IgcLog;
use std::path::{Path, PathBuf};

/// Export options for controlling output
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub csv: bool,
    pub output_dir: Option<String>,
    /// Overwrite existing output files instead of skipping the log
    pub force_export: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            csv: false,
            output_dir: None,
            force_export: false,
        }
    }
}

/// Results of an export operation
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub csv_path: Option<PathBuf>,
    pub headers_path: Option<PathBuf>,
    /// True when an output file already existed and `force_export` was off
    pub skipped: bool,
}

/// Compute the track CSV and headers CSV paths for an input log file.
///
/// The input's file stem is preserved and the extension replaced, so
/// re-running over a directory can cheaply detect already-exported logs.
/// When `output_dir` is set it is created if missing.
pub fn compute_export_paths(
    input_path: &Path,
    options: &ExportOptions,
) -> Result<(PathBuf, PathBuf)> {
    let base_name = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("flight");

    let output_dir = match options.output_dir {
        Some(ref dir) => PathBuf::from(dir),
        None => input_path.parent().unwrap_or(Path::new(".")).to_path_buf(),
    };

    if !output_dir.exists() {
        std::fs::create_dir_all(&output_dir)?;
    }

    let csv_path = output_dir.join(format!("{}.csv", base_name));
    let headers_path = output_dir.join(format!("{}.headers.csv", base_name));
    Ok((csv_path, headers_path))
}

/// Export a parsed log to CSV.
///
/// Track rows carry the elapsed seconds since the first fix as their index
/// column, followed by the absolute timestamp, the formatted position, fix
/// validity and both altitudes. If the track CSV already exists the export
/// is skipped unless `force_export` is set, which keeps batch re-runs
/// idempotent.
pub fn export_to_csv(
    log: &IgcLog,
    input_path: &Path,
    options: &ExportOptions,
) -> Result<ExportReport> {
    let (csv_path, headers_path) = compute_export_paths(input_path, options)?;

    if csv_path.exists() && !options.force_export {
        return Ok(ExportReport {
            csv_path: Some(csv_path),
            headers_path: None,
            skipped: true,
        });
    }

    write_track_csv(log, &csv_path)?;
    write_headers_csv(log, &headers_path)?;

    Ok(ExportReport {
        csv_path: Some(csv_path),
        headers_path: Some(headers_path),
        skipped: false,
    })
}

fn write_track_csv(log: &IgcLog, output_path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(output_path)?;

    writer.write_record([
        "elapsed_s",
        "timestamp",
        "latitude",
        "longitude",
        "fix",
        "pressure_altitude_m",
        "gps_altitude_m",
    ])?;

    for point in &log.track {
        writer.write_record([
            log.elapsed_seconds(point).to_string(),
            point.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
            point.latitude.clone(),
            point.longitude.clone(),
            point.fix_validity.to_string(),
            point.pressure_altitude.to_string(),
            point.gps_altitude.to_string(),
        ])?;
    }

    writer
        .flush()
        .map_err(|e| IgcError::Export(format!("failed to flush {:?}: {}", output_path, e)))
}

fn write_headers_csv(log: &IgcLog, output_path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(output_path)?;

    writer.write_record(["header"])?;
    for header in &log.headers {
        writer.write_record([header.as_str()])?;
    }

    writer
        .flush()
        .map_err(|e| IgcError::Export(format!("failed to flush {:?}: {}", output_path, e)))
}
