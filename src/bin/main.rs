//! CLI binary for the IGC parser
//!
//! Expands files, directories and glob patterns into a batch of .igc logs,
//! parses each one and optionally exports it to CSV. Logs whose CSV output
//! already exists are skipped unless --force-export is given, so re-running
//! over the same directory tree is idempotent.

use anyhow::{Context, Result};
use clap::{Arg, Command};
use glob::glob;
use igc_parser::{export_to_csv, parse_igc_file, ExportOptions};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Maximum recursion depth to prevent stack overflow
const MAX_RECURSION_DEPTH: usize = 100;

fn main() -> Result<()> {
    let matches = Command::new("IGC Parser")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read and parse IGC flight log files. Output track data to CSV.")
        .arg(
            Arg::new("files")
                .help("IGC files to parse (.igc extension, case-insensitive; directories are searched recursively; supports globbing)")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Enable debug output and detailed parsing information")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("csv")
                .long("csv")
                .help("Export track data to CSV files (creates .csv for track data and .headers.csv for plaintext headers)")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .help("Directory for CSV output files (default: same as input file)")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("force-export")
                .long("force-export")
                .help("Overwrite existing CSV output instead of skipping already-exported logs")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let debug = matches.get_flag("debug");
    let export_options = ExportOptions {
        csv: matches.get_flag("csv"),
        output_dir: matches.get_one::<String>("output-dir").cloned(),
        force_export: matches.get_flag("force-export"),
    };
    let file_patterns: Vec<&String> = matches.get_many::<String>("files").unwrap().collect();

    if debug {
        println!("Input patterns: {file_patterns:?}");
    }

    let mut visited = HashSet::new();
    let mut valid_paths = Vec::new();
    for pattern in &file_patterns {
        let paths: Vec<PathBuf> = if pattern.contains('*') || pattern.contains('?') {
            match glob(pattern) {
                Ok(glob_iter) => match glob_iter.collect::<Result<Vec<_>, _>>() {
                    Ok(paths) => {
                        if debug {
                            println!("Glob pattern '{pattern}' matched {} paths", paths.len());
                        }
                        paths
                    }
                    Err(e) => {
                        eprintln!("Error expanding glob pattern '{pattern}': {e}");
                        continue;
                    }
                },
                Err(e) => {
                    eprintln!("Invalid glob pattern '{pattern}': {e}");
                    continue;
                }
            }
        } else {
            vec![PathBuf::from(pattern)]
        };

        for path in paths {
            if !path.exists() {
                eprintln!("Warning: Path does not exist: {path:?}");
                continue;
            }
            if path.is_dir() {
                collect_igc_files(&path, &mut valid_paths, &mut visited, 0)?;
            } else if has_igc_extension(&path) {
                valid_paths.push(path);
            } else {
                let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("none");
                eprintln!("Warning: Skipping file with unsupported extension '{ext}': {path:?}");
            }
        }
    }

    if debug {
        println!("Found {} valid files to process", valid_paths.len());
    }

    if valid_paths.is_empty() {
        eprintln!("Error: No valid files found to process.");
        eprintln!("Supported extension: .igc (case-insensitive)");
        eprintln!("Input patterns were: {file_patterns:?}");
        std::process::exit(1);
    }

    let mut processed_files = 0;

    for (index, path) in valid_paths.iter().enumerate() {
        if index > 0 {
            println!();
        }

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown");
        println!("Processing: {filename}");

        match process_file(path, &export_options, debug) {
            Ok(()) => processed_files += 1,
            Err(e) => {
                eprintln!("Error processing {filename}: {e}");
                eprintln!("Continuing with next file...");
            }
        }
    }

    if processed_files == 0 {
        eprintln!(
            "Error: No files were successfully processed out of {} files found.",
            valid_paths.len()
        );
        eprintln!("This could be due to:");
        eprintln!("  - Filenames missing the YYMMDD date prefix");
        eprintln!("  - Malformed track ('B') records");
        eprintln!("Use --debug flag for more detailed error information.");
        std::process::exit(1);
    }

    Ok(())
}

/// Recursively collect .igc files under a directory, depth-capped.
fn collect_igc_files(
    dir: &Path,
    out: &mut Vec<PathBuf>,
    visited: &mut HashSet<PathBuf>,
    depth: usize,
) -> Result<()> {
    if depth > MAX_RECURSION_DEPTH {
        anyhow::bail!("Maximum recursion depth exceeded ({MAX_RECURSION_DEPTH})");
    }

    let canonical = dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve directory {dir:?}"))?;
    if !visited.insert(canonical) {
        return Ok(());
    }

    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {dir:?}"))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    entries.sort();

    for path in entries {
        if path.is_dir() {
            collect_igc_files(&path, out, visited, depth + 1)?;
        } else if has_igc_extension(&path) {
            out.push(path);
        }
    }

    Ok(())
}

fn has_igc_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("igc"))
        .unwrap_or(false)
}

fn process_file(path: &Path, export_options: &ExportOptions, debug: bool) -> Result<()> {
    let log = parse_igc_file(path).with_context(|| format!("Failed to parse {path:?}"))?;

    println!(
        "Flight date {}: {} header records, {} fixes, {:.0} s",
        log.log_date,
        log.headers.len(),
        log.track.len(),
        log.duration_seconds()
    );
    if debug && log.skipped_lines > 0 {
        println!("Skipped {} unrecognized lines", log.skipped_lines);
    }

    if export_options.csv {
        let report = export_to_csv(&log, path, export_options)
            .with_context(|| format!("Failed to export CSV for {path:?}"))?;
        if report.skipped {
            if let Some(csv_path) = report.csv_path {
                println!("Skipping export, output exists: {}", csv_path.display());
            }
        } else {
            if let Some(csv_path) = report.csv_path {
                println!("Exported track data to: {}", csv_path.display());
            }
            if let Some(headers_path) = report.headers_path {
                println!("Exported headers to: {}", headers_path.display());
            }
        }
    }

    Ok(())
}
