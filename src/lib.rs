//! IGC Parser Library
//!
//! A Rust library for parsing the IGC-subset flight logs recorded by
//! Flymaster-style GPS/barometric instruments, and exporting the track as
//! time-indexed CSV for post-flight analysis.
//!
//! The supported subset covers 'A' (manufacturer), 'H' (header) and 'L'
//! (logbook) records, kept verbatim, plus 'B' track records decoded by
//! fixed-column offsets. Per the IGC convention the flight date is carried
//! in the filename (`YYMMDD` prefix), not in the track records themselves.
//!
//! # Features
//!
//! - **`csv`** (default): Enable CSV export functionality
//! - **`cli`** (default): Build the command-line interface binary
//! - **`serde`**: Enable serialization/deserialization of types
//!
//! # Quick Start
//!
//! Parse a log file and access track data:
//! ```rust,no_run
//! use igc_parser::parse_igc_file;
//! use std::path::Path;
//!
//! let log = parse_igc_file(Path::new("230615FLY00123.igc")).unwrap();
//! println!("Flight date: {}", log.log_date);
//! println!("Parsed {} fixes over {} s", log.track.len(), log.duration_seconds());
//! ```
//!
//! Export to CSV format:
//! ```rust,no_run
//! use igc_parser::{parse_igc_file, export_to_csv, ExportOptions};
//! use std::path::Path;
//!
//! let path = Path::new("230615FLY00123.igc");
//! let log = parse_igc_file(path).unwrap();
//! let report = export_to_csv(&log, path, &ExportOptions::default()).unwrap();
//! if let Some(csv_path) = report.csv_path {
//!     println!("Exported to: {}", csv_path.display());
//! }
//! ```
//!
//! # Public API
//!
//! ## Parsing Functions
//! - [`parse_igc_file`] - Parse an IGC file into an [`IgcLog`]
//! - [`parse_igc_lines`] - Parse IGC records from any `BufRead` source
//! - [`date_from_filename`] - Resolve the flight date from a file stem
//! - [`parse_track_point`] - Decode a single 'B' record
//!
//! ## Data Types
//! - [`IgcLog`] - Complete parsed log: date, headers, track, diagnostics
//! - [`TrackPoint`] - One GPS + barometric fix
//! - [`ExportOptions`] - Configuration for export operations
//! - [`ExportReport`] - Results of export operations with output paths
//!
//! ## Export Functions
//! - [`export_to_csv`] - Export track and headers to CSV files
//! - [`compute_export_paths`] - Helper for consistent path computation

pub mod error;
#[cfg(feature = "csv")]
pub mod export;
pub mod parser;
pub mod types;

pub use error::*;
#[cfg(feature = "csv")]
pub use export::*;
#[allow(ambiguous_glob_reexports)]
pub use parser::*;
#[allow(ambiguous_glob_reexports)]
pub use types::*;
