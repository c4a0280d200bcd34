use crate::error::Result;
use crate::parser::{date_from_filename, parse_track_point};
use crate::types::IgcLog;
use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse an IGC log file into an [`IgcLog`].
///
/// The flight date is resolved from the filename before any line is read;
/// every track timestamp depends on it, so an invalid filename fails the
/// whole parse up front. A malformed 'B' record likewise aborts the parse
/// with no partial track, since a silently truncated track would mislead
/// downstream analysis.
pub fn parse_igc_file(path: &Path) -> Result<IgcLog> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let (log_date, date_digits) = date_from_filename(stem)?;

    let file = File::open(path)?;
    parse_igc_lines(BufReader::new(file), log_date, &date_digits)
}

/// Parse IGC records from any line source.
///
/// Each line is classified by its leading character:
/// 'A' (manufacturer ID), 'H' (file header) and 'L' (logbook comment) lines
/// are kept verbatim in `headers`; 'B' lines are decoded into track points;
/// anything else is dropped and counted in `skipped_lines`.
pub fn parse_igc_lines<R: BufRead>(
    reader: R,
    log_date: NaiveDate,
    date_digits: &str,
) -> Result<IgcLog> {
    let mut headers = Vec::new();
    let mut track = Vec::new();
    let mut skipped_lines = 0;

    for line in reader.lines() {
        let line = line?;
        match line.chars().next() {
            Some('A') | Some('H') | Some('L') => headers.push(line.trim().to_string()),
            Some('B') => track.push(parse_track_point(&line, date_digits)?),
            _ => skipped_lines += 1,
        }
    }

    Ok(IgcLog {
        log_date,
        headers,
        track,
        skipped_lines,
    })
}
