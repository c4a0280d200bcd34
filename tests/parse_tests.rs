use chrono::NaiveDate;
use igc_parser::{parse_igc_file, IgcError};
use std::fs;

/// Integration tests for whole-file parsing against on-disk fixtures

const FIXTURE: &str = "AXFMSFLYMASTER\n\
                       HFDTE150623\n\
                       HFPLTPILOT:TEST PILOT\n\
                       LFMSNOTE A COMMENT\n\
                       B1320450030251N00020296WA0058200583\n\
                       B1321450030260N00020300WA0059000591\n\
                       GSECURITYRECORD\n";

#[test]
fn parses_fixture_file_end_to_end() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let log_path = dir.path().join("230615FLY00123.igc");
    fs::write(&log_path, FIXTURE).expect("Failed to write fixture");

    let log = parse_igc_file(&log_path).expect("Parse failed");

    assert_eq!(log.log_date, NaiveDate::from_ymd_opt(2023, 6, 15).unwrap());
    assert_eq!(log.headers.len(), 4);
    assert_eq!(log.headers[0], "AXFMSFLYMASTER");
    assert_eq!(log.track.len(), 2);
    assert_eq!(log.skipped_lines, 1);

    let first = &log.track[0];
    assert_eq!(
        first.timestamp,
        NaiveDate::from_ymd_opt(2023, 6, 15)
            .unwrap()
            .and_hms_opt(13, 20, 45)
            .unwrap()
    );
    assert_eq!(first.latitude, "00 30.251 N");
    assert_eq!(first.longitude, "000 20.296 W");
    assert_eq!(first.fix_validity, 'A');
    assert_eq!(first.pressure_altitude, 582);
    assert_eq!(first.gps_altitude, 583);

    assert_eq!(log.elapsed_seconds(&log.track[1]), 60.0);
    assert_eq!(log.duration_seconds(), 60.0);
}

#[test]
fn filename_without_date_prefix_fails_before_reading() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let log_path = dir.path().join("flight.igc");
    fs::write(&log_path, FIXTURE).expect("Failed to write fixture");

    assert!(matches!(
        parse_igc_file(&log_path),
        Err(IgcError::DateParse(_))
    ));
}

#[test]
fn truncated_track_line_fails_whole_parse() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let log_path = dir.path().join("230615FLY00123.igc");
    fs::write(
        &log_path,
        "AXFMSFLYMASTER\nB1320450030251N00020\nB1321450030260N00020300WA0059000591\n",
    )
    .expect("Failed to write fixture");

    assert!(matches!(
        parse_igc_file(&log_path),
        Err(IgcError::MalformedTrackLine(_))
    ));
}

#[test]
fn missing_file_reports_io_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let log_path = dir.path().join("230615FLY00123.igc");

    assert!(matches!(parse_igc_file(&log_path), Err(IgcError::Io(_))));
}

#[test]
fn crlf_line_endings_are_trimmed() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let log_path = dir.path().join("230615FLY00123.igc");
    fs::write(
        &log_path,
        "AXFMSFLYMASTER\r\nB1320450030251N00020296WA0058200583\r\n",
    )
    .expect("Failed to write fixture");

    let log = parse_igc_file(&log_path).expect("Parse failed");
    assert_eq!(log.headers[0], "AXFMSFLYMASTER");
    assert_eq!(log.track[0].gps_altitude, 583);
}
