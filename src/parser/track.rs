use crate::error::{IgcError, Result};
use crate::types::TrackPoint;
use chrono::NaiveDateTime;

/// Minimum length of a 'B' record: marker + time + lat + lon + fix + two altitudes.
///
/// ```text
/// B HHMMSS DDMMmmm(N|S) DDDMMmmm(E|W) (A|V) PPPPP GGGGG
/// 1 6      2+2+3+1=8    3+2+3+1=9     1     5     5
/// ```
const TRACK_LINE_LEN: usize = 35;

/// Decode a 'B' record into a [`TrackPoint`].
///
/// The layout is strictly positional with zero-padded fields and no
/// delimiters, so decoding is plain fixed-offset slicing. `date_digits` is
/// the six-character `YYMMDD` string from the filename; per the IGC spec the
/// log date lives in the filename, and the full timestamp is the
/// concatenation of that date with the record's `HHMMSS` time of day.
///
/// Characters beyond column 35 carry optional B-record extensions and are
/// ignored. Fix-validity and hemisphere characters are passed through
/// without validation; only structural mismatch (short line, non-digit in a
/// numeric field, impossible time of day) is an error.
pub fn parse_track_point(line: &str, date_digits: &str) -> Result<TrackPoint> {
    let line = line.trim_end();

    if line.len() < TRACK_LINE_LEN || !line.as_bytes()[..TRACK_LINE_LEN].is_ascii() {
        return Err(IgcError::MalformedTrackLine(format!(
            "expected at least {} ASCII characters, got: '{}'",
            TRACK_LINE_LEN, line
        )));
    }

    let time = digit_field(line, 1, 7, "time")?;
    let lat_deg = digit_field(line, 7, 9, "latitude degrees")?;
    let lat_min = digit_field(line, 9, 11, "latitude minutes")?;
    let lat_dec_min = digit_field(line, 11, 14, "latitude decimal minutes")?;
    let lat_dir = &line[14..15];
    let lon_deg = digit_field(line, 15, 18, "longitude degrees")?;
    let lon_min = digit_field(line, 18, 20, "longitude minutes")?;
    let lon_dec_min = digit_field(line, 20, 23, "longitude decimal minutes")?;
    let lon_dir = &line[23..24];
    let fix_validity = line.as_bytes()[24] as char;
    let pressure_altitude = parse_altitude(line, 25, 30, "pressure altitude")?;
    let gps_altitude = parse_altitude(line, 30, 35, "GPS altitude")?;

    let timestamp = NaiveDateTime::parse_from_str(
        &format!("{}{}", date_digits, time),
        "%y%m%d%H%M%S",
    )
    .map_err(|_| {
        IgcError::MalformedTrackLine(format!("'{}' is not a valid time of day", time))
    })?;

    let latitude = format!("{} {}.{} {}", lat_deg, lat_min, lat_dec_min, lat_dir);
    let longitude = format!("{} {}.{} {}", lon_deg, lon_min, lon_dec_min, lon_dir);

    Ok(TrackPoint {
        timestamp,
        latitude,
        longitude,
        fix_validity,
        pressure_altitude,
        gps_altitude,
    })
}

fn digit_field<'a>(line: &'a str, start: usize, end: usize, what: &str) -> Result<&'a str> {
    let field = &line[start..end];
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IgcError::MalformedTrackLine(format!(
            "non-digit in {} field: '{}'",
            what, field
        )));
    }
    Ok(field)
}

fn parse_altitude(line: &str, start: usize, end: usize, what: &str) -> Result<i32> {
    digit_field(line, start, end, what)?
        .parse()
        .map_err(|_| IgcError::MalformedTrackLine(format!("unparseable {} field", what)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    const REFERENCE_LINE: &str = "B1320450030251N00020296WA0058200583";

    #[test]
    fn decodes_reference_line() {
        let point = parse_track_point(REFERENCE_LINE, "230615").unwrap();

        assert_eq!(
            point.timestamp,
            NaiveDate::from_ymd_opt(2023, 6, 15)
                .unwrap()
                .and_hms_opt(13, 20, 45)
                .unwrap()
        );
        assert_eq!(point.latitude, "00 30.251 N");
        assert_eq!(point.longitude, "000 20.296 W");
        assert_eq!(point.fix_validity, 'A');
        assert_eq!(point.pressure_altitude, 582);
        assert_eq!(point.gps_altitude, 583);
    }

    #[test]
    fn time_of_day_fields_decode() {
        let point = parse_track_point(REFERENCE_LINE, "230615").unwrap();
        assert_eq!(point.timestamp.hour(), 13);
        assert_eq!(point.timestamp.minute(), 20);
        assert_eq!(point.timestamp.second(), 45);
    }

    #[test]
    fn accepts_v_fix_and_other_hemispheres() {
        let point = parse_track_point("B0959595107203S17932100EV0100001005", "240229").unwrap();
        assert_eq!(point.fix_validity, 'V');
        assert_eq!(point.latitude, "51 07.203 S");
        assert_eq!(point.longitude, "179 32.100 E");
    }

    #[test]
    fn ignores_trailing_extension_data() {
        let extended = format!("{}00912", REFERENCE_LINE);
        let point = parse_track_point(&extended, "230615").unwrap();
        assert_eq!(point.gps_altitude, 583);
    }

    #[test]
    fn rejects_truncated_line() {
        let truncated = &REFERENCE_LINE[..20];
        assert!(matches!(
            parse_track_point(truncated, "230615"),
            Err(IgcError::MalformedTrackLine(_))
        ));
    }

    #[test]
    fn rejects_non_digit_in_numeric_field() {
        let corrupt = "B1320450030251N00020296WA00x8200583";
        assert!(matches!(
            parse_track_point(corrupt, "230615"),
            Err(IgcError::MalformedTrackLine(_))
        ));
    }

    #[test]
    fn rejects_impossible_time_of_day() {
        let bad_time = "B2561450030251N00020296WA0058200583";
        assert!(matches!(
            parse_track_point(bad_time, "230615"),
            Err(IgcError::MalformedTrackLine(_))
        ));
    }

    #[test]
    fn numeric_substrings_round_trip() {
        let point = parse_track_point(REFERENCE_LINE, "230615").unwrap();
        let reencoded = format!(
            "B{}{}{}{}{:05}{:05}",
            point.timestamp.format("%H%M%S"),
            "0030251N",
            "00020296W",
            point.fix_validity,
            point.pressure_altitude,
            point.gps_altitude
        );
        assert_eq!(reencoded, REFERENCE_LINE);
    }
}
