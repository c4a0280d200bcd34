use crate::error::{IgcError, Result};
use chrono::NaiveDate;

/// Resolve the flight date from an IGC log's filename.
///
/// Per the IGC naming convention the log date is encoded in the first six
/// characters of the file stem as `YYMMDD`. `YY` is interpreted as `2000 + YY`
/// (the instruments this tool targets all post-date 2000; dates past 2099 are
/// a known limitation). Returns the date together with the verbatim six-digit
/// string, which is reused when composing full track timestamps.
pub fn date_from_filename(stem: &str) -> Result<(NaiveDate, String)> {
    let digits = stem.get(..6).ok_or_else(|| {
        IgcError::DateParse(format!("filename '{}' is too short for a YYMMDD prefix", stem))
    })?;

    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IgcError::DateParse(format!(
            "filename '{}' does not start with six digits",
            stem
        )));
    }

    let year: i32 = digits[..2]
        .parse()
        .map_err(|_| IgcError::DateParse(format!("invalid year in '{}'", digits)))?;
    let month: u32 = digits[2..4]
        .parse()
        .map_err(|_| IgcError::DateParse(format!("invalid month in '{}'", digits)))?;
    let day: u32 = digits[4..6]
        .parse()
        .map_err(|_| IgcError::DateParse(format!("invalid day in '{}'", digits)))?;

    let date = NaiveDate::from_ymd_opt(2000 + year, month, day).ok_or_else(|| {
        IgcError::DateParse(format!("'{}' is not a real calendar date", digits))
    })?;

    Ok((date, digits.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_date_and_raw_digits() {
        let (date, digits) = date_from_filename("230615FLY00123").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 6, 15).unwrap());
        assert_eq!(digits, "230615");
    }

    #[test]
    fn century_is_fixed_at_2000() {
        let (date, _) = date_from_filename("990101").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2099, 1, 1).unwrap());
    }

    #[test]
    fn rejects_non_digit_prefix() {
        assert!(matches!(
            date_from_filename("23A615001"),
            Err(IgcError::DateParse(_))
        ));
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(matches!(
            date_from_filename("231315001"),
            Err(IgcError::DateParse(_))
        ));
        assert!(matches!(
            date_from_filename("230632001"),
            Err(IgcError::DateParse(_))
        ));
    }

    #[test]
    fn rejects_short_stem() {
        assert!(matches!(
            date_from_filename("2306"),
            Err(IgcError::DateParse(_))
        ));
    }
}
