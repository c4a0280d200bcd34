use crate::types::TrackPoint;
use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete parsed IGC log data
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IgcLog {
    /// Flight date resolved from the filename's YYMMDD prefix
    pub log_date: NaiveDate,
    /// Verbatim 'A', 'H' and 'L' lines in file order, trimmed
    pub headers: Vec<String>,
    /// Track fixes in file order (assumed chronological)
    pub track: Vec<TrackPoint>,
    /// Lines outside {A, H, L, B} are dropped; this counts them
    pub skipped_lines: usize,
}

impl IgcLog {
    /// Seconds between a track point and the first fix of the log.
    ///
    /// Returns 0.0 for an empty track. Non-negative for well-formed
    /// chronological input.
    pub fn elapsed_seconds(&self, point: &TrackPoint) -> f64 {
        match self.track.first() {
            Some(first) => point
                .timestamp
                .signed_duration_since(first.timestamp)
                .num_seconds() as f64,
            None => 0.0,
        }
    }

    /// Get the duration of the track in seconds
    pub fn duration_seconds(&self) -> f64 {
        match self.track.last() {
            Some(last) => self.elapsed_seconds(last),
            None => 0.0,
        }
    }

    /// Check if this log contains any track fixes
    pub fn has_track_data(&self) -> bool {
        !self.track.is_empty()
    }
}
