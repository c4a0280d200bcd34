use chrono::NaiveDateTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One GPS + barometric sample decoded from a 'B' record
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackPoint {
    /// Absolute fix time (UTC), filename date + line time-of-day
    pub timestamp: NaiveDateTime,
    /// Degrees and decimal minutes with hemisphere, e.g. "00 30.251 N"
    pub latitude: String,
    /// Degrees and decimal minutes with hemisphere, e.g. "000 20.296 W"
    pub longitude: String,
    /// 'A' for a 3D fix, 'V' for 2D; passed through unvalidated
    pub fix_validity: char,
    /// Barometric altitude in meters vs the 1013.25 hPa datum.
    /// The record format has no sign column, so negative altitudes
    /// cannot be represented.
    pub pressure_altitude: i32,
    /// Altitude in meters above the WGS84 ellipsoid, same sign limitation
    pub gps_altitude: i32,
}
