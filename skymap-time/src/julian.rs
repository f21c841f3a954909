use crate::error::TimeResult;
use crate::instant::Instant;
use skymap_core::constants::J2000_JD;

/// Julian Date of the Unix epoch, 1970-01-01T00:00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Converts a calendar instant to a continuous Julian Date.
///
/// Uses the Fliegel–Van Flandern day-number formula for the proleptic
/// Gregorian calendar, plus the fractional day from the time fields. The
/// JD boundary falls at noon: 2000-01-01T12:00:00Z is exactly 2451545.0
/// and an instant 12 hours later than midnight is 0.5 day larger.
///
/// Returns [`TimeError::InvalidInstant`](crate::TimeError::InvalidInstant)
/// for impossible calendar fields; callers that need a total function
/// substitute the J2000 epoch and surface a warning.
pub fn julian_day(instant: &Instant) -> TimeResult<f64> {
    instant.validate()?;

    let month = instant.month as i64;
    let a = (14 - month) / 12;
    let y = instant.year as i64 + 4800 - a;
    let m = month + 12 * a - 3;

    let jdn =
        instant.day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045;

    Ok(jdn as f64 + instant.day_fraction() - 0.5)
}

/// Days elapsed since the J2000.0 epoch (negative before it).
pub fn days_since_j2000(instant: &Instant) -> TimeResult<f64> {
    Ok(julian_day(instant)? - J2000_JD)
}
