use crate::error::TimeResult;
use crate::instant::Instant;
use crate::julian::days_since_j2000;
use skymap_core::angle::wrap_0_360;
use skymap_core::constants::{DAYS_PER_JULIAN_CENTURY, DEGREES_PER_HOUR};

/// Greenwich sidereal time in hours, in [0, 24).
///
/// Polynomial in days (`d`) and centuries (`t`) since J2000:
/// `GST = 280.46061837 + 360.98564736629·d + 0.000387933·t² − t³/38710000`,
/// reduced mod 360 and converted to hours. Accurate to well under a second
/// of time over several centuries, which is far tighter than the
/// first-order orbital model it feeds.
pub fn local_sidereal_time(instant: &Instant) -> TimeResult<f64> {
    let d = days_since_j2000(instant)?;
    let t = d / DAYS_PER_JULIAN_CENTURY;

    let gst =
        280.46061837 + 360.98564736629 * d + 0.000387933 * t * t - t * t * t / 38_710_000.0;

    Ok(wrap_0_360(gst) / DEGREES_PER_HOUR)
}
