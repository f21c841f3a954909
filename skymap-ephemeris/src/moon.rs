use crate::ecliptic::ecliptic_to_equatorial;
use crate::error::EphemerisResult;
use crate::sun::SUN_MEAN_ANOMALY;
use skymap_core::angle::wrap_0_360;
use skymap_core::constants::DEG_TO_RAD;
use skymap_core::SkyCoordinate;
use skymap_time::{days_since_j2000, Instant};

/// Geocentric position of the Moon.
///
/// Mean longitude corrected by the five dominant periodic terms
/// (evection, variation and friends collapse into these at this accuracy):
/// four in longitude, two in latitude. Worst-case error is a fraction of
/// a degree, under half the Moon's own apparent diameter per month of
/// drift, fine for chart plotting.
pub(crate) fn moon_position(instant: &Instant) -> EphemerisResult<SkyCoordinate> {
    let d = days_since_j2000(instant)?;

    // Mean longitude, lunar and solar mean anomalies, argument of latitude
    let mean_longitude = wrap_0_360(218.316 + 13.176396 * d);
    let m_moon = wrap_0_360(134.963 + 13.064993 * d) * DEG_TO_RAD;
    let m_sun = wrap_0_360(SUN_MEAN_ANOMALY.0 + SUN_MEAN_ANOMALY.1 * d) * DEG_TO_RAD;
    let f = wrap_0_360(93.272 + 13.229350 * d) * DEG_TO_RAD;

    let delta_longitude = 6.289 * libm::sin(m_moon) - 2.056 * libm::sin(m_moon - 2.0 * f)
        + 1.273 * libm::sin(2.0 * f - m_moon)
        - 0.186 * libm::sin(m_sun);

    let delta_latitude = 5.128 * libm::sin(f) + 0.281 * libm::sin(m_moon + f);

    let lambda = wrap_0_360(mean_longitude + delta_longitude);
    let beta = delta_latitude;

    Ok(ecliptic_to_equatorial(lambda, beta))
}
