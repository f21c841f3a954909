use crate::ecliptic::ecliptic_to_equatorial;
use crate::error::EphemerisResult;
use skymap_core::angle::wrap_0_360;
use skymap_core::constants::DEG_TO_RAD;
use skymap_core::SkyCoordinate;
use skymap_time::{days_since_j2000, Instant};

/// Solar mean longitude at J2000 and its daily rate, degrees.
pub(crate) const SUN_MEAN_LONGITUDE: (f64, f64) = (280.460, 0.9856474);

/// Solar mean anomaly at J2000 and its daily rate, degrees.
pub(crate) const SUN_MEAN_ANOMALY: (f64, f64) = (357.528, 0.9856003);

/// Apparent geocentric position of the Sun.
///
/// Mean longitude plus a two-term equation of center gives the ecliptic
/// longitude; latitude is taken as zero. Good to a couple of arcminutes.
pub(crate) fn sun_position(instant: &Instant) -> EphemerisResult<SkyCoordinate> {
    let d = days_since_j2000(instant)?;

    let mean_longitude = wrap_0_360(SUN_MEAN_LONGITUDE.0 + SUN_MEAN_LONGITUDE.1 * d);
    let mean_anomaly = wrap_0_360(SUN_MEAN_ANOMALY.0 + SUN_MEAN_ANOMALY.1 * d) * DEG_TO_RAD;

    let lambda = wrap_0_360(
        mean_longitude + 1.915 * libm::sin(mean_anomaly) + 0.020 * libm::sin(2.0 * mean_anomaly),
    );

    Ok(ecliptic_to_equatorial(lambda, 0.0))
}

/// Earth's heliocentric position on the unit circle at the Sun's mean
/// longitude. The planet solver subtracts this to go geocentric.
pub(crate) fn earth_unit_position(d: f64) -> (f64, f64) {
    let l = wrap_0_360(SUN_MEAN_LONGITUDE.0 + SUN_MEAN_LONGITUDE.1 * d) * DEG_TO_RAD;
    let (sin_l, cos_l) = libm::sincos(l);
    (cos_l, sin_l)
}
