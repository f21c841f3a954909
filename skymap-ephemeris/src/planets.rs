use crate::body::Body;
use crate::elements::elements_for;
use crate::error::EphemerisResult;
use crate::sun::earth_unit_position;
use skymap_core::angle::wrap_0_360;
use skymap_core::constants::{DEGREES_PER_HOUR, DEG_TO_RAD, RAD_TO_DEG};
use skymap_core::SkyCoordinate;
use skymap_time::{days_since_j2000, Instant};

/// Geocentric RA/Dec of a planet from its mean elements.
///
/// The solve is first-order on purpose: the true anomaly is approximated
/// as ν ≈ M + e·sin M (one term of the equation of center) instead of an
/// iterative Kepler inversion, and Earth sits on a unit circle at the
/// Sun's mean longitude. That keeps predicted positions consistent with
/// the rest of the chart's low-order model; do not "fix" it with a
/// proper solver.
///
/// Returns `Ok(None)` for bodies without full Keplerian elements
/// (the Sun and Moon, which have dedicated series).
pub(crate) fn planet_position(
    body: Body,
    instant: &Instant,
) -> EphemerisResult<Option<SkyCoordinate>> {
    let Some(elements) = elements_for(body) else {
        return Ok(None);
    };
    let Some(semi_major_axis) = elements.semi_major_axis_au else {
        return Ok(None);
    };

    let d = days_since_j2000(instant)?;

    let mean_anomaly = wrap_0_360(
        elements.mean_anomaly_at_epoch_deg + 360.0 * d / elements.period_days,
    );
    let m_rad = mean_anomaly * DEG_TO_RAD;

    // First-order equation of center, in degrees
    let true_anomaly = mean_anomaly + elements.eccentricity * libm::sin(m_rad) * RAD_TO_DEG;
    let nu_rad = true_anomaly * DEG_TO_RAD;

    // Orbit equation for the heliocentric distance
    let e = elements.eccentricity;
    let r = semi_major_axis * (1.0 - e * e) / (1.0 + e * libm::cos(nu_rad));

    // Heliocentric position, tilted by the inclination
    let longitude = wrap_0_360(elements.argument_periapsis_deg + true_anomaly) * DEG_TO_RAD;
    let (sin_lon, cos_lon) = libm::sincos(longitude);
    let (sin_inc, cos_inc) = libm::sincos(elements.inclination_deg * DEG_TO_RAD);
    let x = r * cos_lon;
    let y = r * sin_lon * cos_inc;
    let z = r * sin_lon * sin_inc;

    // Geocentric vector = planet - Earth
    let (earth_x, earth_y) = earth_unit_position(d);
    let dx = x - earth_x;
    let dy = y - earth_y;
    let dz = z;

    let ra = libm::atan2(dy, dx) * RAD_TO_DEG / DEGREES_PER_HOUR;
    let dec = libm::atan2(dz, libm::sqrt(dx * dx + dy * dy)) * RAD_TO_DEG;

    Ok(Some(SkyCoordinate::new(ra, dec)))
}
