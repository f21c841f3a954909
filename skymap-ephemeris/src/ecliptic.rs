use skymap_core::constants::{DEGREES_PER_HOUR, DEG_TO_RAD, OBLIQUITY_RAD, RAD_TO_DEG};
use skymap_core::SkyCoordinate;

/// Rotates ecliptic longitude/latitude (degrees) into equatorial RA/Dec
/// using the fixed mean obliquity.
///
/// With β = 0 this reduces to the familiar solar form
/// `ra = atan2(cos ε · sin λ, cos λ)`.
pub(crate) fn ecliptic_to_equatorial(lambda_deg: f64, beta_deg: f64) -> SkyCoordinate {
    let lambda = lambda_deg * DEG_TO_RAD;
    let beta = beta_deg * DEG_TO_RAD;

    let (sin_lambda, cos_lambda) = libm::sincos(lambda);
    let (sin_beta, cos_beta) = libm::sincos(beta);
    let (sin_eps, cos_eps) = libm::sincos(OBLIQUITY_RAD);

    let ra = libm::atan2(
        cos_beta * sin_lambda * cos_eps - sin_beta * sin_eps,
        cos_beta * cos_lambda,
    );
    let dec = libm::asin(sin_beta * cos_eps + cos_beta * sin_lambda * sin_eps);

    SkyCoordinate::new(ra * RAD_TO_DEG / DEGREES_PER_HOUR, dec * RAD_TO_DEG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equinoxes_map_to_the_equator() {
        let vernal = ecliptic_to_equatorial(0.0, 0.0);
        assert!(vernal.ra_hours().abs() < 1e-9);
        assert!(vernal.dec_degrees().abs() < 1e-9);

        let autumnal = ecliptic_to_equatorial(180.0, 0.0);
        assert!((autumnal.ra_hours() - 12.0).abs() < 1e-9);
        assert!(autumnal.dec_degrees().abs() < 1e-9);
    }

    #[test]
    fn solstices_reach_the_obliquity() {
        let summer = ecliptic_to_equatorial(90.0, 0.0);
        assert!((summer.ra_hours() - 6.0).abs() < 1e-9);
        assert!((summer.dec_degrees() - 23.439).abs() < 1e-6);

        let winter = ecliptic_to_equatorial(270.0, 0.0);
        assert!((winter.ra_hours() - 18.0).abs() < 1e-9);
        assert!((winter.dec_degrees() + 23.439).abs() < 1e-6);
    }

    #[test]
    fn latitude_tilts_toward_the_pole() {
        let above = ecliptic_to_equatorial(0.0, 5.0);
        assert!(above.dec_degrees() > 0.0);
        let below = ecliptic_to_equatorial(0.0, -5.0);
        assert!(below.dec_degrees() < 0.0);
    }
}
