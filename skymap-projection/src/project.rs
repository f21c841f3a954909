use crate::viewport::{ScreenPoint, Viewport};
use skymap_core::constants::{DEGREES_PER_HOUR, DEG_TO_RAD, RAD_TO_DEG};
use skymap_core::SkyCoordinate;

/// Pixel scale of the projection: one sky radian near the centre spans
/// `zoom * min(w, h) / 4` pixels, so the visible field is governed by the
/// short edge of the viewport and square pixels stay square.
#[inline]
fn plate_scale(zoom: f64, viewport: &Viewport) -> f64 {
    zoom * viewport.min_dimension() / 4.0
}

/// Cull threshold for the far-hemisphere test. `cos` of a right angle
/// computes to ~6e-17 rather than zero, so points exactly 90 degrees
/// from the centre need the epsilon to land on the culled side.
const COS_C_CULL: f64 = 1e-12;

#[inline]
fn asin_clamped(x: f64) -> f64 {
    libm::asin(x.clamp(-1.0, 1.0))
}

/// Projects a sky position onto the viewport, stereographically, about
/// `center`. Returns `None` when the point lies on the far hemisphere
/// (angular distance from the centre >= 90 degrees); a hard cull, since
/// the stereographic image of the far hemisphere would wrap around to
/// unbounded radii.
///
/// The returned point may still fall outside the viewport rectangle;
/// off-screen clipping is the renderer's business, not the projection's.
pub fn sky_to_screen(
    sky: &SkyCoordinate,
    center: &SkyCoordinate,
    zoom: f64,
    viewport: &Viewport,
) -> Option<ScreenPoint> {
    let ra_rad = sky.ra_offset_hours(center) * DEGREES_PER_HOUR * DEG_TO_RAD;
    let (sin_dec, cos_dec) = libm::sincos(sky.dec_radians());
    let (sin_cdec, cos_cdec) = libm::sincos(center.dec_radians());
    let (sin_ra, cos_ra) = libm::sincos(ra_rad);

    let cos_c = sin_cdec * sin_dec + cos_cdec * cos_dec * cos_ra;
    if cos_c <= COS_C_CULL {
        return None;
    }

    // Stereographic radius R = 2k·tan(c/2); the 2/(1 + cos c) factor is
    // that tangent with the direction components folded in. The factor
    // of two is what [`screen_to_sky`]'s `c = 2·atan(rho/2)` inverts.
    let k = plate_scale(zoom, viewport);
    let x = viewport.width() / 2.0 + 2.0 * k * cos_dec * sin_ra / (1.0 + cos_c);
    let y = viewport.height() / 2.0
        - 2.0 * k * (cos_cdec * sin_dec - sin_cdec * cos_dec * cos_ra) / (1.0 + cos_c);
    Some(ScreenPoint::new(x, y))
}

/// Inverts the projection: the sky position whose image is `point`.
///
/// Exact inverse of [`sky_to_screen`] for any point in the near
/// hemisphere's image. The viewport centre short-circuits to the view
/// centre itself (the radial direction is undefined there).
pub fn screen_to_sky(
    point: &ScreenPoint,
    center: &SkyCoordinate,
    zoom: f64,
    viewport: &Viewport,
) -> SkyCoordinate {
    let k = plate_scale(zoom, viewport);
    let dx = (point.x() - viewport.width() / 2.0) / k;
    let dy = (viewport.height() / 2.0 - point.y()) / k;

    let rho = libm::sqrt(dx * dx + dy * dy);
    if rho == 0.0 {
        return *center;
    }

    let c = 2.0 * libm::atan(rho / 2.0);
    let (sin_c, cos_c) = libm::sincos(c);
    let (sin_cdec, cos_cdec) = libm::sincos(center.dec_radians());

    let dec = asin_clamped(cos_c * sin_cdec + dy * sin_c * cos_cdec / rho);
    let ra = libm::atan2(
        dx * sin_c,
        rho * cos_cdec * cos_c - dy * sin_cdec * sin_c,
    );

    SkyCoordinate::new(
        ra * RAD_TO_DEG / DEGREES_PER_HOUR + center.ra_hours(),
        dec * RAD_TO_DEG,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport::new(800.0, 600.0);

    #[test]
    fn view_center_lands_on_viewport_center() {
        let center = SkyCoordinate::new(12.0, 0.0);
        let p = sky_to_screen(&center, &center, 1.0, &VP).unwrap();
        assert!((p.x() - 400.0).abs() < 1e-9);
        assert!((p.y() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn east_of_center_projects_right_north_projects_up() {
        let center = SkyCoordinate::new(12.0, 0.0);

        let east = SkyCoordinate::new(12.5, 0.0);
        let p = sky_to_screen(&east, &center, 1.0, &VP).unwrap();
        assert!(p.x() > 400.0);
        assert!((p.y() - 300.0).abs() < 1e-9);

        let north = SkyCoordinate::new(12.0, 10.0);
        let p = sky_to_screen(&north, &center, 1.0, &VP).unwrap();
        assert!((p.x() - 400.0).abs() < 1e-9);
        assert!(p.y() < 300.0);
    }

    #[test]
    fn far_hemisphere_is_culled() {
        let center = SkyCoordinate::new(12.0, 0.0);
        // Antipode of the centre
        assert!(sky_to_screen(&SkyCoordinate::new(0.0, 0.0), &center, 1.0, &VP).is_none());
        // Exactly 90 degrees away: cos c computes to ~6e-17, not zero,
        // and must still land on the culled side
        assert!(sky_to_screen(&SkyCoordinate::new(18.0, 0.0), &center, 1.0, &VP).is_none());
        assert!(sky_to_screen(&SkyCoordinate::new(12.0, 90.0), &center, 1.0, &VP).is_none());
        // Just inside the near hemisphere
        assert!(sky_to_screen(&SkyCoordinate::new(17.9, 0.0), &center, 1.0, &VP).is_some());
    }

    #[test]
    fn pole_is_visible_from_a_northern_center() {
        let center = SkyCoordinate::new(6.0, 45.0);
        let pole = SkyCoordinate::new(0.0, 90.0);
        assert!(sky_to_screen(&pole, &center, 1.0, &VP).is_some());

        let south = SkyCoordinate::new(0.0, -90.0);
        assert!(sky_to_screen(&south, &center, 1.0, &VP).is_none());
    }

    #[test]
    fn zoom_scales_offsets_about_the_center() {
        let center = SkyCoordinate::new(12.0, 0.0);
        let star = SkyCoordinate::new(12.5, 5.0);
        let near = sky_to_screen(&star, &center, 1.0, &VP).unwrap();
        let far = sky_to_screen(&star, &center, 2.0, &VP).unwrap();
        let r1 = near.distance(&VP.center());
        let r2 = far.distance(&VP.center());
        assert!((r2 / r1 - 2.0).abs() < 1e-9);
    }

    #[test]
    fn ten_degree_offset_round_trips_exactly() {
        // A pure declination offset projects to R = 2k·tan(c/2) below
        // the pole direction and must come back as the same declination
        let center = SkyCoordinate::new(12.0, 0.0);
        let sky = SkyCoordinate::new(12.0, 10.0);
        let p = sky_to_screen(&sky, &center, 1.0, &VP).unwrap();

        let k = plate_scale(1.0, &VP);
        let expected_dy = 2.0 * k * libm::tan(5.0 * skymap_core::constants::DEG_TO_RAD);
        assert!((300.0 - p.y() - expected_dy).abs() < 1e-9, "y {}", p.y());

        let back = screen_to_sky(&p, &center, 1.0, &VP);
        assert!((back.dec_degrees() - 10.0).abs() < 1e-9, "dec {}", back.dec_degrees());
        assert!((back.ra_hours() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn viewport_center_deprojects_to_view_center() {
        let center = SkyCoordinate::new(5.5, -30.0);
        let back = screen_to_sky(&VP.center(), &center, 1.0, &VP);
        assert_eq!(back, center);
    }

    #[test]
    fn round_trip_across_centers_zooms_and_viewports() {
        let centers = [
            SkyCoordinate::new(0.0, 0.0),
            SkyCoordinate::new(12.0, 45.0),
            SkyCoordinate::new(23.5, -60.0),
            SkyCoordinate::new(6.0, 89.0),
        ];
        let viewports = [Viewport::new(800.0, 600.0), Viewport::new(375.0, 812.0)];

        for center in &centers {
            for vp in &viewports {
                for &zoom in &[0.1, 1.0, 4.0, 10.0] {
                    for &dra in &[-2.0, -0.25, 0.0, 0.25, 2.0] {
                        for &ddec in &[-30.0, -5.0, 0.0, 5.0, 30.0] {
                            let sky = SkyCoordinate::new(
                                center.ra_hours() + dra,
                                center.dec_degrees() * 0.5 + ddec,
                            );
                            let Some(p) = sky_to_screen(&sky, center, zoom, vp) else {
                                continue;
                            };
                            let back = screen_to_sky(&p, center, zoom, vp);
                            let mut dra_back =
                                (back.ra_hours() - sky.ra_hours()).abs();
                            dra_back = dra_back.min(24.0 - dra_back);
                            assert!(
                                dra_back * 15.0 < 1e-4,
                                "ra drift at {} via {}",
                                sky,
                                center
                            );
                            assert!(
                                (back.dec_degrees() - sky.dec_degrees()).abs() < 1e-4,
                                "dec drift at {} via {}",
                                sky,
                                center
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn plate_scale_follows_short_edge() {
        let wide = Viewport::new(1000.0, 400.0);
        let tall = Viewport::new(400.0, 1000.0);
        assert_eq!(plate_scale(1.0, &wide), 100.0);
        assert_eq!(plate_scale(1.0, &tall), 100.0);
        assert_eq!(plate_scale(3.0, &wide), 300.0);
    }
}
