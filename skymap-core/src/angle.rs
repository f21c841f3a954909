//! Wrapping and clamping rules for celestial angles.
//!
//! | Quantity        | Range      | Function               |
//! |-----------------|------------|------------------------|
//! | Right Ascension | [0, 24) h  | [`normalize_ra_hours`] |
//! | Longitude       | [0, 360)°  | [`wrap_0_360`]         |
//! | Declination     | [-90, 90]° | [`clamp_dec_degrees`]  |
//!
//! Right ascension *wraps* because 23h59m and 0h01m are neighbours on the
//! sky; declination *clamps* because there is nothing past a celestial
//! pole. In-range inputs pass through bit-identical (wrapping must be an
//! exact identity inside the range); out-of-range ones go through a
//! double fmod, which keeps negative inputs and values that round up to
//! exactly one period (e.g. `-1e-16 + 24 == 24.0`) inside the half-open
//! range.

use crate::math::fmod;

/// Wraps right ascension in hours to [0, 24).
#[inline]
pub fn normalize_ra_hours(ra: f64) -> f64 {
    if (0.0..24.0).contains(&ra) {
        return ra;
    }
    fmod(fmod(ra, 24.0) + 24.0, 24.0)
}

/// Wraps an angle in degrees to [0, 360).
#[inline]
pub fn wrap_0_360(deg: f64) -> f64 {
    if (0.0..360.0).contains(&deg) {
        return deg;
    }
    fmod(fmod(deg, 360.0) + 360.0, 360.0)
}

/// Clamps declination in degrees to [-90, 90].
#[inline]
pub fn clamp_dec_degrees(dec: f64) -> f64 {
    dec.clamp(-90.0, 90.0)
}
