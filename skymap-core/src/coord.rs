use crate::angle::{clamp_dec_degrees, normalize_ra_hours};
use crate::constants::{DEGREES_PER_HOUR, DEG_TO_RAD};
use std::fmt;

/// An equatorial sky position: right ascension in hours, declination in
/// degrees.
///
/// The constructor enforces the workspace-wide invariant that RA is always
/// wrapped to [0, 24) and declination clamped to [-90, 90], so downstream
/// trigonometry never has to re-check ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkyCoordinate {
    ra: f64,
    dec: f64,
}

impl SkyCoordinate {
    pub fn new(ra_hours: f64, dec_degrees: f64) -> Self {
        Self {
            ra: normalize_ra_hours(ra_hours),
            dec: clamp_dec_degrees(dec_degrees),
        }
    }

    #[inline]
    pub fn ra_hours(&self) -> f64 {
        self.ra
    }

    #[inline]
    pub fn dec_degrees(&self) -> f64 {
        self.dec
    }

    #[inline]
    pub fn ra_degrees(&self) -> f64 {
        self.ra * DEGREES_PER_HOUR
    }

    #[inline]
    pub fn dec_radians(&self) -> f64 {
        self.dec * DEG_TO_RAD
    }

    /// RA offset of `self` from `other`, wrapped to [0, 24) hours.
    pub fn ra_offset_hours(&self, other: &SkyCoordinate) -> f64 {
        normalize_ra_hours(self.ra - other.ra)
    }
}

impl fmt::Display for SkyCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RA {:.4}h Dec {:+.4}\u{b0}", self.ra, self.dec)
    }
}
