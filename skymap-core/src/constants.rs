/// Julian Date of the J2000.0 reference epoch (2000-01-01T12:00:00 UTC).
pub const J2000_JD: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const SECONDS_PER_HOUR_F64: f64 = 3_600.0;

/// Degrees of sky rotation per hour of right ascension.
pub const DEGREES_PER_HOUR: f64 = 15.0;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// Mean obliquity of the ecliptic used throughout the simplified solvers.
///
/// A fixed J2000-era value; the drift of ~47 arcseconds per century is far
/// below the accuracy of the first-order orbital model.
pub const OBLIQUITY_DEG: f64 = 23.439;

pub const OBLIQUITY_RAD: f64 = OBLIQUITY_DEG * DEG_TO_RAD;
