//! Time arithmetic for the skymap workspace.
//!
//! Everything downstream of this crate measures time as a continuous day
//! count (Julian Date) anchored at the J2000.0 epoch. The public surface
//! is a validated calendar [`Instant`], the [`julian_day`] /
//! [`days_since_j2000`] conversions, and [`local_sidereal_time`].
//!
//! An [`Instant`] with impossible calendar fields (February 30th, month
//! 13) is an explicit error state: the conversion functions return
//! [`TimeError::InvalidInstant`] rather than silently coercing to the
//! epoch, and callers that need a total function substitute the documented
//! fallback themselves.

pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;

pub use error::{TimeError, TimeResult};
pub use instant::Instant;
pub use julian::{days_since_j2000, julian_day};
pub use sidereal::local_sidereal_time;
