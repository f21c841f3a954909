//! Solar-system body positions for the skymap workspace.
//!
//! Implements the deliberately simplified model the star map is documented
//! to use: low-order trigonometric series for the Sun and Moon, and a
//! first-order Keplerian solve (ν ≈ M + e·sin M, no iteration) for the
//! seven major planets against a unit-circle Earth. Positions are good to
//! roughly a degree over decades around J2000, plenty for plotting a
//! marker on a sky chart, and never to be mistaken for an ephemeris.
//!
//! [`SolarSystem`] owns the orbital-element table; nothing here is global.

pub mod body;
mod ecliptic;
pub mod elements;
pub mod error;
mod moon;
mod planets;
mod sun;
mod system;

pub use body::{Body, BodyKind};
pub use elements::OrbitalElements;
pub use error::{EphemerisError, EphemerisResult};
pub use system::{BodyPosition, SolarSystem};
