use crate::body::Body;
use crate::elements::{elements_for, OrbitalElements};
use crate::error::{EphemerisError, EphemerisResult};
use crate::{moon, planets, sun};
use skymap_core::SkyCoordinate;
use skymap_time::Instant;

/// A body paired with its computed equatorial position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    pub body: Body,
    pub coord: SkyCoordinate,
}

/// The solar-system model: an immutable orbital-element table plus the
/// simplified solvers. Construct one and share it; there are no globals.
#[derive(Debug, Default, Clone)]
pub struct SolarSystem {
    _private: (),
}

impl SolarSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mean Keplerian elements for a body, if it has any.
    pub fn elements(&self, body: Body) -> Option<OrbitalElements> {
        elements_for(body)
    }

    pub fn sun_position(&self, instant: &Instant) -> EphemerisResult<SkyCoordinate> {
        sun::sun_position(instant)
    }

    pub fn moon_position(&self, instant: &Instant) -> EphemerisResult<SkyCoordinate> {
        moon::moon_position(instant)
    }

    /// First-order Keplerian solve; `Ok(None)` for bodies without full
    /// elements (Sun and Moon have dedicated series).
    pub fn planet_position(
        &self,
        body: Body,
        instant: &Instant,
    ) -> EphemerisResult<Option<SkyCoordinate>> {
        planets::planet_position(body, instant)
    }

    /// Position of any body in the table, dispatching to the right solver.
    pub fn position(&self, body: Body, instant: &Instant) -> EphemerisResult<SkyCoordinate> {
        match body {
            Body::Sun => self.sun_position(instant),
            Body::Moon => self.moon_position(instant),
            planet => self
                .planet_position(planet, instant)?
                .ok_or_else(|| EphemerisError::unknown_body(planet.name())),
        }
    }

    /// Position looked up by name; `UnknownBody` for names outside the
    /// table (so "Pluto" is refused, never silently zero).
    pub fn position_by_name(
        &self,
        name: &str,
        instant: &Instant,
    ) -> EphemerisResult<SkyCoordinate> {
        let body = Body::from_name(name).ok_or_else(|| EphemerisError::unknown_body(name))?;
        self.position(body, instant)
    }

    /// All bodies in canonical order: Sun, Moon, then the planets.
    ///
    /// Total by contract: an invalid instant yields an empty sweep (the
    /// documented recovered fallback) with a warning, and any planet the
    /// solver declines is simply omitted.
    pub fn all_bodies(&self, instant: &Instant) -> Vec<BodyPosition> {
        if let Err(err) = instant.validate() {
            log::warn!("skipping solar-system sweep: {err}");
            return Vec::new();
        }

        let mut bodies = Vec::with_capacity(Body::ALL.len());
        for body in Body::ALL {
            let position = match body {
                Body::Sun => self.sun_position(instant).ok(),
                Body::Moon => self.moon_position(instant).ok(),
                planet => self.planet_position(planet, instant).ok().flatten(),
            };
            if let Some(coord) = position {
                bodies.push(BodyPosition { body, coord });
            }
        }
        bodies
    }
}
