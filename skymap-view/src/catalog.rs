//! Catalog input types.
//!
//! The chart consumes a fixed catalog of constellations, bright stars,
//! and deep-sky objects, typically loaded from JSON. Coordinates are
//! stored as plain `ra` hours / `dec` degrees fields so catalog files
//! stay human-editable; [`coord`](Star::coord) applies the usual
//! wrap/clamp on the way into the math.

use serde::{Deserialize, Serialize};
use skymap_core::SkyCoordinate;

/// A named star with position and visual magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub name: String,
    pub ra: f64,
    pub dec: f64,
    pub magnitude: f64,
    /// Identifier used by constellation line pairs (Bayer letter in
    /// practice); empty for stand-alone bright stars.
    #[serde(default)]
    pub id: String,
}

impl Star {
    pub fn coord(&self) -> SkyCoordinate {
        SkyCoordinate::new(self.ra, self.dec)
    }
}

/// A constellation: member stars plus the stick-figure line pairs,
/// each pair naming two member star ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constellation {
    pub name: String,
    pub stars: Vec<Star>,
    pub lines: Vec<(String, String)>,
}

impl Constellation {
    /// Member star by id, if the id exists.
    pub fn star(&self, id: &str) -> Option<&Star> {
        self.stars.iter().find(|s| s.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeepSkyKind {
    Galaxy,
    Nebula,
    Globular,
    Open,
    Dark,
}

/// A deep-sky object: galaxy, nebula, or cluster, with an apparent size
/// in display units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeepSkyObject {
    pub name: String,
    pub ra: f64,
    pub dec: f64,
    pub kind: DeepSkyKind,
    pub magnitude: f64,
    pub size: f64,
}

impl DeepSkyObject {
    pub fn coord(&self) -> SkyCoordinate {
        SkyCoordinate::new(self.ra, self.dec)
    }
}

/// Everything the chart draws besides the solar system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub constellations: Vec<Constellation>,
    #[serde(default)]
    pub stars: Vec<Star>,
    #[serde(default)]
    pub deep_sky: Vec<DeepSkyObject>,
}
