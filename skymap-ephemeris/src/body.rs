use std::fmt;

/// Every body the solar-system model knows how to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Sun,
    Moon,
    Planet,
}

impl Body {
    /// Canonical rendering/sweep order: Sun, Moon, then the planets
    /// outward from the Sun.
    pub const ALL: [Body; 9] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    pub const PLANETS: [Body; 7] = [
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    /// Case-insensitive lookup; `None` for anything outside the table
    /// (so "Pluto" is unknown, not an error deeper in).
    pub fn from_name(name: &str) -> Option<Body> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sun" => Some(Body::Sun),
            "moon" => Some(Body::Moon),
            "mercury" => Some(Body::Mercury),
            "venus" => Some(Body::Venus),
            "mars" => Some(Body::Mars),
            "jupiter" => Some(Body::Jupiter),
            "saturn" => Some(Body::Saturn),
            "uranus" => Some(Body::Uranus),
            "neptune" => Some(Body::Neptune),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
        }
    }

    /// Astronomical symbol, for renderer labels.
    pub fn symbol(&self) -> &'static str {
        match self {
            Body::Sun => "\u{2609}",
            Body::Moon => "\u{263d}",
            Body::Mercury => "\u{263f}",
            Body::Venus => "\u{2640}",
            Body::Mars => "\u{2642}",
            Body::Jupiter => "\u{2643}",
            Body::Saturn => "\u{2644}",
            Body::Uranus => "\u{2645}",
            Body::Neptune => "\u{2646}",
        }
    }

    pub fn kind(&self) -> BodyKind {
        match self {
            Body::Sun => BodyKind::Sun,
            Body::Moon => BodyKind::Moon,
            _ => BodyKind::Planet,
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
