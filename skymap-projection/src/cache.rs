//! Bounded memo for repeated projections of the same catalog.
//!
//! A frame projects the same few thousand fixed coordinates with the same
//! view parameters, so the trigonometry is pure repetition. The cache
//! keys on the exact f64 bit patterns, which makes it transparent: a hit
//! returns bit-for-bit what [`sky_to_screen`] would have computed.

use crate::project::sky_to_screen;
use crate::viewport::{ScreenPoint, Viewport};
use skymap_core::SkyCoordinate;
use std::collections::HashMap;

const DEFAULT_CAPACITY: usize = 1000;

/// View parameters a cached projection depends on. Any change in centre,
/// zoom, or viewport size invalidates every entry at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ViewKey {
    center_ra: u64,
    center_dec: u64,
    zoom: u64,
    width: u64,
    height: u64,
}

impl ViewKey {
    fn of(center: &SkyCoordinate, zoom: f64, viewport: &Viewport) -> Self {
        Self {
            center_ra: center.ra_hours().to_bits(),
            center_dec: center.dec_degrees().to_bits(),
            zoom: zoom.to_bits(),
            width: viewport.width().to_bits(),
            height: viewport.height().to_bits(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SkyKey {
    ra: u64,
    dec: u64,
}

impl SkyKey {
    fn of(sky: &SkyCoordinate) -> Self {
        Self {
            ra: sky.ra_hours().to_bits(),
            dec: sky.dec_degrees().to_bits(),
        }
    }
}

/// Memoized front end to [`sky_to_screen`].
#[derive(Debug)]
pub struct ProjectionCache {
    view: Option<ViewKey>,
    entries: HashMap<SkyKey, Option<ScreenPoint>>,
    capacity: usize,
}

impl ProjectionCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// `capacity` bounds the entry count; at the bound the whole map is
    /// dropped rather than evicted piecemeal, since the working set
    /// either fits or churns completely between frames anyway.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            view: None,
            entries: HashMap::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity: capacity.max(1),
        }
    }

    /// Projects through the cache. Same contract as [`sky_to_screen`],
    /// including `None` for culled points (culls are cached too).
    pub fn project(
        &mut self,
        sky: &SkyCoordinate,
        center: &SkyCoordinate,
        zoom: f64,
        viewport: &Viewport,
    ) -> Option<ScreenPoint> {
        let view = ViewKey::of(center, zoom, viewport);
        if self.view != Some(view) {
            self.entries.clear();
            self.view = Some(view);
        }

        let key = SkyKey::of(sky);
        if let Some(hit) = self.entries.get(&key) {
            return *hit;
        }

        let projected = sky_to_screen(sky, center, zoom, viewport);
        if self.entries.len() >= self.capacity {
            self.entries.clear();
        }
        self.entries.insert(key, projected);
        projected
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.view = None;
        self.entries.clear();
    }
}

impl Default for ProjectionCache {
    fn default() -> Self {
        Self::new()
    }
}
