//! Sky-plane projection for the skymap workspace.
//!
//! Maps equatorial coordinates onto a 2D viewport through a stereographic
//! projection centred on the current view centre, and back. Stereographic
//! rather than true perspective because it preserves local angles, stays
//! smooth and bounded under pan/zoom near the centre, and has the
//! closed-form inverse that click-to-coordinates readout needs.
//!
//! Points on the far hemisphere (`cos c <= 0` relative to the view
//! centre) have no image: [`sky_to_screen`] returns `None` for them, and
//! that is a normal outcome, not an error.

pub mod cache;
mod project;
pub mod viewport;

pub use cache::ProjectionCache;
pub use project::{screen_to_sky, sky_to_screen};
pub use viewport::{ScreenPoint, Viewport};
