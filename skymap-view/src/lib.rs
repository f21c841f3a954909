//! Interactive view layer of the skymap workspace.
//!
//! Owns everything between the math crates and a renderer: the catalog
//! input types, the view/follow/playback state machine, per-frame
//! placement of every drawable object, and screen-space hit testing.
//! The renderer itself lives outside; this crate never draws.

pub mod catalog;
pub mod frame;
pub mod playback;
pub mod state;

pub use catalog::{Catalog, Constellation, DeepSkyKind, DeepSkyObject, Star};
pub use frame::{
    pick, plan_frame, FramePlan, LineSegment, PickTarget, PlacedBody, PlacedDeepSky, PlacedStar,
    MAX_CLICK_DISTANCE,
};
pub use playback::{Direction, Playback, PlaybackSpeed};
pub use state::{FollowTarget, TimeStep, ViewState, ZOOM_MAX, ZOOM_MIN};
