//! Shared numeric foundations for the skymap workspace.
//!
//! This crate owns the pieces every other layer agrees on: astronomical
//! constants, the wrap/clamp rules for right ascension and declination,
//! and the [`SkyCoordinate`] type those rules protect.

pub mod angle;
pub mod constants;
pub mod coord;
pub mod math;

pub use coord::SkyCoordinate;
