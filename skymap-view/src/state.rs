use crate::playback::{Direction, Playback, PlaybackSpeed};
use skymap_core::angle::{clamp_dec_degrees, normalize_ra_hours};
use skymap_core::SkyCoordinate;
use skymap_ephemeris::{Body, EphemerisError, EphemerisResult, SolarSystem};
use skymap_projection::Viewport;
use skymap_time::{Instant, TimeResult};

pub const ZOOM_MIN: f64 = 0.1;
pub const ZOOM_MAX: f64 = 10.0;

/// What the view centre is locked to.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FollowTarget {
    /// Free view; the centre only moves when the user pans.
    #[default]
    Idle,
    /// Locked onto a fixed sky position (star or deep-sky object).
    Fixed { name: String, coord: SkyCoordinate },
    /// Locked onto a moving solar-system body; the centre is re-derived
    /// from the ephemeris after every time change.
    Body(Body),
}

/// A discrete jump on the time-control surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeStep {
    Years(i32),
    Months(i32),
    Days(i64),
    Hours(i64),
    Minutes(i64),
    Seconds(f64),
}

/// The whole interactive state of the chart: where it looks, when it
/// looks, what it follows, and how simulated time runs.
///
/// Rendering is elsewhere; this type only answers "what would be on
/// screen" through the frame planner.
#[derive(Debug, Clone)]
pub struct ViewState {
    instant: Instant,
    center: SkyCoordinate,
    zoom: f64,
    follow: FollowTarget,
    playback: Playback,
    system: SolarSystem,
}

impl ViewState {
    /// Free view of the vernal-colure region at the current wall-clock
    /// time: centre RA 12h / Dec 0, zoom 1, paused.
    pub fn new() -> Self {
        Self {
            instant: Instant::now(),
            center: SkyCoordinate::new(12.0, 0.0),
            zoom: 1.0,
            follow: FollowTarget::Idle,
            playback: Playback::default(),
            system: SolarSystem::new(),
        }
    }

    #[inline]
    pub fn instant(&self) -> &Instant {
        &self.instant
    }

    #[inline]
    pub fn center(&self) -> &SkyCoordinate {
        &self.center
    }

    #[inline]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[inline]
    pub fn follow(&self) -> &FollowTarget {
        &self.follow
    }

    #[inline]
    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    #[inline]
    pub fn system(&self) -> &SolarSystem {
        &self.system
    }

    // --- view manipulation ---

    /// Drags the view by a pixel delta. A rightward drag (`dx > 0`)
    /// decreases the centre RA, mirroring the sky moving with the
    /// cursor; a downward drag increases declination. Panning always
    /// breaks a follow lock, even a lock onto a fixed star.
    pub fn pan(&mut self, dx: f64, dy: f64, viewport: &Viewport) {
        let ra_delta = dx * 24.0 / viewport.width() / self.zoom;
        let dec_delta = dy * 180.0 / viewport.height() / self.zoom;
        self.center = SkyCoordinate::new(
            normalize_ra_hours(self.center.ra_hours() - ra_delta),
            clamp_dec_degrees(self.center.dec_degrees() + dec_delta),
        );
        self.follow = FollowTarget::Idle;
    }

    pub fn set_center(&mut self, center: SkyCoordinate) {
        self.center = center;
        self.follow = FollowTarget::Idle;
    }

    /// Multiplies the zoom, clamped to the [`ZOOM_MIN`]..[`ZOOM_MAX`] bounds.
    pub fn zoom_by(&mut self, factor: f64) {
        self.set_zoom(self.zoom * factor);
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    // --- follow machine ---

    /// Locks onto a fixed sky position and centres on it.
    pub fn follow_fixed(&mut self, name: impl Into<String>, coord: SkyCoordinate) {
        self.center = coord;
        self.follow = FollowTarget::Fixed {
            name: name.into(),
            coord,
        };
    }

    /// Locks onto a solar-system body and centres on its current
    /// position. On error the state is unchanged.
    pub fn follow_body(&mut self, body: Body) -> EphemerisResult<()> {
        let coord = self.system.position(body, &self.instant)?;
        self.center = coord;
        self.follow = FollowTarget::Body(body);
        Ok(())
    }

    /// As [`follow_body`](Self::follow_body), by name. An unknown name
    /// (say, "Pluto") is refused and the state is unchanged.
    pub fn follow_body_by_name(&mut self, name: &str) -> EphemerisResult<()> {
        let body = Body::from_name(name).ok_or_else(|| EphemerisError::unknown_body(name))?;
        self.follow_body(body)
    }

    /// Releases any follow lock; the centre stays where it is.
    pub fn unfollow(&mut self) {
        self.follow = FollowTarget::Idle;
    }

    /// Re-derives the centre from the follow target. A fixed target
    /// snaps the centre back; a body target tracks the ephemeris.
    fn refresh_follow(&mut self) {
        match &self.follow {
            FollowTarget::Idle => {}
            FollowTarget::Fixed { coord, .. } => self.center = *coord,
            FollowTarget::Body(body) => match self.system.position(*body, &self.instant) {
                Ok(coord) => self.center = coord,
                Err(err) => log::warn!("follow target lost, keeping last centre: {err}"),
            },
        }
    }

    // --- time control ---

    /// Replaces the simulated time. An invalid date is refused and the
    /// current instant kept.
    pub fn set_date(&mut self, instant: Instant) -> TimeResult<()> {
        instant.validate()?;
        self.instant = instant;
        self.refresh_follow();
        Ok(())
    }

    pub fn reset_to_now(&mut self) {
        self.instant = Instant::now();
        self.refresh_follow();
    }

    /// Jumps the simulated time by a calendar step, in either direction.
    pub fn step(&mut self, step: TimeStep) -> TimeResult<()> {
        self.instant = match step {
            TimeStep::Years(n) => self.instant.add_years(n)?,
            TimeStep::Months(n) => self.instant.add_months(n)?,
            TimeStep::Days(n) => self.instant.add_days(n as f64)?,
            TimeStep::Hours(n) => self.instant.add_seconds(n as f64 * 3600.0)?,
            TimeStep::Minutes(n) => self.instant.add_seconds(n as f64 * 60.0)?,
            TimeStep::Seconds(s) => self.instant.add_seconds(s)?,
        };
        self.refresh_follow();
        Ok(())
    }

    // --- playback ---

    pub fn play(&mut self) {
        self.playback.playing = true;
    }

    pub fn pause(&mut self) {
        self.playback.playing = false;
    }

    pub fn toggle_playback(&mut self) {
        self.playback.playing = !self.playback.playing;
    }

    pub fn set_playback_speed(&mut self, speed: PlaybackSpeed) {
        self.playback.speed = speed;
    }

    pub fn set_playback_direction(&mut self, direction: Direction) {
        self.playback.direction = direction;
    }

    /// Advances simulated time for `wall_dt_secs` of wall time. A no-op
    /// while paused. Total by contract: an arithmetic failure keeps the
    /// previous instant and logs instead of unwinding the render loop.
    pub fn advance(&mut self, wall_dt_secs: f64) {
        let delta = self.playback.sim_delta_secs(wall_dt_secs);
        if delta == 0.0 {
            return;
        }
        match self.instant.add_seconds(delta) {
            Ok(next) => self.instant = next,
            Err(err) => {
                log::warn!("playback step skipped: {err}");
                return;
            }
        }
        self.refresh_follow();
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
