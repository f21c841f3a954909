//! Time-playback controls: discrete speed ladder, direction, play state.

use std::fmt;

/// Simulation speed as a multiple of wall-clock time, drawn from the
/// chart's fixed speed ladder (1x up to one year per second).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackSpeed {
    #[default]
    RealTime,
    TenSeconds,
    Minute,
    TenMinutes,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl PlaybackSpeed {
    /// Ladder order, slowest first.
    pub const ALL: [PlaybackSpeed; 9] = [
        PlaybackSpeed::RealTime,
        PlaybackSpeed::TenSeconds,
        PlaybackSpeed::Minute,
        PlaybackSpeed::TenMinutes,
        PlaybackSpeed::Hour,
        PlaybackSpeed::Day,
        PlaybackSpeed::Week,
        PlaybackSpeed::Month,
        PlaybackSpeed::Year,
    ];

    /// Simulated seconds per wall-clock second. Month and year use the
    /// mean Gregorian lengths (30.44 and 365.24 days).
    pub fn multiplier(&self) -> f64 {
        match self {
            PlaybackSpeed::RealTime => 1.0,
            PlaybackSpeed::TenSeconds => 10.0,
            PlaybackSpeed::Minute => 60.0,
            PlaybackSpeed::TenMinutes => 600.0,
            PlaybackSpeed::Hour => 3_600.0,
            PlaybackSpeed::Day => 86_400.0,
            PlaybackSpeed::Week => 604_800.0,
            PlaybackSpeed::Month => 2_629_746.0,
            PlaybackSpeed::Year => 31_556_952.0,
        }
    }

    /// Next faster rung, saturating at the top.
    pub fn faster(&self) -> PlaybackSpeed {
        let i = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        Self::ALL[(i + 1).min(Self::ALL.len() - 1)]
    }

    /// Next slower rung, saturating at real time.
    pub fn slower(&self) -> PlaybackSpeed {
        let i = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        Self::ALL[i.saturating_sub(1)]
    }
}

impl fmt::Display for PlaybackSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlaybackSpeed::RealTime => "1x",
            PlaybackSpeed::TenSeconds => "10s/s",
            PlaybackSpeed::Minute => "1min/s",
            PlaybackSpeed::TenMinutes => "10min/s",
            PlaybackSpeed::Hour => "1hr/s",
            PlaybackSpeed::Day => "1day/s",
            PlaybackSpeed::Week => "1wk/s",
            PlaybackSpeed::Month => "1mo/s",
            PlaybackSpeed::Year => "1yr/s",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    #[inline]
    pub fn signum(&self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }

    pub fn reversed(&self) -> Direction {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// Playback state: whether simulated time runs, how fast, and which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Playback {
    pub playing: bool,
    pub speed: PlaybackSpeed,
    pub direction: Direction,
}

impl Playback {
    /// Simulated seconds to apply for `wall_dt_secs` of wall time; zero
    /// while paused.
    pub fn sim_delta_secs(&self, wall_dt_secs: f64) -> f64 {
        if self.playing {
            self.speed.multiplier() * self.direction.signum() * wall_dt_secs
        } else {
            0.0
        }
    }
}
