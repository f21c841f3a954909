use crate::error::{TimeError, TimeResult};
use crate::julian::{julian_day, UNIX_EPOCH_JD};
use skymap_core::constants::{SECONDS_PER_DAY_F64, SECONDS_PER_HOUR_F64};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A calendar point in time (proleptic Gregorian, treated as UTC).
///
/// Fields are public so callers can build one directly, but only
/// [`Instant::new`] guarantees validity; a hand-built value is checked
/// again by every conversion that consumes it. Sub-minute precision lives
/// in the fractional `second`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instant {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl Instant {
    /// Builds a validated instant.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> TimeResult<Self> {
        let instant = Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        };
        instant.validate()?;
        Ok(instant)
    }

    /// The J2000.0 reference epoch, 2000-01-01T12:00:00 UTC.
    pub fn j2000() -> Self {
        Self {
            year: 2000,
            month: 1,
            day: 1,
            hour: 12,
            minute: 0,
            second: 0.0,
        }
    }

    /// The current wall-clock time in UTC.
    pub fn now() -> Self {
        let unix = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs_f64(),
            // Clock set before 1970; the epoch itself is still a valid instant.
            Err(_) => 0.0,
        };
        Self::from_unix_seconds(unix)
    }

    pub fn from_unix_seconds(seconds: f64) -> Self {
        Self::from_julian_day(UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY_F64)
    }

    /// Converts a continuous Julian Date back to calendar fields
    /// (Fliegel–Van Flandern inverse). Always yields a valid instant.
    pub fn from_julian_day(jd: f64) -> Self {
        let mut jdn = libm::floor(jd + 0.5) as i64;
        let day_fraction = jd + 0.5 - jdn as f64;

        // The ulp of a JD near the present is tens of microseconds, so
        // arithmetic that targets an exact calendar boundary can come
        // back a hair short of it (12:00 + 2h as 13:59:59.99996).
        // Snap sub-millisecond residue onto the whole second, carrying
        // into the next day when it rounds up to 24:00:00.
        let mut seconds = day_fraction * SECONDS_PER_DAY_F64;
        let whole = libm::round(seconds);
        if (seconds - whole).abs() < 1e-3 {
            if whole >= SECONDS_PER_DAY_F64 {
                jdn += 1;
                seconds = 0.0;
            } else {
                seconds = whole;
            }
        }

        let l = jdn + 68569;
        let n = (4 * l) / 146097;
        let l = l - (146097 * n + 3) / 4;
        let i = (4000 * (l + 1)) / 1461001;
        let l = l - (1461 * i) / 4 + 31;
        let j = (80 * l) / 2447;
        let day = l - (2447 * j) / 80;
        let l = j / 11;
        let month = j + 2 - 12 * l;
        let year = 100 * (n - 49) + i + l;

        // seconds < 86400 here, so hour/minute never carry past their range
        let hour = libm::floor(seconds / SECONDS_PER_HOUR_F64) as u32;
        let remainder = seconds - hour as f64 * SECONDS_PER_HOUR_F64;
        let minute = libm::floor(remainder / 60.0) as u32;
        let second = remainder - minute as f64 * 60.0;

        Self {
            year: year as i32,
            month: month as u32,
            day: day as u32,
            hour,
            minute,
            second,
        }
    }

    /// Checks the calendar fields against the Gregorian rules.
    pub fn validate(&self) -> TimeResult<()> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::invalid_instant(self, "month out of range"));
        }
        let days = days_in_month(self.year, self.month);
        if self.day < 1 || self.day > days {
            return Err(TimeError::invalid_instant(self, "day out of range for month"));
        }
        if self.hour >= 24 {
            return Err(TimeError::invalid_instant(self, "hour out of range"));
        }
        if self.minute >= 60 {
            return Err(TimeError::invalid_instant(self, "minute out of range"));
        }
        if !self.second.is_finite() || !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::invalid_instant(self, "second out of range"));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Shifts the instant by a (possibly negative) number of seconds.
    pub fn add_seconds(&self, seconds: f64) -> TimeResult<Self> {
        let jd = julian_day(self)?;
        Ok(Self::from_julian_day(jd + seconds / SECONDS_PER_DAY_F64))
    }

    pub fn add_days(&self, days: f64) -> TimeResult<Self> {
        let jd = julian_day(self)?;
        Ok(Self::from_julian_day(jd + days))
    }

    /// Shifts by whole calendar months, clamping the day-of-month into the
    /// target month (Jan 31 + 1 month = Feb 28/29).
    pub fn add_months(&self, months: i32) -> TimeResult<Self> {
        self.validate()?;
        let total = self.year as i64 * 12 + (self.month as i64 - 1) + months as i64;
        let year = total.div_euclid(12) as i32;
        let month = (total.rem_euclid(12) + 1) as u32;
        let day = self.day.min(days_in_month(year, month));
        Ok(Self {
            year,
            month,
            day,
            ..*self
        })
    }

    pub fn add_years(&self, years: i32) -> TimeResult<Self> {
        self.add_months(years * 12)
    }

    /// Fraction of the day elapsed since midnight, in [0, 1).
    pub(crate) fn day_fraction(&self) -> f64 {
        (self.hour as f64 + self.minute as f64 / 60.0 + self.second / SECONDS_PER_HOUR_F64) / 24.0
    }
}

impl Default for Instant {
    fn default() -> Self {
        Self::j2000()
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}
