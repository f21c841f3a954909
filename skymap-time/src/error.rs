use thiserror::Error;

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TimeError {
    #[error("invalid instant {year}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:06.3}: {message}")]
    InvalidInstant {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        message: String,
    },
}

impl TimeError {
    pub fn invalid_instant(instant: &crate::Instant, message: impl Into<String>) -> Self {
        Self::InvalidInstant {
            year: instant.year,
            month: instant.month,
            day: instant.day,
            hour: instant.hour,
            minute: instant.minute,
            second: instant.second,
            message: message.into(),
        }
    }
}
