use skymap_time::TimeError;
use thiserror::Error;

pub type EphemerisResult<T> = Result<T, EphemerisError>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EphemerisError {
    /// The requested name is not a body in the orbital table. Not
    /// recovered: follow/position requests for it must be refused.
    #[error("unknown body '{name}'")]
    UnknownBody { name: String },

    /// The instant failed calendar validation. Recovered by callers that
    /// need totality, with the documented degenerate fallbacks.
    #[error(transparent)]
    Time(#[from] TimeError),
}

impl EphemerisError {
    pub fn unknown_body(name: impl Into<String>) -> Self {
        Self::UnknownBody { name: name.into() }
    }
}
