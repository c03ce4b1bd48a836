// Error types for fighter-verses.
// Covers ESV API failures, credential problems, cache I/O and hardware errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerseError {
    #[error("ESV API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("ESV API rejected the token: invalid or revoked")]
    Unauthorized,

    #[error("ESV API rate limit exceeded, retry after {retry_after}")]
    RateLimited { retry_after: String },

    #[error("No passage text returned for {0}")]
    MissingPassage(String),

    #[error("No ESV API token: pass --token once or set ESV_API_TOKEN")]
    MissingToken,

    #[error("Token is too short to be an ESV API token")]
    InvalidToken,

    #[error("No Fighter Verse at index {0}")]
    UnknownIndex(u32),

    #[cfg(feature = "gpio")]
    #[error("GPIO error: {0}")]
    Gpio(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl VerseError {
    /// Whether the error should end the program rather than just the current cycle.
    pub fn is_fatal(&self) -> bool {
        match self {
            VerseError::Api(_)
            | VerseError::RateLimited { .. }
            | VerseError::MissingPassage(_)
            | VerseError::Json(_)
            | VerseError::Other(_) => false,
            VerseError::Unauthorized
            | VerseError::MissingToken
            | VerseError::InvalidToken
            | VerseError::UnknownIndex(_)
            | VerseError::Io(_) => true,
            #[cfg(feature = "gpio")]
            VerseError::Gpio(_) => true,
        }
    }
}

#[cfg(feature = "gpio")]
impl From<rppal::gpio::Error> for VerseError {
    fn from(err: rppal::gpio::Error) -> Self {
        VerseError::Gpio(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VerseError>;
