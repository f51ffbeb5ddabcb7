//! Error codes for the guessing-game API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that appear
//! in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Guess body did not carry a `guess` value
    MissingGuess,
    /// Create-game range has `min > max`
    InvalidRange,
    /// Create-game attempt budget below one
    InvalidMaxAttempts,
    /// Query string could not be parsed
    InvalidQuery,
    /// General bad request error
    BadRequest,
    /// Request body over the accepted size
    PayloadTooLarge,

    // Resource Not Found
    /// Game not found
    GameNotFound,

    // System Errors
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingGuess => "MISSING_GUESS",
            Self::InvalidRange => "INVALID_RANGE",
            Self::InvalidMaxAttempts => "INVALID_MAX_ATTEMPTS",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::BadRequest => "BAD_REQUEST",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",

            Self::GameNotFound => "GAME_NOT_FOUND",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
