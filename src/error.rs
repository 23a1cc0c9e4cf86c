//! Error types for winmix-viz operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in winmix-viz operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Viewport dimensions that cannot hold a chart.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: f32,
        /// Height value.
        height: f32,
    },

    /// A tuning parameter outside its valid range.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Rejected value.
        value: f32,
    },

    /// A sample value that is negative, NaN or infinite.
    #[error("Invalid sample at index {index}: {value}")]
    InvalidSample {
        /// Position of the sample in the series.
        index: usize,
        /// Rejected value.
        value: f32,
    },

    /// Scale domain error (e.g., zero-width domain).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Match slot id outside the round.
    #[error("Unknown match slot: {0}")]
    UnknownSlot(usize),

    /// Team already picked for the other side of the same match.
    #[error("Team '{team}' is already playing in slot {slot}")]
    TeamUnavailable {
        /// Slot id.
        slot: usize,
        /// Rejected team.
        team: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0.0,
            height: 40.0,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
        assert!(err.to_string().contains("40"));
    }

    #[test]
    fn test_invalid_sample_display() {
        let err = Error::InvalidSample {
            index: 3,
            value: -1.0,
        };
        assert!(err.to_string().contains('3'));
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_config_parse_display() {
        let err = Error::ConfigParse {
            line: 4,
            message: "bad value".to_string(),
        };
        assert_eq!(err.to_string(), "configuration error at line 4: bad value");
    }
}
