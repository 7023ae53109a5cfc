/*!
 * Error types for the mkvembed application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when parsing a timecode token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeCodeError {
    /// The timecode text was empty
    #[error("empty timecode")]
    Empty,

    /// A colon-separated segment was not a number
    #[error("non-numeric segment '{0}'")]
    NonNumericSegment(String),

    /// More colon-separated segments than the days:hours:minutes:seconds grammar allows
    #[error("too many segments ({0}, maximum is 4)")]
    TooManySegments(usize),
}

/// Errors that can occur while parsing a metadata file
#[derive(Error, Debug)]
pub enum ParseError {
    /// A timecode token on an otherwise well-formed line could not be parsed.
    /// Fatal to the whole parse: the line and field pinpoint the bad token.
    #[error("malformed timecode in {field} on line {line}: {source}")]
    MalformedTimeCode {
        /// 1-based line number in the metadata file
        line: usize,
        /// Which field held the bad token (e.g. "chapter time", "subtitle end")
        field: &'static str,
        /// The underlying timecode error
        source: TimeCodeError,
    },
}

/// Errors that can occur while invoking the external muxing tool
#[derive(Error, Debug)]
pub enum MuxError {
    /// The ffmpeg process could not be spawned
    #[error("failed to launch '{command}': {source}")]
    Launch {
        /// The configured ffmpeg binary
        command: String,
        /// Spawn failure
        source: std::io::Error,
    },

    /// ffmpeg exited with a non-zero status
    #[error("ffmpeg failed with status {status}: {stderr}")]
    Failed {
        /// Exit status description
        status: String,
        /// Filtered stderr output
        stderr: String,
    },

    /// ffmpeg did not finish within the configured timeout
    #[error("ffmpeg timed out after {0} seconds")]
    TimedOut(u64),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from metadata parsing
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error from the muxing step
    #[error("Mux error: {0}")]
    Mux(#[from] MuxError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
