use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Ticks per second for the chapter timebase
    #[serde(default = "default_timebase")]
    pub timebase: u64,

    /// Subtitle track locale used when the metadata file carries no
    /// SUBTITLELOCALE directive
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// ffmpeg binary to invoke
    #[serde(default = "default_ffmpeg_path")]
    pub ffmpeg_path: String,

    /// Maximum seconds to wait for ffmpeg before giving up
    #[serde(default = "default_ffmpeg_timeout_secs")]
    pub ffmpeg_timeout_secs: u64,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timebase: default_timebase(),
            default_locale: default_locale(),
            ffmpeg_path: default_ffmpeg_path(),
            ffmpeg_timeout_secs: default_ffmpeg_timeout_secs(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration after loading and CLI overrides
    pub fn validate(&self) -> Result<()> {
        if self.timebase == 0 {
            return Err(anyhow!("timebase must be greater than zero"));
        }

        if self.ffmpeg_path.trim().is_empty() {
            return Err(anyhow!("ffmpeg_path must not be empty"));
        }

        if self.ffmpeg_timeout_secs == 0 {
            return Err(anyhow!("ffmpeg_timeout_secs must be greater than zero"));
        }

        Ok(())
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_timebase() -> u64 {
    1000
}

fn default_locale() -> String {
    "en_GB".to_string()
}

fn default_ffmpeg_path() -> String {
    "ffmpeg".to_string()
}

fn default_ffmpeg_timeout_secs() -> u64 {
    120 // 2 minute timeout, enough for a stream-copy mux of a long film
}
