/*!
 * Tests for app configuration functionality
 */

use mkvembed::app_config::{Config, LogLevel};

/// Test the default configuration values
#[test]
fn test_default_config_shouldCarryDocumentedDefaults() {
    let config = Config::default();

    assert_eq!(config.timebase, 1000);
    assert_eq!(config.default_locale, "en_GB");
    assert_eq!(config.ffmpeg_path, "ffmpeg");
    assert_eq!(config.ffmpeg_timeout_secs, 120);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that the default configuration validates
#[test]
fn test_validate_withDefaultConfig_shouldPass() {
    assert!(Config::default().validate().is_ok());
}

/// Test that a zero timebase is rejected
#[test]
fn test_validate_withZeroTimebase_shouldFail() {
    let config = Config {
        timebase: 0,
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

/// Test that an empty ffmpeg path is rejected
#[test]
fn test_validate_withEmptyFfmpegPath_shouldFail() {
    let config = Config {
        ffmpeg_path: "  ".to_string(),
        ..Config::default()
    };
    assert!(config.validate().is_err());
}

/// Test JSON round-trip through serde
#[test]
fn test_config_roundTrip_shouldPreserveValues() {
    let config = Config {
        timebase: 90000,
        default_locale: "fr_FR".to_string(),
        ffmpeg_path: "/usr/local/bin/ffmpeg".to_string(),
        ffmpeg_timeout_secs: 30,
        log_level: LogLevel::Debug,
    };

    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.timebase, 90000);
    assert_eq!(parsed.default_locale, "fr_FR");
    assert_eq!(parsed.ffmpeg_path, "/usr/local/bin/ffmpeg");
    assert_eq!(parsed.ffmpeg_timeout_secs, 30);
    assert_eq!(parsed.log_level, LogLevel::Debug);
}

/// Test that missing fields fall back to serde defaults
#[test]
fn test_config_fromPartialJson_shouldApplyDefaults() {
    let parsed: Config = serde_json::from_str(r#"{"log_level":"warn"}"#).unwrap();

    assert_eq!(parsed.timebase, 1000);
    assert_eq!(parsed.default_locale, "en_GB");
    assert_eq!(parsed.log_level, LogLevel::Warn);
}
