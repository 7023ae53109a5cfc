use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, error, info};
use tempfile::NamedTempFile;
use tokio::process::Command;

use crate::app_config::Config;
use crate::errors::MuxError;

// @module: ffmpeg invocation - merges chapters and subtitles into the container

/// Embed the rendered chapter and subtitle blobs into a Matroska file.
///
/// Both blobs are materialized as named temporary files for the duration of
/// the ffmpeg call and removed when the handles drop. Existing audio, video
/// and subtitle streams are stream-copied; the new subtitle track is tagged
/// with `locale`.
pub async fn mux(
    config: &Config,
    input: &Path,
    output: &Path,
    chapters_blob: &str,
    subtitles_blob: &str,
    locale: &str,
) -> Result<()> {
    let chapters_file = write_temp_blob(chapters_blob).context("Failed to stage chapter metadata")?;
    let subtitles_file = write_temp_blob(subtitles_blob).context("Failed to stage subtitles")?;

    debug!("Temporary chapter file: {:?}", chapters_file.path());
    debug!("Temporary subtitle file: {:?}", subtitles_file.path());

    run_ffmpeg(
        config,
        input,
        output,
        chapters_file.path(),
        subtitles_file.path(),
        locale,
    )
    .await?;

    info!("Output file: {:?}", output);
    Ok(())
}

// @creates: Temp file holding one rendered blob
fn write_temp_blob(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}

async fn run_ffmpeg(
    config: &Config,
    input: &Path,
    output: &Path,
    chapters_path: &Path,
    subtitles_path: &Path,
    locale: &str,
) -> Result<(), MuxError> {
    // Argument contract is fixed: stream 0 is the source container, stream 1
    // the ffmetadata chapters, stream 2 the SRT track.
    let ffmpeg_future = Command::new(&config.ffmpeg_path)
        .args([
            "-hide_banner",
            "-loglevel", "warning",
            "-y",
            "-f", "matroska",
            "-i", input.to_str().unwrap_or_default(),
            "-f", "ffmetadata",
            "-i", chapters_path.to_str().unwrap_or_default(),
            "-f", "srt",
            "-i", subtitles_path.to_str().unwrap_or_default(),
            "-map", "0",
            "-map", "2:0",
            "-map_metadata", "1",
            "-metadata:s:s:0", &format!("language={}", locale),
            "-c:v", "copy",
            "-c:a", "copy",
            "-c:s", "copy",
            output.to_str().unwrap_or_default(),
        ])
        .output();

    let timeout_duration = std::time::Duration::from_secs(config.ffmpeg_timeout_secs);
    let result = tokio::select! {
        result = ffmpeg_future => {
            result.map_err(|source| MuxError::Launch {
                command: config.ffmpeg_path.clone(),
                source,
            })?
        },
        _ = tokio::time::sleep(timeout_duration) => {
            return Err(MuxError::TimedOut(config.ffmpeg_timeout_secs));
        }
    };

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        let filtered = filter_ffmpeg_stderr(&stderr);
        error!("Muxing failed: {}", filtered);
        return Err(MuxError::Failed {
            status: result.status.to_string(),
            stderr: filtered,
        });
    }

    Ok(())
}

/// Filter ffmpeg stderr to only show meaningful error lines, stripping the
/// version banner, build configuration, and stream metadata noise.
fn filter_ffmpeg_stderr(stderr: &str) -> String {
    let dominated_prefixes = [
        "ffmpeg version",
        "  built with",
        "  configuration:",
        "  lib",
        "Input #",
        "  Metadata:",
        "  Duration:",
        "  Chapter",
        "    Chapter",
        "  Stream #",
        "      Metadata:",
        "        title",
        "        BPS",
        "        DURATION",
        "        NUMBER_OF",
        "        _STATISTICS",
        "Output #",
        "Stream mapping:",
        "Press [q]",
    ];

    // Prefixes carry their leading indentation, so match against the raw
    // line rather than a trimmed one.
    let meaningful: Vec<&str> = stderr
        .lines()
        .filter(|line| {
            if line.trim().is_empty() {
                return false;
            }
            !dominated_prefixes.iter().any(|p| line.starts_with(p))
        })
        .collect();

    if meaningful.is_empty() {
        "unknown ffmpeg error (stderr was empty after filtering)".to_string()
    } else {
        meaningful.join("\n")
    }
}
