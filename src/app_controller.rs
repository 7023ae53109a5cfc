use anyhow::{Context, Result};
use log::{error, info, warn};
use std::path::Path;

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::metadata_parser::{self, MetadataModel};
use crate::muxer;
use crate::serializers;

// @module: Application controller for the embed workflow

/// Rendered artifacts ready to hand to the muxing tool
#[derive(Debug, Clone)]
pub struct RenderedMetadata {
    /// ffmetadata chapter document
    pub chapters_blob: String,

    /// SRT subtitle document
    pub subtitles_blob: String,

    /// Subtitle track locale
    pub locale: String,
}

/// Main application controller for embedding chapters and subtitles
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Parse the metadata file and render both output grammars.
    ///
    /// Unrecognized lines are reported as one batch after the whole file has
    /// been processed; a malformed timecode aborts with line/field context.
    pub fn prepare(&self, metadata_file: &Path) -> Result<RenderedMetadata> {
        if !FileManager::file_exists(metadata_file) {
            return Err(anyhow::anyhow!(
                "Metadata file does not exist: {:?}",
                metadata_file
            ));
        }

        let lines = FileManager::read_lines(metadata_file)?;
        let (model, diagnostics) = metadata_parser::build_model(&lines)
            .with_context(|| format!("Failed to parse metadata file: {:?}", metadata_file))?;

        for diagnostic in &diagnostics {
            error!("{}", diagnostic);
        }

        self.log_summary(&model);

        let mut locale = model.locale.clone();
        if locale.is_empty() {
            warn!(
                "Empty locale directive, falling back to {}",
                self.config.default_locale
            );
            locale = self.config.default_locale.clone();
        }

        Ok(RenderedMetadata {
            chapters_blob: serializers::render_chapters(&model.chapters, self.config.timebase),
            subtitles_blob: serializers::render_subtitles(&model.subtitles),
            locale,
        })
    }

    /// Run the full workflow: parse, render, and mux into the output file.
    ///
    /// With `dry_run` the workflow stops after rendering; nothing is written
    /// and ffmpeg is not invoked.
    pub async fn run(
        &self,
        metadata_file: &Path,
        input_file: &Path,
        output_file: &Path,
        dry_run: bool,
    ) -> Result<()> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow::anyhow!(
                "Input file does not exist: {:?}",
                input_file
            ));
        }

        let rendered = self.prepare(metadata_file)?;

        if dry_run {
            info!("Dry run, skipping mux into {:?}", output_file);
            return Ok(());
        }

        muxer::mux(
            &self.config,
            input_file,
            output_file,
            &rendered.chapters_blob,
            &rendered.subtitles_blob,
            &rendered.locale,
        )
        .await
    }

    // @logs: Parsed chapter and subtitle summary, one line per entry
    fn log_summary(&self, model: &MetadataModel) {
        for (i, chapter) in model.chapters.iter().enumerate() {
            info!("Chapter {}: {}", i + 1, chapter);
        }
        for (i, subtitle) in model.subtitles.iter().enumerate() {
            info!("Subtitle {}: {}", i + 1, subtitle);
        }
        info!(
            "Parsed {} chapter(s), {} subtitle(s), locale {}",
            model.chapters.len(),
            model.subtitles.len(),
            model.locale
        );
    }
}
