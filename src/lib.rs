/*!
 * # mkvembed - Embed chapters and subtitles into Matroska files
 *
 * A Rust library and CLI for turning a simple line-oriented metadata
 * description into embedded container chapters and a subtitle track.
 *
 * ## Features
 *
 * - Parse `CHAPTER`, `SUBTITLE` and `SUBTITLELOCALE` metadata lines
 * - Normalize free-form timecodes into a canonical (seconds, milliseconds) pair
 * - Render ffmetadata chapter documents and SRT subtitle documents
 * - Mux both into a Matroska container with ffmpeg, stream-copying the
 *   existing audio/video/subtitle streams
 * - Non-fatal diagnostics for unrecognized lines, batched after the parse
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timecode`: Timecode parsing and normalization
 * - `metadata_parser`: Line grammar, model builder and diagnostics
 * - `serializers`: ffmetadata and SRT rendering
 * - `muxer`: The single ffmpeg subprocess call
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod metadata_parser;
pub mod muxer;
pub mod serializers;
pub mod timecode;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, MuxError, ParseError, TimeCodeError};
pub use metadata_parser::{
    ChapterEntry, Diagnostic, MetadataLine, MetadataModel, SubtitleEntry, build_model,
};
pub use timecode::TimeCode;
