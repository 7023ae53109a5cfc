use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ParseError, TimeCodeError};
use crate::timecode::TimeCode;

// @module: Metadata line grammar and model builder

// @const: Chapter line regex - CHAPTER <timecode> <title>
static CHAPTER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"CHAPTER\s+([0-9:.]+)\s+(.+)").unwrap());

// @const: Subtitle line regex - SUBTITLE <start> <end> <text>
static SUBTITLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"SUBTITLE\s+([0-9:.]+)\s+([0-9:.]+)\s+(.+)").unwrap());

// @const: Locale directive regex - SUBTITLELOCALE <value>
static LOCALE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"SUBTITLELOCALE\s+(.+)").unwrap());

// @const: Comment line regex - optional whitespace then ';'
static COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*;").unwrap());

/// Default subtitle track locale when the file carries no SUBTITLELOCALE directive
pub const DEFAULT_LOCALE: &str = "en_GB";

// @struct: Single chapter marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterEntry {
    // @field: Instant at which the chapter begins
    pub time: TimeCode,

    // @field: Chapter title
    pub title: String,
}

impl fmt::Display for ChapterEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\" @ {}", self.title, self.time)
    }
}

// @struct: Single subtitle cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    // @field: Cue start
    pub start: TimeCode,

    // @field: Cue end
    pub end: TimeCode,

    // @field: Display text, with literal \n sequences already unescaped
    pub text: String,
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\" @ {} --> {}", self.text, self.start, self.end)
    }
}

/// One line of the metadata file, classified.
///
/// Classification is attempted in declaration order and the first match
/// wins: chapter, subtitle, locale, then comment/blank. Anything left over
/// is `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataLine {
    /// `CHAPTER <timecode> <title>`
    Chapter(ChapterEntry),
    /// `SUBTITLE <start> <end> <text>`
    Subtitle(SubtitleEntry),
    /// `SUBTITLELOCALE <value>`
    Locale(String),
    /// Blank, whitespace-only, or `;` comment line
    Ignored,
    /// Matched none of the grammars
    Unrecognized,
}

/// Non-fatal diagnostic for a line that matched no grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number in the input
    pub line_number: usize,

    /// The offending line, verbatim
    pub raw: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Erroneous line {} - {}", self.line_number, self.raw)
    }
}

/// The parsed metadata file: everything the serializers need.
///
/// Built once by [`build_model`], read-only afterward. Chapters and
/// subtitles keep file order; no monotonicity validation is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataModel {
    /// Chapter markers in file order
    pub chapters: Vec<ChapterEntry>,

    /// Subtitle cues in file order
    pub subtitles: Vec<SubtitleEntry>,

    /// Subtitle track locale; last SUBTITLELOCALE directive wins
    pub locale: String,
}

impl Default for MetadataModel {
    fn default() -> Self {
        MetadataModel {
            chapters: Vec::new(),
            subtitles: Vec::new(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

/// Classify one physical line of the metadata file.
///
/// A line that matches the chapter or subtitle grammar but carries an
/// unparseable timecode token is a hard error; `line_number` is threaded
/// through so the error pinpoints the offending line and field.
pub fn classify_line(line: &str, line_number: usize) -> Result<MetadataLine, ParseError> {
    if let Some(caps) = CHAPTER_REGEX.captures(line) {
        let time = parse_field(&caps[1], "chapter time", line_number)?;
        let title = caps[2].trim().to_string();
        return Ok(MetadataLine::Chapter(ChapterEntry { time, title }));
    }

    if let Some(caps) = SUBTITLE_REGEX.captures(line) {
        let start = parse_field(&caps[1], "subtitle start", line_number)?;
        let end = parse_field(&caps[2], "subtitle end", line_number)?;
        let text = caps[3].trim().replace("\\n", "\n");
        return Ok(MetadataLine::Subtitle(SubtitleEntry { start, end, text }));
    }

    if let Some(caps) = LOCALE_REGEX.captures(line) {
        return Ok(MetadataLine::Locale(caps[1].trim().to_string()));
    }

    if line.trim().is_empty() || COMMENT_REGEX.is_match(line) {
        return Ok(MetadataLine::Ignored);
    }

    Ok(MetadataLine::Unrecognized)
}

// @parses: One timecode token, attaching line/field context on failure
fn parse_field(
    token: &str,
    field: &'static str,
    line_number: usize,
) -> Result<TimeCode, ParseError> {
    token
        .parse()
        .map_err(|source: TimeCodeError| ParseError::MalformedTimeCode {
            line: line_number,
            field,
            source,
        })
}

/// Build the metadata model from input lines.
///
/// Iterates lines in order, accumulating chapters, subtitles and the locale
/// setting. Unrecognized lines never abort the parse: one diagnostic is
/// collected per bad line and the whole batch is returned alongside the
/// model so every problem is visible in one pass. Only a malformed timecode
/// is fatal.
pub fn build_model<I, S>(lines: I) -> Result<(MetadataModel, Vec<Diagnostic>), ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut model = MetadataModel::default();
    let mut diagnostics = Vec::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let line_number = index + 1;

        match classify_line(line, line_number)? {
            MetadataLine::Chapter(chapter) => model.chapters.push(chapter),
            MetadataLine::Subtitle(subtitle) => model.subtitles.push(subtitle),
            MetadataLine::Locale(locale) => model.locale = locale,
            MetadataLine::Ignored => {}
            MetadataLine::Unrecognized => diagnostics.push(Diagnostic {
                line_number,
                raw: line.to_string(),
            }),
        }
    }

    Ok((model, diagnostics))
}
