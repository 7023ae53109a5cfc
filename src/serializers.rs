use std::fmt::Write;

use crate::metadata_parser::{ChapterEntry, SubtitleEntry};

// @module: Rendering the metadata model into the two ffmpeg input grammars

/// Default ticks-per-second for the chapter timebase
pub const DEFAULT_TIMEBASE: u64 = 1000;

/// Render chapters into ffmpeg's ffmetadata chapter grammar.
///
/// Each record's START is the chapter's own total time and its END is the
/// next chapter's total time. The final record has END equal to its own
/// START, a zero-length record; the downstream ffmetadata consumer expects
/// this boundary.
pub fn render_chapters(chapters: &[ChapterEntry], timebase: u64) -> String {
    let mut output = String::new();

    for (i, chapter) in chapters.iter().enumerate() {
        let start = chapter.time.total_time(timebase);
        let end = chapters
            .get(i + 1)
            .map_or(start, |next| next.time.total_time(timebase));

        // Infallible writes to a String
        let _ = writeln!(output, "[CHAPTER]");
        let _ = writeln!(output, "TIMEBASE=1/{}", timebase);
        let _ = writeln!(output, "START={}", start);
        let _ = writeln!(output, "END={}", end);
        let _ = writeln!(output, "TITLE={}", chapter.title);
    }

    output
}

/// Render one cue in SRT form: timing line then text, no index line.
pub fn render_cue(subtitle: &SubtitleEntry) -> String {
    format!(
        "{} --> {}\n{}",
        subtitle.start.format_srt(),
        subtitle.end.format_srt(),
        subtitle.text
    )
}

/// Render all cues into a complete SRT document.
///
/// Cues are numbered from 1 in input order and separated by a blank line,
/// which the SRT grammar requires between records.
pub fn render_subtitles(subtitles: &[SubtitleEntry]) -> String {
    let mut output = String::new();

    for (i, subtitle) in subtitles.iter().enumerate() {
        let _ = writeln!(output, "{}", i + 1);
        let _ = writeln!(output, "{}", render_cue(subtitle));
        let _ = writeln!(output);
    }

    output
}
