/*!
 * Tests for the ffmetadata and SRT serializers
 */

use mkvembed::metadata_parser::{ChapterEntry, SubtitleEntry};
use mkvembed::serializers::{DEFAULT_TIMEBASE, render_chapters, render_cue, render_subtitles};
use mkvembed::timecode::TimeCode;

fn chapter(seconds: u64, millis: u64, title: &str) -> ChapterEntry {
    ChapterEntry {
        time: TimeCode::new(seconds, millis),
        title: title.to_string(),
    }
}

fn subtitle(start: (u64, u64), end: (u64, u64), text: &str) -> SubtitleEntry {
    SubtitleEntry {
        start: TimeCode::new(start.0, start.1),
        end: TimeCode::new(end.0, end.1),
        text: text.to_string(),
    }
}

/// Test that each chapter's END is the next chapter's START
#[test]
fn test_render_chapters_withTwoChapters_shouldChainBoundaries() {
    let chapters = vec![chapter(10, 0, "One"), chapter(20, 0, "Two")];
    let rendered = render_chapters(&chapters, DEFAULT_TIMEBASE);

    let expected = "\
[CHAPTER]
TIMEBASE=1/1000
START=10000
END=20000
TITLE=One
[CHAPTER]
TIMEBASE=1/1000
START=20000
END=20000
TITLE=Two
";
    assert_eq!(rendered, expected);
}

/// Regression test: the last chapter is a zero-length record with START==END
#[test]
fn test_render_chapters_withLastChapter_shouldHaveZeroLengthRecord() {
    let chapters = vec![chapter(95, 250, "Only")];
    let rendered = render_chapters(&chapters, DEFAULT_TIMEBASE);

    assert!(rendered.contains("START=95250\n"));
    assert!(rendered.contains("END=95250\n"));
}

/// Test that a non-default timebase scales START/END and the TIMEBASE header
#[test]
fn test_render_chapters_withCustomTimebase_shouldScale() {
    let chapters = vec![chapter(10, 0, "One")];
    let rendered = render_chapters(&chapters, 90000);

    assert!(rendered.contains("TIMEBASE=1/90000\n"));
    assert!(rendered.contains("START=900000\n"));
}

/// Test that no chapters renders to an empty document
#[test]
fn test_render_chapters_withNoChapters_shouldBeEmpty() {
    assert_eq!(render_chapters(&[], DEFAULT_TIMEBASE), "");
}

/// Test single-cue rendering with unbounded hours
#[test]
fn test_render_cue_withLargeStartTime_shouldUseUnboundedHours() {
    let cue = subtitle((3725, 250), (3729, 0), "Hello");
    assert_eq!(render_cue(&cue), "1:02:05,250 --> 1:02:09,000\nHello");
}

/// Test the full SRT document: 1-based indices and blank separator lines
#[test]
fn test_render_subtitles_withTwoCues_shouldNumberAndSeparate() {
    let cues = vec![
        subtitle((1, 0), (4, 0), "First"),
        subtitle((5, 500), (9, 0), "Second"),
    ];
    let rendered = render_subtitles(&cues);

    let expected = "\
1
0:00:01,000 --> 0:00:04,000
First

2
0:00:05,500 --> 0:00:09,000
Second

";
    assert_eq!(rendered, expected);
}

/// Test that unescaped newlines in cue text render as real line breaks
#[test]
fn test_render_subtitles_withMultiLineText_shouldKeepLineBreak() {
    let cues = vec![subtitle((1, 0), (4, 0), "Line one\nLine two")];
    let rendered = render_subtitles(&cues);

    assert!(rendered.contains("Line one\nLine two\n"));
}
