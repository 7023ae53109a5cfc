use std::fmt;
use std::str::FromStr;

use crate::errors::TimeCodeError;

// @module: Timecode parsing and normalization

/// Multipliers for colon-separated segments, rightmost first:
/// seconds, minutes, hours, days.
const SEGMENT_MULTIPLIERS: [u64; 4] = [1, 60, 60 * 60, 60 * 60 * 24];

// @struct: Canonical (seconds, milliseconds) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeCode {
    // @field: Whole seconds
    pub seconds: u64,

    // @field: Milliseconds, from the fractional part.
    // A fractional part longer than three digits parses to a value above
    // 999; padding never truncates (see from_str).
    pub millis: u64,
}

impl TimeCode {
    /// Creates a timecode - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(seconds: u64, millis: u64) -> Self {
        TimeCode { seconds, millis }
    }

    /// Total time in ticks of the given timebase (ticks per second).
    /// With the default timebase of 1000 this is total milliseconds.
    pub fn total_time(&self, timebase: u64) -> u64 {
        self.seconds * timebase + self.millis
    }

    /// Format as an SRT timing token: `H:MM:SS,mmm`.
    ///
    /// Hours are unpadded and unbounded (no wrap at 24); minutes and
    /// seconds wrap mod 60 and are zero-padded to two digits.
    pub fn format_srt(&self) -> String {
        format!(
            "{}:{:02}:{:02},{:03}",
            self.seconds / 3600,
            (self.seconds % 3600) / 60,
            self.seconds % 60,
            self.millis
        )
    }
}

impl FromStr for TimeCode {
    type Err = TimeCodeError;

    /// Parse a loose timestamp: 1-4 colon-separated whole segments read
    /// right-to-left as seconds/minutes/hours/days, plus an optional
    /// fractional part after a literal `.`.
    ///
    /// The fractional part is right-padded with zeros to a minimum of three
    /// characters and then parsed as milliseconds: `.5` -> 500, `.05` -> 50,
    /// `.005` -> 5. Longer fractional parts are never truncated, so `.5000`
    /// parses to 5000 milliseconds.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.is_empty() {
            return Err(TimeCodeError::Empty);
        }

        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (text, None),
        };

        // A non-numeric fractional part is silently treated as absent,
        // matching the original tool's behavior.
        let millis = match fraction {
            Some(f) if !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()) => {
                let padded = format!("{:0<3}", f);
                padded
                    .parse::<u64>()
                    .map_err(|_| TimeCodeError::NonNumericSegment(f.to_string()))?
            }
            _ => 0,
        };

        let segments: Vec<&str> = whole.split(':').collect();
        if segments.len() > SEGMENT_MULTIPLIERS.len() {
            return Err(TimeCodeError::TooManySegments(segments.len()));
        }

        let mut seconds = 0u64;
        for (i, segment) in segments.iter().rev().enumerate() {
            let value: u64 = segment
                .parse()
                .map_err(|_| TimeCodeError::NonNumericSegment(segment.to_string()))?;
            seconds += value * SEGMENT_MULTIPLIERS[i];
        }

        Ok(TimeCode { seconds, millis })
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}s {}ms", self.seconds, self.millis)
    }
}
