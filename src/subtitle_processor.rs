use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::PipelineError;

// @module: Subtitle cue model and SRT codec

// @const: SRT timing line regex
static TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2,}):(\d{2}):(\d{2})[,.](\d{3}) --> (\d{2,}):(\d{2}):(\d{2})[,.](\d{3})$")
        .unwrap()
});

// @struct: Single subtitle cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    // @field: Ordinal index from the source document (positive, strictly
    // increasing, not necessarily contiguous)
    pub index: usize,

    // @field: Start time in ms
    pub start_ms: u64,

    // @field: End time in ms, start_ms <= end_ms
    pub end_ms: u64,

    // @field: Display text, may span multiple lines
    pub text: String,
}

impl Cue {
    /// Create a new cue
    pub fn new(index: usize, start_ms: u64, end_ms: u64, text: String) -> Self {
        Cue {
            index,
            start_ms,
            end_ms,
            text,
        }
    }

    /// Copy of this cue carrying the same index and timing but different text
    pub fn with_text(&self, text: String) -> Self {
        Cue {
            index: self.index,
            start_ms: self.start_ms,
            end_ms: self.end_ms,
            text,
        }
    }

    /// Parse an SRT timestamp (HH:MM:SS,mmm) to milliseconds
    pub fn parse_timestamp(timestamp: &str) -> Result<u64, PipelineError> {
        let parts: Vec<&str> = timestamp.split(&[':', ',', '.'][..]).collect();

        if parts.len() != 4 {
            return Err(PipelineError::MalformedDocument(format!(
                "invalid timestamp format: {timestamp}"
            )));
        }

        let field = |value: &str, what: &str| -> Result<u64, PipelineError> {
            value.parse().map_err(|_| {
                PipelineError::MalformedDocument(format!(
                    "invalid {what} in timestamp: {timestamp}"
                ))
            })
        };

        let hours = field(parts[0], "hours")?;
        let minutes = field(parts[1], "minutes")?;
        let seconds = field(parts[2], "seconds")?;
        let millis = field(parts[3], "milliseconds")?;

        if minutes >= 60 || seconds >= 60 || millis >= 1000 {
            return Err(PipelineError::MalformedDocument(format!(
                "invalid time components in timestamp: {timestamp}"
            )));
        }

        Ok(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis)
    }

    /// Convert start time to formatted SRT timestamp
    pub fn format_start_time(&self) -> String {
        Self::format_timestamp(self.start_ms)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end_time(&self) -> String {
        Self::format_timestamp(self.end_ms)
    }

    /// Format a timestamp in milliseconds to SRT format (HH:MM:SS,mmm)
    pub fn format_timestamp(ms: u64) -> String {
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        writeln!(f, "{}", self.text)?;
        writeln!(f)
    }
}

/// Ordered sequence of cues, as they appear in the source document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtitleDocument {
    /// Cues in document order
    pub cues: Vec<Cue>,
}

impl SubtitleDocument {
    /// Create a document from an existing cue sequence
    pub fn from_cues(cues: Vec<Cue>) -> Self {
        SubtitleDocument { cues }
    }

    /// Number of cues in the document
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// Whether the document has no cues
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// The cue texts in document order
    pub fn texts(&self) -> Vec<String> {
        self.cues.iter().map(|cue| cue.text.clone()).collect()
    }

    /// Parse raw SRT bytes into a document
    ///
    /// Input must be UTF-8; a leading BOM is tolerated.
    pub fn parse(bytes: &[u8]) -> Result<Self, PipelineError> {
        let content = std::str::from_utf8(bytes).map_err(|e| {
            PipelineError::MalformedDocument(format!("input is not valid UTF-8: {e}"))
        })?;
        Self::parse_str(content.trim_start_matches('\u{feff}'))
    }

    /// Parse SRT content into a document
    ///
    /// The conventional format is expected: blank-line-separated blocks of
    /// index line, timing line, then one or more text lines. Extra blank
    /// lines between blocks and CRLF line endings are tolerated. A document
    /// with no blocks at all parses as an empty document.
    pub fn parse_str(content: &str) -> Result<Self, PipelineError> {
        let mut cues = Vec::new();
        let mut block: Vec<&str> = Vec::new();
        let mut last_index = 0usize;

        for line in content.lines() {
            // Whitespace-only lines close the current block
            if line.trim().is_empty() {
                if !block.is_empty() {
                    cues.push(Self::parse_block(&block, &mut last_index)?);
                    block.clear();
                }
            } else {
                block.push(line);
            }
        }
        if !block.is_empty() {
            cues.push(Self::parse_block(&block, &mut last_index)?);
        }

        Ok(SubtitleDocument { cues })
    }

    /// Serialize the document back to SRT
    ///
    /// Deterministic inverse of `parse_str`: index, timing line at millisecond
    /// resolution, text lines, one blank separator line per cue. Holds the
    /// round-trip property for any document whose cue text contains no
    /// blank-line sequence.
    pub fn compose(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        for cue in &self.cues {
            let _ = write!(out, "{}", cue);
        }
        out
    }

    /// Parse one blank-line-delimited cue block
    fn parse_block(lines: &[&str], last_index: &mut usize) -> Result<Cue, PipelineError> {
        if lines.len() < 2 {
            return Err(PipelineError::MalformedDocument(format!(
                "cue block {:?} cannot be segmented into index, timing and text",
                lines[0]
            )));
        }

        let index_line = lines[0].trim();
        let index: usize = index_line.parse().map_err(|_| {
            PipelineError::MalformedDocument(format!(
                "cue index is not a positive integer: {index_line:?}"
            ))
        })?;
        if index == 0 {
            return Err(PipelineError::MalformedDocument(
                "cue index must be positive, got 0".to_string(),
            ));
        }
        if index <= *last_index {
            return Err(PipelineError::MalformedDocument(format!(
                "cue indices must be strictly increasing: {} follows {}",
                index, last_index
            )));
        }
        *last_index = index;

        let timing_line = lines[1].trim();
        let caps = TIMING_REGEX.captures(timing_line).ok_or_else(|| {
            PipelineError::MalformedDocument(format!(
                "cue {index} has an unparseable timing line: {timing_line:?}"
            ))
        })?;
        let start_ms = Self::capture_to_ms(&caps, 1)?;
        let end_ms = Self::capture_to_ms(&caps, 5)?;
        if start_ms > end_ms {
            return Err(PipelineError::MalformedDocument(format!(
                "cue {} starts at {} but ends earlier at {}",
                index,
                Cue::format_timestamp(start_ms),
                Cue::format_timestamp(end_ms)
            )));
        }

        let text = lines[2..].join("\n");
        Ok(Cue::new(index, start_ms, end_ms, text))
    }

    /// Convert one side of a matched timing line to milliseconds
    fn capture_to_ms(caps: &regex::Captures, start_idx: usize) -> Result<u64, PipelineError> {
        let field = |offset: usize| -> u64 {
            caps.get(start_idx + offset)
                .map_or(0, |m| m.as_str().parse().unwrap_or(0))
        };

        let hours = field(0);
        let minutes = field(1);
        let seconds = field(2);
        let millis = field(3);

        // The regex pins millis to three digits; minutes and seconds still
        // need a range check
        if minutes >= 60 || seconds >= 60 {
            return Err(PipelineError::MalformedDocument(format!(
                "invalid time components in timing line: {}",
                caps.get(0).map_or("", |m| m.as_str())
            )));
        }

        Ok(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis)
    }
}

impl fmt::Display for SubtitleDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Document")?;
        writeln!(f, "Cues: {}", self.cues.len())?;
        Ok(())
    }
}
