// Chunk: docs/chunks/newline_detection - Line terminator detection and conversion

//! Newline convention detection and conversion.
//!
//! Detection is a pure function over raw bytes: it counts LF, CR and CRLF
//! terminators and classifies the content as using exactly one of them, or
//! [`LineEndings::Mixed`] when more than one kind is present. Content with
//! no terminators at all reports the caller-supplied default.
//!
//! [`NewlineScanner`] is the streaming form of the same computation. A CR
//! that ends one chunk and an LF that starts the next are counted as a
//! single CRLF, so feeding content in arbitrary pieces gives the same
//! report as [`detect`] over the whole input.

use serde::{Deserialize, Serialize};

/// A single line terminator convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewlineStyle {
    /// `\n` (Unix, macOS)
    #[default]
    Lf,
    /// `\r` (classic Mac OS)
    Cr,
    /// `\r\n` (Windows)
    CrLf,
}

impl NewlineStyle {
    /// The terminator sequence for this style.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Cr => "\r",
            Self::CrLf => "\r\n",
        }
    }

    /// Short name for menus and status displays.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Lf => "LF",
            Self::Cr => "CR",
            Self::CrLf => "CRLF",
        }
    }
}

/// The newline state of a whole buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineEndings {
    /// Every terminator uses the same style (or the default, if there are none).
    Uniform(NewlineStyle),
    /// More than one style is present; the buffer is pending normalization.
    Mixed,
}

impl LineEndings {
    /// Returns the uniform style, or `None` for mixed content.
    pub fn style(&self) -> Option<NewlineStyle> {
        match self {
            Self::Uniform(style) => Some(*style),
            Self::Mixed => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Uniform(style) => style.display_name(),
            Self::Mixed => "Mixed",
        }
    }
}

/// Per-style terminator counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NewlineCounts {
    pub lf: usize,
    pub cr: usize,
    pub crlf: usize,
}

impl NewlineCounts {
    /// Total number of terminators.
    pub fn total(&self) -> usize {
        self.lf + self.cr + self.crlf
    }

    fn record(&mut self, style: NewlineStyle) {
        match style {
            NewlineStyle::Lf => self.lf += 1,
            NewlineStyle::Cr => self.cr += 1,
            NewlineStyle::CrLf => self.crlf += 1,
        }
    }

    /// Classifies the counts. No terminators yields `Uniform(default)`.
    pub fn classify(&self, default: NewlineStyle) -> LineEndings {
        let kinds = [self.lf, self.cr, self.crlf]
            .iter()
            .filter(|&&count| count > 0)
            .count();
        match kinds {
            0 => LineEndings::Uniform(default),
            1 if self.lf > 0 => LineEndings::Uniform(NewlineStyle::Lf),
            1 if self.cr > 0 => LineEndings::Uniform(NewlineStyle::Cr),
            1 => LineEndings::Uniform(NewlineStyle::CrLf),
            _ => LineEndings::Mixed,
        }
    }

    /// The most frequent style, or `None` if there are no terminators.
    ///
    /// Ties prefer LF, then CRLF, then CR.
    pub fn most_common(&self) -> Option<NewlineStyle> {
        if self.total() == 0 {
            return None;
        }
        let mut best = (NewlineStyle::Lf, self.lf);
        for candidate in [(NewlineStyle::CrLf, self.crlf), (NewlineStyle::Cr, self.cr)] {
            if candidate.1 > best.1 {
                best = candidate;
            }
        }
        Some(best.0)
    }

    /// Counts terminators in already-decoded text.
    pub fn from_chars<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut counts = Self::default();
        let mut pending_cr = false;
        for ch in chars {
            match ch {
                '\n' if pending_cr => {
                    counts.crlf += 1;
                    pending_cr = false;
                }
                '\n' => counts.lf += 1,
                '\r' => {
                    if pending_cr {
                        counts.cr += 1;
                    }
                    pending_cr = true;
                }
                _ => {
                    if pending_cr {
                        counts.cr += 1;
                        pending_cr = false;
                    }
                }
            }
        }
        if pending_cr {
            counts.cr += 1;
        }
        counts
    }
}

/// One line terminator found in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminator {
    /// Byte offset of the terminator's first byte.
    pub offset: usize,
    pub style: NewlineStyle,
}

/// The result of newline detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewlineReport {
    /// The classification of the whole input.
    pub endings: LineEndings,
    pub counts: NewlineCounts,
    /// Every terminator in input order; line `i` ends at `terminators[i]`.
    pub terminators: Vec<Terminator>,
}

impl NewlineReport {
    pub fn most_common(&self) -> Option<NewlineStyle> {
        self.counts.most_common()
    }
}

/// Streaming newline detector.
///
/// Feed byte chunks in order, then call [`NewlineScanner::finish`]. The only
/// state carried between chunks is whether the previous chunk ended in a CR.
#[derive(Debug, Clone, Default)]
pub struct NewlineScanner {
    consumed: usize,
    pending_cr: Option<usize>,
    counts: NewlineCounts,
    terminators: Vec<Terminator>,
}

impl NewlineScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans the next chunk of input.
    pub fn feed(&mut self, chunk: &[u8]) {
        for (i, &byte) in chunk.iter().enumerate() {
            let offset = self.consumed + i;
            match byte {
                b'\n' => match self.pending_cr.take() {
                    Some(cr_offset) => self.push(cr_offset, NewlineStyle::CrLf),
                    None => self.push(offset, NewlineStyle::Lf),
                },
                b'\r' => {
                    if let Some(cr_offset) = self.pending_cr.replace(offset) {
                        self.push(cr_offset, NewlineStyle::Cr);
                    }
                }
                _ => {
                    if let Some(cr_offset) = self.pending_cr.take() {
                        self.push(cr_offset, NewlineStyle::Cr);
                    }
                }
            }
        }
        self.consumed += chunk.len();
    }

    /// Completes the scan and returns the report.
    ///
    /// The scanner is left reset, ready for new input.
    pub fn finish(&mut self, default: NewlineStyle) -> NewlineReport {
        if let Some(cr_offset) = self.pending_cr.take() {
            self.push(cr_offset, NewlineStyle::Cr);
        }
        let report = NewlineReport {
            endings: self.counts.classify(default),
            counts: self.counts,
            terminators: std::mem::take(&mut self.terminators),
        };
        self.reset();
        report
    }

    /// Discards all progress.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn push(&mut self, offset: usize, style: NewlineStyle) {
        self.counts.record(style);
        self.terminators.push(Terminator { offset, style });
    }
}

/// Detects the newline convention of `bytes`.
///
/// Returns `Uniform(default)` when the input has no terminators.
pub fn detect(bytes: &[u8], default: NewlineStyle) -> NewlineReport {
    let mut scanner = NewlineScanner::new();
    scanner.feed(bytes);
    scanner.finish(default)
}

/// Rewrites every line terminator in `text` to `target`.
///
/// CRLF is treated as a single terminator, so converting is idempotent.
pub fn convert(text: &str, target: NewlineStyle) -> String {
    let replacement = target.as_str();
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str(replacement);
            }
            '\n' => out.push_str(replacement),
            other => out.push(other),
        }
    }
    out
}
