// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing
// Chunk: docs/chunks/attribute_runs - Per-character display attributes
// Chunk: docs/chunks/change_notification - Outbound change records for observers

//! TextBuffer is the main public API for content and attribute mutation.
//!
//! It combines a gap buffer (for efficient character storage) with a line
//! index (for O(1) line access) and an attribute run list that always
//! partitions the content. A buffer starts out [`BufferState::Constructed`]
//! and becomes [`BufferState::Materialized`] the first time content is
//! loaded; every mutation requires a materialized buffer.
//!
//! Each mutation returns a [`BufferChange`] and publishes the same record
//! to every subscriber. Content, line index and attributes are all updated
//! before the record is published.

use std::ops::Range;

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::attributes::{AttributeRun, AttributeRuns, Attributes};
use crate::error::{BufferError, Result};
use crate::gap_buffer::GapBuffer;
use crate::line_index::{starts_line_after, LineIndex};
use crate::newline::{self, LineEndings, NewlineCounts, NewlineStyle};
use crate::types::{BufferChange, BufferState, EditRecord, LineSplice};

/// A text buffer with line tracking, attribute runs and change notification.
#[derive(Debug)]
pub struct TextBuffer {
    state: BufferState,
    buffer: GapBuffer,
    line_index: LineIndex,
    attributes: AttributeRuns,
    /// The convention detected at load time or set by the last conversion.
    /// Edits do not change it.
    line_endings: LineEndings,
    subscribers: Vec<Sender<BufferChange>>,
    /// Mutation counter for sampling debug assertions (debug builds only).
    #[cfg(debug_assertions)]
    debug_mutation_count: u64,
}

impl TextBuffer {
    /// Creates an empty, unmaterialized buffer.
    pub fn new() -> Self {
        Self {
            state: BufferState::Constructed,
            buffer: GapBuffer::new(),
            line_index: LineIndex::new(),
            attributes: AttributeRuns::new(),
            line_endings: LineEndings::Uniform(NewlineStyle::default()),
            subscribers: Vec::new(),
            #[cfg(debug_assertions)]
            debug_mutation_count: 0,
        }
    }

    /// Creates a materialized buffer holding `content`.
    ///
    /// Note: We don't implement `FromStr` because it requires returning `Result`,
    /// but building a TextBuffer from a `&str` cannot fail.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        let mut buffer = Self::new();
        let report = newline::detect(content.as_bytes(), NewlineStyle::default());
        buffer.materialize(content, report.endings);
        buffer
    }

    // ==================== Lifecycle ====================

    pub fn state(&self) -> BufferState {
        self.state
    }

    pub fn is_materialized(&self) -> bool {
        self.state == BufferState::Materialized
    }

    /// Decodes `bytes` as UTF-8 and makes it the buffer's content.
    ///
    /// Detects the newline convention, falling back to `default` when the
    /// content has no terminators, and covers the content with a single
    /// default attribute run. A decode failure leaves the buffer
    /// unmaterialized. Loading is only valid once per buffer.
    pub fn load(&mut self, bytes: &[u8], default: NewlineStyle) -> Result<BufferChange> {
        if self.is_materialized() {
            return Err(BufferError::AlreadyMaterialized);
        }
        let text = std::str::from_utf8(bytes)?;
        let report = newline::detect(bytes, default);
        log::debug!(
            "loading {} bytes, line endings {}",
            bytes.len(),
            report.endings.display_name()
        );
        self.materialize(text, report.endings);

        let change = BufferChange::WholeBuffer {
            new_len: self.len(),
        };
        self.publish(&change);
        Ok(change)
    }

    fn materialize(&mut self, text: &str, endings: LineEndings) {
        self.buffer = GapBuffer::from_str(text);
        self.line_index.rebuild(text.chars());
        self.attributes.reset(self.buffer.len());
        self.line_endings = endings;
        self.state = BufferState::Materialized;
    }

    fn require_materialized(&self) -> Result<()> {
        if self.is_materialized() {
            Ok(())
        } else {
            Err(BufferError::NotMaterialized)
        }
    }

    // ==================== Accessors ====================

    /// Returns the number of characters in the buffer.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the number of lines. An empty buffer has one line.
    pub fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_index.line_start(line)
    }

    /// Returns the range of a line including its terminator.
    pub fn line_range(&self, line: usize) -> Option<Range<usize>> {
        let start = self.line_index.line_start(line)?;
        let end = self.line_index.line_end(line, self.len())?;
        Some(start..end)
    }

    /// Returns the text of a line including its terminator.
    pub fn line_text(&self, line: usize) -> Option<String> {
        self.line_range(line)
            .map(|range| self.buffer.slice(range.start, range.end))
    }

    /// Returns the line containing `offset`. Offsets past the end map to the
    /// last line.
    pub fn line_at_offset(&self, offset: usize) -> usize {
        self.line_index.line_at_offset(offset)
    }

    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.buffer.char_at(offset)
    }

    /// Returns the text in `range`, clamped to the buffer.
    pub fn slice(&self, range: Range<usize>) -> String {
        self.buffer.slice(range.start, range.end)
    }

    pub fn content(&self) -> String {
        self.buffer.to_string()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.buffer.chars()
    }

    /// The convention recorded at load time or by the last conversion.
    pub fn line_endings(&self) -> LineEndings {
        self.line_endings
    }

    /// Counts the terminators currently in the content.
    pub fn newline_counts(&self) -> NewlineCounts {
        NewlineCounts::from_chars(self.buffer.chars())
    }

    /// Returns the attributes covering `offset`.
    pub fn attributes_at(&self, offset: usize) -> Result<Attributes> {
        self.attributes
            .at(offset)
            .ok_or(BufferError::OutOfBounds {
                offset,
                len: self.len(),
            })
    }

    pub fn attribute_runs(&self) -> &AttributeRuns {
        &self.attributes
    }

    // ==================== Change Notification ====================

    /// Returns a receiver for every change published after this call.
    ///
    /// Dropping the receiver unsubscribes it.
    pub fn subscribe(&mut self) -> Receiver<BufferChange> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn publish(&mut self, change: &BufferChange) {
        if change.is_none() {
            return;
        }
        self.subscribers
            .retain(|tx| tx.send(change.clone()).is_ok());
    }

    // ==================== Validation ====================

    fn check_range(&self, range: &Range<usize>) -> Result<()> {
        if range.start > range.end || range.end > self.len() {
            return Err(BufferError::Range {
                start: range.start,
                end: range.end,
                len: self.len(),
            });
        }
        Ok(())
    }

    /// Debug assertion: verifies that the incremental line_index matches
    /// a fresh rebuild from the buffer content, and that the attribute
    /// runs still partition the content.
    ///
    /// Uses a mutation counter so the O(n) rebuild doesn't tank perf
    /// in tight loops. Only every 64th mutation is checked.
    #[cfg(debug_assertions)]
    fn assert_consistent(&mut self) {
        self.debug_mutation_count += 1;
        if self.debug_mutation_count % 64 != 0 {
            return;
        }
        let mut expected = LineIndex::new();
        expected.rebuild(self.buffer.chars());
        let actual = self.line_index.line_starts();
        let expected_starts = expected.line_starts();
        assert_eq!(
            actual, expected_starts,
            "line_index drift detected after {} mutations!\n  buffer len: {}\n  actual line_starts:   {:?}\n  expected line_starts: {:?}",
            self.debug_mutation_count, self.buffer.len(), actual, expected_starts,
        );
        assert!(
            self.attributes.is_partition_of(self.buffer.len()),
            "attribute runs no longer partition the buffer: {:?}",
            self.attributes
        );
    }

    #[cfg(not(debug_assertions))]
    fn assert_consistent(&mut self) {}

    // ==================== Mutations ====================

    /// Replaces `range` with `text`.
    ///
    /// Attribute runs at or after `range.end` shift by the length delta; the
    /// inserted text gets default attributes. The recorded line endings are
    /// left alone even if `text` contains other terminators.
    pub fn edit(&mut self, range: Range<usize>, text: &str) -> Result<BufferChange> {
        self.require_materialized()?;
        self.check_range(&range)?;
        if range.is_empty() && text.is_empty() {
            return Ok(BufferChange::None);
        }

        let (start, end) = (range.start, range.end);
        let new_len = text.chars().count();
        let new_end = start + new_len;

        // Line starts in [start, end] depend on replaced characters; the
        // line before them survives.
        let first_line = self.line_index.line_at_offset(start.saturating_sub(1));
        let tail_from = self.line_index.first_line_after(end);
        let removed = tail_from - first_line - 1;

        self.buffer.replace(start, end, text);

        let new_starts = self.line_starts_between(start.max(1), new_end);
        let delta = new_len as isize - (end - start) as isize;
        self.line_index
            .splice(first_line, tail_from, &new_starts, delta);
        self.attributes.splice(start, end, new_len);
        self.assert_consistent();

        let change = BufferChange::Edited(EditRecord {
            range,
            new_len,
            line_splice: LineSplice {
                first_line,
                removed,
                inserted: new_starts.len(),
            },
        });
        self.publish(&change);
        Ok(change)
    }

    /// Inserts `text` at `offset`.
    pub fn insert(&mut self, offset: usize, text: &str) -> Result<BufferChange> {
        self.edit(offset..offset, text)
    }

    /// Removes the characters in `range`.
    pub fn delete(&mut self, range: Range<usize>) -> Result<BufferChange> {
        self.edit(range, "")
    }

    /// Line start offsets in `lo..=hi` of the current content.
    fn line_starts_between(&self, lo: usize, hi: usize) -> Vec<usize> {
        if lo == 0 || lo > hi {
            return Vec::new();
        }
        let window: Vec<char> = self.buffer.chars_in(lo - 1, hi + 1).collect();
        (lo..=hi)
            .filter(|&s| {
                let prev = window[s - lo];
                let next = window.get(s - lo + 1).copied();
                starts_line_after(prev, next)
            })
            .collect()
    }

    /// Rewrites every terminator in the content to `target`.
    ///
    /// Content with no terminators, or whose terminators are already all
    /// `target`, only has its recorded style updated and reports
    /// [`BufferChange::None`]. Otherwise content, line index and attributes
    /// are rebuilt and a whole-buffer change is published.
    pub fn convert_newlines(&mut self, target: NewlineStyle) -> Result<BufferChange> {
        self.require_materialized()?;
        let counts = self.newline_counts();
        if counts.total() == 0 || counts.classify(target) == LineEndings::Uniform(target) {
            self.line_endings = LineEndings::Uniform(target);
            return Ok(BufferChange::None);
        }

        let converted = newline::convert(&self.content(), target);
        log::debug!(
            "converting {} terminators to {}",
            counts.total(),
            target.display_name()
        );
        self.buffer = GapBuffer::from_str(&converted);
        self.line_index.rebuild(converted.chars());
        self.attributes.reset(self.buffer.len());
        self.line_endings = LineEndings::Uniform(target);

        let change = BufferChange::WholeBuffer {
            new_len: self.len(),
        };
        self.publish(&change);
        Ok(change)
    }

    /// Assigns `attrs` to `range`.
    pub fn set_attributes(&mut self, range: Range<usize>, attrs: Attributes) -> Result<()> {
        self.require_materialized()?;
        self.check_range(&range)?;
        self.attributes.paint(range.start, range.end, attrs);
        Ok(())
    }

    /// Replaces the attributes of `range` with `runs`, which must tile it in
    /// order. One call costs a single splice of the run list however many
    /// runs it carries.
    pub fn replace_attributes(&mut self, range: Range<usize>, runs: Vec<AttributeRun>) -> Result<()> {
        self.require_materialized()?;
        self.check_range(&range)?;
        let mut expected = range.start;
        for run in &runs {
            if run.start != expected || run.end < run.start {
                return Err(BufferError::Range {
                    start: run.start,
                    end: run.end,
                    len: self.len(),
                });
            }
            expected = run.end;
        }
        if expected != range.end {
            return Err(BufferError::Range {
                start: expected,
                end: range.end,
                len: self.len(),
            });
        }
        self.attributes.replace_range(range.start, range.end, runs);
        Ok(())
    }

    /// Covers the whole buffer with default attributes again.
    pub fn reset_attributes(&mut self) {
        self.attributes.reset(self.buffer.len());
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::TokenCategory;
    use crate::style::Style;

    fn loaded(text: &str) -> TextBuffer {
        let mut buffer = TextBuffer::new();
        buffer.load(text.as_bytes(), NewlineStyle::Lf).unwrap();
        buffer
    }

    fn keyword() -> Attributes {
        Attributes::new(TokenCategory::Keyword, Style::default())
    }

    // ==================== Lifecycle Tests ====================

    #[test]
    fn test_new_is_unmaterialized() {
        let buffer = TextBuffer::new();
        assert_eq!(buffer.state(), BufferState::Constructed);
        assert!(buffer.is_empty());
        assert_eq!(buffer.line_count(), 1);
    }

    #[test]
    fn test_mutations_require_materialized() {
        let mut buffer = TextBuffer::new();
        assert_eq!(buffer.insert(0, "x"), Err(BufferError::NotMaterialized));
        assert_eq!(
            buffer.convert_newlines(NewlineStyle::Cr),
            Err(BufferError::NotMaterialized)
        );
        assert_eq!(
            buffer.set_attributes(0..0, keyword()),
            Err(BufferError::NotMaterialized)
        );
    }

    #[test]
    fn test_load_detects_and_covers() {
        let buffer = loaded("one\r\ntwo\r\n");
        assert!(buffer.is_materialized());
        assert_eq!(buffer.line_endings(), LineEndings::Uniform(NewlineStyle::CrLf));
        assert_eq!(buffer.line_count(), 3);
        assert!(buffer.attribute_runs().is_partition_of(10));
        assert_eq!(buffer.attributes_at(9), Ok(Attributes::default()));
    }

    #[test]
    fn test_load_without_terminators_uses_default() {
        let mut buffer = TextBuffer::new();
        buffer.load(b"single line", NewlineStyle::Cr).unwrap();
        assert_eq!(buffer.line_endings(), LineEndings::Uniform(NewlineStyle::Cr));
    }

    #[test]
    fn test_load_invalid_utf8_stays_unmaterialized() {
        let mut buffer = TextBuffer::new();
        let err = buffer.load(&[b'o', b'k', 0xc3, 0x28], NewlineStyle::Lf);
        assert!(matches!(err, Err(BufferError::Decode { valid_up_to: 2, .. })));
        assert!(!buffer.is_materialized());
        assert!(buffer.load(b"fine", NewlineStyle::Lf).is_ok());
    }

    #[test]
    fn test_second_load_is_rejected() {
        let mut buffer = loaded("first");
        assert_eq!(
            buffer.load(b"second", NewlineStyle::Lf),
            Err(BufferError::AlreadyMaterialized)
        );
        assert_eq!(buffer.content(), "first");
    }

    // ==================== Edit Tests ====================

    #[test]
    fn test_edit_replaces_span() {
        let mut buffer = loaded("hello world");
        let change = buffer.edit(6..11, "there").unwrap();
        assert_eq!(buffer.content(), "hello there");
        let record = change.as_edit().unwrap();
        assert_eq!(record.range, 6..11);
        assert_eq!(record.new_len, 5);
        assert_eq!(record.line_splice.removed, 0);
        assert_eq!(record.line_splice.inserted, 0);
    }

    #[test]
    fn test_edit_out_of_range() {
        let mut buffer = loaded("abc");
        assert_eq!(
            buffer.edit(2..5, "x"),
            Err(BufferError::Range {
                start: 2,
                end: 5,
                len: 3
            })
        );
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = buffer.edit(2..1, "x");
        assert!(matches!(reversed, Err(BufferError::Range { .. })));
        assert_eq!(buffer.content(), "abc");
    }

    #[test]
    fn test_empty_edit_is_none() {
        let mut buffer = loaded("abc");
        assert_eq!(buffer.edit(1..1, ""), Ok(BufferChange::None));
    }

    #[test]
    fn test_insert_newline_splits_line() {
        let mut buffer = loaded("abcd");
        let change = buffer.insert(2, "\n").unwrap();
        let splice = change.as_edit().unwrap().line_splice;
        assert_eq!(splice.first_line, 0);
        assert_eq!(splice.removed, 0);
        assert_eq!(splice.inserted, 1);
        assert_eq!(buffer.line_text(0).as_deref(), Some("ab\n"));
        assert_eq!(buffer.line_text(1).as_deref(), Some("cd"));
    }

    #[test]
    fn test_delete_joins_lines() {
        let mut buffer = loaded("a\nb\nc\nd");
        let change = buffer.delete(1..5).unwrap();
        assert_eq!(buffer.content(), "a\nd");
        let splice = change.as_edit().unwrap().line_splice;
        assert_eq!(splice.first_line, 0);
        assert_eq!(splice.removed, 2);
        assert_eq!(splice.inserted, 0);
        assert_eq!(buffer.line_count(), 2);
    }

    #[test]
    fn test_lf_after_cr_merges_into_crlf() {
        let mut buffer = loaded("a\rb");
        assert_eq!(buffer.line_count(), 2);
        let change = buffer.insert(2, "\n").unwrap();
        assert_eq!(buffer.content(), "a\r\nb");
        assert_eq!(buffer.line_count(), 2);
        assert_eq!(buffer.line_start(1), Some(3));
        let splice = change.as_edit().unwrap().line_splice;
        assert_eq!((splice.first_line, splice.removed, splice.inserted), (0, 1, 1));
    }

    #[test]
    fn test_splitting_crlf_adds_line() {
        let mut buffer = loaded("a\r\nb");
        buffer.insert(2, "x").unwrap();
        assert_eq!(buffer.content(), "a\rx\nb");
        assert_eq!(buffer.line_count(), 3);
        assert_eq!(buffer.line_text(1).as_deref(), Some("x\n"));
    }

    #[test]
    fn test_edit_shifts_attributes() {
        let mut buffer = loaded("fn main");
        buffer.set_attributes(0..2, keyword()).unwrap();
        buffer.insert(0, "pub ").unwrap();
        assert_eq!(buffer.attributes_at(0), Ok(Attributes::default()));
        assert_eq!(buffer.attributes_at(4), Ok(keyword()));
        assert_eq!(buffer.attributes_at(5), Ok(keyword()));
        assert_eq!(buffer.attributes_at(6), Ok(Attributes::default()));
        assert!(buffer.attribute_runs().is_partition_of(buffer.len()));
    }

    #[test]
    fn test_edit_keeps_line_endings() {
        let mut buffer = loaded("a\nb\n");
        buffer.insert(0, "x\r\n").unwrap();
        assert_eq!(buffer.line_endings(), LineEndings::Uniform(NewlineStyle::Lf));
        assert_eq!(buffer.newline_counts().crlf, 1);
    }

    // ==================== Attribute Tests ====================

    #[test]
    fn test_attributes_at_out_of_bounds() {
        let buffer = loaded("abc");
        assert_eq!(
            buffer.attributes_at(3),
            Err(BufferError::OutOfBounds { offset: 3, len: 3 })
        );
        let empty = loaded("");
        assert!(empty.attributes_at(0).is_err());
    }

    #[test]
    fn test_set_attributes_validates_range() {
        let mut buffer = loaded("abc");
        assert!(matches!(
            buffer.set_attributes(1..4, keyword()),
            Err(BufferError::Range { .. })
        ));
    }

    #[test]
    fn test_replace_attributes_paints_runs() {
        let mut buffer = loaded("let x = 1;");
        let string = Attributes::new(TokenCategory::String, Style::default());
        buffer
            .replace_attributes(
                0..5,
                vec![
                    AttributeRun { start: 0, end: 3, attrs: keyword() },
                    AttributeRun { start: 3, end: 4, attrs: Attributes::default() },
                    AttributeRun { start: 4, end: 5, attrs: string },
                ],
            )
            .unwrap();
        assert_eq!(buffer.attributes_at(2), Ok(keyword()));
        assert_eq!(buffer.attributes_at(4), Ok(string));
        assert_eq!(buffer.attribute_runs().runs().len(), 4);
        assert!(buffer.attribute_runs().is_partition_of(10));
    }

    #[test]
    fn test_replace_attributes_rejects_gaps() {
        let mut buffer = loaded("abcdef");
        let gap = vec![
            AttributeRun { start: 0, end: 2, attrs: keyword() },
            AttributeRun { start: 3, end: 4, attrs: keyword() },
        ];
        assert!(matches!(
            buffer.replace_attributes(0..4, gap),
            Err(BufferError::Range { start: 3, .. })
        ));
        let short = vec![AttributeRun { start: 0, end: 2, attrs: keyword() }];
        assert!(buffer.replace_attributes(0..4, short).is_err());
        assert_eq!(buffer.attribute_runs().runs().len(), 1);
    }

    #[test]
    fn test_reset_attributes() {
        let mut buffer = loaded("abcdef");
        buffer.set_attributes(1..3, keyword()).unwrap();
        buffer.reset_attributes();
        assert_eq!(buffer.attribute_runs().runs().len(), 1);
    }

    // ==================== Conversion Tests ====================

    #[test]
    fn test_convert_mixed_to_lf() {
        let mut buffer = loaded("a\r\nb\nc");
        assert_eq!(buffer.line_endings(), LineEndings::Mixed);
        let change = buffer.convert_newlines(NewlineStyle::Lf).unwrap();
        assert_eq!(change, BufferChange::WholeBuffer { new_len: 5 });
        assert_eq!(buffer.content(), "a\nb\nc");
        assert_eq!(buffer.line_endings(), LineEndings::Uniform(NewlineStyle::Lf));
        assert_eq!(buffer.line_count(), 3);
    }

    #[test]
    fn test_convert_is_idempotent() {
        let mut buffer = loaded("x\ny\rz");
        buffer.convert_newlines(NewlineStyle::CrLf).unwrap();
        let once = buffer.content();
        let change = buffer.convert_newlines(NewlineStyle::CrLf).unwrap();
        assert_eq!(change, BufferChange::None);
        assert_eq!(buffer.content(), once);
        assert_eq!(once, "x\r\ny\r\nz");
    }

    #[test]
    fn test_convert_without_terminators_is_noop_success() {
        let mut buffer = loaded("no breaks");
        buffer.set_attributes(0..2, keyword()).unwrap();
        let change = buffer.convert_newlines(NewlineStyle::Cr).unwrap();
        assert_eq!(change, BufferChange::None);
        assert_eq!(buffer.line_endings(), LineEndings::Uniform(NewlineStyle::Cr));
        assert_eq!(buffer.attributes_at(0), Ok(keyword()));
    }

    #[test]
    fn test_convert_resets_attributes() {
        let mut buffer = loaded("a\nb");
        buffer.set_attributes(0..1, keyword()).unwrap();
        buffer.convert_newlines(NewlineStyle::CrLf).unwrap();
        assert_eq!(buffer.attributes_at(0), Ok(Attributes::default()));
        assert!(buffer.attribute_runs().is_partition_of(4));
    }

    // ==================== Subscription Tests ====================

    #[test]
    fn test_subscribers_receive_changes() {
        let mut buffer = TextBuffer::new();
        let rx = buffer.subscribe();
        buffer.load(b"ab", NewlineStyle::Lf).unwrap();
        buffer.insert(1, "\n").unwrap();
        buffer.edit(0..0, "").unwrap();

        assert_eq!(rx.try_recv(), Ok(BufferChange::WholeBuffer { new_len: 2 }));
        let edit = rx.try_recv().unwrap();
        assert_eq!(edit.as_edit().map(|r| r.range.clone()), Some(1..1));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut buffer = loaded("x");
        let rx = buffer.subscribe();
        let _kept = buffer.subscribe();
        drop(rx);
        buffer.insert(0, "y").unwrap();
        assert_eq!(buffer.subscriber_count(), 1);
    }
}
