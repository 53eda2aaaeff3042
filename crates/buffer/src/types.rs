// Chunk: docs/chunks/change_notification - Outbound change records for observers

use std::ops::Range;

/// Lifecycle of a buffer's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BufferState {
    /// Created but no content loaded yet.
    #[default]
    Constructed,
    /// Content loaded; edits, attribute writes and conversion are allowed.
    Materialized,
}

/// How an edit changed the line structure.
///
/// Line `first_line` survives the edit (its start offset is unchanged),
/// the `removed` lines after it were replaced by `inserted` new lines, and
/// every later line moved by the edit's length delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineSplice {
    pub first_line: usize,
    pub removed: usize,
    pub inserted: usize,
}

impl LineSplice {
    /// Returns true if no line starts were added or removed.
    pub fn preserves_line_count(&self) -> bool {
        self.removed == self.inserted
    }
}

/// A single replacement of `range` (pre-edit coordinates) by `new_len` chars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRecord {
    pub range: Range<usize>,
    pub new_len: usize,
    pub line_splice: LineSplice,
}

impl EditRecord {
    /// The replaced span in post-edit coordinates.
    pub fn new_range(&self) -> Range<usize> {
        self.range.start..self.range.start + self.new_len
    }

    /// Signed change in buffer length.
    pub fn delta(&self) -> isize {
        self.new_len as isize - self.range.len() as isize
    }
}

/// A change notification published to buffer subscribers.
///
/// Subscribers receive the record and pull current content or attributes
/// from the buffer when they need them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BufferChange {
    /// Nothing changed (e.g. an empty edit or a no-op conversion).
    #[default]
    None,
    /// A localized edit.
    Edited(EditRecord),
    /// Content, line structure and attributes were all replaced.
    WholeBuffer { new_len: usize },
}

impl BufferChange {
    /// Returns true if nothing changed.
    pub fn is_none(&self) -> bool {
        matches!(self, BufferChange::None)
    }

    /// The edit record, for localized edits.
    pub fn as_edit(&self) -> Option<&EditRecord> {
        match self {
            BufferChange::Edited(record) => Some(record),
            _ => None,
        }
    }
}
