// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing

//! Character storage for [`crate::TextBuffer`].
//!
//! Content is kept as `char`s so that every position is a char offset, the
//! coordinate system used throughout the engine. The gap sits at the last
//! edit; replacing a range moves it there first, so runs of nearby edits
//! only shift the characters between them.

use std::fmt::Write;

const INITIAL_GAP_SIZE: usize = 64;
const GAP_GROWTH_FACTOR: usize = 2;

/// A `char` gap buffer: `[before gap | gap | after gap]`.
#[derive(Debug)]
pub struct GapBuffer {
    /// The underlying storage. Contains [pre-gap content | gap | post-gap content].
    data: Vec<char>,
    /// Index where the gap starts (first unused position).
    gap_start: usize,
    /// Index where the gap ends (first used position after gap).
    gap_end: usize,
}

impl GapBuffer {
    /// Creates a new empty gap buffer.
    pub fn new() -> Self {
        Self {
            data: vec!['\0'; INITIAL_GAP_SIZE],
            gap_start: 0,
            gap_end: INITIAL_GAP_SIZE,
        }
    }

    /// Creates a gap buffer initialized with the given text.
    pub fn from_str(text: &str) -> Self {
        let mut data: Vec<char> = text.chars().collect();
        let len = data.len();
        let capacity = len + INITIAL_GAP_SIZE;
        data.resize(capacity, '\0');

        Self {
            data,
            gap_start: len,
            gap_end: capacity,
        }
    }

    /// Returns the logical length of the buffer (excluding the gap).
    pub fn len(&self) -> usize {
        self.data.len() - self.gap_len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Moves the gap to the specified logical position.
    ///
    /// This is O(distance) where distance is the absolute difference between
    /// the current gap position and the target position.
    pub fn move_gap_to(&mut self, pos: usize) {
        let pos = pos.min(self.len());

        if pos < self.gap_start {
            let shift = self.gap_start - pos;
            self.data.copy_within(pos..self.gap_start, self.gap_end - shift);
            self.gap_start = pos;
            self.gap_end -= shift;
        } else if pos > self.gap_start {
            let shift = pos - self.gap_start;
            self.data.copy_within(self.gap_end..self.gap_end + shift, self.gap_start);
            self.gap_start += shift;
            self.gap_end += shift;
        }
    }

    /// Ensures the gap is at least the specified size.
    ///
    /// Grows the gap in place so that the gap position is preserved;
    /// `insert_str` relies on the gap staying where `move_gap_to` left it.
    fn ensure_gap(&mut self, min_size: usize) {
        if self.gap_len() >= min_size {
            return;
        }

        let needed = min_size - self.gap_len();
        let growth = needed.max(self.data.len() * GAP_GROWTH_FACTOR);

        let old_gap_end = self.gap_end;
        let old_len = self.data.len();
        let post_gap_len = old_len - old_gap_end;

        let new_size = old_len + growth;
        self.data.resize(new_size, '\0');

        if post_gap_len > 0 {
            let new_post_gap_start = new_size - post_gap_len;
            self.data.copy_within(old_gap_end..old_len, new_post_gap_start);
        }

        self.gap_end = new_size - post_gap_len;
    }

    /// Inserts a string at the current gap position.
    pub fn insert_str(&mut self, s: &str) {
        let count = s.chars().count();
        self.ensure_gap(count);
        for ch in s.chars() {
            self.data[self.gap_start] = ch;
            self.gap_start += 1;
        }
    }

    /// Removes up to `count` characters after the gap, returning how many
    /// were removed.
    pub fn delete_forward(&mut self, count: usize) -> usize {
        let available = self.data.len() - self.gap_end;
        let removed = count.min(available);
        self.gap_end += removed;
        removed
    }

    /// Replaces `start..end` with `text`, leaving the gap after the inserted text.
    pub fn replace(&mut self, start: usize, end: usize, text: &str) {
        self.move_gap_to(start);
        self.delete_forward(end.saturating_sub(start));
        self.insert_str(text);
    }

    /// Maps a logical position to its index in `data`.
    fn physical(&self, pos: usize) -> usize {
        if pos < self.gap_start {
            pos
        } else {
            pos + self.gap_len()
        }
    }

    pub fn char_at(&self, pos: usize) -> Option<char> {
        (pos < self.len()).then(|| self.data[self.physical(pos)])
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars_in(0, self.len())
    }

    /// Iterates the characters of `start..end`, clamped to the buffer,
    /// without walking the part before `start`.
    pub fn chars_in(&self, start: usize, end: usize) -> impl Iterator<Item = char> + '_ {
        let end = end.min(self.len());
        let start = start.min(end);
        let (front, back) = self.segments();
        let split = front.len();
        let head = &front[start.min(split)..end.min(split)];
        let tail = &back[start.max(split) - split..end.max(split) - split];
        head.iter().chain(tail.iter()).copied()
    }

    /// Returns `start..end` as a String, clamped to the buffer.
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.chars_in(start, end).collect()
    }

    /// The stored characters as the two contiguous halves around the gap.
    fn segments(&self) -> (&[char], &[char]) {
        (&self.data[..self.gap_start], &self.data[self.gap_end..])
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GapBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.chars().try_for_each(|ch| f.write_char(ch))
    }
}
