// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing

//! Line index for tracking line boundaries in the text buffer.
//!
//! Maintains an array of line start offsets for O(1) line count and O(log n)
//! offset-to-line lookup. All three terminator conventions end a line; a CRLF
//! pair is one terminator and belongs to the line it ends.

/// Returns true if a line starts at the character following `prev`, given
/// that `next` is the character at that position.
pub(crate) fn starts_line_after(prev: char, next: Option<char>) -> bool {
    match prev {
        '\n' => true,
        '\r' => next != Some('\n'),
        _ => false,
    }
}

/// Tracks line boundaries in a text buffer.
///
/// `line_starts[0] == 0` always; every other entry is the offset of the
/// first character after a terminator.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Creates a new line index with a single empty line.
    pub fn new() -> Self {
        Self {
            line_starts: vec![0],
        }
    }

    /// Rebuilds the line index from the given content.
    ///
    /// This is O(n) where n is the content length, but should only be needed
    /// for bulk operations like loading a file or converting newlines.
    pub fn rebuild<I>(&mut self, content: I)
    where
        I: IntoIterator<Item = char>,
    {
        self.line_starts.clear();
        self.line_starts.push(0);

        let mut offset = 0;
        let mut prev: Option<char> = None;
        for ch in content {
            if let Some(p) = prev {
                if starts_line_after(p, Some(ch)) {
                    self.line_starts.push(offset);
                }
            }
            prev = Some(ch);
            offset += 1;
        }
        if let Some(p) = prev {
            if starts_line_after(p, None) {
                self.line_starts.push(offset);
            }
        }
    }

    /// Returns the number of lines in the buffer.
    ///
    /// A buffer always has at least one line (even if empty). Content that
    /// ends with a terminator has a final empty line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the character offset where the given line starts.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Returns the offset just past the given line, including its terminator.
    ///
    /// `total_len` is the total number of characters in the buffer.
    pub fn line_end(&self, line: usize, total_len: usize) -> Option<usize> {
        if line >= self.line_count() {
            return None;
        }
        Some(self.line_starts.get(line + 1).copied().unwrap_or(total_len))
    }

    /// Returns the line number containing the given character offset.
    ///
    /// Uses binary search for O(log n) lookup.
    pub fn line_at_offset(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        }
    }

    /// Returns the index of the first line whose start is strictly after `offset`.
    pub fn first_line_after(&self, offset: usize) -> usize {
        self.line_starts.partition_point(|&start| start <= offset)
    }

    /// Replaces lines `keep_through + 1 .. tail_from` with `new_starts` and
    /// shifts every line from `tail_from` onwards by `delta`.
    ///
    /// `new_starts` must be ascending, greater than `line_starts[keep_through]`
    /// and smaller than the shifted start of `tail_from`.
    pub fn splice(&mut self, keep_through: usize, tail_from: usize, new_starts: &[usize], delta: isize) {
        let tail_from = tail_from.max(keep_through + 1);
        for start in self.line_starts[tail_from..].iter_mut() {
            *start = start.wrapping_add_signed(delta);
        }
        self.line_starts
            .splice(keep_through + 1..tail_from, new_starts.iter().copied());
    }

    /// Returns the raw line_starts array (for debug validation).
    #[cfg(any(debug_assertions, test))]
    pub fn line_starts(&self) -> &[usize] {
        &self.line_starts
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(text: &str) -> LineIndex {
        let mut index = LineIndex::new();
        index.rebuild(text.chars());
        index
    }

    #[test]
    fn test_new() {
        let index = LineIndex::new();
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_start(0), Some(0));
    }

    #[test]
    fn test_rebuild_empty() {
        let index = index_of("");
        assert_eq!(index.line_starts(), &[0]);
    }

    #[test]
    fn test_rebuild_lf() {
        let index = index_of("hello\nworld\n");
        assert_eq!(index.line_starts(), &[0, 6, 12]);
    }

    #[test]
    fn test_rebuild_crlf_is_one_terminator() {
        let index = index_of("ab\r\ncd\r\n");
        assert_eq!(index.line_starts(), &[0, 4, 8]);
    }

    #[test]
    fn test_rebuild_cr_and_mixed() {
        let index = index_of("a\rb\nc\r\nd\r");
        assert_eq!(index.line_starts(), &[0, 2, 4, 7, 9]);
    }

    #[test]
    fn test_rebuild_lf_cr_is_two_lines() {
        let index = index_of("a\n\rb");
        assert_eq!(index.line_starts(), &[0, 2, 3]);
    }

    #[test]
    fn test_line_end_includes_terminator() {
        let index = index_of("hello\r\nworld");
        assert_eq!(index.line_end(0, 12), Some(7));
        assert_eq!(index.line_end(1, 12), Some(12));
        assert_eq!(index.line_end(2, 12), None);
    }

    #[test]
    fn test_line_at_offset() {
        let index = index_of("hello\nworld\nfoo");
        assert_eq!(index.line_at_offset(0), 0);
        assert_eq!(index.line_at_offset(5), 0); // '\n'
        assert_eq!(index.line_at_offset(6), 1); // 'w'
        assert_eq!(index.line_at_offset(12), 2); // 'f'
        assert_eq!(index.line_at_offset(15), 2); // end of buffer
    }

    #[test]
    fn test_first_line_after() {
        let index = index_of("ab\ncd\nef");
        assert_eq!(index.first_line_after(0), 1);
        assert_eq!(index.first_line_after(2), 1);
        assert_eq!(index.first_line_after(3), 2);
        assert_eq!(index.first_line_after(100), 3);
    }

    #[test]
    fn test_splice_inserts_and_shifts() {
        // "ab\ncd" -> insert "X\nY" at 1 -> "aX\nYb\ncd"
        let mut index = index_of("ab\ncd");
        index.splice(0, 1, &[3], 3);
        assert_eq!(index.line_starts(), index_of("aX\nYb\ncd").line_starts());
    }

    #[test]
    fn test_splice_removes_lines() {
        // "a\nb\nc\nd" -> delete 1..5 ("\nb\nc") -> "a\nd"
        let mut index = index_of("a\nb\nc\nd");
        index.splice(0, 3, &[], -4);
        assert_eq!(index.line_starts(), &[0, 2]);
    }
}
