// Chunk: docs/chunks/incremental_highlighting - Incremental regex-rule highlighting

//! Dirty range bookkeeping for the highlighter.

use std::ops::Range;

/// A set of char offsets stored as sorted, disjoint, non-adjacent,
/// non-empty half-open ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirtySet {
    ranges: Vec<Range<usize>>,
}

impl DirtySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// The lowest dirty range.
    pub fn first(&self) -> Option<Range<usize>> {
        self.ranges.first().cloned()
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    pub fn contains(&self, offset: usize) -> bool {
        let index = self.ranges.partition_point(|r| r.end <= offset);
        self.ranges.get(index).is_some_and(|r| r.start <= offset)
    }

    /// Returns true if any dirty offset lies in `range`.
    pub fn intersects(&self, range: Range<usize>) -> bool {
        if range.is_empty() {
            return false;
        }
        let index = self.ranges.partition_point(|r| r.end <= range.start);
        self.ranges.get(index).is_some_and(|r| r.start < range.end)
    }

    /// Adds `range`, merging with overlapping or adjacent ranges.
    pub fn insert(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let first = self.ranges.partition_point(|r| r.end < range.start);
        let last = self.ranges.partition_point(|r| r.start <= range.end);
        let mut merged = range;
        if first < last {
            merged.start = merged.start.min(self.ranges[first].start);
            merged.end = merged.end.max(self.ranges[last - 1].end);
        }
        self.ranges.splice(first..last, std::iter::once(merged));
    }

    /// Removes every offset in `range`.
    pub fn remove(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let first = self.ranges.partition_point(|r| r.end <= range.start);
        let last = self.ranges.partition_point(|r| r.start < range.end);
        if first >= last {
            return;
        }
        let mut kept = Vec::with_capacity(2);
        let head = self.ranges[first].start..range.start;
        let tail = range.end..self.ranges[last - 1].end;
        if !head.is_empty() {
            kept.push(head);
        }
        if !tail.is_empty() {
            kept.push(tail);
        }
        self.ranges.splice(first..last, kept);
    }

    /// Maps the set through the replacement of `edited` by `new_len` chars.
    ///
    /// Ranges before the edit are unchanged and ranges after it shift by
    /// the length delta. A range overlapping the edit grows to cover the
    /// replacement text.
    pub fn apply_edit(&mut self, edited: Range<usize>, new_len: usize) {
        let new_end = edited.start + new_len;
        let map_start = |offset: usize| {
            if offset <= edited.start {
                offset
            } else if offset >= edited.end {
                offset - edited.end + new_end
            } else {
                edited.start
            }
        };
        let map_end = |offset: usize| {
            if offset <= edited.start {
                offset
            } else if offset >= edited.end {
                offset - edited.end + new_end
            } else {
                new_end
            }
        };

        let old = std::mem::take(&mut self.ranges);
        for range in old {
            self.insert(map_start(range.start)..map_end(range.end));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ranges: &[Range<usize>]) -> DirtySet {
        let mut dirty = DirtySet::new();
        for r in ranges {
            dirty.insert(r.clone());
        }
        dirty
    }

    // ==================== insert ====================

    #[test]
    fn test_insert_merges_overlapping_and_adjacent() {
        let dirty = set(&[10..12, 2..4, 4..6, 11..15]);
        assert_eq!(dirty.ranges(), &[2..6, 10..15]);
    }

    #[test]
    fn test_insert_spanning_many() {
        let dirty = set(&[1..2, 4..5, 7..8, 0..10]);
        assert_eq!(dirty.ranges(), &[0..10]);
    }

    #[test]
    fn test_insert_empty_is_ignored() {
        let dirty = set(&[3..3]);
        assert!(dirty.is_empty());
    }

    // ==================== remove ====================

    #[test]
    fn test_remove_splits() {
        let mut dirty = set(&[0..10]);
        dirty.remove(3..5);
        assert_eq!(dirty.ranges(), &[0..3, 5..10]);
    }

    #[test]
    fn test_remove_across_ranges() {
        let mut dirty = set(&[0..4, 6..8, 10..14]);
        dirty.remove(2..12);
        assert_eq!(dirty.ranges(), &[0..2, 12..14]);
        dirty.remove(0..20);
        assert!(dirty.is_empty());
    }

    // ==================== queries ====================

    #[test]
    fn test_contains_and_intersects() {
        let dirty = set(&[2..4, 8..9]);
        assert!(!dirty.contains(1));
        assert!(dirty.contains(2));
        assert!(dirty.contains(3));
        assert!(!dirty.contains(4));
        assert!(dirty.intersects(0..3));
        assert!(!dirty.intersects(4..8));
        assert!(dirty.intersects(4..9));
        assert_eq!(dirty.first(), Some(2..4));
    }

    // ==================== apply_edit ====================

    #[test]
    fn test_apply_edit_shifts_following() {
        let mut dirty = set(&[0..2, 10..12]);
        dirty.apply_edit(5..5, 3);
        assert_eq!(dirty.ranges(), &[0..2, 13..15]);
    }

    #[test]
    fn test_apply_edit_deletion_clips() {
        let mut dirty = set(&[2..6, 10..12]);
        dirty.apply_edit(4..11, 0);
        assert_eq!(dirty.ranges(), &[2..5]);
    }

    #[test]
    fn test_apply_edit_overlap_covers_replacement() {
        let mut dirty = set(&[3..5]);
        dirty.apply_edit(4..8, 6);
        assert_eq!(dirty.ranges(), &[3..10]);
    }

    #[test]
    fn test_apply_edit_range_inside_deletion_vanishes() {
        let mut dirty = set(&[5..7]);
        dirty.apply_edit(4..8, 0);
        assert!(dirty.is_empty());
    }
}
