// Chunk: docs/chunks/attribute_runs - Per-character display attributes

//! Range-tagged attributes over buffer content.
//!
//! [`AttributeRuns`] stores a sorted list of half-open runs that always
//! partition `[0, len)` of the buffer: no gaps, no overlaps, no empty runs,
//! and no two neighbouring runs with equal attributes. Edits splice the run
//! list in the same step that changes the text, so the partition never
//! disagrees with the content length.

use serde::{Deserialize, Serialize};

use crate::style::Style;

/// The lexical category a highlighter assigns to a span of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    Keyword,
    Type,
    Function,
    String,
    Escape,
    Number,
    Constant,
    Comment,
    Operator,
    Punctuation,
    Preprocessor,
    Tag,
    Attribute,
    Variable,
    Heading,
    Emphasis,
    /// Text no rule recognized.
    Plain,
}

impl TokenCategory {
    /// All categories, in declaration order.
    pub const ALL: [TokenCategory; 17] = [
        TokenCategory::Keyword,
        TokenCategory::Type,
        TokenCategory::Function,
        TokenCategory::String,
        TokenCategory::Escape,
        TokenCategory::Number,
        TokenCategory::Constant,
        TokenCategory::Comment,
        TokenCategory::Operator,
        TokenCategory::Punctuation,
        TokenCategory::Preprocessor,
        TokenCategory::Tag,
        TokenCategory::Attribute,
        TokenCategory::Variable,
        TokenCategory::Heading,
        TokenCategory::Emphasis,
        TokenCategory::Plain,
    ];

    /// The lowercase name used in configuration and grammar files.
    pub fn name(&self) -> &'static str {
        match self {
            TokenCategory::Keyword => "keyword",
            TokenCategory::Type => "type",
            TokenCategory::Function => "function",
            TokenCategory::String => "string",
            TokenCategory::Escape => "escape",
            TokenCategory::Number => "number",
            TokenCategory::Constant => "constant",
            TokenCategory::Comment => "comment",
            TokenCategory::Operator => "operator",
            TokenCategory::Punctuation => "punctuation",
            TokenCategory::Preprocessor => "preprocessor",
            TokenCategory::Tag => "tag",
            TokenCategory::Attribute => "attribute",
            TokenCategory::Variable => "variable",
            TokenCategory::Heading => "heading",
            TokenCategory::Emphasis => "emphasis",
            TokenCategory::Plain => "plain",
        }
    }

    /// Parses a lowercase category name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }
}

/// The attribute set attached to a run of characters.
///
/// The default set (no category, default style) covers text that has not
/// been tokenized or was reset by a whole-buffer operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Attributes {
    pub category: Option<TokenCategory>,
    pub style: Style,
}

impl Attributes {
    pub fn new(category: TokenCategory, style: Style) -> Self {
        Self {
            category: Some(category),
            style,
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Attributes::default()
    }
}

/// A half-open character range `[start, end)` carrying one attribute set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeRun {
    pub start: usize,
    pub end: usize,
    pub attrs: Attributes,
}

impl AttributeRun {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// The ordered run list partitioning a buffer's content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeRuns {
    runs: Vec<AttributeRun>,
}

impl AttributeRuns {
    /// An empty run list, which partitions a zero-length buffer.
    pub fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// A single default run covering `[0, len)`.
    pub fn with_len(len: usize) -> Self {
        let mut runs = Self::new();
        runs.reset(len);
        runs
    }

    /// Replaces every run with one default run spanning `[0, len)`.
    pub fn reset(&mut self, len: usize) {
        self.runs.clear();
        if len > 0 {
            self.runs.push(AttributeRun {
                start: 0,
                end: len,
                attrs: Attributes::default(),
            });
        }
    }

    /// The length covered by the runs.
    pub fn len(&self) -> usize {
        self.runs.last().map_or(0, |run| run.end)
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn runs(&self) -> &[AttributeRun] {
        &self.runs
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeRun> {
        self.runs.iter()
    }

    /// Returns the run containing `offset`.
    pub fn run_at(&self, offset: usize) -> Option<&AttributeRun> {
        let index = self.runs.partition_point(|run| run.end <= offset);
        self.runs.get(index).filter(|run| run.contains(offset))
    }

    /// Returns the attributes covering `offset`.
    pub fn at(&self, offset: usize) -> Option<Attributes> {
        self.run_at(offset).map(|run| run.attrs)
    }

    /// Replaces `[start, end)` with `new_len` characters of default attributes.
    ///
    /// Runs that begin at or after `end` shift by `new_len - (end - start)`.
    /// A run straddling an edge of the range keeps its attributes on the
    /// part outside the range.
    pub fn splice(&mut self, start: usize, end: usize, new_len: usize) {
        debug_assert!(start <= end && end <= self.len());
        self.split_at(start);
        self.split_at(end);
        let first = self.runs.partition_point(|run| run.start < start);
        let last = self.runs.partition_point(|run| run.start < end);

        let removed = end - start;
        for run in &mut self.runs[last..] {
            run.start = run.start - removed + new_len;
            run.end = run.end - removed + new_len;
        }

        let inserted = (new_len > 0).then_some(AttributeRun {
            start,
            end: start + new_len,
            attrs: Attributes::default(),
        });
        let count = usize::from(new_len > 0);
        self.runs.splice(first..last, inserted);
        if count > 0 {
            self.merge_at(first + count);
        }
        self.merge_at(first);
    }

    /// Assigns `attrs` to `[start, end)`, leaving the rest untouched.
    ///
    /// The range must lie within the covered length.
    pub fn paint(&mut self, start: usize, end: usize, attrs: Attributes) {
        self.replace_range(start, end, std::iter::once(AttributeRun { start, end, attrs }));
    }

    /// Replaces the runs covering `[start, end)` with `runs`.
    ///
    /// `runs` must tile the range in order. Equal neighbours among them are
    /// merged, and the result is joined to the surrounding runs at the two
    /// edges only, so the cost is one splice of the run list.
    pub fn replace_range<I>(&mut self, start: usize, end: usize, runs: I)
    where
        I: IntoIterator<Item = AttributeRun>,
    {
        debug_assert!(start <= end && end <= self.len());
        if start >= end {
            return;
        }

        let mut replacement: Vec<AttributeRun> = Vec::new();
        for run in runs.into_iter().filter(|run| !run.is_empty()) {
            match replacement.last_mut() {
                Some(last) if last.attrs == run.attrs && last.end == run.start => last.end = run.end,
                _ => replacement.push(run),
            }
        }
        debug_assert!(
            replacement.first().map(|r| r.start) == Some(start)
                && replacement.last().map(|r| r.end) == Some(end)
                && replacement.windows(2).all(|w| w[0].end == w[1].start),
            "replacement runs must tile {}..{}",
            start,
            end
        );

        self.split_at(start);
        self.split_at(end);
        let first = self.runs.partition_point(|run| run.start < start);
        let last = self.runs.partition_point(|run| run.start < end);
        let count = replacement.len();
        self.runs.splice(first..last, replacement);
        self.merge_at(first + count);
        self.merge_at(first);
    }

    /// Returns true if the runs exactly partition `[0, len)` and no two
    /// neighbours could be merged.
    pub fn is_partition_of(&self, len: usize) -> bool {
        if len == 0 {
            return self.runs.is_empty();
        }
        let mut expected_start = 0;
        let mut previous: Option<&Attributes> = None;
        for run in &self.runs {
            if run.start != expected_start || run.is_empty() {
                return false;
            }
            if previous == Some(&run.attrs) {
                return false;
            }
            expected_start = run.end;
            previous = Some(&run.attrs);
        }
        expected_start == len
    }

    /// Ensures a run boundary exists at `offset`.
    fn split_at(&mut self, offset: usize) {
        let index = self.runs.partition_point(|run| run.end <= offset);
        if let Some(run) = self.runs.get_mut(index) {
            if run.start < offset {
                let right = AttributeRun {
                    start: offset,
                    end: run.end,
                    attrs: run.attrs,
                };
                run.end = offset;
                self.runs.insert(index + 1, right);
            }
        }
    }

    /// Merges the run at `index` into its left neighbour if their attributes
    /// match.
    fn merge_at(&mut self, index: usize) {
        if index == 0 || index >= self.runs.len() {
            return;
        }
        let (left, right) = (self.runs[index - 1], self.runs[index]);
        if left.attrs == right.attrs && left.end == right.start {
            self.runs[index - 1].end = right.end;
            self.runs.remove(index);
        }
    }
}
