// Chunk: docs/chunks/incremental_highlighting - Incremental regex-rule highlighting

//! Incremental highlighter driving the line lexer over a [`TextBuffer`].
//!
//! The highlighter records the [`LexState`] at the start of every line. An
//! edit invalidates the states of the lines it replaced and marks the edited
//! span dirty. A pass restarts at the nearest line at or before the first
//! dirty offset whose start state is known, tokenizes line by line, paints
//! the buffer, and stops once it reaches a line that is not dirty and whose
//! recorded start state equals the state the pass arrived with. Everything
//! downstream of that point was lexed from the same state over the same
//! text, so its attributes are still current.
//!
//! Work is bounded per [`SyntaxHighlighter::step`] call. A pass that runs out
//! of budget is remembered together with the edit generation it ran under and
//! keeps its next line in the dirty set; a later change bumps the generation,
//! and the remembered pass is dropped instead of being resumed.

use std::ops::Range;
use std::sync::Arc;

use dux_buffer::{AttributeRun, BufferChange, EditRecord, Result, TextBuffer};

use crate::dirty::DirtySet;
use crate::grammar::LanguageGrammar;
use crate::lexer::{tokenize_line, LexState};
use crate::theme::SyntaxTheme;

/// Where the highlighter stands relative to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightStatus {
    /// Every offset carries current attributes.
    #[default]
    Idle,
    /// Some ranges await re-tokenization and no pass is in flight.
    Dirty,
    /// A pass stopped mid-way and resumes on the next step.
    Tokenizing,
}

/// What one call to [`SyntaxHighlighter::step`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightProgress {
    pub lines_tokenized: usize,
    /// Smallest range covering every repainted line, if any.
    pub repainted: Option<Range<usize>>,
    pub status: HighlightStatus,
}

impl HighlightProgress {
    fn record(&mut self, range: Range<usize>) {
        self.lines_tokenized += 1;
        self.repainted = Some(match self.repainted.take() {
            Some(r) => r.start.min(range.start)..r.end.max(range.end),
            None => range,
        });
    }
}

/// A pass interrupted by the line budget.
#[derive(Debug, Clone)]
struct Pass {
    generation: u64,
    line: usize,
    state: LexState,
}

/// Incremental syntax highlighter for one buffer.
pub struct SyntaxHighlighter {
    grammar: Arc<LanguageGrammar>,
    theme: SyntaxTheme,
    /// Lex state at each line start; `None` for lines an edit inserted.
    /// Line 0 always starts in the initial state.
    line_states: Vec<Option<LexState>>,
    dirty: DirtySet,
    /// Bumped by every change the highlighter is told about.
    generation: u64,
    pass: Option<Pass>,
}

impl SyntaxHighlighter {
    /// Creates a highlighter for a single-line (e.g. empty) buffer.
    ///
    /// Call [`SyntaxHighlighter::reset`] before use with a buffer that
    /// already holds content.
    pub fn new(grammar: Arc<LanguageGrammar>, theme: SyntaxTheme) -> Self {
        Self {
            grammar,
            theme,
            line_states: vec![Some(LexState::initial())],
            dirty: DirtySet::new(),
            generation: 0,
            pass: None,
        }
    }

    pub fn grammar(&self) -> &Arc<LanguageGrammar> {
        &self.grammar
    }

    pub fn theme(&self) -> &SyntaxTheme {
        &self.theme
    }

    /// Replaces the grammar and marks the whole buffer dirty.
    pub fn set_grammar(&mut self, grammar: Arc<LanguageGrammar>, buffer: &TextBuffer) {
        log::debug!(
            "switching grammar {} -> {}",
            self.grammar.identifier(),
            grammar.identifier()
        );
        self.grammar = grammar;
        self.reset(buffer);
    }

    /// Forgets every recorded state and marks the whole buffer dirty.
    pub fn reset(&mut self, buffer: &TextBuffer) {
        let mut states = vec![None; buffer.line_count().max(1)];
        states[0] = Some(LexState::initial());
        self.line_states = states;
        self.dirty.clear();
        self.dirty.insert(0..buffer.len());
        self.generation += 1;
        self.pass = None;
    }

    /// Updates the bookkeeping for a change the buffer has already applied.
    pub fn apply_change(&mut self, change: &BufferChange, buffer: &TextBuffer) {
        match change {
            BufferChange::None => {}
            BufferChange::WholeBuffer { .. } => self.reset(buffer),
            BufferChange::Edited(record) => self.apply_edit(record, buffer),
        }
    }

    fn apply_edit(&mut self, record: &EditRecord, buffer: &TextBuffer) {
        self.generation += 1;
        self.dirty.apply_edit(record.range.clone(), record.new_len);

        let splice = record.line_splice;
        let from = splice.first_line + 1;
        let to = from + splice.removed;
        if to > self.line_states.len() {
            log::warn!(
                "edit replaced lines {}..{} but only {} are tracked; re-highlighting everything",
                from,
                to,
                self.line_states.len()
            );
            self.reset(buffer);
            return;
        }
        self.line_states
            .splice(from..to, std::iter::repeat(None).take(splice.inserted));
        if self.line_states.len() != buffer.line_count() {
            log::warn!(
                "tracking {} lines for a buffer of {}; re-highlighting everything",
                self.line_states.len(),
                buffer.line_count()
            );
            self.reset(buffer);
            return;
        }

        let new_range = record.new_range();
        self.mark_edited(buffer, new_range.start, new_range.end);
    }

    /// Marks `[start, end)` dirty, widened to the token runs touching it.
    fn mark_edited(&mut self, buffer: &TextBuffer, start: usize, end: usize) {
        let len = buffer.len();
        if len == 0 {
            return;
        }
        let (mut lo, mut hi) = (start, end);
        if lo == hi {
            // A deletion still changes what the lexer sees at the join.
            if hi < len {
                hi += 1;
            } else {
                lo -= 1;
            }
        }

        let runs = buffer.attribute_runs();
        if start > 0 {
            let line_start = buffer
                .line_range(buffer.line_at_offset(start - 1))
                .map_or(0, |r| r.start);
            if let Some(run) = runs
                .run_at(start - 1)
                .filter(|run| run.attrs.category.is_some())
            {
                lo = lo.min(run.start.max(line_start));
            }
            if buffer.char_at(start - 1) == Some('\r') {
                lo = lo.min(start - 1);
            }
        }
        if end < len {
            let line_end = buffer
                .line_range(buffer.line_at_offset(end))
                .map_or(len, |r| r.end);
            if let Some(run) = runs.run_at(end).filter(|run| run.attrs.category.is_some()) {
                hi = hi.max(run.end.min(line_end));
            }
        }
        self.dirty.insert(lo..hi);
    }

    pub fn status(&self) -> HighlightStatus {
        if self
            .pass
            .as_ref()
            .is_some_and(|pass| pass.generation == self.generation)
        {
            HighlightStatus::Tokenizing
        } else if self.dirty.is_empty() {
            HighlightStatus::Idle
        } else {
            HighlightStatus::Dirty
        }
    }

    pub fn dirty_ranges(&self) -> &[Range<usize>] {
        self.dirty.ranges()
    }

    /// Returns true if the attributes at `offset` may not be current yet.
    ///
    /// Everything from the first dirty offset onwards may still change,
    /// since a pass can carry a new lex state past the dirty ranges.
    pub fn is_stale(&self, offset: usize) -> bool {
        self.dirty.first().is_some_and(|r| offset >= r.start)
    }

    /// Tokenizes at most `max_lines` lines (at least one) and paints them.
    pub fn step(&mut self, buffer: &mut TextBuffer, max_lines: usize) -> Result<HighlightProgress> {
        let budget = max_lines.max(1);
        if self.line_states.len() != buffer.line_count() {
            log::warn!(
                "highlighter out of sync ({} lines tracked, {} in buffer); resetting",
                self.line_states.len(),
                buffer.line_count()
            );
            self.reset(buffer);
        }

        let mut progress = HighlightProgress::default();
        while progress.lines_tokenized < budget {
            let Some((line, state)) = self.next_pass(buffer) else {
                break;
            };
            self.run_pass(buffer, line, state, budget, &mut progress)?;
        }
        progress.status = self.status();
        Ok(progress)
    }

    /// Runs until every dirty range is tokenized.
    pub fn settle(&mut self, buffer: &mut TextBuffer) -> Result<HighlightProgress> {
        self.step(buffer, usize::MAX)
    }

    /// Picks the line and state the next pass starts from.
    fn next_pass(&mut self, buffer: &TextBuffer) -> Option<(usize, LexState)> {
        if let Some(pass) = self.pass.take() {
            if pass.generation == self.generation {
                return Some((pass.line, pass.state));
            }
            log::debug!(
                "discarding pass superseded at line {} (generation {} < {})",
                pass.line,
                pass.generation,
                self.generation
            );
        }

        self.dirty.remove(buffer.len()..usize::MAX);
        let first = self.dirty.first()?;
        let mut line = buffer.line_at_offset(first.start);
        while line > 0 && self.line_states[line].is_none() {
            line -= 1;
        }
        let state = self.line_states[line].clone().unwrap_or_default();
        log::trace!("pass starts at line {} for dirty {:?}", line, first);
        Some((line, state))
    }

    /// Tokenizes from `line` until the pass converges, reaches the end of
    /// the buffer or spends the budget, then paints every tokenized line
    /// with one attribute replacement.
    fn run_pass(
        &mut self,
        buffer: &mut TextBuffer,
        line: usize,
        state: LexState,
        budget: usize,
        progress: &mut HighlightProgress,
    ) -> Result<()> {
        let mut painted: Vec<AttributeRun> = Vec::new();
        self.tokenize_pass(buffer, line, state, budget, progress, &mut painted);
        let span = painted
            .first()
            .zip(painted.last())
            .map(|(first, last)| first.start..last.end);
        if let Some(span) = span {
            buffer.replace_attributes(span, painted)?;
        }
        Ok(())
    }

    fn tokenize_pass(
        &mut self,
        buffer: &TextBuffer,
        mut line: usize,
        mut state: LexState,
        budget: usize,
        progress: &mut HighlightProgress,
        painted: &mut Vec<AttributeRun>,
    ) {
        loop {
            let Some(range) = buffer.line_range(line) else {
                log::trace!("pass reached the end of the buffer");
                return;
            };
            if progress.lines_tokenized >= budget {
                self.dirty.insert(range);
                self.pass = Some(Pass {
                    generation: self.generation,
                    line,
                    state,
                });
                return;
            }

            let text = buffer.slice(range.clone());
            painted.extend(
                tokenize_line(&self.grammar, &text, &mut state)
                    .into_iter()
                    .map(|token| AttributeRun {
                        start: range.start + token.start,
                        end: range.start + token.end,
                        attrs: self.theme.attributes(token.category),
                    }),
            );
            self.dirty.remove(range.clone());
            progress.record(range);

            let next = line + 1;
            let Some(next_range) = buffer.line_range(next) else {
                log::trace!("pass reached the end of the buffer");
                return;
            };
            let slot = &mut self.line_states[next];
            if slot.as_ref() == Some(&state) && !self.dirty.intersects(next_range) {
                log::trace!("pass converged at line {}", next);
                return;
            }
            *slot = Some(state.clone());
            line = next;
        }
    }
}

impl std::fmt::Debug for SyntaxHighlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxHighlighter")
            .field("grammar", &self.grammar.identifier())
            .field("lines", &self.line_states.len())
            .field("dirty", &self.dirty)
            .field("generation", &self.generation)
            .field("status", &self.status())
            .finish()
    }
}
