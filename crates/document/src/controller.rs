// Chunk: docs/chunks/document_controller - Document orchestration over buffer and highlighter

//! The single owner of one document's buffer and highlighter.
//!
//! Every mutation goes through [`DocumentController`], which forwards the
//! resulting [`BufferChange`] to the highlighter before returning. Readers
//! therefore never see a buffer whose attribute runs were shifted by an edit
//! that the highlighter has not yet recorded as dirty.
//!
//! Loading is two-phase. [`DocumentController::open`] keeps the raw bytes
//! pending until a storage sink exists; [`DocumentController::attach_storage`]
//! provides one. Whichever happens second materializes the buffer.

use std::ops::Range;
use std::sync::Arc;

use crossbeam_channel::Receiver;
use dux_buffer::newline::{self, NewlineCounts};
use dux_buffer::{Attributes, BufferChange, BufferError, LineEndings, NewlineStyle, TextBuffer};
use dux_syntax::{
    HighlightProgress, HighlightStatus, LanguageGrammar, LanguageRegistry, SyntaxHighlighter,
    SyntaxTheme,
};

use crate::config::EngineConfig;
use crate::error::{DocumentError, Result};

/// Attributes at an offset, with whether they may still change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeLookup {
    pub attributes: Attributes,
    /// True while the offset lies at or after pending re-tokenization work.
    pub stale: bool,
}

/// The terminator counts of the current content, for a status display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineEndingsInUse {
    /// The most frequent terminator, or `None` without any terminators.
    pub most_common: Option<NewlineStyle>,
    pub counts: NewlineCounts,
}

pub struct DocumentController {
    config: EngineConfig,
    registry: Arc<LanguageRegistry>,
    buffer: TextBuffer,
    highlighter: SyntaxHighlighter,
    /// Raw content waiting for storage.
    pending: Option<Vec<u8>>,
    storage_attached: bool,
    /// Terminator used for typed text; independent of the buffer's own
    /// detected convention.
    active_newline: NewlineStyle,
    filename: Option<String>,
}

impl DocumentController {
    /// Creates an empty document backed by the process-wide registry.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_registry(config, LanguageRegistry::global())
    }

    pub fn with_registry(config: EngineConfig, registry: Arc<LanguageRegistry>) -> Self {
        let highlighter = SyntaxHighlighter::new(registry.plain_text(), SyntaxTheme::default());
        Self {
            active_newline: config.default_newline,
            config,
            registry,
            buffer: TextBuffer::new(),
            highlighter,
            pending: None,
            storage_attached: false,
            filename: None,
        }
    }

    // ==================== Loading ====================

    /// Accepts the document's raw content and picks its language.
    ///
    /// The grammar is resolved from `filename`, then from the first line of
    /// the content, then falls back to plain text. The content itself is
    /// loaded as soon as storage is attached. A document takes content once:
    /// opening again while earlier content is loaded or still waiting for
    /// storage is [`BufferError::AlreadyMaterialized`].
    pub fn open(&mut self, bytes: &[u8], filename: Option<&str>) -> Result<()> {
        if self.buffer.is_materialized() || self.pending.is_some() {
            return Err(BufferError::AlreadyMaterialized.into());
        }
        let first_line = first_line(bytes);
        let grammar = self.registry.resolve(filename, Some(first_line.as_str()));
        log::debug!(
            "opening {} as {}",
            filename.unwrap_or("<untitled>"),
            grammar.identifier()
        );
        self.highlighter.set_grammar(grammar, &self.buffer);
        self.filename = filename.map(str::to_string);
        self.pending = Some(bytes.to_vec());
        self.load_pending_into_storage()
    }

    /// Marks the storage sink as available and loads pending content.
    pub fn attach_storage(&mut self) -> Result<()> {
        self.storage_attached = true;
        self.load_pending_into_storage()
    }

    /// Moves pending content into the buffer, once storage exists.
    ///
    /// Does nothing without storage or without pending content. A decode
    /// failure drops the pending content and leaves the buffer unloaded.
    pub fn load_pending_into_storage(&mut self) -> Result<()> {
        if !self.storage_attached {
            if self.pending.is_some() {
                log::debug!("no storage yet; deferring load");
            }
            return Ok(());
        }
        let Some(bytes) = self.pending.take() else {
            return Ok(());
        };

        let change = self.buffer.load(&bytes, self.config.default_newline)?;
        if let LineEndings::Uniform(style) = self.buffer.line_endings() {
            self.active_newline = style;
        }
        self.highlighter.apply_change(&change, &self.buffer);
        log::debug!(
            "loaded {} chars in {} lines ({})",
            self.buffer.len(),
            self.buffer.line_count(),
            self.buffer.line_endings().display_name()
        );
        Ok(())
    }

    pub fn is_materialized(&self) -> bool {
        self.buffer.is_materialized()
    }

    pub fn has_pending_content(&self) -> bool {
        self.pending.is_some()
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    // ==================== Language ====================

    /// Switches to the grammar named `identifier` and re-highlights
    /// everything.
    pub fn set_language(&mut self, identifier: &str) -> Result<()> {
        let grammar = self
            .registry
            .by_identifier(identifier)
            .ok_or_else(|| DocumentError::UnknownLanguage(identifier.to_string()))?;
        self.set_grammar(grammar);
        Ok(())
    }

    pub fn set_grammar(&mut self, grammar: Arc<LanguageGrammar>) {
        self.highlighter.set_grammar(grammar, &self.buffer);
    }

    /// Identifier of the active grammar.
    pub fn language(&self) -> &str {
        self.highlighter.grammar().identifier()
    }

    pub fn language_name(&self) -> &str {
        self.highlighter.grammar().display_name()
    }

    /// `(identifier, display name)` of every registered language.
    pub fn available_languages(&self) -> Vec<(String, String)> {
        self.registry.identifiers()
    }

    // ==================== Newlines ====================

    /// Sets the terminator used for text typed from now on. Existing
    /// content is untouched.
    pub fn set_newline_style(&mut self, style: NewlineStyle) {
        self.active_newline = style;
    }

    pub fn active_newline_style(&self) -> NewlineStyle {
        self.active_newline
    }

    /// The buffer's detected or last converted convention.
    pub fn buffer_newlines(&self) -> LineEndings {
        self.buffer.line_endings()
    }

    pub fn line_endings_in_use(&self) -> LineEndingsInUse {
        let counts = self.buffer.newline_counts();
        LineEndingsInUse {
            most_common: counts.most_common(),
            counts,
        }
    }

    /// Rewrites every terminator in the content to `style`, which also
    /// becomes the style for typed text.
    pub fn convert_newlines(&mut self, style: NewlineStyle) -> Result<BufferChange> {
        let change = self.buffer.convert_newlines(style)?;
        self.highlighter.apply_change(&change, &self.buffer);
        self.active_newline = style;
        Ok(change)
    }

    // ==================== Editing ====================

    /// Replaces `range` with `text` verbatim.
    pub fn edit(&mut self, range: Range<usize>, text: &str) -> Result<BufferChange> {
        let change = self.buffer.edit(range, text)?;
        self.highlighter.apply_change(&change, &self.buffer);
        Ok(change)
    }

    /// Inserts user-typed `text`, writing its line breaks in the active
    /// newline style.
    pub fn insert_typed(&mut self, offset: usize, text: &str) -> Result<BufferChange> {
        let text = newline::convert(text, self.active_newline);
        self.edit(offset..offset, &text)
    }

    // ==================== Reading ====================

    /// Returns the attributes at `offset` without waiting for pending
    /// highlighting.
    pub fn attributes_at(&self, offset: usize) -> Result<AttributeLookup> {
        let attributes = self.buffer.attributes_at(offset)?;
        Ok(AttributeLookup {
            attributes,
            stale: self.highlighter.is_stale(offset),
        })
    }

    pub fn text(&self) -> String {
        self.buffer.content()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Returns a receiver for every change made after this call.
    pub fn subscribe(&mut self) -> Receiver<BufferChange> {
        self.buffer.subscribe()
    }

    // ==================== Highlighting ====================

    /// Runs one bounded highlighting step.
    pub fn highlight_step(&mut self) -> Result<HighlightProgress> {
        let lines = self.config.batch_lines();
        Ok(self.highlighter.step(&mut self.buffer, lines)?)
    }

    /// Highlights until no dirty ranges remain.
    pub fn settle(&mut self) -> Result<HighlightProgress> {
        Ok(self.highlighter.settle(&mut self.buffer)?)
    }

    pub fn highlight_status(&self) -> HighlightStatus {
        self.highlighter.status()
    }

    pub fn dirty_ranges(&self) -> &[Range<usize>] {
        self.highlighter.dirty_ranges()
    }
}

impl std::fmt::Debug for DocumentController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentController")
            .field("filename", &self.filename)
            .field("state", &self.buffer.state())
            .field("len", &self.buffer.len())
            .field("language", &self.language())
            .field("active_newline", &self.active_newline)
            .field("highlighter", &self.highlighter)
            .finish()
    }
}

/// The first line of `bytes`, lossily decoded, for grammar sniffing.
fn first_line(bytes: &[u8]) -> String {
    let end = bytes
        .iter()
        .position(|&b| b == b'\n' || b == b'\r')
        .unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}
