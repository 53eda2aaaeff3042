// Chunk: docs/chunks/incremental_highlighting - Incremental regex-rule highlighting
// Chunk: docs/chunks/grammar_registry - Grammar compilation and the process-wide registry

//! dux-syntax: language grammars and incremental highlighting for dux.
//!
//! A grammar is an ordered list of regex rules per lexer state, evaluated
//! first-match-wins. Grammars are compiled once, registered in a
//! process-wide [`LanguageRegistry`], and shared read-only by any number of
//! highlighters.
//!
//! # Overview
//!
//! - [`LanguageGrammar`]: a compiled [`GrammarDefinition`].
//! - [`LanguageRegistry`]: lookup by identifier or file name, with a plain
//!   text fallback.
//! - [`SyntaxHighlighter`]: consumes [`dux_buffer::BufferChange`] records,
//!   re-tokenizes the lines an edit disturbed, and paints attributes back
//!   into the [`dux_buffer::TextBuffer`].
//! - [`SyntaxTheme`]: maps token categories to styles.
//!
//! # Example
//!
//! ```
//! use dux_buffer::{TextBuffer, TokenCategory};
//! use dux_syntax::{LanguageRegistry, SyntaxHighlighter, SyntaxTheme};
//!
//! let registry = LanguageRegistry::global();
//! let mut buffer = TextBuffer::from_str("fn main() {}\n");
//! let mut highlighter = SyntaxHighlighter::new(registry.for_filename("main.rs"), SyntaxTheme::default());
//! highlighter.reset(&buffer);
//! highlighter.settle(&mut buffer).unwrap();
//!
//! let attrs = buffer.attributes_at(0).unwrap();
//! assert_eq!(attrs.category, Some(TokenCategory::Keyword));
//! ```

pub mod builtin;
mod dirty;
mod error;
mod grammar;
mod highlighter;
mod lexer;
mod registry;
mod theme;

pub use dirty::DirtySet;
pub use error::{GrammarError, Result};
pub use grammar::{
    rule, GrammarDefinition, LanguageGrammar, RuleAction, RuleDefinition, StateDefinition, StateId,
    PLAIN_TEXT,
};
pub use highlighter::{HighlightProgress, HighlightStatus, SyntaxHighlighter};
pub use lexer::{tokenize_all, tokenize_line, LexState, Token};
pub use registry::LanguageRegistry;
pub use theme::SyntaxTheme;
