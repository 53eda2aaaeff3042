// Chunk: docs/chunks/document_controller - Document orchestration over buffer and highlighter

//! dux-document: one open document of the dux text engine.
//!
//! [`DocumentController`] owns a [`dux_buffer::TextBuffer`] and a
//! [`dux_syntax::SyntaxHighlighter`], keeps them in step on every mutation,
//! and tracks the active language and the newline style used for typed
//! text. [`EngineConfig`] carries the process-wide settings.
//!
//! # Example
//!
//! ```
//! use dux_buffer::{LineEndings, NewlineStyle};
//! use dux_document::{DocumentController, EngineConfig};
//!
//! let mut doc = DocumentController::new(EngineConfig::default());
//! doc.open(b"a\r\nb\nc", Some("notes.txt")).unwrap();
//! assert!(!doc.is_materialized());
//!
//! doc.attach_storage().unwrap();
//! assert_eq!(doc.buffer_newlines(), LineEndings::Mixed);
//!
//! doc.convert_newlines(NewlineStyle::Lf).unwrap();
//! assert_eq!(doc.text(), "a\nb\nc");
//! assert_eq!(doc.buffer_newlines(), LineEndings::Uniform(NewlineStyle::Lf));
//! ```

mod config;
mod controller;
mod error;

pub use config::EngineConfig;
pub use controller::{AttributeLookup, DocumentController, LineEndingsInUse};
pub use error::{DocumentError, Result};
