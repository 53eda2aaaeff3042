// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing
// Chunk: docs/chunks/newline_detection - Line terminator detection and conversion

//! dux-buffer: the text storage layer of the dux text engine.
//!
//! This crate provides a gap buffer-backed text buffer with a line index,
//! range-tagged display attributes and change notification, plus the
//! newline detector used when content is loaded.
//!
//! # Overview
//!
//! The main type is [`TextBuffer`], which provides:
//! - One-shot loading from raw bytes with newline detection
//! - Range replacement with atomic attribute shifting
//! - Line-based access (LF, CR and CRLF all end a line)
//! - Whole-buffer newline conversion
//! - Change records published to subscribers
//!
//! # Example
//!
//! ```
//! use dux_buffer::{BufferChange, LineEndings, NewlineStyle, TextBuffer};
//!
//! let mut buffer = TextBuffer::new();
//! buffer.load(b"a\r\nb\nc", NewlineStyle::Lf).unwrap();
//! assert_eq!(buffer.line_endings(), LineEndings::Mixed);
//!
//! let change = buffer.convert_newlines(NewlineStyle::Lf).unwrap();
//! assert_eq!(change, BufferChange::WholeBuffer { new_len: 5 });
//! assert_eq!(buffer.content(), "a\nb\nc");
//! ```
//!
//! # Attribute Runs
//!
//! Attributes are stored as [`AttributeRuns`], a sorted run list that always
//! partitions the content. Inserted text starts out with default attributes;
//! the syntax layer paints categories over it a pass at a time with
//! [`TextBuffer::replace_attributes`].

mod attributes;
mod error;
mod gap_buffer;
mod line_index;
pub mod newline;
mod style;
mod text_buffer;
mod types;

pub use attributes::{AttributeRun, AttributeRuns, Attributes, TokenCategory};
pub use error::{BufferError, Result};
pub use newline::{LineEndings, NewlineCounts, NewlineReport, NewlineScanner, NewlineStyle};
pub use style::{Color, Style};
pub use text_buffer::TextBuffer;
pub use types::{BufferChange, BufferState, EditRecord, LineSplice};
