// Chunk: docs/chunks/engine_config - JSON engine configuration

//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object is a valid
//! configuration:
//!
//! ```json
//! {
//!   "default_newline": "crlf",
//!   "highlight_batch_lines": 128,
//!   "extra_grammars": []
//! }
//! ```

use std::sync::Arc;

use dux_buffer::NewlineStyle;
use dux_syntax::{GrammarDefinition, LanguageRegistry};
use serde::{Deserialize, Serialize};

use crate::error::Result;

const DEFAULT_BATCH_LINES: usize = 256;

/// Settings shared by every document in the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Style reported for content without terminators, and the initial
    /// style for typed text.
    pub default_newline: NewlineStyle,
    /// Lines one highlighter step may tokenize.
    pub highlight_batch_lines: usize,
    /// Grammars registered alongside the built-ins.
    pub extra_grammars: Vec<GrammarDefinition>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_newline: NewlineStyle::Lf,
            highlight_batch_lines: DEFAULT_BATCH_LINES,
            extra_grammars: Vec::new(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The per-step line budget, never zero.
    pub fn batch_lines(&self) -> usize {
        self.highlight_batch_lines.max(1)
    }

    /// Builds the process-wide registry with `extra_grammars`.
    ///
    /// Must run before any document is created; the registry cannot change
    /// once it exists.
    pub fn init_registry(&self) -> Result<Arc<LanguageRegistry>> {
        Ok(LanguageRegistry::init_global(self.extra_grammars.clone())?)
    }
}
