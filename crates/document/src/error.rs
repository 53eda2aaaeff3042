// Chunk: docs/chunks/document_controller - Document orchestration over buffer and highlighter

use dux_buffer::BufferError;
use dux_syntax::GrammarError;
use thiserror::Error;

/// Errors surfaced by document-level operations.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Buffer(#[from] BufferError),

    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error("invalid engine configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// An explicit language request named no registered grammar.
    #[error("no language with identifier {0:?}")]
    UnknownLanguage(String),
}

pub type Result<T> = std::result::Result<T, DocumentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_errors_convert() {
        let err: DocumentError = BufferError::NotMaterialized.into();
        assert!(matches!(err, DocumentError::Buffer(BufferError::NotMaterialized)));
        assert_eq!(err.to_string(), BufferError::NotMaterialized.to_string());
    }

    #[test]
    fn test_unknown_language_message() {
        let err = DocumentError::UnknownLanguage("cobol".to_string());
        assert_eq!(err.to_string(), "no language with identifier \"cobol\"");
    }
}
