// Chunk: docs/chunks/grammar_registry - Grammar compilation and the process-wide registry

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrammarError {
    #[error("grammar '{grammar}', state '{state}': invalid pattern {pattern:?}")]
    InvalidPattern {
        grammar: String,
        state: String,
        pattern: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("grammar '{grammar}' references unknown state '{state}'")]
    UnknownState { grammar: String, state: String },

    #[error("grammar '{grammar}' has no states")]
    NoStates { grammar: String },

    #[error("grammar identifier '{0}' is registered twice")]
    DuplicateIdentifier(String),

    #[error("language registry is already initialized")]
    RegistryInitialized,
}

/// Convenience type alias for Results with GrammarError
pub type Result<T> = std::result::Result<T, GrammarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GrammarError::UnknownState {
            grammar: "c".to_string(),
            state: "comment".to_string(),
        };
        assert_eq!(err.to_string(), "grammar 'c' references unknown state 'comment'");

        let err = GrammarError::DuplicateIdentifier("rust".to_string());
        assert_eq!(err.to_string(), "grammar identifier 'rust' is registered twice");
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = GrammarError::InvalidPattern {
            grammar: "x".to_string(),
            state: "root".to_string(),
            pattern: "(".to_string(),
            source: Box::new(source),
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
