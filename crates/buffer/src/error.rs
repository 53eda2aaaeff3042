// Chunk: docs/chunks/text_buffer - Text buffer data structure with gap buffer backing

use std::str::Utf8Error;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// The loaded bytes are not valid UTF-8. The buffer stays unmaterialized.
    #[error("invalid UTF-8 at byte {valid_up_to}")]
    Decode {
        valid_up_to: usize,
        #[source]
        source: Utf8Error,
    },

    #[error("range {start}..{end} is outside buffer of length {len}")]
    Range { start: usize, end: usize, len: usize },

    #[error("offset {offset} is out of bounds for buffer of length {len}")]
    OutOfBounds { offset: usize, len: usize },

    #[error("buffer content has already been loaded")]
    AlreadyMaterialized,

    #[error("buffer has no content loaded")]
    NotMaterialized,
}

impl From<Utf8Error> for BufferError {
    fn from(source: Utf8Error) -> Self {
        BufferError::Decode {
            valid_up_to: source.valid_up_to(),
            source,
        }
    }
}

/// Convenience type alias for Results with BufferError
pub type Result<T> = std::result::Result<T, BufferError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_error_conversion() {
        let bytes = [b'a', b'b', 0xff, b'c'];
        let err: BufferError = std::str::from_utf8(&bytes).unwrap_err().into();
        assert!(matches!(err, BufferError::Decode { valid_up_to: 2, .. }));
        assert_eq!(err.to_string(), "invalid UTF-8 at byte 2");
    }

    #[test]
    fn test_error_display() {
        let err = BufferError::Range {
            start: 3,
            end: 9,
            len: 5,
        };
        assert_eq!(err.to_string(), "range 3..9 is outside buffer of length 5");

        let err = BufferError::OutOfBounds { offset: 5, len: 5 };
        assert_eq!(
            err.to_string(),
            "offset 5 is out of bounds for buffer of length 5"
        );
    }
}
