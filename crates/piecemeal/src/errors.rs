//! # Error Types

use crate::tensor::ScalarType;

/// Errors from piecemeal operations.
#[derive(Debug, thiserror::Error)]
pub enum PiecemealError {
    /// The call-site input is not the kind of value the operation accepts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The tensor element type is not an admissible token-id width.
    #[error("the integral type {scalar_type} is not supported; expected one of i16, i32, i64")]
    NotSupported {
        /// The offending element type.
        scalar_type: ScalarType,
    },

    /// The tensor storage does not match its declared shape.
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// Token id is outside the vocabulary.
    #[error("token id ({id}) is out of range for a vocabulary of size {vocab_size}")]
    TokenOutOfRange {
        /// The unresolvable id.
        id: i64,

        /// The size of the vocabulary.
        vocab_size: usize,
    },

    /// A wide id element does not fit in the 32-bit token id type.
    #[error("token id element ({value}) does not fit in i32")]
    IdNarrowing {
        /// The element value, sign-extended.
        value: i64,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (vocab lines, byte pieces, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for piecemeal operations.
pub type PMResult<T> = core::result::Result<T, PiecemealError>;
