//! Error types for the writer crate

use kvbench_core::CodecError;
use kvbench_store::StoreError;
use thiserror::Error;

/// Error codes for programmatic handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E001: Entity could not be encoded
    E001Serialization,
    /// E002: Stored bytes could not be decoded
    E002Deserialization,
    /// E003: Store rejected or failed the operation
    E003Store,
    /// E004: Writer invoked with unusable parameters
    E004InvalidArgument,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E001Serialization => "E001",
            Self::E002Deserialization => "E002",
            Self::E003Store => "E003",
            Self::E004InvalidArgument => "E004",
        }
    }
}

/// Errors surfaced by [`crate::EntityWriter`].
///
/// Failures are passed through as-is: no retries, no compensation for
/// writes that already landed.
#[derive(Debug, Error)]
pub enum WriterError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Chunk size must be at least 1")]
    InvalidChunkSize,
}

impl WriterError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Codec(CodecError::Serialization { .. }) => ErrorCode::E001Serialization,
            Self::Codec(CodecError::Deserialization { .. }) => ErrorCode::E002Deserialization,
            Self::Store(_) => ErrorCode::E003Store,
            Self::InvalidChunkSize => ErrorCode::E004InvalidArgument,
        }
    }
}

/// Result type alias for WriterError
pub type Result<T> = std::result::Result<T, WriterError>;
