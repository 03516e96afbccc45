//! Error types for the codec layer

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while encoding or decoding a value.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The codec rejected an in-memory value
    #[error("{codec} failed to serialize value: {source}")]
    Serialization {
        codec: &'static str,
        #[source]
        source: BoxError,
    },

    /// The bytes were truncated, corrupt or did not match the schema
    #[error("{codec} failed to deserialize {len} bytes: {source}")]
    Deserialization {
        codec: &'static str,
        len: usize,
        #[source]
        source: BoxError,
    },
}

impl CodecError {
    pub fn serialization(codec: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Serialization {
            codec,
            source: source.into(),
        }
    }

    pub fn deserialization(codec: &'static str, len: usize, source: impl Into<BoxError>) -> Self {
        Self::Deserialization {
            codec,
            len,
            source: source.into(),
        }
    }

    /// Name of the codec that failed
    pub fn codec(&self) -> &'static str {
        match self {
            Self::Serialization { codec, .. } | Self::Deserialization { codec, .. } => codec,
        }
    }
}

/// A decoded protobuf message that cannot be mapped back onto its record type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("timestamp out of range (seconds={seconds}, nanos={nanos})")]
    InvalidTimestamp { seconds: i64, nanos: i32 },
}
