//! Error types for the store crate

use thiserror::Error;

/// Store operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    Set,
    Get,
}

impl std::fmt::Display for StoreOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreOp::Set => write!(f, "set"),
            StoreOp::Get => write!(f, "get"),
        }
    }
}

/// Errors from the underlying key-value store.
///
/// Connection loss, timeouts and protocol failures are not classified
/// further; the backend error is kept as the source.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend configuration section is missing or unusable
    #[error("Invalid {backend} store configuration: {message}")]
    InvalidConfig {
        backend: &'static str,
        message: String,
    },

    /// Operator construction failed
    #[error("Failed to initialise {backend} store: {source}")]
    Init {
        backend: &'static str,
        #[source]
        source: opendal::Error,
    },

    /// A get or set against the store failed
    #[error("Store {op} '{key}' failed: {source}")]
    Operation {
        op: StoreOp,
        key: String,
        #[source]
        source: opendal::Error,
    },
}

impl StoreError {
    pub fn invalid_config(backend: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            backend,
            message: message.into(),
        }
    }

    pub fn init(backend: &'static str, source: opendal::Error) -> Self {
        Self::Init { backend, source }
    }

    pub fn operation(op: StoreOp, key: impl Into<String>, source: opendal::Error) -> Self {
        Self::Operation {
            op,
            key: key.into(),
            source,
        }
    }
}

/// Result type alias for StoreError
pub type Result<T> = std::result::Result<T, StoreError>;
