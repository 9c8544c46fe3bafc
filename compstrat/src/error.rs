//! Error types for strategy lookup and codec failures

use crate::Algorithm;
use thiserror::Error;

/// Errors raised by the registry and the compression strategies
#[derive(Error, Debug)]
pub enum Error {
    /// No strategy is registered under this identifier
    #[error("unknown algorithm id: {id}")]
    UnknownAlgorithm {
        /// The identifier that was looked up
        id: i64,
    },

    /// No algorithm goes by this name
    #[error("unknown algorithm name: {0}")]
    UnknownAlgorithmName(String),

    /// The underlying codec rejected or failed to produce a payload
    #[error("{algorithm} codec failure: {message}")]
    Codec {
        /// Algorithm whose codec failed
        algorithm: Algorithm,
        /// Codec-specific description
        message: String,
    },
}

impl Error {
    /// Create a codec failure for the given algorithm
    pub fn codec<S: Into<String>>(algorithm: Algorithm, message: S) -> Self {
        Error::Codec {
            algorithm,
            message: message.into(),
        }
    }

    /// Whether the caller can recover by picking a different algorithm
    pub fn is_unknown_algorithm(&self) -> bool {
        matches!(
            self,
            Error::UnknownAlgorithm { .. } | Error::UnknownAlgorithmName(_)
        )
    }
}

/// Result type for compstrat operations
pub type Result<T> = std::result::Result<T, Error>;
