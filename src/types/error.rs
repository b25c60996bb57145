//! Error types for the lz4-msgpack library.

use thiserror::Error;

/// All errors that can occur while wrapping or unwrapping an envelope.
#[derive(Error, Debug)]
pub enum LzmpError {
    /// MessagePack serialization or deserialization failed.
    #[error("Codec error: {0}")]
    Codec(String),

    /// LZ4 compression failed. The encoder recovers from this on its own.
    #[error("Compression error: {0}")]
    Compression(String),

    /// A recognized envelope could not be decompressed.
    #[error("Decompression error: {0}")]
    Decompression(String),

    /// Declared uncompressed length exceeds the configured limit.
    #[error("Uncompressed length exceeds limit: {size} > {max}")]
    TooLarge { size: usize, max: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for lz4-msgpack operations.
pub type LzmpResult<T> = Result<T, LzmpError>;

impl From<rmp_serde::encode::Error> for LzmpError {
    fn from(e: rmp_serde::encode::Error) -> Self {
        LzmpError::Codec(e.to_string())
    }
}

impl From<rmp_serde::decode::Error> for LzmpError {
    fn from(e: rmp_serde::decode::Error) -> Self {
        LzmpError::Codec(e.to_string())
    }
}
