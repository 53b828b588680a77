//! Key and value codec errors
//!
//! Every malformed key is rejected with a typed error carrying what was
//! actually observed, never silently truncated or defaulted. Length is
//! checked before the prefix so that a short key reports its length rather
//! than a garbage prefix comparison.

use thiserror::Error;

/// Decode and serialization failures for stored keys and values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Empty or absent key on a decode path.
    #[error("key not found")]
    KeyNotFound,

    /// The key's leading bytes belong to a different key space.
    #[error(
        "invalid prefix: actual 0x{}, expected 0x{}",
        hex::encode(.actual),
        hex::encode(.expected)
    )]
    InvalidPrefix { actual: Vec<u8>, expected: Vec<u8> },

    /// Tick key whose total byte length is not exactly the fixed width.
    #[error("invalid tick key byte length {length}")]
    InvalidTickKeyLength { length: usize },

    /// Incentive record key whose total byte length is not exactly the fixed
    /// width.
    #[error("invalid incentive record key byte length {length}")]
    InvalidIncentiveKeyLength { length: usize },

    /// Uptime tier index outside the supported tier set.
    #[error("unsupported uptime tier index {index}")]
    UnsupportedUptimeIndex { index: u64 },

    /// Value payload failed to (de)serialize.
    #[error("serialization failed: {message}")]
    Serialization { message: String },
}

impl CodecError {
    pub(crate) fn serialization(err: bincode::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

/// Result type for codec operations
pub type CodecResult<T> = std::result::Result<T, CodecError>;
