//! Opaque value codec
//!
//! Stored records round-trip through bincode behind these two helpers; the
//! store layer never names the underlying format.

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{CodecError, CodecResult};

/// Serialize a record to its stored byte form.
pub fn marshal<T: Serialize>(value: &T) -> CodecResult<Vec<u8>> {
    bincode::serialize(value).map_err(CodecError::serialization)
}

/// Deserialize a record from its stored byte form.
pub fn unmarshal<T: DeserializeOwned>(bytes: &[u8]) -> CodecResult<T> {
    bincode::deserialize(bytes).map_err(CodecError::serialization)
}
