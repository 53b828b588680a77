//! Incentive record key decoding
//!
//! An incentive record's pool id, uptime tier and record id all live in its
//! key; only the body is in the value. Reconstructing the record therefore
//! needs both halves.

use types::{IncentiveRecord, SUPPORTED_UPTIMES};

use crate::error::{CodecError, CodecResult};
use crate::keys::{
    big_endian_to_uint64, INCENTIVE_RECORD_KEY_LENGTH, INCENTIVE_RECORD_PREFIX, UINT64_BYTES,
};
use crate::value::unmarshal;

/// Decode a full incentive record key and its serialized body payload.
pub fn parse_incentive_record_from_bytes(key: &[u8], value: &[u8]) -> CodecResult<IncentiveRecord> {
    if key.is_empty() {
        return Err(CodecError::KeyNotFound);
    }
    if key.len() != INCENTIVE_RECORD_KEY_LENGTH {
        return Err(CodecError::InvalidIncentiveKeyLength { length: key.len() });
    }

    let prefix = &key[..INCENTIVE_RECORD_PREFIX.len()];
    if prefix != INCENTIVE_RECORD_PREFIX {
        return Err(CodecError::InvalidPrefix {
            actual: prefix.to_vec(),
            expected: INCENTIVE_RECORD_PREFIX.to_vec(),
        });
    }

    let mut offset = INCENTIVE_RECORD_PREFIX.len();
    let pool_id = big_endian_to_uint64(&key[offset..offset + UINT64_BYTES]);
    offset += UINT64_BYTES;
    let uptime_tier = big_endian_to_uint64(&key[offset..offset + UINT64_BYTES]);
    offset += UINT64_BYTES;
    let incentive_id = big_endian_to_uint64(&key[offset..offset + UINT64_BYTES]);

    let min_uptime = SUPPORTED_UPTIMES
        .get(uptime_tier as usize)
        .copied()
        .ok_or(CodecError::UnsupportedUptimeIndex { index: uptime_tier })?;

    let incentive_record_body = unmarshal(value)?;

    Ok(IncentiveRecord {
        incentive_id,
        pool_id,
        incentive_record_body,
        min_uptime,
    })
}
