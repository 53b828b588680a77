//! Byte-key layout for the ordered key-value store
//!
//! All multi-byte integers in keys are big-endian so byte-lexicographic
//! ordering equals numeric ordering. Signed tick indices additionally flip
//! their sign bit before encoding, which maps the signed range onto the
//! unsigned range while preserving order (negative < zero < positive).
//!
//! Key spaces:
//!
//! | prefix | layout                                              |
//! |--------|-----------------------------------------------------|
//! | `0x01` | tick: pool id, tick index                           |
//! | `0x02` | position by id                                      |
//! | `0x03` | pool by id                                          |
//! | `0x04` | incentive record: pool id, uptime tier, record id   |
//! | `0x05` | pool-to-position index: pool id, position id        |
//! | `0x06` | position id to lock id                              |
//! | `0x07` | lock id to position id                              |
//! | `0x08` | accumulator content by name                         |
//! | `0x09` | accumulator share record: name, NUL, position id    |
//! | `0x0a` | module params (singleton)                           |
//! | `0x0b` | next position id counter (singleton)                |
//! | `0x0c` | next incentive record id counter (singleton)        |

use byteorder::{BigEndian, ByteOrder};

pub const TICK_PREFIX: &[u8] = &[0x01];
pub const POSITION_PREFIX: &[u8] = &[0x02];
pub const POOL_PREFIX: &[u8] = &[0x03];
pub const INCENTIVE_RECORD_PREFIX: &[u8] = &[0x04];
pub const POOL_POSITION_PREFIX: &[u8] = &[0x05];
pub const POSITION_TO_LOCK_PREFIX: &[u8] = &[0x06];
pub const LOCK_TO_POSITION_PREFIX: &[u8] = &[0x07];
pub const ACCUMULATOR_PREFIX: &[u8] = &[0x08];
pub const ACCUMULATOR_RECORD_PREFIX: &[u8] = &[0x09];
pub const PARAMS_KEY: &[u8] = &[0x0a];
pub const NEXT_POSITION_ID_KEY: &[u8] = &[0x0b];
pub const NEXT_INCENTIVE_RECORD_ID_KEY: &[u8] = &[0x0c];

/// Byte width of fixed-width unsigned integer key fields.
pub const UINT64_BYTES: usize = 8;
/// Byte width of the encoded signed tick index.
pub const TICK_INDEX_BYTES: usize = 8;

/// Exact byte length of a full tick key.
pub const TICK_KEY_LENGTH: usize = 1 + UINT64_BYTES + TICK_INDEX_BYTES;
/// Exact byte length of a full incentive record key.
pub const INCENTIVE_RECORD_KEY_LENGTH: usize = 1 + 3 * UINT64_BYTES;

const SIGN_FLIP: u64 = 1 << 63;

/// Big-endian encode a u64 key field.
pub fn uint64_to_big_endian(value: u64) -> [u8; UINT64_BYTES] {
    let mut buf = [0u8; UINT64_BYTES];
    BigEndian::write_u64(&mut buf, value);
    buf
}

/// Decode a big-endian u64 key field.
pub fn big_endian_to_uint64(bytes: &[u8]) -> u64 {
    BigEndian::read_u64(bytes)
}

/// Order-preserving encoding of a signed tick index: flip the sign bit, then
/// big-endian encode.
pub fn tick_index_to_bytes(tick_index: i64) -> [u8; TICK_INDEX_BYTES] {
    uint64_to_big_endian((tick_index as u64) ^ SIGN_FLIP)
}

/// Inverse of [`tick_index_to_bytes`].
pub fn tick_index_from_bytes(bytes: &[u8]) -> i64 {
    (big_endian_to_uint64(bytes) ^ SIGN_FLIP) as i64
}

/// Full key of a tick: prefix, pool id, encoded tick index.
pub fn key_tick(pool_id: u64, tick_index: i64) -> Vec<u8> {
    let mut key = key_tick_prefix_by_pool_id(pool_id);
    key.extend_from_slice(&tick_index_to_bytes(tick_index));
    key
}

/// Iteration prefix covering every tick of one pool.
pub fn key_tick_prefix_by_pool_id(pool_id: u64) -> Vec<u8> {
    let mut key = Vec::with_capacity(TICK_KEY_LENGTH);
    key.extend_from_slice(TICK_PREFIX);
    key.extend_from_slice(&uint64_to_big_endian(pool_id));
    key
}

/// Key of a pool entity.
pub fn key_pool(pool_id: u64) -> Vec<u8> {
    concat(POOL_PREFIX, &uint64_to_big_endian(pool_id))
}

/// Key of a position by its globally unique id.
pub fn key_position_id(position_id: u64) -> Vec<u8> {
    concat(POSITION_PREFIX, &uint64_to_big_endian(position_id))
}

/// Pool-to-position index entry; iterating the pool prefix yields the pool's
/// positions in ascending position-id order.
pub fn key_pool_position(pool_id: u64, position_id: u64) -> Vec<u8> {
    let mut key = key_pool_position_prefix(pool_id);
    key.extend_from_slice(&uint64_to_big_endian(position_id));
    key
}

/// Iteration prefix covering every position of one pool.
pub fn key_pool_position_prefix(pool_id: u64) -> Vec<u8> {
    concat(POOL_POSITION_PREFIX, &uint64_to_big_endian(pool_id))
}

/// Forward lock linkage key.
pub fn key_position_id_to_lock(position_id: u64) -> Vec<u8> {
    concat(POSITION_TO_LOCK_PREFIX, &uint64_to_big_endian(position_id))
}

/// Reverse lock linkage key.
pub fn key_lock_id_to_position(lock_id: u64) -> Vec<u8> {
    concat(LOCK_TO_POSITION_PREFIX, &uint64_to_big_endian(lock_id))
}

/// Full key of an incentive record: prefix, pool id, uptime tier index,
/// record id.
pub fn key_incentive_record(pool_id: u64, uptime_tier: u64, incentive_id: u64) -> Vec<u8> {
    let mut key = key_incentive_prefix_by_pool_id(pool_id);
    key.extend_from_slice(&uint64_to_big_endian(uptime_tier));
    key.extend_from_slice(&uint64_to_big_endian(incentive_id));
    key
}

/// Iteration prefix covering every incentive record of one pool.
pub fn key_incentive_prefix_by_pool_id(pool_id: u64) -> Vec<u8> {
    concat(INCENTIVE_RECORD_PREFIX, &uint64_to_big_endian(pool_id))
}

/// Storage key of an accumulator's content, addressed by name.
pub fn key_accumulator(name: &str) -> Vec<u8> {
    concat(ACCUMULATOR_PREFIX, name.as_bytes())
}

/// Storage key of one share record within an accumulator. The NUL separator
/// keeps (name, position id) injective; accumulator names never contain NUL.
pub fn key_accumulator_record(name: &str, position_id: u64) -> Vec<u8> {
    let mut key = Vec::with_capacity(1 + name.len() + 1 + UINT64_BYTES);
    key.extend_from_slice(ACCUMULATOR_RECORD_PREFIX);
    key.extend_from_slice(name.as_bytes());
    key.push(0x00);
    key.extend_from_slice(&uint64_to_big_endian(position_id));
    key
}

/// Name of a pool's spread-reward accumulator.
pub fn spread_reward_accumulator_name(pool_id: u64) -> String {
    format!("spread_reward/{pool_id}")
}

/// Name of a pool's incentive accumulator for one uptime tier.
pub fn uptime_accumulator_name(pool_id: u64, uptime_tier: u64) -> String {
    format!("uptime/{pool_id}/{uptime_tier}")
}

fn concat(prefix: &[u8], suffix: &[u8]) -> Vec<u8> {
    let mut key = Vec::with_capacity(prefix.len() + suffix.len());
    key.extend_from_slice(prefix);
    key.extend_from_slice(suffix);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_index_encoding_round_trips() {
        for tick_index in [i64::MIN, -1_000_000, -200, -1, 0, 1, 10, 999, i64::MAX] {
            let bytes = tick_index_to_bytes(tick_index);
            assert_eq!(tick_index_from_bytes(&bytes), tick_index);
        }
    }

    #[test]
    fn tick_keys_order_negative_before_positive() {
        let ordered = [-200i64, -1, 0, 10, 1000];
        let keys: Vec<Vec<u8>> = ordered.iter().map(|i| key_tick(1, *i)).collect();
        for pair in keys.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn tick_keys_never_interleave_pools() {
        // Largest tick of pool 1 still sorts before the smallest tick of pool 2.
        assert!(key_tick(1, i64::MAX) < key_tick(2, i64::MIN));
    }

    #[test]
    fn tick_key_has_documented_width() {
        assert_eq!(key_tick(1, 0).len(), TICK_KEY_LENGTH);
        assert_eq!(key_incentive_record(1, 0, 1).len(), INCENTIVE_RECORD_KEY_LENGTH);
    }

    #[test]
    fn accumulator_record_keys_are_injective() {
        // "uptime/1" + tier-ish suffix must not collide with "uptime/1/2".
        let a = key_accumulator_record("uptime/1", 2);
        let b = key_accumulator_record("uptime/1/2", 2);
        assert_ne!(a, b);
        assert!(!a.starts_with(&b) && !b.starts_with(&a));
    }
}
