//! # State Store Codec
//!
//! Byte-key layout and value codec for the concentrated-liquidity state
//! store. This crate owns everything that crosses the ordered key-value
//! store boundary:
//!
//! - **Key layout** ([`keys`]): fixed-width, big-endian key builders whose
//!   lexicographic byte order equals numeric order, including signed tick
//!   indices (sign-bit flip) and pool-scoped prefixes that never interleave.
//! - **Key decoding** ([`tick`], [`incentive`]): strict inverses of the key
//!   builders with a precise error taxonomy. Malformed keys fail by observed
//!   length, foreign prefixes fail naming both prefixes, and empty keys fail
//!   as not-found. Nothing is silently truncated.
//! - **Value codec** ([`value`]): bincode behind `marshal`/`unmarshal`, the
//!   only place the binary format is named.
//!
//! ## Ordering Guarantees
//!
//! For any pool `p` and tick indices `a < b`, `key_tick(p, a)` sorts before
//! `key_tick(p, b)`, and for pools `p1 < p2` every key of `p1` sorts before
//! every key of `p2`. These properties are pinned down by proptest suites in
//! `tests/`.

pub mod error;
pub mod incentive;
pub mod keys;
pub mod tick;
pub mod value;

pub use error::{CodecError, CodecResult};
pub use incentive::parse_incentive_record_from_bytes;
pub use keys::{
    key_accumulator, key_accumulator_record, key_incentive_prefix_by_pool_id,
    key_incentive_record, key_lock_id_to_position, key_pool, key_pool_position,
    key_pool_position_prefix, key_position_id, key_position_id_to_lock, key_tick,
    key_tick_prefix_by_pool_id, spread_reward_accumulator_name, tick_index_from_bytes,
    tick_index_to_bytes, uptime_accumulator_name, INCENTIVE_RECORD_KEY_LENGTH, TICK_KEY_LENGTH,
};
pub use tick::parse_full_tick_from_bytes;
pub use value::{marshal, unmarshal};
