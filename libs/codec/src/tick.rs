//! Tick key decoding
//!
//! Inverts [`crate::keys::key_tick`] with strict validation: the length is
//! checked before the prefix so that short, appended or wrongly encoded keys
//! are reported by their observed length instead of being truncated into a
//! plausible-looking tick.

use types::FullTick;

use crate::error::{CodecError, CodecResult};
use crate::keys::{tick_index_from_bytes, TICK_KEY_LENGTH, TICK_PREFIX, UINT64_BYTES};
use crate::value::unmarshal;

/// Decode a full tick key and its serialized tick-info payload.
///
/// The pool id embedded in the key is not returned; callers reach this point
/// through a pool-scoped iteration and already know it.
pub fn parse_full_tick_from_bytes(key: &[u8], value: &[u8]) -> CodecResult<FullTick> {
    if key.is_empty() {
        return Err(CodecError::KeyNotFound);
    }
    if key.len() != TICK_KEY_LENGTH {
        return Err(CodecError::InvalidTickKeyLength { length: key.len() });
    }

    let prefix = &key[..TICK_PREFIX.len()];
    if prefix != TICK_PREFIX {
        return Err(CodecError::InvalidPrefix {
            actual: prefix.to_vec(),
            expected: TICK_PREFIX.to_vec(),
        });
    }

    let tick_index = tick_index_from_bytes(&key[TICK_PREFIX.len() + UINT64_BYTES..]);
    let info = unmarshal(value)?;

    Ok(FullTick::new(tick_index, info))
}
