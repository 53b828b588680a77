//! State store errors
//!
//! Lookup failures are typed and carry the identifier that missed; nothing
//! defaults to an empty or zero value. The one sanctioned exception lives in
//! genesis export, where an unlocked position is reported with lock id zero
//! rather than an error.

use std::time::Duration;

use thiserror::Error;

use codec::CodecError;
use types::GenesisError;

/// Errors surfaced by the state keeper
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StateError {
    #[error("position {position_id} not found")]
    PositionNotFound { position_id: u64 },

    #[error("position {position_id} has no lock linkage")]
    PositionIdToLockNotFound { position_id: u64 },

    #[error("lock {lock_id} is not linked to a position")]
    LockIdToPositionNotFound { lock_id: u64 },

    #[error("pool {pool_id} not found")]
    PoolNotFound { pool_id: u64 },

    #[error("accumulator {name} already exists")]
    AccumulatorAlreadyExists { name: String },

    #[error("accumulator {name} not found")]
    AccumulatorNotFound { name: String },

    #[error("accumulator {name} has no share record for position {position_id}")]
    ShareRecordNotFound { name: String, position_id: u64 },

    #[error("min uptime {uptime:?} is not a supported tier")]
    UnsupportedUptime { uptime: Duration },

    #[error("module params have not been set")]
    ParamsNotSet,

    #[error("counter {counter} has not been set")]
    CounterNotSet { counter: &'static str },

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Genesis(#[from] GenesisError),
}

/// Result type for state operations
pub type StateResult<T> = std::result::Result<T, StateError>;
