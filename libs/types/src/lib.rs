//! # Concentrated-Liquidity Type System
//!
//! Shared data model for the concentrated-liquidity state store: pools,
//! price ticks, liquidity positions, reward accumulators, incentive
//! schedules, module parameters and the genesis snapshot that ties them
//! together.
//!
//! ## Design Philosophy
//!
//! - **No Precision Loss**: All financial values are `rust_decimal::Decimal`,
//!   never floats. Multi-denomination values use [`DecCoins`], a sorted,
//!   duplicate-free vector of [`DecCoin`].
//! - **Capability Traits at the Seams**: The store layer only needs identity
//!   and round-trip serialization from a pool, expressed by [`PoolRecord`]
//!   rather than a concrete hierarchy.
//! - **Explicit Invariants**: Constructors and `validate` methods reject
//!   negative amounts, inverted tick ranges and unauthorized uptimes instead
//!   of normalizing them silently.
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use types::{DecCoin, DecCoins, TickInfo, UptimeTracker};
//!
//! let growth = DecCoins::new(vec![DecCoin::new("foo", dec!(100)).unwrap()]).unwrap();
//! let info = TickInfo {
//!     liquidity_gross: dec!(1),
//!     liquidity_net: dec!(1),
//!     spread_reward_growth_opposite_direction_of_last_traversal: growth.clone(),
//!     uptime_trackers: vec![UptimeTracker { uptime_growth_outside: growth }],
//! };
//! assert_eq!(info.uptime_trackers.len(), 1);
//! ```

pub mod accum;
pub mod coin;
pub mod constants;
pub mod genesis;
pub mod incentive;
pub mod params;
pub mod pool;
pub mod position;
pub mod tick;

pub use accum::{AccumObject, AccumRecord, AccumulatorContent, AccumulatorOptions};
pub use coin::{CoinError, DecCoin, DecCoins};
pub use constants::{uptime_index, SUPPORTED_UPTIMES};
pub use genesis::{GenesisError, GenesisState, PoolData, PositionData};
pub use incentive::{IncentiveRecord, IncentiveRecordBody};
pub use params::{Params, ParamsError};
pub use pool::{Pool, PoolRecord};
pub use position::{Position, PositionWithoutPoolId};
pub use tick::{FullTick, TickInfo, UptimeTracker};
