//! Price tick records
//!
//! A tick is a discrete price boundary within a pool, identified by a signed
//! index. [`TickInfo`] is the stored payload; [`FullTick`] pairs it with the
//! index for genesis bundles and pool-scoped listings, where the pool id is
//! implied by the storage path and therefore omitted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::coin::DecCoins;

/// Per-uptime-tier growth tracker for a tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UptimeTracker {
    pub uptime_growth_outside: DecCoins,
}

/// Stored state of an initialized tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInfo {
    /// Total liquidity referencing this tick from either side.
    pub liquidity_gross: Decimal,
    /// Liquidity added (positive) or removed (negative) when the tick is
    /// crossed left to right.
    pub liquidity_net: Decimal,
    pub spread_reward_growth_opposite_direction_of_last_traversal: DecCoins,
    /// One tracker per supported uptime tier, in tier order.
    pub uptime_trackers: Vec<UptimeTracker>,
}

/// A tick index together with its stored info, pool id implied by context
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FullTick {
    pub tick_index: i64,
    pub info: TickInfo,
}

impl FullTick {
    pub fn new(tick_index: i64, info: TickInfo) -> Self {
        Self { tick_index, info }
    }
}
