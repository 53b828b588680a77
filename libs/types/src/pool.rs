//! Pool capability trait and the concrete pool model
//!
//! The store layer is deliberately indifferent to a pool's AMM parameters:
//! it needs identity and round-trip serialization, nothing else. That
//! capability is the [`PoolRecord`] trait; [`Pool`] is the concrete model
//! used by the default instantiation and the test suites.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Capabilities the store layer requires from a pool record
pub trait PoolRecord: Clone + Serialize + DeserializeOwned {
    /// Unique, monotonically assigned pool identifier.
    fn pool_id(&self) -> u64;
}

/// Concentrated-liquidity pool entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    pub id: u64,
    /// Bech32-style account address holding the pool's assets.
    pub address: String,
    pub token0: String,
    pub token1: String,
    pub tick_spacing: u64,
    pub spread_factor: Decimal,
    pub current_tick: i64,
    pub current_sqrt_price: Decimal,
    pub current_tick_liquidity: Decimal,
    pub last_liquidity_update: DateTime<Utc>,
}

impl PoolRecord for Pool {
    fn pool_id(&self) -> u64 {
        self.id
    }
}
