//! Liquidity position records

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A liquidity provider's claim over a price range within a pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Globally unique, assigned from the position-id counter independently
    /// of the pool.
    pub position_id: u64,
    pub address: String,
    pub pool_id: u64,
    pub lower_tick: i64,
    pub upper_tick: i64,
    pub join_time: DateTime<Utc>,
    pub liquidity: Decimal,
}

/// Position view used in genesis bundles, where the pool id is implied by
/// the enclosing per-pool entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionWithoutPoolId {
    pub position_id: u64,
    pub address: String,
    pub lower_tick: i64,
    pub upper_tick: i64,
    pub join_time: DateTime<Utc>,
    pub liquidity: Decimal,
}

impl Position {
    /// Strip the pool id for a genesis bundle entry.
    pub fn without_pool_id(&self) -> PositionWithoutPoolId {
        PositionWithoutPoolId {
            position_id: self.position_id,
            address: self.address.clone(),
            lower_tick: self.lower_tick,
            upper_tick: self.upper_tick,
            join_time: self.join_time,
            liquidity: self.liquidity,
        }
    }
}

impl PositionWithoutPoolId {
    /// Re-attach the pool id implied by the bundle this entry came from.
    pub fn into_position(self, pool_id: u64) -> Position {
        Position {
            position_id: self.position_id,
            address: self.address,
            pool_id,
            lower_tick: self.lower_tick,
            upper_tick: self.upper_tick,
            join_time: self.join_time,
            liquidity: self.liquidity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn pool_id_strips_and_reattaches() {
        let position = Position {
            position_id: 7,
            address: "addr1".to_string(),
            pool_id: 3,
            lower_tick: -100,
            upper_tick: 100,
            join_time: Utc.timestamp_opt(100, 0).unwrap(),
            liquidity: dec!(42),
        };

        let stripped = position.without_pool_id();
        assert_eq!(stripped.position_id, 7);

        let restored = stripped.into_position(3);
        assert_eq!(restored, position);
    }
}
