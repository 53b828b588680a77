//! Tick storage
//!
//! Ticks are keyed by (pool id, signed tick index) with an order-preserving
//! encoding, so a single prefix iteration yields a pool's ticks in ascending
//! index order with negatives first.

use codec::{key_tick, key_tick_prefix_by_pool_id, marshal, parse_full_tick_from_bytes};
use types::{FullTick, PoolRecord, TickInfo};

use crate::error::{StateError, StateResult};
use crate::keeper::Keeper;
use crate::store::KvStore;

impl<S: KvStore, P: PoolRecord> Keeper<S, P> {
    /// Write a tick's info under its pool-scoped key.
    pub fn set_tick_info(
        &mut self,
        pool_id: u64,
        tick_index: i64,
        info: &TickInfo,
    ) -> StateResult<()> {
        self.store
            .set(key_tick(pool_id, tick_index), marshal(info)?);
        Ok(())
    }

    /// All initialized ticks of a pool, ascending by signed tick index. The
    /// pool id is not repeated in the returned records.
    pub fn all_initialized_ticks_for_pool(&self, pool_id: u64) -> StateResult<Vec<FullTick>> {
        let prefix = key_tick_prefix_by_pool_id(pool_id);
        self.store
            .iterate_prefix(&prefix)
            .map(|(key, value)| parse_full_tick_from_bytes(key, value).map_err(StateError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemStore;
    use rust_decimal_macros::dec;
    use types::{DecCoin, DecCoins, UptimeTracker};

    // chosen randomly
    const DEFAULT_POOL_ID: u64 = 676;

    fn test_tick_info() -> TickInfo {
        let coins = DecCoins::new(vec![DecCoin::new("foo", dec!(100)).unwrap()]).unwrap();
        TickInfo {
            liquidity_gross: dec!(1),
            liquidity_net: dec!(1),
            spread_reward_growth_opposite_direction_of_last_traversal: coins.clone(),
            uptime_trackers: vec![UptimeTracker {
                uptime_growth_outside: coins,
            }],
        }
    }

    #[test]
    fn single_ticks_round_trip() {
        for tick_index in [100i64, -1, 0] {
            let mut keeper: Keeper<MemStore> = Keeper::new(MemStore::new());
            keeper
                .set_tick_info(DEFAULT_POOL_ID, tick_index, &test_tick_info())
                .unwrap();

            let ticks = keeper
                .all_initialized_ticks_for_pool(DEFAULT_POOL_ID)
                .unwrap();
            assert_eq!(ticks.len(), 1);
            assert_eq!(ticks[0].tick_index, tick_index);
            assert_eq!(ticks[0].info, test_tick_info());
        }
    }

    #[test]
    fn ticks_come_back_ascending_across_signs() {
        let mut keeper: Keeper<MemStore> = Keeper::new(MemStore::new());
        for tick_index in [100i64, -1, 0, -200, 1000, -999] {
            keeper
                .set_tick_info(DEFAULT_POOL_ID, tick_index, &test_tick_info())
                .unwrap();
        }

        let indexes: Vec<i64> = keeper
            .all_initialized_ticks_for_pool(DEFAULT_POOL_ID)
            .unwrap()
            .iter()
            .map(|tick| tick.tick_index)
            .collect();
        assert_eq!(indexes, vec![-999, -200, -1, 0, 100, 1000]);
    }

    #[test]
    fn ticks_are_scoped_to_their_pool() {
        let mut keeper: Keeper<MemStore> = Keeper::new(MemStore::new());
        keeper
            .set_tick_info(DEFAULT_POOL_ID, 5, &test_tick_info())
            .unwrap();
        keeper
            .set_tick_info(DEFAULT_POOL_ID + 1, -5, &test_tick_info())
            .unwrap();

        let ticks = keeper
            .all_initialized_ticks_for_pool(DEFAULT_POOL_ID)
            .unwrap();
        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks[0].tick_index, 5);
    }
}
