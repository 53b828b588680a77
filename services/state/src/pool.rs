//! Pool entity storage

use codec::keys::POOL_PREFIX;
use codec::{key_pool, marshal, unmarshal};
use types::PoolRecord;

use crate::error::{StateError, StateResult};
use crate::keeper::Keeper;
use crate::store::KvStore;

impl<S: KvStore, P: PoolRecord> Keeper<S, P> {
    /// Write a pool entity under its id.
    pub fn set_pool(&mut self, pool: &P) -> StateResult<()> {
        self.store.set(key_pool(pool.pool_id()), marshal(pool)?);
        Ok(())
    }

    /// Read one pool entity.
    pub fn pool(&self, pool_id: u64) -> StateResult<P> {
        match self.store.get(&key_pool(pool_id)) {
            Some(bytes) => Ok(unmarshal(bytes)?),
            None => Err(StateError::PoolNotFound { pool_id }),
        }
    }

    /// All pools, in ascending pool-id order (the key order).
    pub fn pools(&self) -> StateResult<Vec<P>> {
        self.store
            .iterate_prefix(POOL_PREFIX)
            .map(|(_, value)| unmarshal(value).map_err(StateError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemStore;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use types::Pool;

    fn test_pool(id: u64) -> Pool {
        Pool {
            id,
            address: format!("pool{id}"),
            token0: "eth".to_string(),
            token1: "usdc".to_string(),
            tick_spacing: 1,
            spread_factor: dec!(0.0003),
            current_tick: 0,
            current_sqrt_price: dec!(1),
            current_tick_liquidity: dec!(0),
            last_liquidity_update: Utc.timestamp_opt(0, 0).unwrap(),
        }
    }

    #[test]
    fn missing_pool_is_typed_not_found() {
        let keeper: Keeper<MemStore> = Keeper::new(MemStore::new());
        assert_eq!(
            keeper.pool(9).unwrap_err(),
            StateError::PoolNotFound { pool_id: 9 }
        );
    }

    #[test]
    fn pools_come_back_in_id_order() {
        let mut keeper: Keeper<MemStore> = Keeper::new(MemStore::new());
        for id in [3u64, 1, 2] {
            keeper.set_pool(&test_pool(id)).unwrap();
        }
        let ids: Vec<u64> = keeper.pools().unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
