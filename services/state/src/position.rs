//! Position and lock-linkage storage
//!
//! Positions are stored under their globally unique id, with a pool-scoped
//! index entry so a pool's positions can be listed without a full scan. Lock
//! linkage is optional: lock id zero means unlocked and is represented by
//! the absence of a linkage entry, never by a stored zero.

use codec::{
    key_lock_id_to_position, key_pool_position, key_pool_position_prefix, key_position_id,
    key_position_id_to_lock, marshal, unmarshal,
};
use types::{PoolRecord, Position};

use crate::error::{StateError, StateResult};
use crate::keeper::Keeper;
use crate::store::KvStore;

impl<S: KvStore, P: PoolRecord> Keeper<S, P> {
    /// Write all of a position's fields under its id, plus the pool index
    /// entry. Does not touch lock linkage.
    pub fn set_position(&mut self, position: &Position) -> StateResult<()> {
        self.store
            .set(key_position_id(position.position_id), marshal(position)?);
        self.store.set(
            key_pool_position(position.pool_id, position.position_id),
            marshal(&position.position_id)?,
        );
        Ok(())
    }

    /// Read a position by id.
    pub fn position(&self, position_id: u64) -> StateResult<Position> {
        match self.store.get(&key_position_id(position_id)) {
            Some(bytes) => Ok(unmarshal(bytes)?),
            None => Err(StateError::PositionNotFound { position_id }),
        }
    }

    /// All positions of a pool, ascending by position id (the index key
    /// order). This is the order genesis export uses.
    pub fn all_positions_for_pool(&self, pool_id: u64) -> StateResult<Vec<Position>> {
        let prefix = key_pool_position_prefix(pool_id);
        let ids: Vec<u64> = self
            .store
            .iterate_prefix(&prefix)
            .map(|(_, value)| unmarshal(value).map_err(StateError::from))
            .collect::<StateResult<_>>()?;
        ids.into_iter().map(|id| self.position(id)).collect()
    }

    /// Link a position to a bonding lock, in both directions.
    pub fn set_position_id_to_lock(&mut self, position_id: u64, lock_id: u64) -> StateResult<()> {
        self.store
            .set(key_position_id_to_lock(position_id), marshal(&lock_id)?);
        self.store
            .set(key_lock_id_to_position(lock_id), marshal(&position_id)?);
        Ok(())
    }

    /// The lock linked to a position; a typed not-found when the position is
    /// unlocked.
    pub fn lock_id_from_position_id(&self, position_id: u64) -> StateResult<u64> {
        match self.store.get(&key_position_id_to_lock(position_id)) {
            Some(bytes) => Ok(unmarshal(bytes)?),
            None => Err(StateError::PositionIdToLockNotFound { position_id }),
        }
    }

    /// The position a lock is linked to.
    pub fn position_id_from_lock_id(&self, lock_id: u64) -> StateResult<u64> {
        match self.store.get(&key_lock_id_to_position(lock_id)) {
            Some(bytes) => Ok(unmarshal(bytes)?),
            None => Err(StateError::LockIdToPositionNotFound { lock_id }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemStore;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn test_position(position_id: u64, pool_id: u64) -> Position {
        Position {
            position_id,
            address: "addr1".to_string(),
            pool_id,
            lower_tick: -1,
            upper_tick: 100,
            join_time: Utc.timestamp_opt(100, 100).unwrap(),
            liquidity: dec!(1),
        }
    }

    #[test]
    fn position_round_trips_and_misses_are_typed() {
        let mut keeper: Keeper<MemStore> = Keeper::new(MemStore::new());
        let position = test_position(1, 1);
        keeper.set_position(&position).unwrap();

        assert_eq!(keeper.position(1).unwrap(), position);
        assert_eq!(
            keeper.position(2).unwrap_err(),
            StateError::PositionNotFound { position_id: 2 }
        );
    }

    #[test]
    fn pool_listing_is_scoped_and_id_ordered() {
        let mut keeper: Keeper<MemStore> = Keeper::new(MemStore::new());
        keeper.set_position(&test_position(3, 1)).unwrap();
        keeper.set_position(&test_position(1, 1)).unwrap();
        keeper.set_position(&test_position(2, 2)).unwrap();

        let ids: Vec<u64> = keeper
            .all_positions_for_pool(1)
            .unwrap()
            .iter()
            .map(|p| p.position_id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn unlocked_position_lookup_is_not_found() {
        let mut keeper: Keeper<MemStore> = Keeper::new(MemStore::new());
        keeper.set_position(&test_position(1, 1)).unwrap();

        assert_eq!(
            keeper.lock_id_from_position_id(1).unwrap_err(),
            StateError::PositionIdToLockNotFound { position_id: 1 }
        );
    }

    #[test]
    fn lock_linkage_is_bidirectional() {
        let mut keeper: Keeper<MemStore> = Keeper::new(MemStore::new());
        keeper.set_position(&test_position(1, 1)).unwrap();
        keeper.set_position_id_to_lock(1, 5).unwrap();

        assert_eq!(keeper.lock_id_from_position_id(1).unwrap(), 5);
        assert_eq!(keeper.position_id_from_lock_id(5).unwrap(), 1);
        assert_eq!(
            keeper.position_id_from_lock_id(6).unwrap_err(),
            StateError::LockIdToPositionNotFound { lock_id: 6 }
        );
    }
}
