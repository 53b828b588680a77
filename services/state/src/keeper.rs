//! The state keeper
//!
//! [`Keeper`] owns the ordered key-value store for the lifetime of the
//! process and exposes every state operation over it. Execution is strictly
//! sequential: mutations and reads happen as part of a deterministic replay
//! of ordered operations, so the keeper takes `&mut self`/`&self` and holds
//! no interior mutability and no live handles into the store. Accumulators
//! and counters are resolved through the store on every access.

use std::marker::PhantomData;

use codec::keys::{NEXT_INCENTIVE_RECORD_ID_KEY, NEXT_POSITION_ID_KEY, PARAMS_KEY};
use codec::{marshal, unmarshal};
use types::{Params, Pool, PoolRecord};

use crate::error::{StateError, StateResult};
use crate::store::KvStore;

/// State keeper for the concentrated-liquidity module
///
/// Generic over the store backend and the pool record type; the pool only
/// has to supply identity and round-trip serialization.
pub struct Keeper<S: KvStore, P: PoolRecord = Pool> {
    pub(crate) store: S,
    _pool: PhantomData<P>,
}

impl<S: KvStore, P: PoolRecord> Keeper<S, P> {
    /// Take exclusive ownership of a store. Genesis import expects the store
    /// to be empty; this constructor does not wipe pre-existing entries.
    pub fn new(store: S) -> Self {
        Self {
            store,
            _pool: PhantomData,
        }
    }

    /// Hand the store back, consuming the keeper.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Write module params verbatim.
    pub fn set_params(&mut self, params: &Params) -> StateResult<()> {
        self.store.set(PARAMS_KEY.to_vec(), marshal(params)?);
        Ok(())
    }

    /// Read module params; fails when genesis has not run yet.
    pub fn params(&self) -> StateResult<Params> {
        match self.store.get(PARAMS_KEY) {
            Some(bytes) => Ok(unmarshal(bytes)?),
            None => Err(StateError::ParamsNotSet),
        }
    }

    pub fn set_next_position_id(&mut self, id: u64) -> StateResult<()> {
        self.set_counter(NEXT_POSITION_ID_KEY, id)
    }

    pub fn next_position_id(&self) -> StateResult<u64> {
        self.counter(NEXT_POSITION_ID_KEY, "next position id")
    }

    /// Return the current next position id and advance the counter by one.
    pub fn next_position_id_and_increment(&mut self) -> StateResult<u64> {
        let id = self.next_position_id()?;
        self.set_next_position_id(id + 1)?;
        Ok(id)
    }

    pub fn set_next_incentive_record_id(&mut self, id: u64) -> StateResult<()> {
        self.set_counter(NEXT_INCENTIVE_RECORD_ID_KEY, id)
    }

    pub fn next_incentive_record_id(&self) -> StateResult<u64> {
        self.counter(NEXT_INCENTIVE_RECORD_ID_KEY, "next incentive record id")
    }

    /// Return the current next incentive record id and advance the counter
    /// by one.
    pub fn next_incentive_record_id_and_increment(&mut self) -> StateResult<u64> {
        let id = self.next_incentive_record_id()?;
        self.set_next_incentive_record_id(id + 1)?;
        Ok(id)
    }

    fn set_counter(&mut self, key: &[u8], value: u64) -> StateResult<()> {
        self.store.set(key.to_vec(), marshal(&value)?);
        Ok(())
    }

    fn counter(&self, key: &[u8], counter: &'static str) -> StateResult<u64> {
        match self.store.get(key) {
            Some(bytes) => Ok(unmarshal(bytes)?),
            None => Err(StateError::CounterNotSet { counter }),
        }
    }
}
