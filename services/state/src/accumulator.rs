//! Accumulator storage
//!
//! Accumulators are addressed by structured name (pool id plus kind plus,
//! for incentives, uptime tier) and resolved through the store on every
//! access. There is deliberately no long-lived accumulator handle type:
//! under sequential replay a stale in-memory alias is the only way two
//! writers could disagree, so the store is the single source of truth.
//!
//! Genesis import writes accumulator contents and share records directly;
//! nothing here re-derives totals from history.

use rust_decimal::Decimal;
use tracing::debug;

use codec::{key_accumulator, key_accumulator_record, marshal, unmarshal};
use types::{AccumRecord, AccumulatorContent, DecCoins, PoolRecord};

use crate::error::{StateError, StateResult};
use crate::keeper::Keeper;
use crate::store::KvStore;

impl<S: KvStore, P: PoolRecord> Keeper<S, P> {
    /// Create an accumulator under a unique name with the given content.
    pub fn create_accumulator(
        &mut self,
        name: &str,
        content: &AccumulatorContent,
    ) -> StateResult<()> {
        let key = key_accumulator(name);
        if self.store.get(&key).is_some() {
            return Err(StateError::AccumulatorAlreadyExists {
                name: name.to_string(),
            });
        }
        debug!(name, "creating accumulator");
        self.store.set(key, marshal(content)?);
        Ok(())
    }

    /// Read an accumulator's content.
    pub fn accumulator_content(&self, name: &str) -> StateResult<AccumulatorContent> {
        match self.store.get(&key_accumulator(name)) {
            Some(bytes) => Ok(unmarshal(bytes)?),
            None => Err(StateError::AccumulatorNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Current reward-per-share value of an accumulator.
    pub fn accumulator_value(&self, name: &str) -> StateResult<DecCoins> {
        Ok(self.accumulator_content(name)?.accum_value)
    }

    /// Total shares across an accumulator's live records.
    pub fn accumulator_total_shares(&self, name: &str) -> StateResult<Decimal> {
        Ok(self.accumulator_content(name)?.total_shares)
    }

    /// Write one position's share record. The accumulator must exist; the
    /// record is written as given, with no adjustment of the accumulator's
    /// totals.
    pub fn set_accumulator_share_record(
        &mut self,
        name: &str,
        position_id: u64,
        record: &AccumRecord,
    ) -> StateResult<()> {
        if self.store.get(&key_accumulator(name)).is_none() {
            return Err(StateError::AccumulatorNotFound {
                name: name.to_string(),
            });
        }
        self.store
            .set(key_accumulator_record(name, position_id), marshal(record)?);
        Ok(())
    }

    /// Read one position's share record.
    pub fn accumulator_share_record(
        &self,
        name: &str,
        position_id: u64,
    ) -> StateResult<AccumRecord> {
        match self.store.get(&key_accumulator_record(name, position_id)) {
            Some(bytes) => Ok(unmarshal(bytes)?),
            None => Err(StateError::ShareRecordNotFound {
                name: name.to_string(),
                position_id,
            }),
        }
    }
}
