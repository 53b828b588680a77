//! Incentive record storage
//!
//! Records are keyed by (pool id, uptime tier, record id); record ids are
//! unique across the whole system, advanced by the global counter. Listing a
//! pool's records follows the key order, ascending by tier then record id,
//! which is stable across export round trips.

use codec::{
    key_incentive_prefix_by_pool_id, key_incentive_record, marshal,
    parse_incentive_record_from_bytes,
};
use types::{uptime_index, IncentiveRecord, PoolRecord};

use crate::error::{StateError, StateResult};
use crate::keeper::Keeper;
use crate::store::KvStore;

impl<S: KvStore, P: PoolRecord> Keeper<S, P> {
    /// Write an incentive record under its (pool, tier, id) key.
    pub fn set_incentive_record(&mut self, record: &IncentiveRecord) -> StateResult<()> {
        let tier = uptime_index(record.min_uptime).ok_or(StateError::UnsupportedUptime {
            uptime: record.min_uptime,
        })?;
        self.store.set(
            key_incentive_record(record.pool_id, tier as u64, record.incentive_id),
            marshal(&record.incentive_record_body)?,
        );
        Ok(())
    }

    /// All incentive records of a pool, ascending by (uptime tier, record
    /// id).
    pub fn all_incentive_records_for_pool(&self, pool_id: u64) -> StateResult<Vec<IncentiveRecord>> {
        let prefix = key_incentive_prefix_by_pool_id(pool_id);
        self.store
            .iterate_prefix(&prefix)
            .map(|(key, value)| {
                parse_incentive_record_from_bytes(key, value).map_err(StateError::from)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemStore;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use std::time::Duration;
    use types::{DecCoin, IncentiveRecordBody, SUPPORTED_UPTIMES};

    fn record(pool_id: u64, incentive_id: u64, tier: usize) -> IncentiveRecord {
        IncentiveRecord {
            incentive_id,
            pool_id,
            incentive_record_body: IncentiveRecordBody {
                remaining_coin: DecCoin::new("foo", dec!(5)).unwrap(),
                emission_rate: dec!(10),
                start_time: Utc.timestamp_opt(100, 100).unwrap(),
            },
            min_uptime: SUPPORTED_UPTIMES[tier],
        }
    }

    #[test]
    fn unsupported_uptime_is_rejected() {
        let mut keeper: Keeper<MemStore> = Keeper::new(MemStore::new());
        let mut bad = record(1, 1, 0);
        bad.min_uptime = Duration::from_secs(7);
        assert_eq!(
            keeper.set_incentive_record(&bad).unwrap_err(),
            StateError::UnsupportedUptime {
                uptime: Duration::from_secs(7)
            }
        );
    }

    #[test]
    fn listing_is_scoped_and_key_ordered() {
        let mut keeper: Keeper<MemStore> = Keeper::new(MemStore::new());
        keeper.set_incentive_record(&record(1, 4, 1)).unwrap();
        keeper.set_incentive_record(&record(1, 2, 0)).unwrap();
        keeper.set_incentive_record(&record(1, 1, 1)).unwrap();
        keeper.set_incentive_record(&record(2, 3, 0)).unwrap();

        let listed = keeper.all_incentive_records_for_pool(1).unwrap();
        let ids: Vec<u64> = listed.iter().map(|r| r.incentive_id).collect();
        // tier 0 first, then tier 1 ordered by record id
        assert_eq!(ids, vec![2, 1, 4]);
        assert!(listed.iter().all(|r| r.pool_id == 1));

        assert_eq!(keeper.all_incentive_records_for_pool(2).unwrap().len(), 1);
    }

    #[test]
    fn records_round_trip_through_key_and_body() {
        let mut keeper: Keeper<MemStore> = Keeper::new(MemStore::new());
        let original = record(1, 7, 3);
        keeper.set_incentive_record(&original).unwrap();

        let listed = keeper.all_incentive_records_for_pool(1).unwrap();
        assert_eq!(listed, vec![original]);
    }
}
