//! Genesis snapshot types
//!
//! A [`GenesisState`] is the complete durable state of the module: global
//! parameters, one bundle per pool, and the two global id counters. Bundles
//! are ordered by pool id; everything inside a bundle keeps the deterministic
//! order the store yields (ticks ascending by index, positions ascending by
//! id, accumulators in uptime-tier order).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::accum::{AccumObject, AccumRecord};
use crate::constants::{uptime_index, SUPPORTED_UPTIMES};
use crate::incentive::IncentiveRecord;
use crate::params::{Params, ParamsError};
use crate::pool::PoolRecord;
use crate::position::PositionWithoutPoolId;
use crate::tick::FullTick;

/// Snapshot validation errors, all fatal for the startup sequence
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenesisError {
    #[error(transparent)]
    Params(#[from] ParamsError),

    #[error("pool {pool_id}: expected {expected} incentive accumulators, got {got}")]
    IncentiveAccumulatorCount {
        pool_id: u64,
        expected: usize,
        got: usize,
    },

    #[error("position {position_id}: expected {expected} uptime share records, got {got}")]
    UptimeRecordCount {
        position_id: u64,
        expected: usize,
        got: usize,
    },

    #[error("pool {pool_id}: duplicate tick index {tick_index}")]
    DuplicateTickIndex { pool_id: u64, tick_index: i64 },

    #[error("duplicate position id {position_id}")]
    DuplicatePositionId { position_id: u64 },

    #[error("position {position_id}: lower tick {lower_tick} not below upper tick {upper_tick}")]
    InvalidTickRange {
        position_id: u64,
        lower_tick: i64,
        upper_tick: i64,
    },

    #[error("duplicate incentive record id {incentive_id}")]
    DuplicateIncentiveId { incentive_id: u64 },

    #[error("incentive record {incentive_id}: min uptime {uptime:?} is not a supported tier")]
    UnsupportedMinUptime {
        incentive_id: u64,
        uptime: std::time::Duration,
    },
}

/// Everything stored for one position in a genesis bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionData {
    /// Zero means unlocked; nonzero links the position to a bonding lock.
    pub lock_id: u64,
    pub position: PositionWithoutPoolId,
    pub spread_reward_accum_record: AccumRecord,
    /// One record per supported uptime tier, in tier order.
    pub uptime_accum_records: Vec<AccumRecord>,
}

/// Per-pool genesis bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolData<P> {
    pub pool: P,
    /// Ascending by tick index.
    pub ticks: Vec<FullTick>,
    pub spread_reward_accumulator: AccumObject,
    /// One per supported uptime tier, in tier order.
    pub incentive_accumulators: Vec<AccumObject>,
    /// Ascending by position id.
    pub position_data: Vec<PositionData>,
    pub incentive_records: Vec<IncentiveRecord>,
}

/// Complete durable state of the module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenesisState<P> {
    pub params: Params,
    /// Ascending by pool id.
    pub pool_data: Vec<PoolData<P>>,
    pub next_incentive_record_id: u64,
    pub next_position_id: u64,
}

impl<P: PoolRecord> GenesisState<P> {
    /// Structural validation of the snapshot. The counters are deliberately
    /// not cross-checked against the ids present: the snapshot's counters are
    /// authoritative and their consistency is a caller guarantee.
    pub fn validate(&self) -> Result<(), GenesisError> {
        self.params.validate()?;

        let tier_count = SUPPORTED_UPTIMES.len();
        let mut seen_positions = HashSet::new();
        let mut seen_incentive_ids = HashSet::new();

        for pool_data in &self.pool_data {
            let pool_id = pool_data.pool.pool_id();

            let mut seen_ticks = HashSet::new();
            for tick in &pool_data.ticks {
                if !seen_ticks.insert(tick.tick_index) {
                    return Err(GenesisError::DuplicateTickIndex {
                        pool_id,
                        tick_index: tick.tick_index,
                    });
                }
            }

            let got = pool_data.incentive_accumulators.len();
            if got != tier_count {
                return Err(GenesisError::IncentiveAccumulatorCount {
                    pool_id,
                    expected: tier_count,
                    got,
                });
            }

            for position_data in &pool_data.position_data {
                let position = &position_data.position;
                if !seen_positions.insert(position.position_id) {
                    return Err(GenesisError::DuplicatePositionId {
                        position_id: position.position_id,
                    });
                }
                if position.lower_tick >= position.upper_tick {
                    return Err(GenesisError::InvalidTickRange {
                        position_id: position.position_id,
                        lower_tick: position.lower_tick,
                        upper_tick: position.upper_tick,
                    });
                }
                let got = position_data.uptime_accum_records.len();
                if got != tier_count {
                    return Err(GenesisError::UptimeRecordCount {
                        position_id: position.position_id,
                        expected: tier_count,
                        got,
                    });
                }
            }

            for record in &pool_data.incentive_records {
                if !seen_incentive_ids.insert(record.incentive_id) {
                    return Err(GenesisError::DuplicateIncentiveId {
                        incentive_id: record.incentive_id,
                    });
                }
                if uptime_index(record.min_uptime).is_none() {
                    return Err(GenesisError::UnsupportedMinUptime {
                        incentive_id: record.incentive_id,
                        uptime: record.min_uptime,
                    });
                }
            }
        }

        Ok(())
    }
}

impl<P: PoolRecord> Default for GenesisState<P> {
    fn default() -> Self {
        Self {
            params: Params::default(),
            pool_data: Vec::new(),
            next_incentive_record_id: 1,
            next_position_id: 1,
        }
    }
}
