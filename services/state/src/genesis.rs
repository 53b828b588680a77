//! Genesis import and export
//!
//! Import rebuilds the entire module state from a snapshot; export produces
//! a snapshot that rebuilds identical state. Both walk the same shape: per
//! pool, the pool entity, its ticks, its spread-reward accumulator, its
//! per-tier incentive accumulators, its positions with their lock linkage
//! and share records, and its incentive records, with the two global
//! counters on the outside.
//!
//! Import runs once at process start against an empty store and fails hard
//! on a malformed snapshot; it never merges with pre-existing state. Export
//! is a pure read and yields identical snapshots when invoked twice without
//! intervening writes.

use tracing::{debug, info};

use codec::{spread_reward_accumulator_name, uptime_accumulator_name};
use types::{AccumObject, GenesisState, PoolData, PoolRecord, PositionData, SUPPORTED_UPTIMES};

use crate::error::{StateError, StateResult};
use crate::keeper::Keeper;
use crate::store::KvStore;

impl<S: KvStore, P: PoolRecord> Keeper<S, P> {
    /// Rebuild all module state from a snapshot.
    ///
    /// The snapshot's counters are authoritative: they are written as given,
    /// not re-derived from the imported records.
    pub fn init_genesis(&mut self, genesis: &GenesisState<P>) -> StateResult<()> {
        genesis.validate()?;

        info!(pools = genesis.pool_data.len(), "importing genesis state");
        self.set_params(&genesis.params)?;

        for pool_data in &genesis.pool_data {
            let pool_id = pool_data.pool.pool_id();
            debug!(
                pool_id,
                ticks = pool_data.ticks.len(),
                positions = pool_data.position_data.len(),
                incentive_records = pool_data.incentive_records.len(),
                "importing pool bundle"
            );

            self.set_pool(&pool_data.pool)?;

            for tick in &pool_data.ticks {
                self.set_tick_info(pool_id, tick.tick_index, &tick.info)?;
            }

            let spread = &pool_data.spread_reward_accumulator;
            self.create_accumulator(&spread.name, &spread.accum_content)?;
            for accumulator in &pool_data.incentive_accumulators {
                self.create_accumulator(&accumulator.name, &accumulator.accum_content)?;
            }

            let spread_name = spread_reward_accumulator_name(pool_id);
            for position_data in &pool_data.position_data {
                let position = position_data.position.clone().into_position(pool_id);
                let position_id = position.position_id;
                self.set_position(&position)?;

                // Lock id zero means unlocked: no linkage entry is written,
                // and a later lookup reports not-found.
                if position_data.lock_id != 0 {
                    self.set_position_id_to_lock(position_id, position_data.lock_id)?;
                }

                self.set_accumulator_share_record(
                    &spread_name,
                    position_id,
                    &position_data.spread_reward_accum_record,
                )?;
                for (tier, record) in position_data.uptime_accum_records.iter().enumerate() {
                    self.set_accumulator_share_record(
                        &uptime_accumulator_name(pool_id, tier as u64),
                        position_id,
                        record,
                    )?;
                }
            }

            for record in &pool_data.incentive_records {
                self.set_incentive_record(record)?;
            }
        }

        self.set_next_incentive_record_id(genesis.next_incentive_record_id)?;
        self.set_next_position_id(genesis.next_position_id)?;
        Ok(())
    }

    /// Produce a snapshot reproducing all module state. Read-only and
    /// idempotent.
    pub fn export_genesis(&self) -> StateResult<GenesisState<P>> {
        let params = self.params()?;
        let pools = self.pools()?;
        info!(pools = pools.len(), "exporting genesis state");

        let mut pool_data = Vec::with_capacity(pools.len());
        for pool in pools {
            let pool_id = pool.pool_id();

            let ticks = self.all_initialized_ticks_for_pool(pool_id)?;

            let spread_name = spread_reward_accumulator_name(pool_id);
            let spread_reward_accumulator = AccumObject {
                name: spread_name.clone(),
                accum_content: self.accumulator_content(&spread_name)?,
            };

            let mut incentive_accumulators = Vec::with_capacity(SUPPORTED_UPTIMES.len());
            for tier in 0..SUPPORTED_UPTIMES.len() as u64 {
                let name = uptime_accumulator_name(pool_id, tier);
                let accum_content = self.accumulator_content(&name)?;
                incentive_accumulators.push(AccumObject {
                    name,
                    accum_content,
                });
            }

            let positions = self.all_positions_for_pool(pool_id)?;
            let mut position_data = Vec::with_capacity(positions.len());
            for position in positions {
                let position_id = position.position_id;

                // Unlocked positions export lock id zero; that is a value,
                // not an error, and the only place absence maps to zero.
                let lock_id = match self.lock_id_from_position_id(position_id) {
                    Ok(lock_id) => lock_id,
                    Err(StateError::PositionIdToLockNotFound { .. }) => 0,
                    Err(err) => return Err(err),
                };

                let spread_reward_accum_record =
                    self.accumulator_share_record(&spread_name, position_id)?;
                let mut uptime_accum_records = Vec::with_capacity(SUPPORTED_UPTIMES.len());
                for tier in 0..SUPPORTED_UPTIMES.len() as u64 {
                    uptime_accum_records.push(self.accumulator_share_record(
                        &uptime_accumulator_name(pool_id, tier),
                        position_id,
                    )?);
                }

                position_data.push(PositionData {
                    lock_id,
                    position: position.without_pool_id(),
                    spread_reward_accum_record,
                    uptime_accum_records,
                });
            }

            let incentive_records = self.all_incentive_records_for_pool(pool_id)?;

            pool_data.push(PoolData {
                pool,
                ticks,
                spread_reward_accumulator,
                incentive_accumulators,
                position_data,
                incentive_records,
            });
        }

        Ok(GenesisState {
            params,
            pool_data,
            next_incentive_record_id: self.next_incentive_record_id()?,
            next_position_id: self.next_position_id()?,
        })
    }
}
