//! Incentive emission schedules

use std::time::Duration;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::coin::DecCoin;

/// The mutable body of an incentive record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncentiveRecordBody {
    /// Amount left to emit, single denomination.
    pub remaining_coin: DecCoin,
    /// Emission per second.
    pub emission_rate: Decimal,
    pub start_time: DateTime<Utc>,
}

/// A scheduled reward emission funding a pool's incentive accumulators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncentiveRecord {
    /// Unique across the whole system, not just within a pool.
    pub incentive_id: u64,
    pub pool_id: u64,
    pub incentive_record_body: IncentiveRecordBody,
    /// Must be one of the supported uptime tiers.
    pub min_uptime: Duration,
}
