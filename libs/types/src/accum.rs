//! Share-based reward accumulators
//!
//! An accumulator tracks a running reward-per-share value and total shares.
//! Each participant's share carries an [`AccumRecord`] snapshotting the
//! accumulator value at its last interaction, from which pending rewards are
//! derived by out-of-scope reward logic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::coin::DecCoins;

/// The accumulator's own state: reward-per-share value plus total shares
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccumulatorContent {
    /// Monotonically non-decreasing in normal operation.
    pub accum_value: DecCoins,
    pub total_shares: Decimal,
}

/// Reserved per-share configuration payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccumulatorOptions {}

/// One participant's share of an accumulator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccumRecord {
    pub num_shares: Decimal,
    /// Accumulator value snapshotted when the share was last touched.
    pub accum_value_per_share: DecCoins,
    pub unclaimed_rewards_total: DecCoins,
    pub options: Option<AccumulatorOptions>,
}

/// A named accumulator with its content, as carried in genesis bundles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccumObject {
    pub name: String,
    pub accum_content: AccumulatorContent,
}
