//! Chain-wide constants
//!
//! The supported uptime tiers are fixed for the whole chain. Every pool
//! carries one incentive accumulator per tier, and every position carries one
//! uptime share record per tier, always in this order.

use std::time::Duration;

/// Minimum-bonding-duration thresholds gating incentive eligibility, in
/// ascending order. The first tier (1ns) is the "no lockup" tier.
pub const SUPPORTED_UPTIMES: [Duration; 6] = [
    Duration::from_nanos(1),
    Duration::from_secs(60),
    Duration::from_secs(60 * 60),
    Duration::from_secs(6 * 60 * 60),
    Duration::from_secs(12 * 60 * 60),
    Duration::from_secs(14 * 24 * 60 * 60),
];

/// Tier index of an uptime duration, `None` when the duration is not a
/// supported tier.
pub fn uptime_index(uptime: Duration) -> Option<usize> {
    SUPPORTED_UPTIMES.iter().position(|u| *u == uptime)
}
