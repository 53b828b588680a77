//! Property tests for the tick key codec
//!
//! The ordered key-value store gives us byte-lexicographic iteration; these
//! properties pin down that the key layout turns that into numeric tick
//! ordering with no pool interleaving, for the whole signed range.

use proptest::prelude::*;
use rust_decimal_macros::dec;

use codec::{
    key_tick, key_tick_prefix_by_pool_id, marshal, parse_full_tick_from_bytes,
    tick_index_from_bytes, tick_index_to_bytes, TICK_KEY_LENGTH,
};
use types::{DecCoin, DecCoins, TickInfo, UptimeTracker};

fn test_tick_info() -> TickInfo {
    let coins = DecCoins::new(vec![DecCoin::new("foo", dec!(100)).unwrap()]).unwrap();
    TickInfo {
        liquidity_gross: dec!(1),
        liquidity_net: dec!(1),
        spread_reward_growth_opposite_direction_of_last_traversal: coins.clone(),
        uptime_trackers: vec![UptimeTracker {
            uptime_growth_outside: coins,
        }],
    }
}

proptest! {
    #[test]
    fn tick_index_encoding_round_trips(tick_index in any::<i64>()) {
        let bytes = tick_index_to_bytes(tick_index);
        prop_assert_eq!(tick_index_from_bytes(&bytes), tick_index);
    }

    #[test]
    fn key_order_matches_tick_order(pool_id in any::<u64>(), a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(a != b);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        prop_assert!(key_tick(pool_id, lo) < key_tick(pool_id, hi));
    }

    #[test]
    fn pools_never_interleave(p1 in any::<u64>(), p2 in any::<u64>(), a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(p1 != p2);
        let (lo, hi) = if p1 < p2 { (p1, p2) } else { (p2, p1) };
        prop_assert!(key_tick(lo, a) < key_tick(hi, b));
    }

    #[test]
    fn every_tick_key_sits_under_its_pool_prefix(pool_id in any::<u64>(), tick_index in any::<i64>()) {
        let key = key_tick(pool_id, tick_index);
        prop_assert_eq!(key.len(), TICK_KEY_LENGTH);
        prop_assert!(key.starts_with(&key_tick_prefix_by_pool_id(pool_id)));
    }

    #[test]
    fn full_key_decode_recovers_the_index(pool_id in any::<u64>(), tick_index in any::<i64>()) {
        let info = test_tick_info();
        let value = marshal(&info).unwrap();
        let full_tick = parse_full_tick_from_bytes(&key_tick(pool_id, tick_index), &value).unwrap();
        prop_assert_eq!(full_tick.tick_index, tick_index);
        prop_assert_eq!(full_tick.info, info);
    }
}
