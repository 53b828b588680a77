//! Decimal coin vectors
//!
//! [`DecCoin`] pairs a denomination with an arbitrary-precision decimal
//! amount. [`DecCoins`] keeps a vector of them sorted by denomination with no
//! duplicates, so equality and iteration order are canonical.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coin construction and combination errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoinError {
    #[error("negative amount {amount} for denom {denom}")]
    NegativeAmount { denom: String, amount: Decimal },

    #[error("empty denom")]
    EmptyDenom,

    #[error("duplicate denom {denom}")]
    DuplicateDenom { denom: String },
}

/// A single-denomination decimal amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecCoin {
    pub denom: String,
    pub amount: Decimal,
}

impl DecCoin {
    /// Create a coin, rejecting empty denoms and negative amounts.
    pub fn new(denom: impl Into<String>, amount: Decimal) -> Result<Self, CoinError> {
        let denom = denom.into();
        if denom.is_empty() {
            return Err(CoinError::EmptyDenom);
        }
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(CoinError::NegativeAmount { denom, amount });
        }
        Ok(Self { denom, amount })
    }
}

impl fmt::Display for DecCoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// A canonical multi-denomination decimal vector
///
/// Invariant: entries are sorted by denom and denoms are unique. Zero-amount
/// entries are permitted so that imported accumulator snapshots round-trip
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecCoins(Vec<DecCoin>);

impl DecCoins {
    /// Build from an unordered vector, sorting by denom and rejecting
    /// duplicates.
    pub fn new(mut coins: Vec<DecCoin>) -> Result<Self, CoinError> {
        coins.sort_by(|a, b| a.denom.cmp(&b.denom));
        for pair in coins.windows(2) {
            if pair[0].denom == pair[1].denom {
                return Err(CoinError::DuplicateDenom {
                    denom: pair[0].denom.clone(),
                });
            }
        }
        Ok(Self(coins))
    }

    /// The empty vector.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DecCoin> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[DecCoin] {
        &self.0
    }

    /// Amount held for a denom, zero when absent.
    pub fn amount_of(&self, denom: &str) -> Decimal {
        match self.0.binary_search_by(|c| c.denom.as_str().cmp(denom)) {
            Ok(i) => self.0[i].amount,
            Err(_) => Decimal::ZERO,
        }
    }

    /// Per-denomination sum of two vectors.
    pub fn add(&self, other: &DecCoins) -> DecCoins {
        let mut merged = self.0.clone();
        for coin in &other.0 {
            match merged.binary_search_by(|c| c.denom.cmp(&coin.denom)) {
                Ok(i) => merged[i].amount += coin.amount,
                Err(i) => merged.insert(i, coin.clone()),
            }
        }
        DecCoins(merged)
    }
}

impl fmt::Display for DecCoins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

impl<'a> IntoIterator for &'a DecCoins {
    type Item = &'a DecCoin;
    type IntoIter = std::slice::Iter<'a, DecCoin>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn coin_rejects_negative_amount() {
        let err = DecCoin::new("foo", dec!(-1)).unwrap_err();
        assert_eq!(
            err,
            CoinError::NegativeAmount {
                denom: "foo".to_string(),
                amount: dec!(-1),
            }
        );
    }

    #[test]
    fn coin_rejects_empty_denom() {
        assert_eq!(DecCoin::new("", dec!(1)).unwrap_err(), CoinError::EmptyDenom);
    }

    #[test]
    fn coins_sort_by_denom() {
        let coins = DecCoins::new(vec![
            DecCoin::new("zeta", dec!(3)).unwrap(),
            DecCoin::new("alpha", dec!(1)).unwrap(),
        ])
        .unwrap();
        let denoms: Vec<&str> = coins.iter().map(|c| c.denom.as_str()).collect();
        assert_eq!(denoms, vec!["alpha", "zeta"]);
    }

    #[test]
    fn coins_reject_duplicate_denoms() {
        let err = DecCoins::new(vec![
            DecCoin::new("foo", dec!(1)).unwrap(),
            DecCoin::new("foo", dec!(2)).unwrap(),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            CoinError::DuplicateDenom {
                denom: "foo".to_string()
            }
        );
    }

    #[test]
    fn add_merges_amounts_per_denom() {
        let a = DecCoins::new(vec![DecCoin::new("foo", dec!(10)).unwrap()]).unwrap();
        let b = DecCoins::new(vec![
            DecCoin::new("foo", dec!(5)).unwrap(),
            DecCoin::new("bar", dec!(2)).unwrap(),
        ])
        .unwrap();

        let sum = a.add(&b);
        assert_eq!(sum.amount_of("foo"), dec!(15));
        assert_eq!(sum.amount_of("bar"), dec!(2));
        assert_eq!(sum.amount_of("baz"), dec!(0));
    }
}
