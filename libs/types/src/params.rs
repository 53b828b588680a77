//! Module parameters
//!
//! Governance-controlled configuration for pool creation and incentive
//! eligibility. Parameters are stored verbatim in the key-value store and
//! carried whole through genesis snapshots.

use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{uptime_index, SUPPORTED_UPTIMES};

/// Parameter validation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error("authorized tick spacings must be non-empty")]
    EmptyTickSpacings,

    #[error("tick spacing 0 is not valid")]
    ZeroTickSpacing,

    #[error("spread factor {spread_factor} outside [0, 1)")]
    SpreadFactorOutOfRange { spread_factor: Decimal },

    #[error("authorized quote denoms must be non-empty")]
    EmptyQuoteDenoms,

    #[error("balancer shares reward discount {discount} outside [0, 1]")]
    DiscountOutOfRange { discount: Decimal },

    #[error("authorized uptimes must be non-empty")]
    EmptyUptimes,

    #[error("uptime {uptime:?} is not a supported tier")]
    UnsupportedUptime { uptime: Duration },
}

/// Governance parameters for the concentrated-liquidity module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    pub authorized_tick_spacing: Vec<u64>,
    pub authorized_spread_factors: Vec<Decimal>,
    /// Denoms allowed on the quote side of a pool.
    pub authorized_quote_denoms: Vec<String>,
    /// Haircut applied to full-range balancer shares when sharing incentives.
    pub balancer_shares_reward_discount: Decimal,
    /// Subset of the supported uptimes currently eligible for incentives.
    pub authorized_uptimes: Vec<Duration>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            authorized_tick_spacing: vec![1, 10, 100, 1000],
            authorized_spread_factors: vec![dec!(0.0001), dec!(0.0003), dec!(0.0005)],
            authorized_quote_denoms: vec!["eth".to_string(), "usdc".to_string()],
            balancer_shares_reward_discount: dec!(0.05),
            authorized_uptimes: SUPPORTED_UPTIMES.to_vec(),
        }
    }
}

impl Params {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.authorized_tick_spacing.is_empty() {
            return Err(ParamsError::EmptyTickSpacings);
        }
        if self.authorized_tick_spacing.contains(&0) {
            return Err(ParamsError::ZeroTickSpacing);
        }
        for spread_factor in &self.authorized_spread_factors {
            if spread_factor.is_sign_negative() || *spread_factor >= Decimal::ONE {
                return Err(ParamsError::SpreadFactorOutOfRange {
                    spread_factor: *spread_factor,
                });
            }
        }
        if self.authorized_quote_denoms.is_empty() {
            return Err(ParamsError::EmptyQuoteDenoms);
        }
        if self.balancer_shares_reward_discount.is_sign_negative()
            || self.balancer_shares_reward_discount > Decimal::ONE
        {
            return Err(ParamsError::DiscountOutOfRange {
                discount: self.balancer_shares_reward_discount,
            });
        }
        if self.authorized_uptimes.is_empty() {
            return Err(ParamsError::EmptyUptimes);
        }
        for uptime in &self.authorized_uptimes {
            if uptime_index(*uptime).is_none() {
                return Err(ParamsError::UnsupportedUptime { uptime: *uptime });
            }
        }
        Ok(())
    }
}
