//! # Concentrated-Liquidity State Store
//!
//! ## Purpose
//!
//! Durable state management for a concentrated-liquidity automated market
//! maker: pools, per-pool price ticks, liquidity positions with optional
//! bonding-lock linkage, spread-reward and per-uptime-tier incentive
//! accumulators, and incentive emission schedules, together with full
//! snapshot import/export of all of it.
//!
//! ## Architecture Role
//!
//! ```text
//! Snapshot ──import──▶ [Keeper] ──export──▶ Snapshot
//!                         │
//!              ┌──────────┼──────────┬─────────────┐
//!              ▼          ▼          ▼             ▼
//!          Tick store  Positions  Accumulators  Incentive
//!          (ordered    + locks    (per pool,    records
//!           keys)                  per tier)    (per pool)
//!              └──────────┴──────────┴─────────────┘
//!                    ordered key-value store
//! ```
//!
//! The [`Keeper`] is the only component touching all leaf stores; swap
//! execution, reward distribution and liquidity provisioning live elsewhere
//! and consume this state through the same operations.
//!
//! ## Execution Model
//!
//! Single-threaded, strictly sequential state-machine execution. Nothing
//! here suspends or blocks; the keeper has exclusive ownership of its store.
//! Import runs once at process start and fails hard on malformed snapshots;
//! export is a pure, idempotent read.

pub mod accumulator;
pub mod error;
pub mod genesis;
pub mod incentive;
pub mod keeper;
pub mod pool;
pub mod position;
pub mod store;
pub mod tick;

pub use error::{StateError, StateResult};
pub use keeper::Keeper;
pub use store::{KvStore, MemStore};
