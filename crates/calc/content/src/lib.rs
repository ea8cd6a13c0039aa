//! Data-driven monster content and loaders.
//!
//! This crate turns the monster catalogue file into an in-memory
//! [`calc_core::MonsterOracle`]:
//! - Catalogue parsing (data-driven via JSON)
//! - Record sanitisation (pruning and known stat corrections)
//! - The [`MonsterCatalogue`] oracle itself
//!
//! Loaders use calc-core types directly with serde for JSON deserialization.

pub mod catalogue;
pub mod sanitize;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalogue::MonsterCatalogue;
pub use sanitize::{PruneReason, apply_corrections, prune_reason, sanitize};

#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, MonsterLoader};
