//! Max-hit calculation engines.
//!
//! An engine turns a [`ScenarioConfig`] into the monster's maximum hit under
//! its own combat style. Failure is part of the signature: callers decide
//! whether an `Err` aborts the run.

mod errors;
mod reference;

pub use errors::CalcError;
pub use reference::ReferenceEngine;

use crate::scenario::ScenarioConfig;

/// Result of a single max-hit calculation.
pub type MaxHitResult = Result<u32, CalcError>;

/// Computes max hits for monsters.
///
/// Implementations must be deterministic for the duration of a run: the same
/// scenario always yields the same result.
pub trait MaxHitEngine {
    fn max_hit(&self, scenario: &ScenarioConfig<'_>) -> MaxHitResult;
}

impl<E: MaxHitEngine + ?Sized> MaxHitEngine for &E {
    fn max_hit(&self, scenario: &ScenarioConfig<'_>) -> MaxHitResult {
        (**self).max_hit(scenario)
    }
}

impl<E: MaxHitEngine + ?Sized> MaxHitEngine for Box<E> {
    fn max_hit(&self, scenario: &ScenarioConfig<'_>) -> MaxHitResult {
        (**self).max_hit(scenario)
    }
}
