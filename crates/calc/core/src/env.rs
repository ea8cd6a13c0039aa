//! Oracle interfaces for data the calculation pipeline consumes.

use crate::monster::Monster;

/// Oracle providing the monster catalogue.
///
/// The catalogue order is significant: audits report monsters in the order
/// returned here, so implementations must return a stable sequence.
pub trait MonsterOracle: Send + Sync {
    fn monsters(&self) -> &[Monster];
}
