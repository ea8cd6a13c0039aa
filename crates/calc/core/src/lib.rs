//! Combat-calculation types and engine contract.
//!
//! `calc-core` defines the monster catalogue model, the baseline player, the
//! scenario modifiers and the [`MaxHitEngine`] seam. It performs no I/O;
//! loaders live in `calc-content` and the audit pipeline in `maxhit-audit`.
pub mod engine;
pub mod env;
pub mod error;
pub mod monster;
pub mod player;
pub mod scenario;
pub mod style;

pub use engine::{CalcError, MaxHitEngine, MaxHitResult, ReferenceEngine};
pub use env::MonsterOracle;
pub use error::{CalcFailure, ErrorSeverity};
pub use monster::{DefensiveBonuses, Monster, OffensiveBonuses, Skills};
pub use player::Player;
pub use scenario::{DefenceReductions, ScenarioConfig, ScenarioModifiers};
pub use style::CombatStyle;
