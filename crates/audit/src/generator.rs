//! Discrepancy generator.
//!
//! Walks the monster catalogue once, in order. For every monster with a wiki
//! max hit and a known style it asks the engine for a max hit and records
//! the monster under its style when the two differ.

use calc_core::{
    CombatStyle, MaxHitEngine, Monster, MonsterOracle, Player, ScenarioConfig, ScenarioModifiers,
};

use crate::error::{AuditError, Result};
use crate::report::MismatchReport;

/// Whether a monster takes part in the comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Eligibility {
    Eligible {
        style: CombatStyle,
        expected: u32,
    },
    /// No wiki max hit to compare against.
    NoWikiMaxHit,
    /// Blank or unmodelled style.
    UnknownStyle,
}

impl Eligibility {
    pub fn of(monster: &Monster) -> Self {
        match (monster.max_hit, monster.style) {
            (None, _) => Self::NoWikiMaxHit,
            (Some(_), None) => Self::UnknownStyle,
            (Some(expected), Some(style)) => Self::Eligible { style, expected },
        }
    }
}

/// Counts gathered during one audit pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuditSummary {
    pub examined: usize,
    pub skipped_no_max_hit: usize,
    pub skipped_unknown_style: usize,
    pub compared: usize,
    pub matched: usize,
    pub mismatched: usize,
}

impl AuditSummary {
    pub fn skipped(&self) -> usize {
        self.skipped_no_max_hit + self.skipped_unknown_style
    }
}

/// Report and counts from a completed audit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditOutcome {
    pub report: MismatchReport,
    pub summary: AuditSummary,
}

/// Compares wiki max hits with engine max hits.
///
/// The player profile and scenario modifiers are fixed at construction and
/// shared by every monster in the run.
pub struct DiscrepancyGenerator<E> {
    engine: E,
    player: Player,
    modifiers: ScenarioModifiers,
}

impl<E: MaxHitEngine> DiscrepancyGenerator<E> {
    /// Generator using the baseline player and the default scenario.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            player: Player::baseline(),
            modifiers: ScenarioModifiers::new(),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Audits every monster the oracle provides.
    pub fn run(&self, oracle: &dyn MonsterOracle) -> Result<AuditOutcome> {
        self.generate(oracle.monsters())
    }

    /// Audits `monsters` in order.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Calculation`] on the first engine failure; no
    /// report is produced in that case.
    pub fn generate(&self, monsters: &[Monster]) -> Result<AuditOutcome> {
        let mut report = MismatchReport::new();
        let mut summary = AuditSummary::default();

        for monster in monsters {
            summary.examined += 1;

            let (style, expected) = match Eligibility::of(monster) {
                Eligibility::Eligible { style, expected } => (style, expected),
                Eligibility::NoWikiMaxHit => {
                    summary.skipped_no_max_hit += 1;
                    tracing::trace!(monster = %monster.display_id(), "skipped: no wiki max hit");
                    continue;
                }
                Eligibility::UnknownStyle => {
                    summary.skipped_unknown_style += 1;
                    tracing::trace!(monster = %monster.display_id(), "skipped: unknown style");
                    continue;
                }
            };

            let scenario = ScenarioConfig::new(&self.player, monster, self.modifiers);
            let computed = self
                .engine
                .max_hit(&scenario)
                .map_err(|source| AuditError::Calculation {
                    monster: monster.display_id(),
                    source,
                })?;
            summary.compared += 1;

            if computed == expected {
                summary.matched += 1;
                continue;
            }

            summary.mismatched += 1;
            tracing::debug!(
                monster = %monster.display_id(),
                style = %style,
                expected,
                computed,
                "max hit mismatch"
            );
            report.record(style, monster.display_id());
        }

        Ok(AuditOutcome { report, summary })
    }
}
