//! Catalogue record sanitisation.
//!
//! The wiki export contains pages that are not real, fightable monsters, plus
//! a few monsters whose stats the export gets wrong. Records are pruned or
//! corrected here before they reach any oracle.

use calc_core::Monster;

/// Why a catalogue record was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PruneReason {
    /// Page lives outside the main wiki namespace (e.g. `"User:..."`).
    Namespaced,
    /// Chambers of Xeric Challenge Mode variant; CM is a scenario modifier.
    ChallengeModeVariant,
    NoHitpoints,
    MissingId,
    Historical,
    PvmArena,
    DeadmanApocalypse,
}

impl PruneReason {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Namespaced => "namespaced page",
            Self::ChallengeModeVariant => "challenge mode variant",
            Self::NoHitpoints => "no hitpoints",
            Self::MissingId => "missing npc id",
            Self::Historical => "historical",
            Self::PvmArena => "pvm arena",
            Self::DeadmanApocalypse => "deadman apocalypse",
        }
    }
}

/// Returns the reason `monster` should be dropped, if any.
pub fn prune_reason(monster: &Monster) -> Option<PruneReason> {
    if is_namespaced(&monster.name) {
        return Some(PruneReason::Namespaced);
    }
    if monster
        .version
        .as_deref()
        .is_some_and(|v| v.contains("Challenge Mode"))
    {
        return Some(PruneReason::ChallengeModeVariant);
    }
    if monster.skills.hitpoints == 0 {
        return Some(PruneReason::NoHitpoints);
    }
    if monster.id.is_none() {
        return Some(PruneReason::MissingId);
    }

    let name = monster.name.to_lowercase();
    if name.contains("(historical)") {
        Some(PruneReason::Historical)
    } else if name.contains("(pvm arena)") {
        Some(PruneReason::PvmArena)
    } else if name.contains("(deadman: apocalypse)") {
        Some(PruneReason::DeadmanApocalypse)
    } else {
        None
    }
}

/// `^[A-z]*:` on the page name. The range also spans `[ \ ] ^ _` and
/// backtick, so `Foo_bar:x` counts as namespaced.
fn is_namespaced(name: &str) -> bool {
    name.split_once(':')
        .is_some_and(|(prefix, _)| prefix.chars().all(|c| ('A'..='z').contains(&c)))
}

/// Patches stats the wiki export cannot express. Returns true if `monster`
/// was changed.
///
/// Vardorvis' defence and strength change between fight phases and the
/// export only captures one value.
pub fn apply_corrections(monster: &mut Monster) -> bool {
    if monster.name != "Vardorvis" {
        return false;
    }

    let (defence, strength) = match monster.version.as_deref() {
        Some("Post-Quest") => (215, 270),
        Some("Awakened") => (268, 391),
        Some("Quest") => (180, 210),
        _ => return false,
    };

    monster.skills.defence = defence;
    monster.skills.strength = strength;
    true
}

/// Drops prunable records and corrects the rest, preserving order.
pub fn sanitize(monsters: Vec<Monster>) -> Vec<Monster> {
    monsters
        .into_iter()
        .filter_map(|mut monster| {
            if let Some(reason) = prune_reason(&monster) {
                tracing::debug!(
                    monster = %monster.display_id(),
                    reason = reason.as_str(),
                    "pruned catalogue record"
                );
                return None;
            }
            if apply_corrections(&mut monster) {
                tracing::debug!(monster = %monster.display_id(), "applied stat correction");
            }
            Some(monster)
        })
        .collect()
}
