//! Standard NPC max-hit formulas.

use crate::engine::{CalcError, MaxHitEngine, MaxHitResult};
use crate::scenario::ScenarioConfig;
use crate::style::CombatStyle;

/// Engine implementing the standard NPC max-hit formulas.
///
/// # Formula
///
/// ```text
/// melee:  eff = strength + 9
///         max = floor((eff * (strength_bonus + 64) + 320) / 640)
/// ranged: eff = ranged + 9
///         max = floor((eff * (ranged_strength + 64) + 320) / 640)
/// magic:  eff = magic + 9
///         base = floor((eff * 64 + 320) / 640)
///         max = floor(base * (100 + magic_damage) / 100)
/// ```
///
/// Negative results clamp to 0. Only the monster's levels, bonuses and style
/// feed these formulas; the player and modifiers are read by engines that
/// model damage reduction and raid scaling.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReferenceEngine;

impl ReferenceEngine {
    /// Invisible +8 stance bonus plus the +1 every NPC receives.
    pub const NPC_LEVEL_OFFSET: i64 = 9;

    pub fn new() -> Self {
        Self
    }
}

impl MaxHitEngine for ReferenceEngine {
    fn max_hit(&self, scenario: &ScenarioConfig<'_>) -> MaxHitResult {
        let monster = scenario.monster;
        let overflow = || CalcError::Overflow {
            monster: monster.display_id(),
        };

        let style = monster.style.ok_or_else(|| CalcError::UnsupportedStyle {
            monster: monster.display_id(),
        })?;

        let skills = &monster.skills;
        let bonuses = &monster.offensive;

        let raw = match style {
            CombatStyle::Slash | CombatStyle::Crush | CombatStyle::Stab => {
                scaled_hit(skills.strength, bonuses.strength).ok_or_else(overflow)?
            }
            CombatStyle::Ranged => {
                scaled_hit(skills.ranged, bonuses.ranged_strength).ok_or_else(overflow)?
            }
            CombatStyle::Magic => {
                let base = scaled_hit(skills.magic, 0).ok_or_else(overflow)?;
                base.checked_mul(100 + i64::from(bonuses.magic_damage))
                    .map(|v| v.div_euclid(100))
                    .ok_or_else(overflow)?
            }
        };

        u32::try_from(raw.max(0)).map_err(|_| overflow())
    }
}

/// `floor(((level + 9) * (bonus + 64) + 320) / 640)`, unclamped.
fn scaled_hit(level: u32, bonus: i32) -> Option<i64> {
    let effective = i64::from(level).checked_add(ReferenceEngine::NPC_LEVEL_OFFSET)?;
    effective
        .checked_mul(i64::from(bonus) + 64)?
        .checked_add(320)
        .map(|v| v.div_euclid(640))
}
