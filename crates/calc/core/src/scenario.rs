//! Scenario configuration handed to a [`crate::MaxHitEngine`].
//!
//! A scenario is the player profile, one monster, and the situational
//! modifiers (raid context, party composition, defence reductions). The
//! modifiers are a plain `Copy` value: build it once and pass it by value
//! into every per-monster call.

use crate::monster::Monster;
use crate::player::Player;

/// Defence-reducing special attacks and spells applied to the monster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefenceReductions {
    pub vulnerability: bool,
    pub accursed: bool,
    /// Successful Dragon warhammer specials.
    pub dwh: u32,
    /// Successful Arclight hits.
    pub arclight: u32,
    /// Total damage dealt with Bandos godsword specials.
    pub bgs: u32,
}

/// Situational modifiers held constant across an audit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioModifiers {
    /// Monster is a Chambers of Xeric Challenge Mode variant.
    pub is_from_cox_cm: bool,
    pub toa_invocation_level: u32,
    pub toa_path_level: u32,
    pub party_max_combat_level: u32,
    pub party_avg_mining_level: u32,
    pub party_max_hp_level: u32,
    pub party_size: u32,
    pub monster_current_hp: u32,
    pub defence_reductions: DefenceReductions,
}

impl ScenarioModifiers {
    pub const DEFAULT_PARTY_MAX_COMBAT_LEVEL: u32 = 126;
    pub const DEFAULT_PARTY_AVG_MINING_LEVEL: u32 = 99;
    pub const DEFAULT_PARTY_MAX_HP_LEVEL: u32 = 99;
    pub const DEFAULT_PARTY_SIZE: u32 = 1;
    pub const DEFAULT_MONSTER_CURRENT_HP: u32 = 150;

    /// The literal constants every audit runs with.
    pub const fn new() -> Self {
        Self {
            is_from_cox_cm: false,
            toa_invocation_level: 0,
            toa_path_level: 0,
            party_max_combat_level: Self::DEFAULT_PARTY_MAX_COMBAT_LEVEL,
            party_avg_mining_level: Self::DEFAULT_PARTY_AVG_MINING_LEVEL,
            party_max_hp_level: Self::DEFAULT_PARTY_MAX_HP_LEVEL,
            party_size: Self::DEFAULT_PARTY_SIZE,
            monster_current_hp: Self::DEFAULT_MONSTER_CURRENT_HP,
            defence_reductions: DefenceReductions {
                vulnerability: false,
                accursed: false,
                dwh: 0,
                arclight: 0,
                bgs: 0,
            },
        }
    }
}

impl Default for ScenarioModifiers {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything an engine needs to compute one monster's max hit.
#[derive(Clone, Copy, Debug)]
pub struct ScenarioConfig<'a> {
    pub player: &'a Player,
    pub monster: &'a Monster,
    pub modifiers: ScenarioModifiers,
}

impl<'a> ScenarioConfig<'a> {
    pub fn new(player: &'a Player, monster: &'a Monster, modifiers: ScenarioModifiers) -> Self {
        Self {
            player,
            monster,
            modifiers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_audit_constants() {
        let m = ScenarioModifiers::default();
        assert!(!m.is_from_cox_cm);
        assert_eq!(m.toa_invocation_level, 0);
        assert_eq!(m.toa_path_level, 0);
        assert_eq!(m.party_max_combat_level, 126);
        assert_eq!(m.party_avg_mining_level, 99);
        assert_eq!(m.party_max_hp_level, 99);
        assert_eq!(m.party_size, 1);
        assert_eq!(m.monster_current_hp, 150);
        assert_eq!(m.defence_reductions, DefenceReductions::default());
    }

    #[test]
    fn config_borrows_monster_unchanged() {
        let player = Player::baseline();
        let monster = Monster::new("Goblin");
        let config = ScenarioConfig::new(&player, &monster, ScenarioModifiers::new());
        assert!(std::ptr::eq(config.monster, &monster));
        assert_eq!(config.modifiers, ScenarioModifiers::default());
    }
}
