//! The reference player profile used when comparing max hits.

use crate::monster::{DefensiveBonuses, OffensiveBonuses, Skills};

/// A player combatant.
///
/// Audits run against a single [`Player::baseline`]: maxed levels, nothing
/// equipped, no boosts and no prayers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub skills: Skills,
    /// Temporary level changes from potions and similar effects.
    pub boosts: Skills,
    pub offensive: OffensiveBonuses,
    pub defensive: DefensiveBonuses,
    /// Active prayer names.
    pub prayers: Vec<String>,
}

impl Player {
    pub const BASELINE_LEVEL: u32 = 99;

    /// Maxed player with no gear, boosts or prayers.
    pub fn baseline() -> Self {
        Self {
            skills: Skills::uniform(Self::BASELINE_LEVEL),
            boosts: Skills::default(),
            offensive: OffensiveBonuses::default(),
            defensive: DefensiveBonuses::default(),
            prayers: Vec::new(),
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::baseline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_is_maxed_and_unequipped() {
        let player = Player::baseline();
        assert_eq!(player.skills, Skills::uniform(99));
        assert_eq!(player.boosts, Skills::default());
        assert_eq!(player.offensive, OffensiveBonuses::default());
        assert_eq!(player.defensive, DefensiveBonuses::default());
        assert!(player.prayers.is_empty());
    }

    #[test]
    fn default_is_baseline() {
        assert_eq!(Player::default(), Player::baseline());
    }
}
