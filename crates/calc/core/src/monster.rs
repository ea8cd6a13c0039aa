//! Monster definitions as published in the monster catalogue.
//!
//! A [`Monster`] is read once from the catalogue and then only borrowed:
//! nothing in the calculation pipeline mutates it. The stat blocks use the
//! positional array layout of the catalogue file, so each block converts
//! to and from a fixed-size array.

use crate::style::CombatStyle;

/// Skill levels of a combatant.
///
/// Serialized as `[attack, defence, hitpoints, magic, ranged, strength]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[u32; 6]", into = "[u32; 6]"))]
pub struct Skills {
    pub attack: u32,
    pub defence: u32,
    pub hitpoints: u32,
    pub magic: u32,
    pub ranged: u32,
    pub strength: u32,
}

impl Skills {
    /// Every skill at the same level.
    pub const fn uniform(level: u32) -> Self {
        Self {
            attack: level,
            defence: level,
            hitpoints: level,
            magic: level,
            ranged: level,
            strength: level,
        }
    }
}

impl From<[u32; 6]> for Skills {
    fn from([attack, defence, hitpoints, magic, ranged, strength]: [u32; 6]) -> Self {
        Self {
            attack,
            defence,
            hitpoints,
            magic,
            ranged,
            strength,
        }
    }
}

impl From<Skills> for [u32; 6] {
    fn from(s: Skills) -> Self {
        [s.attack, s.defence, s.hitpoints, s.magic, s.ranged, s.strength]
    }
}

/// Offensive equipment bonuses.
///
/// Serialized as `[attack, magic_damage, magic_attack, ranged_attack,
/// ranged_strength, strength]`. `magic_damage` is a percentage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[i32; 6]", into = "[i32; 6]"))]
pub struct OffensiveBonuses {
    pub attack: i32,
    pub magic_damage: i32,
    pub magic_attack: i32,
    pub ranged_attack: i32,
    pub ranged_strength: i32,
    pub strength: i32,
}

impl From<[i32; 6]> for OffensiveBonuses {
    fn from(
        [attack, magic_damage, magic_attack, ranged_attack, ranged_strength, strength]: [i32; 6],
    ) -> Self {
        Self {
            attack,
            magic_damage,
            magic_attack,
            ranged_attack,
            ranged_strength,
            strength,
        }
    }
}

impl From<OffensiveBonuses> for [i32; 6] {
    fn from(o: OffensiveBonuses) -> Self {
        [
            o.attack,
            o.magic_damage,
            o.magic_attack,
            o.ranged_attack,
            o.ranged_strength,
            o.strength,
        ]
    }
}

/// Defensive equipment bonuses.
///
/// Serialized as `[crush, magic, ranged, slash, stab]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[i32; 5]", into = "[i32; 5]"))]
pub struct DefensiveBonuses {
    pub crush: i32,
    pub magic: i32,
    pub ranged: i32,
    pub slash: i32,
    pub stab: i32,
}

impl From<[i32; 5]> for DefensiveBonuses {
    fn from([crush, magic, ranged, slash, stab]: [i32; 5]) -> Self {
        Self {
            crush,
            magic,
            ranged,
            slash,
            stab,
        }
    }
}

impl From<DefensiveBonuses> for [i32; 5] {
    fn from(d: DefensiveBonuses) -> Self {
        [d.crush, d.magic, d.ranged, d.slash, d.stab]
    }
}

/// A combat entity from the monster catalogue.
///
/// The same `name` may appear several times with different `version`s
/// (e.g. `"Vardorvis"` with `"Quest"` and `"Awakened"`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    /// NPC id. Records without one are pruned by the catalogue loader.
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: Option<u32>,

    pub name: String,

    /// Variant discriminator. Blank versions are stored as `None`.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "blank_as_none")
    )]
    pub version: Option<String>,

    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "blank_as_none")
    )]
    pub image: Option<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub level: u32,

    /// Attack speed in game ticks.
    #[cfg_attr(feature = "serde", serde(default))]
    pub speed: u32,

    #[cfg_attr(feature = "serde", serde(default))]
    pub size: u32,

    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Skills,

    #[cfg_attr(feature = "serde", serde(default))]
    pub offensive: OffensiveBonuses,

    #[cfg_attr(feature = "serde", serde(default))]
    pub defensive: DefensiveBonuses,

    /// Monster attributes such as `"demon"` or `"undead"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Vec<String>,

    /// Attack style. Blank or unmodelled styles are `None`.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "CombatStyle::deserialize_lenient")
    )]
    pub style: Option<CombatStyle>,

    /// Max hit published on the wiki.
    #[cfg_attr(feature = "serde", serde(default, alias = "maxHit"))]
    pub max_hit: Option<u32>,
}

impl Monster {
    /// Creates a monster with the given name and default stats.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builds a monster from a wiki page key such as `"Ogre#Standard"`.
    ///
    /// The name runs up to the last `#` and the version starts after the
    /// first, so a key with several `#` shares its middle between both.
    pub fn from_page_key(key: &str) -> Self {
        match (key.rsplit_once('#'), key.split_once('#')) {
            (Some((name, _)), Some((_, version))) => Self::new(name).with_version(version),
            _ => Self::new(key),
        }
    }

    /// Sets the version. A blank version clears it.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        self.version = (!version.is_empty()).then_some(version);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: Option<CombatStyle>) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_max_hit(mut self, max_hit: Option<u32>) -> Self {
        self.max_hit = max_hit;
        self
    }

    #[must_use]
    pub fn with_skills(mut self, skills: Skills) -> Self {
        self.skills = skills;
        self
    }

    #[must_use]
    pub fn with_offensive(mut self, offensive: OffensiveBonuses) -> Self {
        self.offensive = offensive;
        self
    }

    /// Identifier used in reports: `name`, or `name#version`.
    pub fn display_id(&self) -> String {
        match &self.version {
            Some(version) => format!("{}#{}", self.name, version),
            None => self.name.clone(),
        }
    }
}

#[cfg(feature = "serde")]
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty()))
}
