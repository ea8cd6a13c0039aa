//! Combat styles a monster can attack with.

/// Damage style of a monster's attack.
///
/// The style decides which offensive stats the max-hit formula reads and
/// which report bucket a discrepancy lands in.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CombatStyle {
    Slash,
    Crush,
    Stab,
    Magic,
    Ranged,
}

impl CombatStyle {
    /// Every known style, in report order.
    pub const ALL: [CombatStyle; 5] = [
        CombatStyle::Slash,
        CombatStyle::Crush,
        CombatStyle::Stab,
        CombatStyle::Magic,
        CombatStyle::Ranged,
    ];

    /// Parses a style label, mapping blank or unrecognised labels to `None`.
    ///
    /// The wiki records styles such as `"Melee"` or `"Dragonfire"` that the
    /// engine does not model; those count as unknown rather than as errors.
    pub fn parse_lenient(label: &str) -> Option<Self> {
        label.trim().parse().ok()
    }

    /// Serde adapter for [`Self::parse_lenient`].
    #[cfg(feature = "serde")]
    pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::Deserialize;

        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label.as_deref().and_then(Self::parse_lenient))
    }
}
