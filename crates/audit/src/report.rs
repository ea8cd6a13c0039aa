//! Style-partitioned mismatch report.
//!
//! The report always carries six buckets, serialized in a fixed key order:
//! `""`, `slash`, `crush`, `stab`, `magic`, `ranged`. The blank bucket is
//! kept for output-shape compatibility; [`MismatchReport::record`] only
//! accepts a known [`CombatStyle`], so nothing can land in it.

use calc_core::CombatStyle;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Key of the bucket for monsters without a known style.
pub const BLANK_BUCKET: &str = "";

/// Mismatched monster display ids grouped by combat style.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MismatchReport {
    buckets: [Vec<String>; 6],
}

impl MismatchReport {
    /// Bucket keys in serialization order.
    pub const KEYS: [&'static str; 6] = [BLANK_BUCKET, "slash", "crush", "stab", "magic", "ranged"];

    /// Creates a report with six empty buckets.
    pub fn new() -> Self {
        Self::default()
    }

    const fn slot(style: Option<CombatStyle>) -> usize {
        match style {
            None => 0,
            Some(CombatStyle::Slash) => 1,
            Some(CombatStyle::Crush) => 2,
            Some(CombatStyle::Stab) => 3,
            Some(CombatStyle::Magic) => 4,
            Some(CombatStyle::Ranged) => 5,
        }
    }

    /// Appends a mismatched monster to its style's bucket.
    pub fn record(&mut self, style: CombatStyle, display_id: impl Into<String>) {
        self.buckets[Self::slot(Some(style))].push(display_id.into());
    }

    /// Entries of one bucket; `None` selects the blank bucket.
    pub fn bucket(&self, style: Option<CombatStyle>) -> &[String] {
        &self.buckets[Self::slot(style)]
    }

    /// Entries of the blank bucket.
    pub fn blank(&self) -> &[String] {
        self.bucket(None)
    }

    /// `(key, entries)` pairs in serialization order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        Self::KEYS
            .into_iter()
            .zip(self.buckets.iter().map(Vec::as_slice))
    }

    /// Total number of mismatches across all buckets.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Hex SHA-256 over the report contents.
    ///
    /// Two reports share a digest exactly when they have the same entries in
    /// the same buckets and order.
    pub fn digest(&self) -> String {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        // Length prefixes keep ("ab", "c") distinct from ("a", "bc").
        for (key, entries) in self.iter() {
            hasher.update((key.len() as u64).to_le_bytes());
            hasher.update(key.as_bytes());
            hasher.update((entries.len() as u64).to_le_bytes());
            for entry in entries {
                hasher.update((entry.len() as u64).to_le_bytes());
                hasher.update(entry.as_bytes());
            }
        }

        hex::encode(hasher.finalize())
    }
}

impl Serialize for MismatchReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Self::KEYS.len()))?;
        for (key, entries) in self.iter() {
            map.serialize_entry(key, entries)?;
        }
        map.end()
    }
}
