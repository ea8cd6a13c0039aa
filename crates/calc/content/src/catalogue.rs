//! Monster catalogue implementing [`calc_core::MonsterOracle`].
use calc_core::{Monster, MonsterOracle};

/// MonsterOracle implementation backed by an in-memory list.
#[derive(Clone, Debug, Default)]
pub struct MonsterCatalogue {
    monsters: Vec<Monster>,
}

impl MonsterCatalogue {
    /// Wrap already-sanitised monsters, keeping their order.
    pub fn from_monsters(monsters: Vec<Monster>) -> Self {
        Self { monsters }
    }

    /// Load and sanitise a catalogue file.
    #[cfg(feature = "loaders")]
    pub fn load(path: &std::path::Path) -> crate::LoadResult<Self> {
        crate::MonsterLoader::load(path).map(Self::from_monsters)
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }
}

impl MonsterOracle for MonsterCatalogue {
    fn monsters(&self) -> &[Monster] {
        &self.monsters
    }
}
