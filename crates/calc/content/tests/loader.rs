use std::io::Write;

use calc_content::{MonsterCatalogue, MonsterLoader};
use calc_core::{CombatStyle, MonsterOracle};

const CATALOGUE: &str = r#"[
  {
    "id": 3029,
    "name": "Goblin",
    "version": "",
    "image": "Goblin.png",
    "level": 2,
    "speed": 4,
    "size": 1,
    "skills": [1, 1, 5, 1, 1, 1],
    "offensive": [0, 0, 0, 0, 0, 0],
    "defensive": [0, 0, 0, 0, 0],
    "attributes": [],
    "style": "Crush",
    "max_hit": 1
  },
  {
    "id": null,
    "name": "Ghostly goblin",
    "skills": [1, 1, 5, 1, 1, 1],
    "style": "Crush",
    "max_hit": 1
  },
  {
    "id": 7554,
    "name": "Great Olm",
    "version": "Challenge Mode",
    "skills": [250, 175, 800, 250, 250, 250],
    "style": "Magic",
    "max_hit": 50
  },
  {
    "id": 12223,
    "name": "Vardorvis",
    "version": "Awakened",
    "skills": [1, 1, 700, 1, 1, 1],
    "style": "Slash",
    "maxHit": 50
  },
  {
    "id": 2042,
    "name": "Zulrah",
    "version": "Serpentine",
    "skills": [1, 300, 500, 300, 300, 1],
    "style": "Dragonfire",
    "max_hit": null
  }
]"#;

fn write_catalogue(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write catalogue");
    file
}

#[test]
fn loads_sanitised_catalogue_from_file() {
    let file = write_catalogue(CATALOGUE);

    let monsters = MonsterLoader::load(file.path()).expect("catalogue should load");

    let ids: Vec<String> = monsters.iter().map(|m| m.display_id()).collect();
    assert_eq!(ids, ["Goblin", "Vardorvis#Awakened", "Zulrah#Serpentine"]);

    let goblin = &monsters[0];
    assert_eq!(goblin.version, None);
    assert_eq!(goblin.style, Some(CombatStyle::Crush));
    assert_eq!(goblin.max_hit, Some(1));

    let vardorvis = &monsters[1];
    assert_eq!(vardorvis.max_hit, Some(50));
    assert_eq!(vardorvis.skills.defence, 268);
    assert_eq!(vardorvis.skills.strength, 391);

    let zulrah = &monsters[2];
    assert_eq!(zulrah.style, None);
    assert_eq!(zulrah.max_hit, None);
}

#[test]
fn catalogue_oracle_exposes_loaded_monsters() {
    let file = write_catalogue(CATALOGUE);

    let catalogue = MonsterCatalogue::load(file.path()).expect("catalogue should load");
    assert_eq!(catalogue.len(), 3);
    assert_eq!(catalogue.monsters()[0].name, "Goblin");
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("monsters.json");

    let err = MonsterLoader::load(&path).unwrap_err();
    assert!(err.to_string().contains("monsters.json"));
}

#[test]
fn malformed_file_reports_path() {
    let file = write_catalogue("[{\"name\": ");

    let err = MonsterLoader::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse monster catalogue"));
}
