use std::io::Write;

use maxhit_audit::AuditSummary;
use maxhit_audit::pipeline::audit_file;

const CATALOGUE: &str = r#"[
  {
    "id": 3029,
    "name": "Goblin",
    "version": "",
    "skills": [1, 1, 5, 1, 1, 1],
    "offensive": [0, 0, 0, 0, 0, 0],
    "style": "Crush",
    "max_hit": 1
  },
  {
    "id": 2,
    "name": "Brute",
    "skills": [1, 1, 50, 1, 1, 99],
    "style": "Crush",
    "max_hit": 12
  },
  {
    "id": 3,
    "name": "Archer",
    "version": "Standard",
    "skills": [1, 1, 40, 1, 100, 1],
    "offensive": [0, 0, 0, 0, 50, 0],
    "style": "Ranged",
    "max_hit": 20
  },
  {
    "id": 7554,
    "name": "Great Olm",
    "version": "Challenge Mode",
    "skills": [250, 175, 800, 250, 250, 250],
    "style": "Magic",
    "max_hit": 99
  },
  {
    "id": 2854,
    "name": "Rat",
    "skills": [1, 1, 2, 1, 1, 1],
    "style": "Magic"
  }
]"#;

fn write_catalogue(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write catalogue");
    file
}

#[test]
fn audits_catalogue_file_into_report_json() {
    let file = write_catalogue(CATALOGUE);

    let outcome = audit_file(file.path()).expect("audit should succeed");

    // Brute: (108 * 64 + 320) / 640 = 11; Archer: (109 * 114 + 320) / 640 = 19
    assert_eq!(
        outcome.report.to_pretty_json().unwrap(),
        r#"{
  "": [],
  "slash": [],
  "crush": [
    "Brute"
  ],
  "stab": [],
  "magic": [],
  "ranged": [
    "Archer#Standard"
  ]
}"#
    );
    assert_eq!(
        outcome.summary,
        AuditSummary {
            examined: 4,
            skipped_no_max_hit: 1,
            skipped_unknown_style: 0,
            compared: 3,
            matched: 1,
            mismatched: 2,
        }
    );
}

#[test]
fn same_file_gives_same_digest() {
    let file = write_catalogue(CATALOGUE);

    let first = audit_file(file.path()).unwrap();
    let second = audit_file(file.path()).unwrap();

    assert_eq!(first.report.digest(), second.report.digest());
}

#[test]
fn missing_catalogue_names_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("monsters.json");

    let err = audit_file(&path).unwrap_err();

    assert!(format!("{err:#}").contains("monsters.json"));
}
