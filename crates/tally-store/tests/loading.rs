//! Loading rules and record directories from a temporary data tree.

use pretty_assertions::assert_eq;
use std::fs;
use tally_store::{StoreError, load_record, load_records, load_rules};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn rules_file_becomes_policy() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "audit_rules.json",
        r#"{"group_therapy": {"low": 2, "high": 3}, "individual_therapy": {"low": 1}}"#,
    );

    let policy = load_rules(&path, 2).unwrap();
    assert_eq!(policy.required_for("low"), 2);
    assert_eq!(policy.required_for("high"), 3);
    assert_eq!(policy.required_for("unknown"), 2);
}

#[test]
fn missing_rules_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_rules(&dir.path().join("nope.json"), 2).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}

#[test]
fn malformed_rules_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "audit_rules.json", r#"{"group_therapy": {"low": "two"}}"#);
    let err = load_rules(&path, 2).unwrap_err();
    assert!(matches!(err, StoreError::Parse { .. }));
    assert!(err.to_string().contains("audit_rules.json"));
}

#[test]
fn record_directory_loads_each_file_independently() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "b_jordan.json",
        r#"{"youth": "Jordan", "security_level": "high", "start_date": "2024-02-05", "files": ["Jordan GT 2024-02-06.docx"]}"#,
    );
    write(
        &dir,
        "a_avery.json",
        r#"{"identifier": "Avery", "policy_tier": "low", "start_date": "2024-01-01", "filenames": []}"#,
    );
    write(
        &dir,
        "c_broken.json",
        r#"{"youth": "Casey", "security_level": "low", "start_date": "2024-01-01", "files": [7]}"#,
    );
    write(&dir, "notes.txt", "not a record");

    let loaded = load_records(dir.path()).unwrap();
    assert_eq!(loaded.len(), 3);

    let names: Vec<String> = loaded
        .iter()
        .map(|l| l.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a_avery.json", "b_jordan.json", "c_broken.json"]);

    assert_eq!(loaded[0].record.as_ref().unwrap().identifier, "Avery");
    let jordan = loaded[1].record.as_ref().unwrap();
    assert_eq!(jordan.identifier, "Jordan");
    assert_eq!(jordan.policy_tier, "high");
    assert_eq!(jordan.filenames, vec!["Jordan GT 2024-02-06.docx"]);
    assert!(matches!(loaded[2].record, Err(StoreError::Parse { .. })));
}

#[test]
fn missing_record_directory_is_error() {
    let dir = TempDir::new().unwrap();
    assert!(load_records(&dir.path().join("absent")).is_err());
}

#[test]
fn single_record_loads() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "one.json",
        r#"{"youth": "Riley", "security_level": "low", "start_date": "2024-04-01", "files": []}"#,
    );
    let record = load_record(&path).unwrap();
    assert_eq!(record.identifier, "Riley");
    assert!(record.filenames.is_empty());
}
