use std::fs;
use std::path::Path;

use serde_json::json;
use tempfile::TempDir;

use ivy_seed::services::SeedGenerator;

fn write_input(dir: &Path, value: serde_json::Value) -> std::path::PathBuf {
    let path = dir.join("drug_data.json");
    fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
    path
}

#[test]
fn test_doxorubicin_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        dir.path(),
        json!([{
            "name": "Doxorubicin",
            "vesicant": true,
            "antidotes": [{"name": "DMSO", "reference": "http://x"}],
            "reference": "http://x"
        }]),
    );
    let output = dir.path().join("seed.sql");

    let summary = SeedGenerator::generate(&input, &output).unwrap();
    assert_eq!(summary.medications, 1);
    assert_eq!(summary.statements, 3);

    let contents = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines[0],
        "-- Seed data for Medications, Antidotes, and MedicationReferences --"
    );
    assert_eq!(lines[1], "");
    assert!(lines[2].starts_with("INSERT INTO Medications"));
    assert!(lines[2].contains("'Vesicant'"));
    assert!(lines[2].contains(", 1,"));
    assert!(lines[3].starts_with("INSERT INTO Antidotes"));
    assert!(lines[3].contains("'DMSO'"));
    assert!(lines[4].starts_with("INSERT INTO MedicationReferences"));
    assert!(lines[4].contains("'Main Reference for Doxorubicin'"));
    assert_eq!(lines.len(), 5);
    assert!(contents.ends_with(";\n"));
}

#[test]
fn test_first_five_medications_are_free() {
    let dir = TempDir::new().unwrap();
    let records: Vec<serde_json::Value> = (1..=6)
        .map(|i| json!({"name": format!("Drug {i}")}))
        .collect();
    let input = write_input(dir.path(), json!(records));
    let output = dir.path().join("seed.sql");

    let summary = SeedGenerator::generate(&input, &output).unwrap();
    assert_eq!(summary.medications, 6);

    let contents = fs::read_to_string(&output).unwrap();
    let flags: Vec<&str> = contents
        .lines()
        .filter(|l| l.starts_with("INSERT INTO Medications"))
        .map(|l| {
            if l.contains(", 1,") {
                "1"
            } else {
                "0"
            }
        })
        .collect();
    assert_eq!(flags, vec!["1", "1", "1", "1", "1", "0"]);
}

#[test]
fn test_skipped_records_do_not_consume_free_slots() {
    let dir = TempDir::new().unwrap();
    // Two nameless entries interleaved with six valid ones.
    let input = write_input(
        dir.path(),
        json!([
            {"brandName": "Foo's Drug"},
            {"name": "Drug 1"},
            {"name": "Drug 2"},
            {"brandName": "Nameless"},
            {"name": "Drug 3"},
            {"name": "Drug 4"},
            {"name": "Drug 5"},
            {"name": "Drug 6"}
        ]),
    );
    let output = dir.path().join("seed.sql");

    let summary = SeedGenerator::generate(&input, &output).unwrap();
    assert_eq!(summary.medications, 6);
    assert_eq!(summary.statements, 6);

    let contents = fs::read_to_string(&output).unwrap();
    // Nameless entries contribute nothing, even their brand names.
    assert!(!contents.contains("Foo''s Drug"));
    let free_rows = contents
        .lines()
        .filter(|l| l.contains(", 1,"))
        .count();
    assert_eq!(free_rows, 5);
}

#[test]
fn test_malformed_record_does_not_abort_batch() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        dir.path(),
        json!([
            {"name": "Broken", "antidotes": "not-a-list"},
            {"name": "Cisplatin"}
        ]),
    );
    let output = dir.path().join("seed.sql");

    let summary = SeedGenerator::generate(&input, &output).unwrap();
    assert_eq!(summary.medications, 1);

    let contents = fs::read_to_string(&output).unwrap();
    assert!(contents.contains("'Cisplatin'"));
    assert!(!contents.contains("'Broken'"));
}

#[test]
fn test_missing_input_file_is_fatal_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("does_not_exist.json");
    let output = dir.path().join("seed.sql");

    let err = SeedGenerator::generate(&input, &output).unwrap_err();
    assert!(err.to_string().contains("does_not_exist.json"));
    assert!(!output.exists());
}

#[test]
fn test_invalid_json_is_fatal_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("drug_data.json");
    fs::write(&input, "{not valid json").unwrap();
    let output = dir.path().join("seed.sql");

    assert!(SeedGenerator::generate(&input, &output).is_err());
    assert!(!output.exists());
}

#[test]
fn test_top_level_object_is_fatal() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), json!({"name": "Cisplatin"}));
    let output = dir.path().join("seed.sql");

    let err = SeedGenerator::generate(&input, &output).unwrap_err();
    assert!(err.to_string().contains("JSON array"));
    assert!(!output.exists());
}

#[test]
fn test_output_parent_directories_are_created() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), json!([{"name": "Cisplatin"}]));
    let output = dir.path().join("migrations/nested/seed.sql");

    SeedGenerator::generate(&input, &output).unwrap();
    assert!(output.exists());
}

#[test]
fn test_empty_array_still_writes_header() {
    let dir = TempDir::new().unwrap();
    let input = write_input(dir.path(), json!([]));
    let output = dir.path().join("seed.sql");

    let summary = SeedGenerator::generate(&input, &output).unwrap();
    assert_eq!(summary.medications, 0);
    assert_eq!(summary.statements, 0);

    let contents = fs::read_to_string(&output).unwrap();
    assert_eq!(
        contents,
        "-- Seed data for Medications, Antidotes, and MedicationReferences --\n\n"
    );
}
