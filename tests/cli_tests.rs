//! Integration tests for the simrec CLI
//!
//! These tests run the simrec binary against temporary stores.

mod support;

use predicates::prelude::*;
use tempfile::tempdir;

use crate::support::{setup_abc_store, simrec, write_file, ABC_RECORDS};

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    simrec()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: simrec"))
        .stdout(predicate::str::contains("recommend"))
        .stdout(predicate::str::contains("ingest"));
}

#[test]
fn test_no_command_prints_banner() {
    simrec()
        .assert()
        .success()
        .stdout(predicate::str::contains("simrec"));
}

#[test]
fn test_unknown_format_is_usage_error() {
    simrec()
        .args(["--format", "yaml", "stats"])
        .assert()
        .code(2);
}

// ============================================================================
// Ingest and rebuild
// ============================================================================

#[test]
fn test_ingest_builds_snapshot() {
    let dir = tempdir().unwrap();
    let file = write_file(dir.path(), "abc.json", ABC_RECORDS);

    simrec()
        .current_dir(dir.path())
        .arg("ingest")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 items (3 added)"));

    assert!(dir.path().join(".simrec").join("CURRENT").exists());
    assert!(!dir.path().join(".simrec").join("rebuild.lock").exists());
}

#[test]
fn test_ingest_json_report() {
    let dir = tempdir().unwrap();
    let file = write_file(dir.path(), "abc.json", ABC_RECORDS);

    let output = simrec()
        .current_dir(dir.path())
        .args(["--format", "json", "ingest"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["size"], 3);
    assert_eq!(json["added"], 3);
    assert_eq!(json["vocabulary_size"], 8);
}

#[test]
fn test_rebuild_on_empty_store_fails() {
    let dir = tempdir().unwrap();

    simrec()
        .current_dir(dir.path())
        .arg("rebuild")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no model available"));
}

#[test]
fn test_rebuild_empty_store_json_error() {
    let dir = tempdir().unwrap();

    let output = simrec()
        .current_dir(dir.path())
        .args(["--format", "json", "rebuild"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "empty_model");
}

#[test]
fn test_ingest_jsonl_appends() {
    let dir = setup_abc_store();
    let file = write_file(
        dir.path(),
        "more.jsonl",
        "{\"title\": \"D\", \"tags\": \"space wormhole\"}\n",
    );

    simrec()
        .current_dir(dir.path())
        .arg("ingest")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("4 items (1 added)"));

    simrec()
        .current_dir(dir.path())
        .args(["show", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id: custom_4"));
}

#[test]
fn test_invalid_record_rejects_batch() {
    let dir = setup_abc_store();
    let file = write_file(
        dir.path(),
        "bad.json",
        r#"[{"title": "D", "tags": "space"}, {"tags": "no title"}]"#,
    );

    simrec()
        .current_dir(dir.path())
        .arg("ingest")
        .arg(&file)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid item at position 1"));

    simrec()
        .current_dir(dir.path())
        .args(["show", "D"])
        .assert()
        .code(3);
}

#[test]
fn test_ingest_missing_file() {
    let dir = tempdir().unwrap();
    simrec()
        .current_dir(dir.path())
        .args(["ingest", "absent.json"])
        .assert()
        .code(1);
}

#[test]
fn test_ingest_csv_file() {
    let dir = tempdir().unwrap();
    let file = write_file(
        dir.path(),
        "movies.csv",
        "title,overview,genres,cast\n\
         Interstellar,astronauts travel wormhole,\"Sci-Fi, Drama\",Matthew McConaughey\n\
         Gravity,astronaut survival,\"Sci-Fi, Thriller\",Sandra Bullock\n\
         Notebook,summer romance,\"Romance, Drama\",Ryan Gosling\n",
    );

    simrec()
        .current_dir(dir.path())
        .arg("ingest")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 items (3 added)"));

    let output = simrec()
        .current_dir(dir.path())
        .args(["--format", "json", "recommend", "Interstellar", "-k", "2"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["results"][0]["title"], "Gravity");
    assert_eq!(json["results"][1]["title"], "Notebook");

    simrec()
        .current_dir(dir.path())
        .args(["show", "Notebook"])
        .assert()
        .success()
        .stdout(predicate::str::contains("summer romance Romance Drama Ryan Gosling"));
}

#[test]
fn test_malformed_file_is_data_error() {
    let dir = setup_abc_store();
    let file = write_file(dir.path(), "broken.json", "[\n{\"title\": \"D\",\n\"tags\": }\n]");

    let output = simrec()
        .current_dir(dir.path())
        .args(["--format", "json", "ingest"])
        .arg(&file)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "malformed_records");
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .starts_with("malformed records at line 3"));
}

#[test]
fn test_held_lock_blocks_ingest() {
    let dir = setup_abc_store();
    std::fs::write(dir.path().join(".simrec").join("rebuild.lock"), "pid=1\n").unwrap();

    simrec()
        .current_dir(dir.path())
        .arg("rebuild")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("rebuild already in progress"));
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_recommend_ranks_shared_terms() {
    let dir = setup_abc_store();

    let output = simrec()
        .current_dir(dir.path())
        .args(["--format", "json", "recommend", "A", "-k", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["title"], "B");
    assert_eq!(results[1]["title"], "C");
}

#[test]
fn test_recommend_human_output() {
    let dir = setup_abc_store();

    simrec()
        .current_dir(dir.path())
        .args(["recommend", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" 1. "))
        .stdout(predicate::str::contains("B"))
        .stdout(predicate::str::contains("  A\n").not());
}

#[test]
fn test_recommend_unknown_title() {
    let dir = setup_abc_store();

    simrec()
        .current_dir(dir.path())
        .args(["recommend", "Nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("item not found: Nope"));
}

#[test]
fn test_recommend_without_snapshot() {
    let dir = tempdir().unwrap();

    simrec()
        .current_dir(dir.path())
        .args(["recommend", "A"])
        .assert()
        .code(3);
}

#[test]
fn test_show_item() {
    let dir = setup_abc_store();

    let output = simrec()
        .current_dir(dir.path())
        .args(["--format", "json", "show", "C"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["id"], "c");
    assert_eq!(json["tags"], "romance heart love");
}

#[test]
fn test_list_filter_and_limit() {
    let dir = tempdir().unwrap();
    simrec()
        .current_dir(dir.path())
        .arg("sample")
        .assert()
        .success();

    simrec()
        .current_dir(dir.path())
        .args(["list", "--filter", "the "])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Godfather"))
        .stdout(predicate::str::contains("Inception").not());

    let output = simrec()
        .current_dir(dir.path())
        .args(["--format", "json", "list", "--limit", "3"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[test]
fn test_sample_requires_empty_store() {
    let dir = setup_abc_store();
    simrec()
        .current_dir(dir.path())
        .arg("sample")
        .assert()
        .code(2);
}

#[test]
fn test_stats() {
    let dir = setup_abc_store();

    simrec()
        .current_dir(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Items: 3"))
        .stdout(predicate::str::contains("Vocabulary: 8 terms"));
}

#[test]
fn test_store_flag_and_env() {
    let dir = tempdir().unwrap();
    let file = write_file(dir.path(), "abc.json", ABC_RECORDS);

    simrec()
        .current_dir(dir.path())
        .args(["--store", "models", "ingest"])
        .arg(&file)
        .assert()
        .success();
    assert!(dir.path().join("models").join("CURRENT").exists());

    simrec()
        .current_dir(dir.path())
        .env("SIMREC_STORE", dir.path().join("models"))
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Items: 3"));
}

#[test]
fn test_corrupt_snapshot_reported() {
    let dir = setup_abc_store();
    let store = dir.path().join(".simrec");
    let name = std::fs::read_to_string(store.join("CURRENT")).unwrap();
    std::fs::write(
        store.join("snapshots").join(name.trim()).join("catalog.json"),
        "[]",
    )
    .unwrap();

    simrec()
        .current_dir(dir.path())
        .arg("stats")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("corrupt snapshot"));
}
