use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a Command for simrec
pub fn simrec() -> Command {
    cargo_bin_cmd!("simrec")
}

/// Records for the three-item space/romance catalog
pub const ABC_RECORDS: &str = r#"[
  {"id": "a", "title": "A", "tags": "space wormhole survival"},
  {"id": "b", "title": "B", "tags": "space alien robot"},
  {"id": "c", "title": "C", "tags": "romance heart love"}
]"#;

/// Write `content` to `name` inside `dir`
pub fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Temp directory whose default store already holds the A/B/C catalog
#[allow(dead_code)]
pub fn setup_abc_store() -> TempDir {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "abc.json", ABC_RECORDS);
    simrec()
        .current_dir(dir.path())
        .arg("ingest")
        .arg(&file)
        .assert()
        .success();
    dir
}
