use std::fs;
use std::path::{Path, PathBuf};

use gb2260_standards::{StandardsError, registry_from_data_dir, tsv};

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "gb2260-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    dir
}

fn write(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn revision_table_parses_code_and_name_columns() {
    let dir = unique_temp_dir("tsv");
    let path = dir.join("198012.tsv");
    write(
        &path,
        "Source\tRevision\tCode\tName\n\
         gb\t198012\t110000\t北京市\n\
         gb\t198012\t320000\t江苏省\n\
         gb\t198012\t320200\t无锡市\n"
            .as_bytes(),
    );

    let table = tsv::load_revision_table(&path).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.get("110000").map(String::as_str), Some("北京市"));
    assert_eq!(table.get("320200").map(String::as_str), Some("无锡市"));
}

#[test]
fn short_rows_are_reported_with_the_path() {
    let dir = unique_temp_dir("tsv-bad");
    let path = dir.join("198012.tsv");
    write(
        &path,
        "Source\tRevision\tCode\tName\n110000\t北京市\n".as_bytes(),
    );

    match tsv::load_revision_table(&path) {
        Err(StandardsError::Tsv { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Tsv error, got {other:?}"),
    }
}

#[test]
fn missing_revision_file_is_an_io_error() {
    let dir = unique_temp_dir("tsv-missing");
    assert!(matches!(
        tsv::load_revision_table(&dir.join("200212.tsv")),
        Err(StandardsError::Io { .. })
    ));
}

fn seed_data_dir() -> PathBuf {
    let dir = unique_temp_dir("data");
    write(
        &dir.join("manifest.json"),
        br#"{"gb": ["198012"], "stats": ["198012", "200212"], "mca": []}"#,
    );
    // gb files sit at the data root, other sources in subdirectories.
    write(
        &dir.join("198012.tsv"),
        "Source\tRevision\tCode\tName\ngb\t198012\t110000\t北京市\n".as_bytes(),
    );
    write(
        &dir.join("stats/198012.tsv"),
        "Source\tRevision\tCode\tName\nstats\t198012\t110000\t北京\n".as_bytes(),
    );
    write(
        &dir.join("stats/200212.tsv"),
        "Source\tRevision\tCode\tName\nstats\t200212\t120000\t天津市\n".as_bytes(),
    );
    dir
}

#[test]
fn data_dir_registry_serves_raw_and_curated_sources() {
    let dir = seed_data_dir();
    let registry = registry_from_data_dir(&dir).unwrap();
    assert_eq!(registry.source_names(), ["curated", "gb", "mca", "stats"]);

    let gb = registry.source("gb").unwrap();
    assert_eq!(gb.all_revisions(), ["198012"]);

    let curated = registry.source("curated").unwrap();
    assert_eq!(curated.all_revisions(), ["200212", "198012"]);

    // gb shadows stats for the shared revision label.
    let shared = curated.load_revision("198012").unwrap();
    assert_eq!(
        shared.table().get("110000").map(String::as_str),
        Some("北京市")
    );

    let latest = curated.load_latest().unwrap();
    assert_eq!(latest.name(), "200212");
    assert_eq!(
        latest.table().get("120000").map(String::as_str),
        Some("天津市")
    );
}

#[test]
fn missing_manifest_is_an_io_error() {
    let dir = unique_temp_dir("no-manifest");
    fs::create_dir_all(&dir).unwrap();
    assert!(matches!(
        registry_from_data_dir(&dir),
        Err(StandardsError::Io { .. })
    ));
}

#[test]
fn malformed_manifest_is_a_json_error() {
    let dir = unique_temp_dir("bad-manifest");
    write(&dir.join("manifest.json"), br#"{"gb": "198012"}"#);
    assert!(matches!(
        registry_from_data_dir(&dir),
        Err(StandardsError::Json { .. })
    ));
}
