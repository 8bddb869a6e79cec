use std::fs;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};

use gb2260_cli::cli::Cli;
use gb2260_cli::commands::{run_describe, run_lookup, run_provinces, run_revisions, run_sources};

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "gb2260-cli-{}-{}-{}",
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

fn seed_data_dir(name: &str) -> PathBuf {
    let dir = unique_temp_dir(name);
    write(&dir.join("manifest.json"), br#"{"gb": ["198012"]}"#);
    write(
        &dir.join("198012.tsv"),
        "Source\tRevision\tCode\tName\n\
         gb\t198012\t320000\t江苏省\n\
         gb\t198012\t320200\t无锡市\n\
         gb\t198012\t320203\t南长区\n"
            .as_bytes(),
    );
    dir
}

fn parse(dir: &Path, tail: &[&str]) -> Cli {
    let mut args = vec!["gb2260", "--data-dir", dir.to_str().unwrap(), "--source", "gb"];
    args.extend_from_slice(tail);
    Cli::parse_from(args)
}

#[test]
fn lookup_resolves_against_the_data_dir() {
    let dir = seed_data_dir("lookup");
    let cli = parse(&dir, &["lookup", "320203"]);
    run_lookup(&cli, "320203").unwrap();
}

#[test]
fn lookup_fails_for_absent_codes() {
    let dir = seed_data_dir("lookup-miss");
    let cli = parse(&dir, &["lookup", "110000"]);
    let error = run_lookup(&cli, "110000").unwrap_err();
    assert!(error.to_string().contains("110000"), "{error}");
}

#[test]
fn describe_walks_the_ancestor_chain() {
    let dir = seed_data_dir("describe");
    let cli = parse(&dir, &["describe", "320203"]);
    run_describe(&cli, "320203").unwrap();
    // Grammar failures surface as errors, not empty output.
    assert!(run_describe(&cli, "32").is_err());
}

#[test]
fn listing_commands_run_against_the_data_dir() {
    let dir = seed_data_dir("listing");
    run_provinces(&parse(&dir, &["provinces"])).unwrap();
    run_revisions(&parse(&dir, &["revisions"])).unwrap();
    run_sources(&parse(&dir, &["sources"])).unwrap();
}

#[test]
fn unknown_source_is_reported() {
    let dir = seed_data_dir("bad-source");
    let mut args = vec!["gb2260", "--data-dir", dir.to_str().unwrap()];
    args.extend_from_slice(&["--source", "missingname", "provinces"]);
    let cli = Cli::parse_from(args);
    assert!(run_provinces(&cli).is_err());
}
