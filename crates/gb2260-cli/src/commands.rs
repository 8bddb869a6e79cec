//! Command implementations for the division query tool.

use anyhow::{Context, Result, bail};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use tracing::debug;

use gb2260_model::Division;
use gb2260_standards::{DivisionRegistry, Gb2260, default_data_root, registry_from_data_dir};

use crate::cli::Cli;

fn build_registry(cli: &Cli) -> Result<DivisionRegistry> {
    let data_dir = cli
        .data_dir
        .clone()
        .or_else(default_data_root)
        .context("no data directory: pass --data-dir or set GB2260_DATA_DIR")?;
    debug!(data_dir = %data_dir.display(), "loading division data");
    registry_from_data_dir(&data_dir)
        .with_context(|| format!("load division data from {}", data_dir.display()))
}

fn bind(cli: &Cli) -> Result<Gb2260> {
    let registry = build_registry(cli)?;
    Gb2260::new(&registry, &cli.source, cli.revision.as_deref())
        .with_context(|| format!("bind source {:?}", cli.source))
}

pub fn run_lookup(cli: &Cli, code: &str) -> Result<()> {
    let gb2260 = bind(cli)?;
    match gb2260.get(code) {
        Some(division) => {
            println!("{}\t{}", division.code(), division.name());
            Ok(())
        }
        None => bail!(
            "code {code} not found in revision {} of source {:?}",
            gb2260.revision_name(),
            gb2260.source()
        ),
    }
}

pub fn run_describe(cli: &Cli, code: &str) -> Result<()> {
    let gb2260 = bind(cli)?;
    let description = gb2260.describe(code)?;
    println!("{description}");
    Ok(())
}

pub fn run_provinces(cli: &Cli) -> Result<()> {
    let gb2260 = bind(cli)?;
    print_divisions(&gb2260.provinces());
    Ok(())
}

pub fn run_prefectures(cli: &Cli, province_code: &str) -> Result<()> {
    let gb2260 = bind(cli)?;
    print_divisions(&gb2260.prefectures(province_code)?);
    Ok(())
}

pub fn run_counties(cli: &Cli, prefecture_code: &str) -> Result<()> {
    let gb2260 = bind(cli)?;
    print_divisions(&gb2260.counties(prefecture_code)?);
    Ok(())
}

pub fn run_revisions(cli: &Cli) -> Result<()> {
    let registry = build_registry(cli)?;
    let source = registry.source(&cli.source)?;
    for revision in source.all_revisions() {
        println!("{revision}");
    }
    Ok(())
}

pub fn run_sources(cli: &Cli) -> Result<()> {
    let registry = build_registry(cli)?;
    for name in registry.source_names() {
        println!("{name}");
    }
    Ok(())
}

fn print_divisions(divisions: &[Division<'_>]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Code", "Name"]);
    for division in divisions {
        table.add_row(vec![division.code(), division.name()]);
    }
    println!("{table}");
}
