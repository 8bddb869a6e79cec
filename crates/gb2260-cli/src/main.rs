//! GB/T 2260 division query CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};

use gb2260_cli::cli::{Cli, Command, LogFormatArg};
use gb2260_cli::commands::{
    run_counties, run_describe, run_lookup, run_prefectures, run_provinces, run_revisions,
    run_sources,
};
use gb2260_cli::logging::{LogConfig, LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli));
    let result = match &cli.command {
        Command::Lookup(args) => run_lookup(&cli, &args.code),
        Command::Describe(args) => run_describe(&cli, &args.code),
        Command::Provinces => run_provinces(&cli),
        Command::Prefectures(args) => run_prefectures(&cli, &args.code),
        Command::Counties(args) => run_counties(&cli, &args.code),
        Command::Revisions => run_revisions(&cli),
        Command::Sources => run_sources(&cli),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stderr().is_terminal(),
    };
    config
}
