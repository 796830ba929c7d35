//! Rebuttal CLI - Draft claim-denial appeals from the command line.

use clap::Parser;
use rebuttal_cli::cli::{ConfigAction, ConfigArgs};
use rebuttal_cli::commands;
use rebuttal_cli::{Cli, Command, Config, Formatter};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> rebuttal_cli::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config_path = cli.config.as_deref().map(Path::new);

    // `config init` creates the file, so there is nothing to load yet
    let config = match &cli.command {
        Command::Config(ConfigArgs {
            action: ConfigAction::Init { .. },
        }) => Config::default(),
        _ => Config::load(config_path)?,
    };

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let result = match cli.command {
        Command::Appeal(args) => commands::execute_appeal(args, &config, &formatter),
        Command::Claims(args) => commands::execute_claims(args, &formatter),
        Command::Justify(args) => commands::execute_justify(args, &config, &formatter),
        Command::Config(args) => commands::execute_config(args, &config, config_path, &formatter),
    };

    if let Err(e) = result {
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `-v` flags.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
