//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::{Path, PathBuf};

/// Execute the config command.
///
/// `path` is the file given with `--config`, if any.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Init { force } => {
            let target = init_target(path)?;
            if target.exists() && !force {
                return Err(CliError::InvalidInput(format!(
                    "'{}' already exists (use --force to overwrite)",
                    target.display()
                )));
            }

            Config::default().save(&target)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote default configuration to {}", target.display()))
            );
        }
    }

    Ok(())
}

fn init_target(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::default_path()
            .ok_or_else(|| CliError::Config("Could not find home directory".to_string())),
    }
}
