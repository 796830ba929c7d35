//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};

/// Rebuttal CLI - Draft claim-denial appeals from remittance advice and clinical notes.
#[derive(Debug, Parser)]
#[command(name = "rebuttal")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "REBUTTAL_CONFIG")]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare values)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Draft an appeal for one patient's denied claim
    Appeal(AppealArgs),

    /// List every claim found in a remittance advice
    Claims(ClaimsArgs),

    /// Show the justification sentences mined from a clinical note
    Justify(JustifyArgs),

    /// Inspect or initialize the configuration file
    Config(ConfigArgs),
}

/// Arguments for the appeal command.
#[derive(Debug, Parser)]
pub struct AppealArgs {
    /// Remittance advice text file ("-" for stdin)
    #[arg(short, long)]
    pub remit: String,

    /// Clinical note JSON file ("-" for stdin)
    #[arg(short, long)]
    pub note: String,

    /// Patient name, matched exactly; defaults to the note's "Patient Name"
    #[arg(short, long)]
    pub patient: Option<String>,
}

/// Arguments for the claims command.
#[derive(Debug, Parser)]
pub struct ClaimsArgs {
    /// Remittance advice text file ("-" for stdin)
    #[arg(short, long)]
    pub remit: String,

    /// Only show claims for this patient (exact match)
    #[arg(short, long)]
    pub patient: Option<String>,
}

/// Arguments for the justify command.
#[derive(Debug, Parser)]
pub struct JustifyArgs {
    /// Clinical note JSON file ("-" for stdin)
    #[arg(short, long)]
    pub note: String,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appeal_command() {
        let cli = Cli::parse_from([
            "rebuttal",
            "appeal",
            "--remit",
            "era.txt",
            "--note",
            "note.json",
            "--patient",
            "Robert Johnson",
        ]);
        match cli.command {
            Command::Appeal(args) => {
                assert_eq!(args.remit, "era.txt");
                assert_eq!(args.note, "note.json");
                assert_eq!(args.patient.as_deref(), Some("Robert Johnson"));
            }
            _ => panic!("Expected Appeal command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "rebuttal", "claims", "-r", "-", "--format", "json", "-vv", "--no-color",
        ]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Command::Claims(_)));
    }

    #[test]
    fn test_missing_required_argument() {
        let result = Cli::try_parse_from(["rebuttal", "appeal", "--remit", "era.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_init() {
        let cli = Cli::parse_from(["rebuttal", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            _ => panic!("Expected Config Init command"),
        }
    }
}
