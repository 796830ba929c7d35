//! Justify command implementation.

use super::read_input;
use crate::cli::JustifyArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use rebuttal_extractor::{parse_document, JustificationExtractor};

/// Execute the justify command.
pub fn execute_justify(args: JustifyArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let note = parse_document(&read_input(&args.note)?)?;
    let extractor = JustificationExtractor::from_config(&config.extractor)?;

    println!("{}", formatter.format_justification(&extractor.extract(&note))?);

    Ok(())
}
