//! Appeal command implementation.

use super::read_input;
use crate::cli::AppealArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rebuttal_composer::AppealComposer;
use rebuttal_domain::{AppealRecord, ClinicalDocument};
use rebuttal_extractor::{parse_document, ClaimParser, JustificationExtractor};
use tracing::info;

/// Top-level note key naming the patient
const PATIENT_NAME_KEY: &str = "Patient Name";

/// Execute the appeal command.
pub fn execute_appeal(args: AppealArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    if args.remit == "-" && args.note == "-" {
        return Err(CliError::InvalidInput(
            "Only one of --remit and --note can read from stdin".to_string(),
        ));
    }

    let remittance = read_input(&args.remit)?;
    let note = parse_document(&read_input(&args.note)?)?;

    let patient = match args.patient {
        Some(patient) => patient,
        None => note_patient(&note)?,
    };

    let appeal = prepare_appeal(&remittance, &note, &patient, config)?
        .ok_or_else(|| CliError::ClaimNotFound { patient })?;

    if appeal.justification.is_empty() {
        eprintln!(
            "{}",
            formatter.warning("No supporting sentences found in the clinical note")
        );
    }

    println!("{}", formatter.format_appeal(&appeal)?);

    Ok(())
}

/// Run the full pipeline for one patient.
///
/// Returns `Ok(None)` when the remittance holds no claim for `patient`,
/// whether because no claim block parsed at all or because none matched.
pub fn prepare_appeal(
    remittance: &str,
    note: &ClinicalDocument,
    patient: &str,
    config: &Config,
) -> Result<Option<AppealRecord>> {
    let parser = ClaimParser::new()?;
    let Some(claim) = parser.find_claim(remittance, patient) else {
        return Ok(None);
    };

    info!("Drafting appeal for claim {}", claim);

    let extractor = JustificationExtractor::from_config(&config.extractor)?;
    let justification = extractor.extract(note);

    let composer = AppealComposer::new(config.reason_table());
    Ok(Some(composer.compose(&claim, &justification)))
}

/// Patient name from the note's top-level "Patient Name" entry.
fn note_patient(note: &ClinicalDocument) -> Result<String> {
    note.get(PATIENT_NAME_KEY)
        .and_then(ClinicalDocument::as_leaf)
        .map(str::to_string)
        .ok_or_else(|| {
            CliError::InvalidInput(format!(
                "No --patient given and the note has no top-level \"{}\"",
                PATIENT_NAME_KEY
            ))
        })
}
