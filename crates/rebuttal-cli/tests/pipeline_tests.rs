//! End-to-end tests for the remittance-to-appeal pipeline
//!
//! These run the sample remittances and clinical note under `demos/` through
//! `prepare_appeal`, the same path the `appeal` command takes.

use rebuttal_cli::commands::prepare_appeal;
use rebuttal_cli::config::OutputFormat;
use rebuttal_cli::{Config, Formatter};
use rebuttal_domain::{ClinicalDocument, APPEAL_REQUEST, UNRESOLVED_REASON};
use rebuttal_extractor::parse_document;

const REMITTANCE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../demos/remittance.txt"));
const REMITTANCE_SINGLE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../demos/remittance_single.txt"
));
const CLINICAL_NOTE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../demos/clinical_note.json"
));
const SAMPLE_CONFIG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../demos/rebuttal.toml"));

fn note() -> ClinicalDocument {
    parse_document(CLINICAL_NOTE).unwrap()
}

#[test]
fn test_appeal_for_robert_johnson() {
    let appeal = prepare_appeal(REMITTANCE, &note(), "Robert Johnson", &Config::default())
        .unwrap()
        .expect("claim for Robert Johnson");

    assert_eq!(appeal.patient, "Robert Johnson");
    assert_eq!(appeal.claim_number, "CLM345678");
    assert_eq!(appeal.date_of_service, "2024-12-10");
    assert_eq!(appeal.procedure_code, "73030 (X-ray, shoulder, 2 views)");
    assert_eq!(
        appeal.reason,
        "Medical Neccesity: Payment based on the findings of a review organization"
    );
    assert!(appeal
        .justification
        .contains("He reports that the discomfort began after slipping on ice"));
    assert!(!appeal.justification.contains("denies numbness"));
    assert_eq!(appeal.request, APPEAL_REQUEST);
}

#[test]
fn test_unknown_patient_yields_no_appeal() {
    let appeal = prepare_appeal(REMITTANCE, &note(), "Alice Unknown", &Config::default()).unwrap();
    assert!(appeal.is_none());
}

#[test]
fn test_remittance_without_claims_yields_no_appeal() {
    let appeal = prepare_appeal(
        "Thank you,\nMedicare Claims Processing Department\n",
        &note(),
        "Robert Johnson",
        &Config::default(),
    )
    .unwrap();
    assert!(appeal.is_none());
}

#[test]
fn test_unmapped_carc_without_rarc() {
    let appeal = prepare_appeal(REMITTANCE_SINGLE, &note(), "Robert Johnson", &Config::default())
        .unwrap()
        .unwrap();

    assert_eq!(appeal.claim_number, "CLM901234");
    assert_eq!(appeal.reason, UNRESOLVED_REASON);
}

#[test]
fn test_claim_selection_by_patient() {
    let config = Config::default();

    let jane = prepare_appeal(REMITTANCE, &note(), "Jane Smith", &config)
        .unwrap()
        .unwrap();
    assert_eq!(jane.claim_number, "CLM789012");
    assert_eq!(jane.reason, "Coding Error");

    let john = prepare_appeal(REMITTANCE, &note(), "John Doe", &config)
        .unwrap()
        .unwrap();
    assert_eq!(john.claim_number, "CLM123456");
    assert_eq!(john.reason, "Coding Error: Patient ineligible for this service");
}

#[test]
fn test_configured_reasons_replace_builtin_table() {
    let config: Config = toml::from_str(SAMPLE_CONFIG).unwrap();

    let appeal = prepare_appeal(REMITTANCE_SINGLE, &note(), "Robert Johnson", &config)
        .unwrap()
        .unwrap();
    assert_eq!(appeal.reason, "Missing Precertification");
}

#[test]
fn test_appeal_json_output() {
    let appeal = prepare_appeal(REMITTANCE, &note(), "Robert Johnson", &Config::default())
        .unwrap()
        .unwrap();
    let output = Formatter::new(OutputFormat::Json, false)
        .format_appeal(&appeal)
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["Claim Number"], "CLM345678");
    assert_eq!(value["Request"], APPEAL_REQUEST);
}
