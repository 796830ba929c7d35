//! Recover claim records from remittance-advice text
//!
//! A claim block is a run of `Label: value` lines in a fixed order:
//!
//! ```text
//! 1. Claim Number: CLM345678
//!    Patient Name: Robert Johnson
//!    Date of Service: 2024-12-10
//!    Procedure Code: 73030 (X-ray, shoulder, 2 views)
//!    Billed Amount: $75.00
//!    Allowed Amount: $0.00
//!    Patient Responsibility: $0.00
//!    Paid Amount: $0.00
//!    Adjustment: -$75.00
//!    CARC: CO-50 (Not deemed a medical necessity)
//!    RARC: N10 (Payment based on the findings of a review organization)
//! ```
//!
//! Indentation and the ordinal prefix are optional, and the RARC line may be
//! missing. Only the code token of CARC/RARC is kept.

use crate::error::ExtractorError;
use rebuttal_domain::ClaimRecord;
use regex::{Captures, Regex};
use std::fmt;
use tracing::{debug, info};

/// Labelled value lines preceding CARC, as (label, capture group)
const VALUE_FIELDS: [(&str, &str); 9] = [
    ("Claim Number", "claim_number"),
    ("Patient Name", "patient_name"),
    ("Date of Service", "date_of_service"),
    ("Procedure Code", "procedure_code"),
    ("Billed Amount", "billed_amount"),
    ("Allowed Amount", "allowed_amount"),
    ("Patient Responsibility", "patient_responsibility"),
    ("Paid Amount", "paid_amount"),
    ("Adjustment", "adjustment"),
];

/// Leading whitespace and optional ordinal (`1.` or `1)`)
const ORDINAL: &str = r"(?:\d+[.)][ \t]*)?";

/// Non-empty value running to the end of the line
const VALUE: &str = r"[^ \t\r\n][^\r\n]*?";

/// A denial code token such as `CO-45` or `N10`
const CODE: &str = r"[A-Za-z0-9]+(?:-[A-Za-z0-9]+)?";

/// Why a lookup came back empty. Both cases surface as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClaimMiss {
    /// Nothing in the text matched the claim-block grammar
    NoClaimBlocks,
    /// Claims were found but none for the requested patient
    NoPatientMatch { blocks: usize },
}

impl fmt::Display for ClaimMiss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoClaimBlocks => write!(f, "no claim blocks found"),
            Self::NoPatientMatch { blocks } => {
                write!(f, "{} claim block(s) found, none for the requested patient", blocks)
            }
        }
    }
}

/// Parses claim blocks out of remittance-advice text
#[derive(Debug, Clone)]
pub struct ClaimParser {
    block: Regex,
}

impl ClaimParser {
    /// Compile the claim-block grammar
    pub fn new() -> Result<Self, ExtractorError> {
        let block = Regex::new(&block_pattern())?;
        Ok(Self { block })
    }

    /// Every claim block in the text, in textual order
    pub fn parse_all(&self, text: &str) -> Vec<ClaimRecord> {
        let claims: Vec<ClaimRecord> = self
            .block
            .captures_iter(text)
            .map(|caps| record_from(&caps))
            .collect();

        for claim in &claims {
            debug!("Parsed claim {}", claim);
        }
        info!("Parsed {} claim block(s)", claims.len());

        claims
    }

    /// The first claim whose patient name equals `patient_name` exactly
    pub fn find_claim(&self, text: &str, patient_name: &str) -> Option<ClaimRecord> {
        match self.lookup(text, patient_name) {
            Ok(claim) => Some(claim),
            Err(miss) => {
                debug!("No claim for patient '{}': {}", patient_name, miss);
                None
            }
        }
    }

    fn lookup(&self, text: &str, patient_name: &str) -> Result<ClaimRecord, ClaimMiss> {
        let claims = self.parse_all(text);
        if claims.is_empty() {
            return Err(ClaimMiss::NoClaimBlocks);
        }

        let blocks = claims.len();
        claims
            .into_iter()
            .find(|claim| claim.is_for_patient(patient_name))
            .ok_or(ClaimMiss::NoPatientMatch { blocks })
    }
}

/// Build the multi-line block pattern from the field table.
///
/// Field lines must be consecutive: a blank line ends the block, so a
/// block interrupted by one is not a claim.
fn block_pattern() -> String {
    let mut pattern = String::from("(?m)");

    for (idx, (label, group)) in VALUE_FIELDS.iter().enumerate() {
        pattern.push_str(r"^[ \t]*");
        if idx == 0 {
            pattern.push_str(ORDINAL);
        }
        pattern.push_str(&format!(
            r"{}[ \t]*:[ \t]*(?P<{}>{})[ \t]*\r?\n",
            label_pattern(label),
            group,
            VALUE
        ));
    }

    pattern.push_str(&format!(r"^[ \t]*CARC[ \t]*:[ \t]*(?P<carc>{})[^\r\n]*", CODE));
    pattern.push_str(&format!(
        r"(?:\r?\n[ \t]*RARC[ \t]*:[ \t]*(?P<rarc>{})[^\r\n]*)?",
        CODE
    ));

    pattern
}

/// Escape a label and let its words be separated by any run of blanks
fn label_pattern(label: &str) -> String {
    label
        .split(' ')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"[ \t]+")
}

fn record_from(caps: &Captures<'_>) -> ClaimRecord {
    let field = |name: &str| {
        caps.name(name)
            .map_or_else(String::new, |m| m.as_str().trim().to_string())
    };

    ClaimRecord {
        claim_number: field("claim_number"),
        patient_name: field("patient_name"),
        date_of_service: field("date_of_service"),
        procedure_code: field("procedure_code"),
        billed_amount: field("billed_amount"),
        allowed_amount: field("allowed_amount"),
        patient_responsibility: field("patient_responsibility"),
        paid_amount: field("paid_amount"),
        adjustment: field("adjustment"),
        carc: field("carc"),
        rarc: caps.name("rarc").map(|m| m.as_str().to_string()),
    }
}
