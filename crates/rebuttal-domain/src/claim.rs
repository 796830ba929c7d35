//! Claim module - one denied claim as printed on a remittance advice

use std::fmt;

/// A denied or adjusted claim recovered from remittance-advice text.
///
/// Every field holds the raw text found after its label; amounts are not
/// coerced to numbers. The CARC is always present, the RARC only when the
/// remittance carried a remark line. Records are immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimRecord {
    /// Payer's claim identifier (e.g. `CLM345678`)
    pub claim_number: String,

    /// Patient name exactly as printed
    pub patient_name: String,

    /// Date of service
    pub date_of_service: String,

    /// Procedure code, including any trailing description
    pub procedure_code: String,

    /// Billed amount
    pub billed_amount: String,

    /// Allowed amount
    pub allowed_amount: String,

    /// Patient responsibility
    pub patient_responsibility: String,

    /// Paid amount
    pub paid_amount: String,

    /// Adjustment amount
    pub adjustment: String,

    /// Claim Adjustment Reason Code, code token only (e.g. `CO-45`)
    pub carc: String,

    /// Remittance Advice Remark Code, code token only (e.g. `N10`)
    pub rarc: Option<String>,
}

impl ClaimRecord {
    /// Whether this claim belongs to `patient_name`.
    ///
    /// Matching is exact and case-sensitive; no whitespace or punctuation
    /// normalization is applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use rebuttal_domain::ClaimRecord;
    ///
    /// let claim = ClaimRecord {
    ///     claim_number: "CLM1".into(),
    ///     patient_name: "Robert Johnson".into(),
    ///     date_of_service: "2024-12-10".into(),
    ///     procedure_code: "73030".into(),
    ///     billed_amount: "$75.00".into(),
    ///     allowed_amount: "$0.00".into(),
    ///     patient_responsibility: "$0.00".into(),
    ///     paid_amount: "$0.00".into(),
    ///     adjustment: "-$75.00".into(),
    ///     carc: "CO-50".into(),
    ///     rarc: None,
    /// };
    ///
    /// assert!(claim.is_for_patient("Robert Johnson"));
    /// assert!(!claim.is_for_patient("robert johnson"));
    /// ```
    pub fn is_for_patient(&self, patient_name: &str) -> bool {
        self.patient_name == patient_name
    }
}

impl fmt::Display for ClaimRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) CARC {}", self.claim_number, self.patient_name, self.carc)?;
        if let Some(rarc) = &self.rarc {
            write!(f, " RARC {}", rarc)?;
        }
        Ok(())
    }
}
