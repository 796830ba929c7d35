//! Appeal composition

use rebuttal_domain::{
    AppealRecord, ClaimRecord, JustificationSet, ReasonTable, APPEAL_REQUEST, UNRESOLVED_REASON,
};
use tracing::debug;

/// Builds appeal records from claims and justification text
#[derive(Debug, Clone)]
pub struct AppealComposer {
    reasons: ReasonTable,
}

impl AppealComposer {
    /// Create a composer over an immutable reason table
    pub fn new(reasons: ReasonTable) -> Self {
        Self { reasons }
    }

    /// The reason table this composer resolves codes against
    pub fn reasons(&self) -> &ReasonTable {
        &self.reasons
    }

    /// Compose the appeal for `claim`
    pub fn compose(&self, claim: &ClaimRecord, justification: &JustificationSet) -> AppealRecord {
        AppealRecord {
            patient: claim.patient_name.clone(),
            claim_number: claim.claim_number.clone(),
            date_of_service: claim.date_of_service.clone(),
            procedure_code: claim.procedure_code.clone(),
            reason: self.reason_for(claim),
            justification: justification.joined(),
            request: APPEAL_REQUEST.to_string(),
        }
    }

    /// Reason text for a claim.
    ///
    /// The CARC label (or the fallback text when unmapped), followed by
    /// `": "` and the RARC label when the RARC is present and mapped. An
    /// unmapped RARC adds nothing.
    pub fn reason_for(&self, claim: &ClaimRecord) -> String {
        let mut reason = match self.reasons.label(&claim.carc) {
            Some(label) => label.to_string(),
            None => {
                debug!("No reason label for CARC {}", claim.carc);
                UNRESOLVED_REASON.to_string()
            }
        };

        if let Some(rarc) = &claim.rarc {
            match self.reasons.label(rarc) {
                Some(label) => {
                    reason.push_str(": ");
                    reason.push_str(label);
                }
                None => debug!("No reason label for RARC {}", rarc),
            }
        }

        reason
    }
}

impl Default for AppealComposer {
    fn default() -> Self {
        Self::new(ReasonTable::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(carc: &str, rarc: Option<&str>) -> ClaimRecord {
        ClaimRecord {
            claim_number: "CLM345678".to_string(),
            patient_name: "Robert Johnson".to_string(),
            date_of_service: "2024-12-10".to_string(),
            procedure_code: "73030 (X-ray, shoulder, 2 views)".to_string(),
            billed_amount: "$75.00".to_string(),
            allowed_amount: "$0.00".to_string(),
            patient_responsibility: "$0.00".to_string(),
            paid_amount: "$0.00".to_string(),
            adjustment: "-$75.00".to_string(),
            carc: carc.to_string(),
            rarc: rarc.map(String::from),
        }
    }

    #[test]
    fn test_compose_copies_claim_fields() {
        let composer = AppealComposer::default();
        let justification = JustificationSet::from(vec![
            "Pain began after a fall.".to_string(),
            "Partial relief with NSAIDs.".to_string(),
        ]);

        let appeal = composer.compose(&claim("CO-50", Some("N10")), &justification);

        assert_eq!(appeal.patient, "Robert Johnson");
        assert_eq!(appeal.claim_number, "CLM345678");
        assert_eq!(appeal.date_of_service, "2024-12-10");
        assert_eq!(appeal.procedure_code, "73030 (X-ray, shoulder, 2 views)");
        assert_eq!(
            appeal.reason,
            "Medical Neccesity: Payment based on the findings of a review organization"
        );
        assert_eq!(
            appeal.justification,
            "Pain began after a fall. Partial relief with NSAIDs."
        );
        assert_eq!(appeal.request, APPEAL_REQUEST);
    }

    #[test]
    fn test_mapped_carc_without_rarc() {
        let composer = AppealComposer::default();
        assert_eq!(composer.reason_for(&claim("CO-45", None)), "Coding Error");
    }

    #[test]
    fn test_unmapped_carc_uses_fallback() {
        let composer = AppealComposer::default();
        assert_eq!(
            composer.reason_for(&claim("CO-197", None)),
            "No predefined reason available."
        );
    }

    #[test]
    fn test_unmapped_rarc_contributes_nothing() {
        let composer = AppealComposer::default();
        assert_eq!(composer.reason_for(&claim("CO-50", Some("M15"))), "Medical Neccesity");
        assert_eq!(
            composer.reason_for(&claim("CO-197", Some("M15"))),
            UNRESOLVED_REASON
        );
    }

    #[test]
    fn test_unmapped_carc_with_mapped_rarc() {
        let composer = AppealComposer::default();
        assert_eq!(
            composer.reason_for(&claim("CO-197", Some("N30"))),
            "No predefined reason available.: Patient ineligible for this service"
        );
    }

    #[test]
    fn test_injected_table() {
        let table: ReasonTable = [("PR-1", "Deductible")].into_iter().collect();
        let composer = AppealComposer::new(table);
        assert_eq!(composer.reason_for(&claim("PR-1", None)), "Deductible");
        assert_eq!(composer.reason_for(&claim("CO-50", None)), UNRESOLVED_REASON);
    }

    #[test]
    fn test_empty_justification() {
        let appeal = AppealComposer::default().compose(&claim("CO-45", None), &JustificationSet::new());
        assert_eq!(appeal.justification, "");
    }
}
