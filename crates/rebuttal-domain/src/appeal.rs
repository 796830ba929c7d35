//! The composed appeal

/// Fixed closing request on every appeal
pub const APPEAL_REQUEST: &str =
    "Please reconsider the claim and approve coverage as it was medically necessary.";

/// An appeal ready for emission.
///
/// Derived from one claim and one justification set; read-only and used once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppealRecord {
    /// Patient name
    pub patient: String,

    /// Claim number
    pub claim_number: String,

    /// Date of service
    pub date_of_service: String,

    /// Procedure code
    pub procedure_code: String,

    /// Reason for appeal, composed from the CARC and RARC labels
    pub reason: String,

    /// Justification sentences joined by single spaces
    pub justification: String,

    /// Closing request
    pub request: String,
}

impl AppealRecord {
    /// The record as `(label, value)` pairs in emission order
    pub fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("Patient", &self.patient),
            ("Claim Number", &self.claim_number),
            ("Date of Service", &self.date_of_service),
            ("Procedure Code", &self.procedure_code),
            ("Reason for Appeal", &self.reason),
            ("Justification", &self.justification),
            ("Request", &self.request),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_order_and_labels() {
        let appeal = AppealRecord {
            patient: "Jane Smith".to_string(),
            claim_number: "CLM789012".to_string(),
            date_of_service: "2024-12-05".to_string(),
            procedure_code: "85025".to_string(),
            reason: "Coding Error".to_string(),
            justification: String::new(),
            request: APPEAL_REQUEST.to_string(),
        };

        let labels: Vec<_> = appeal.fields().iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            [
                "Patient",
                "Claim Number",
                "Date of Service",
                "Procedure Code",
                "Reason for Appeal",
                "Justification",
                "Request"
            ]
        );
        assert_eq!(appeal.fields()[6].1, APPEAL_REQUEST);
    }
}
