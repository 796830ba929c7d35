//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use rebuttal_domain::{AppealRecord, ClaimRecord, JustificationSet};
use serde_json::{Map, Value};
use tabled::{
    builder::Builder,
    settings::{
        object::{Columns, Rows},
        Alignment, Modify, Style, Width,
    },
};

/// Wrap width for long free-text cells
const TEXT_WIDTH: usize = 88;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an appeal record.
    pub fn format_appeal(&self, appeal: &AppealRecord) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let object: Map<String, Value> = appeal
                    .fields()
                    .iter()
                    .map(|(label, value)| (label.to_string(), Value::from(*value)))
                    .collect();
                Ok(serde_json::to_string_pretty(&object)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                for (label, value) in appeal.fields() {
                    builder.push_record([label, value]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()))
                    .with(Modify::new(Columns::single(1)).with(Width::wrap(TEXT_WIDTH)));

                Ok(table.to_string())
            }
            OutputFormat::Quiet => Ok(format!("{}\n{}", appeal.reason, appeal.justification)),
        }
    }

    /// Format parsed claims.
    pub fn format_claims(&self, claims: &[ClaimRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_claims_json(claims),
            OutputFormat::Table => self.format_claims_table(claims),
            OutputFormat::Quiet => Ok(claims
                .iter()
                .map(|c| c.claim_number.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format claims as JSON.
    fn format_claims_json(&self, claims: &[ClaimRecord]) -> Result<String> {
        let json_claims: Vec<Value> = claims
            .iter()
            .map(|c| {
                serde_json::json!({
                    "ClaimNumber": c.claim_number,
                    "PatientName": c.patient_name,
                    "DateOfService": c.date_of_service,
                    "ProcedureCode": c.procedure_code,
                    "BilledAmount": c.billed_amount,
                    "AllowedAmount": c.allowed_amount,
                    "PatientResponsibility": c.patient_responsibility,
                    "PaidAmount": c.paid_amount,
                    "Adjustment": c.adjustment,
                    "CARC": c.carc,
                    "RARC": c.rarc,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_claims)?)
    }

    /// Format claims as a table.
    fn format_claims_table(&self, claims: &[ClaimRecord]) -> Result<String> {
        if claims.is_empty() {
            return Ok(self.colorize("No claims found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record([
            "Claim", "Patient", "Service Date", "Procedure", "Billed", "Paid", "Adjustment",
            "CARC", "RARC",
        ]);

        for claim in claims {
            builder.push_record([
                claim.claim_number.as_str(),
                &claim.patient_name,
                &claim.date_of_service,
                &claim.procedure_code,
                &claim.billed_amount,
                &claim.paid_amount,
                &claim.adjustment,
                &claim.carc,
                claim.rarc.as_deref().unwrap_or("-"),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format justification sentences.
    pub fn format_justification(&self, justification: &JustificationSet) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(justification.as_slice())?),
            OutputFormat::Quiet => Ok(justification.as_slice().join("\n")),
            OutputFormat::Table => {
                if justification.is_empty() {
                    return Ok(self.colorize("No justification sentences found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "Sentence"]);
                for (idx, sentence) in justification.iter().enumerate() {
                    builder.push_record([(idx + 1).to_string(), sentence.to_string()]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Columns::single(1)).with(Width::wrap(TEXT_WIDTH)));

                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
