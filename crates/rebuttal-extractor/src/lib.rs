//! Rebuttal Extractor
//!
//! Recovers denied claims from remittance-advice text and mines clinical
//! notes for sentences that justify an appeal.
//!
//! # Overview
//!
//! Two independent extractors feed the appeal composer:
//!
//! - [`ClaimParser`] recognizes fixed-order `Label: value` claim blocks in
//!   loosely formatted remittance text and selects the claim for a patient.
//! - [`JustificationExtractor`] walks a [`ClinicalDocument`] depth-first,
//!   splits each text leaf into sentences and keeps those that pass the
//!   [`RelevancePolicy`].
//!
//! # Architecture
//!
//! ```text
//! remittance text → ClaimParser ──────────────→ ClaimRecord
//! JSON note → parse_document → JustificationExtractor → JustificationSet
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use rebuttal_extractor::{parse_document, ClaimParser, ExtractorConfig, JustificationExtractor};
//!
//! # fn example(remittance: &str, note_json: &str) -> Result<(), Box<dyn std::error::Error>> {
//! let parser = ClaimParser::new()?;
//! let extractor = JustificationExtractor::from_config(&ExtractorConfig::default())?;
//!
//! let note = parse_document(note_json)?;
//! if let Some(claim) = parser.find_claim(remittance, "Robert Johnson") {
//!     let justification = extractor.extract(&note);
//!     println!("{}: {}", claim.claim_number, justification.joined());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`ClinicalDocument`]: rebuttal_domain::ClinicalDocument

#![warn(missing_docs)]

mod error;
mod config;
mod claim_parser;
mod segment;
mod relevance;
mod justification;
mod document;


pub use error::ExtractorError;
pub use config::{ExtractorConfig, RelevancePolicy};
pub use claim_parser::ClaimParser;
pub use segment::RuleTokenizer;
pub use relevance::RelevanceFilter;
pub use justification::JustificationExtractor;
pub use document::{document_from_json, parse_document};
