//! Rebuttal Domain Layer
//!
//! This crate contains the domain model shared by every other Rebuttal crate.
//! It has ZERO external dependencies and defines the records that flow through
//! the appeal pipeline plus the trait seam for sentence segmentation.
//!
//! ## Key Concepts
//!
//! - **ClaimRecord**: one denied claim recovered from remittance-advice text
//! - **ClinicalDocument**: an untyped tree of mappings, sequences and strings
//! - **JustificationSet**: sentences mined from a clinical document
//! - **ReasonTable**: denial code (CARC/RARC) to human-readable label
//! - **AppealRecord**: the composed appeal, ready for emission
//!
//! ## Pipeline
//!
//! ```text
//! remittance text → ClaimRecord ─┐
//!                                ├→ AppealRecord
//! ClinicalDocument → Justification┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod appeal;
pub mod claim;
pub mod document;
pub mod justification;
pub mod reason;
pub mod traits;

// Re-exports for convenience
pub use appeal::{AppealRecord, APPEAL_REQUEST};
pub use claim::ClaimRecord;
pub use document::ClinicalDocument;
pub use justification::JustificationSet;
pub use reason::{ReasonTable, UNRESOLVED_REASON};
pub use traits::SentenceTokenizer;
