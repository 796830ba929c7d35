//! Rebuttal Composer
//!
//! Turns a matched claim and its justification into an appeal record.
//!
//! The composer performs no text search or parsing; it only combines
//! already-extracted data with the reason-code table it was built with.
//!
//! # Examples
//!
//! ```no_run
//! use rebuttal_composer::AppealComposer;
//! use rebuttal_domain::ReasonTable;
//!
//! let composer = AppealComposer::new(ReasonTable::standard());
//! // let appeal = composer.compose(&claim, &justification);
//! ```

#![warn(missing_docs)]

mod composer;

pub use composer::AppealComposer;
