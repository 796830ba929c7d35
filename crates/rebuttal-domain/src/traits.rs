//! Trait definitions for external collaborators
//!
//! These traits define the boundaries between domain logic and the services
//! it consumes. Implementations live in other crates.

/// Splits free text into sentences.
///
/// Implemented by the application layer (rebuttal-extractor). Implementations
/// must place boundaries correctly around abbreviations and decimal numbers;
/// splitting on every period does not satisfy this contract. Returned
/// sentences are slices of the input in their original order and may carry
/// surrounding whitespace.
pub trait SentenceTokenizer {
    /// Split `text` into its sentences
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

impl<T: SentenceTokenizer + ?Sized> SentenceTokenizer for &T {
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        (**self).sentences(text)
    }
}
