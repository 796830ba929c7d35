//! Mine clinical documents for justification sentences

use crate::config::{ExtractorConfig, RelevancePolicy};
use crate::error::ExtractorError;
use crate::relevance::RelevanceFilter;
use crate::segment::RuleTokenizer;
use rebuttal_domain::{ClinicalDocument, JustificationSet, SentenceTokenizer};
use tracing::{debug, trace};

/// Walks a clinical document and keeps the sentences that support an appeal.
///
/// Every leaf string is split into sentences by the tokenizer and each
/// sentence is run through the relevance filter. The whole document is
/// always visited; results are not cached between calls.
pub struct JustificationExtractor<T = RuleTokenizer>
where
    T: SentenceTokenizer,
{
    tokenizer: T,
    filter: RelevanceFilter,
}

impl JustificationExtractor<RuleTokenizer> {
    /// Create an extractor with the rule-based tokenizer
    pub fn from_config(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Self::new(RuleTokenizer::from_config(config), &config.policy)
    }
}

impl<T> JustificationExtractor<T>
where
    T: SentenceTokenizer,
{
    /// Create an extractor with a custom tokenizer
    pub fn new(tokenizer: T, policy: &RelevancePolicy) -> Result<Self, ExtractorError> {
        Ok(Self {
            tokenizer,
            filter: RelevanceFilter::new(policy)?,
        })
    }

    /// Extract relevant sentences in depth-first document order
    pub fn extract(&self, document: &ClinicalDocument) -> JustificationSet {
        let mut justification = JustificationSet::new();
        let mut leaves = 0usize;
        let mut rejected = 0usize;

        document.visit_leaves(&mut |text| {
            leaves += 1;
            for sentence in self.tokenizer.sentences(text) {
                let sentence = sentence.trim();
                if sentence.is_empty() {
                    continue;
                }
                if self.filter.is_relevant(sentence) {
                    trace!("Keeping sentence: {}", sentence);
                    justification.push(sentence);
                } else {
                    trace!("Skipping sentence: {}", sentence);
                    rejected += 1;
                }
            }
        });

        debug!(
            "Justification: {} sentence(s) kept, {} skipped, {} leaves visited",
            justification.len(),
            rejected,
            leaves
        );

        justification
    }
}
