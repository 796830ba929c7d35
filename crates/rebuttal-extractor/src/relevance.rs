//! Lexical relevance filter for justification sentences

use crate::config::RelevancePolicy;
use crate::error::ExtractorError;
use regex::Regex;

/// Compiled form of a [`RelevancePolicy`].
///
/// Positive keywords match as substrings of the lowercased sentence, so
/// `pain` also matches `painful`. Negative keywords match only as whole
/// words, so `no` rejects "no history of pain" but not "anomaly".
#[derive(Debug, Clone)]
pub struct RelevanceFilter {
    positives: Vec<String>,
    negation: Option<Regex>,
}

impl RelevanceFilter {
    /// Compile a policy
    pub fn new(policy: &RelevancePolicy) -> Result<Self, ExtractorError> {
        let positives = policy
            .positive_keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        let alternatives: Vec<String> = policy
            .negative_keywords
            .iter()
            .map(|k| {
                k.to_lowercase()
                    .split_whitespace()
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(r"\s+")
            })
            .filter(|k| !k.is_empty())
            .collect();

        let negation = if alternatives.is_empty() {
            None
        } else {
            Some(Regex::new(&format!(r"\b(?:{})\b", alternatives.join("|")))?)
        };

        Ok(Self { positives, negation })
    }

    /// Whether the sentence mentions any positive keyword and no negation
    pub fn is_relevant(&self, sentence: &str) -> bool {
        let folded = sentence.to_lowercase();
        self.mentions_keyword(&folded) && !self.is_negated(&folded)
    }

    fn mentions_keyword(&self, folded: &str) -> bool {
        self.positives.iter().any(|k| folded.contains(k.as_str()))
    }

    fn is_negated(&self, folded: &str) -> bool {
        self.negation.as_ref().is_some_and(|re| re.is_match(folded))
    }
}
