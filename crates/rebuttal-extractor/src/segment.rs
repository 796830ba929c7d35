//! Sentence segmentation for clinical text

use crate::config::ExtractorConfig;
use rebuttal_domain::SentenceTokenizer;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Splits text on Unicode (UAX #29) sentence boundaries, then re-joins
/// pieces that were split after a known abbreviation or an initial inside a
/// name.
///
/// UAX #29 already keeps decimals (`98.5`) and lowercase continuations
/// (`e.g. the`) together; abbreviations followed by a capitalized word
/// (`Dr. Jane`) need the second pass.
#[derive(Debug, Clone)]
pub struct RuleTokenizer {
    abbreviations: HashSet<String>,
}

impl RuleTokenizer {
    /// Create a tokenizer that treats `abbreviations` (with their trailing
    /// period, any case) as non-terminal
    pub fn new<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            abbreviations: abbreviations
                .into_iter()
                .map(|a| a.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Create a tokenizer from the extractor configuration
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self::new(&config.abbreviations)
    }

    /// Whether the boundary after `sentence` (the text gathered so far)
    /// should be dropped.
    ///
    /// A configured abbreviation always joins. A single capital initial joins
    /// only inside a name: after a title or another initial ("Dr. R. Patel"),
    /// or before another initial ("J. R. Smith"). Otherwise "vitamin D." and
    /// "segment C." end their sentences.
    fn joins_next(&self, sentence: &str, next: Option<&str>) -> bool {
        let mut words = sentence.split_whitespace().rev().map(trim_word);
        let Some(last) = words.next() else {
            return false;
        };
        if !last.ends_with('.') {
            return false;
        }

        if self.is_abbreviation(last) {
            return true;
        }
        if !is_initial(last) {
            return false;
        }

        let after_title = words
            .next()
            .is_some_and(|prev| self.is_abbreviation(prev) || is_initial(prev));
        let before_initial = next
            .and_then(|next| next.split_whitespace().next())
            .is_some_and(|word| is_initial(trim_word(word)));

        after_title || before_initial
    }

    fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(&word.to_lowercase())
    }
}

/// Strip leading punctuation such as an opening parenthesis
fn trim_word(word: &str) -> &str {
    word.trim_start_matches(|c: char| !c.is_alphanumeric())
}

/// A single capital letter and a period, as in "J."
fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(c), Some('.'), None) if c.is_uppercase()
    )
}

impl Default for RuleTokenizer {
    fn default() -> Self {
        Self::from_config(&ExtractorConfig::default())
    }
}

impl SentenceTokenizer for RuleTokenizer {
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let pieces: Vec<(usize, &str)> = text.split_sentence_bound_indices().collect();
        let mut sentences = Vec::new();
        let mut pending: Option<usize> = None;

        for (idx, &(offset, piece)) in pieces.iter().enumerate() {
            let start = *pending.get_or_insert(offset);
            let sentence = &text[start..offset + piece.len()];
            let next = pieces.get(idx + 1).map(|&(_, next)| next);

            if next.is_some() && self.joins_next(sentence, next) {
                continue;
            }
            sentences.push(sentence);
            pending = None;
        }

        sentences.retain(|s| !s.trim().is_empty());
        sentences
    }
}
