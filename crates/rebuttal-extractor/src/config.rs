//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};

/// Which sentences count as justification.
///
/// A sentence is relevant when its lowercased text contains any positive
/// keyword as a substring and no negative keyword as a whole word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelevancePolicy {
    /// Keywords that mark a sentence as relevant (substring match)
    pub positive_keywords: Vec<String>,

    /// Negation words that disqualify a sentence (whole-word match)
    pub negative_keywords: Vec<String>,
}

impl RelevancePolicy {
    /// Build a policy from keyword lists
    pub fn new<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        Self {
            positive_keywords: positive.into_iter().map(Into::into).collect(),
            negative_keywords: negative.into_iter().map(Into::into).collect(),
        }
    }

    /// Validate the policy
    pub fn validate(&self) -> Result<(), String> {
        if self.positive_keywords.is_empty() {
            return Err("positive_keywords must not be empty".to_string());
        }
        if self.positive_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err("positive_keywords must not contain blank entries".to_string());
        }
        if self.negative_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err("negative_keywords must not contain blank entries".to_string());
        }
        Ok(())
    }
}

impl Default for RelevancePolicy {
    fn default() -> Self {
        Self::new(
            ["pain", "discomfort", "experienced", "partial", "limited", "tenderness"],
            ["no", "not", "denies", "denied", "without", "negative"],
        )
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Sentence relevance policy
    pub policy: RelevancePolicy,

    /// Abbreviations that never end a sentence (case-insensitive, with the period)
    pub abbreviations: Vec<String>,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.policy.validate()?;
        if let Some(bad) = self.abbreviations.iter().find(|a| !a.ends_with('.') || a.len() < 2) {
            return Err(format!("abbreviation '{}' must be a word ending with '.'", bad));
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    /// Default configuration with balanced settings
    fn default() -> Self {
        Self {
            policy: RelevancePolicy::default(),
            abbreviations: default_abbreviations(),
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: fewer trigger words, more negations
    pub fn strict() -> Self {
        Self {
            policy: RelevancePolicy::new(
                ["pain", "discomfort", "experienced", "partial"],
                [
                    "no", "not", "denies", "denied", "without", "negative", "absent",
                    "unremarkable", "resolved", "rule out",
                ],
            ),
            abbreviations: default_abbreviations(),
        }
    }

    /// Lenient preset: more trigger words, only hard negations
    pub fn lenient() -> Self {
        Self {
            policy: RelevancePolicy::new(
                [
                    "pain", "discomfort", "experienced", "partial", "limited", "tenderness",
                    "difficulty", "worse", "weakness", "impingement", "instability",
                ],
                ["no", "not"],
            ),
            abbreviations: default_abbreviations(),
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate().map_err(ExtractorError::Config)?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

fn default_abbreviations() -> Vec<String> {
    [
        "dr.", "mr.", "mrs.", "ms.", "jr.", "sr.", "st.", "vs.", "prof.", "approx.", "fig.",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_strict_config_is_valid() {
        let config = ExtractorConfig::strict();
        assert!(config.validate().is_ok());
        assert!(config.policy.negative_keywords.contains(&"rule out".to_string()));
    }

    #[test]
    fn test_lenient_config_is_valid() {
        let config = ExtractorConfig::lenient();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_policy_covers_source_keywords() {
        let policy = RelevancePolicy::default();
        for keyword in ["pain", "discomfort", "experienced", "partial"] {
            assert!(policy.positive_keywords.iter().any(|k| k == keyword));
        }
        assert!(policy.negative_keywords.iter().any(|k| k == "no"));
    }

    #[test]
    fn test_empty_positive_keywords_rejected() {
        let mut config = ExtractorConfig::default();
        config.policy.positive_keywords.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_negative_keyword_rejected() {
        let mut config = ExtractorConfig::default();
        config.policy.negative_keywords.push("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_abbreviation_without_period_rejected() {
        let mut config = ExtractorConfig::default();
        config.abbreviations.push("dr".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::strict();
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = ExtractorConfig::from_toml(
            r#"
            [policy]
            positive_keywords = ["ache"]
            negative_keywords = []
            "#,
        )
        .unwrap();
        assert_eq!(parsed.policy.positive_keywords, ["ache"]);
        assert!(parsed.policy.negative_keywords.is_empty());
        assert_eq!(parsed.abbreviations, ExtractorConfig::default().abbreviations);
    }

    #[test]
    fn test_policy_table_fills_missing_keywords() {
        let parsed = ExtractorConfig::from_toml(
            r#"
            [policy]
            positive_keywords = ["ache"]
            "#,
        )
        .unwrap();
        assert_eq!(parsed.policy.positive_keywords, ["ache"]);
        assert_eq!(
            parsed.policy.negative_keywords,
            RelevancePolicy::default().negative_keywords
        );
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = ExtractorConfig::from_toml("policy = 3");
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }
}
