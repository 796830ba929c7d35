//! Justification sentences mined from clinical notes

/// Ordered sentences supporting an appeal.
///
/// Order is the order in which sentences were encountered while walking
/// the clinical document. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JustificationSet {
    sentences: Vec<String>,
}

impl JustificationSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sentence, trimming surrounding whitespace
    pub fn push(&mut self, sentence: impl AsRef<str>) {
        self.sentences.push(sentence.as_ref().trim().to_string());
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether no sentence was kept
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Iterate over the sentences in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().map(String::as_str)
    }

    /// The sentences as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.sentences
    }

    /// All sentences joined by a single space, for display
    pub fn joined(&self) -> String {
        self.sentences.join(" ")
    }
}

impl From<Vec<String>> for JustificationSet {
    fn from(sentences: Vec<String>) -> Self {
        let mut set = Self::new();
        for sentence in sentences {
            set.push(sentence);
        }
        set
    }
}

impl IntoIterator for JustificationSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.into_iter()
    }
}
