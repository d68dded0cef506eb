use super::resources::{self, LanguageResources, WordSplitter};
use crate::detector::error::DetectorError;
use crate::outcome::Outcome;
use regex::Regex;
use std::collections::HashSet;
use std::sync::{Arc, LazyLock};
use unicode_segmentation::UnicodeSegmentation;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex literal"));

/// Normalizes raw text into stemmed, stopword-free tokens.
///
/// Steps, in order: lowercase, drop every character that is neither a word
/// character nor whitespace, split into words, remove stopwords, stem, drop
/// empty tokens. Token order follows the text; callers usually collect into a set.
///
/// Never fails. A missing stopword list or a whitespace-only splitter yields an
/// `Outcome::Degraded` carrying the tokens that could still be produced.
pub fn normalize(text: &str, resources: &LanguageResources) -> Outcome<Vec<String>> {
    if text.is_empty() {
        return Outcome::Complete(Vec::new());
    }

    let lowered = text.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, "");

    let words: Vec<&str> = match resources.splitter() {
        WordSplitter::UnicodeWords => cleaned.unicode_words().collect(),
        WordSplitter::Whitespace => cleaned.split_whitespace().collect(),
    };

    let filtered: Vec<&str> = if resources.stopwords().is_some() {
        words
            .into_iter()
            .filter(|word| !resources.is_stopword(word))
            .collect()
    } else {
        words
    };

    let tokens: Vec<String> = filtered
        .into_iter()
        .filter(|word| !word.is_empty())
        .map(|word| resources.stem(word))
        .filter(|token| !token.is_empty())
        .collect();

    let mut outcome = Outcome::Complete(tokens);
    if resources.splitter() == WordSplitter::Whitespace {
        outcome = outcome.degrade(
            DetectorError::ResourceUnavailable(
                "word tokenizer, split on whitespace".to_string(),
            )
            .to_string(),
        );
    }
    if resources.stopwords().is_none() {
        outcome = outcome.degrade(
            DetectorError::ResourceUnavailable("stopword list, filtering skipped".to_string())
                .to_string(),
        );
    }
    if let Some(reason) = outcome.reason() {
        tracing::warn!("Normalization degraded: {}", reason);
    }
    outcome
}

/// Normalizer bound to a set of language resources.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    resources: Arc<LanguageResources>,
}

impl Tokenizer {
    pub fn new(resources: Arc<LanguageResources>) -> Self {
        Self { resources }
    }

    /// Tokenizer over the shared English resources from [`resources::setup`].
    pub fn english() -> Self {
        Self::new(resources::setup())
    }

    pub fn resources(&self) -> &LanguageResources {
        &self.resources
    }

    pub fn normalize(&self, text: &str) -> Outcome<Vec<String>> {
        normalize(text, &self.resources)
    }

    /// Normalizes and collapses the tokens into a set.
    pub fn token_set(&self, text: &str) -> Outcome<HashSet<String>> {
        self.normalize(text)
            .map(|tokens| tokens.into_iter().collect())
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::english()
    }
}
