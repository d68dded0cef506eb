//! Language Resources
//!
//! Stopword list, stemmer and word splitter used by the normalizer.
//!
//! The English resources are built once per process through [`setup`] and shared
//! behind an `Arc`. The normalizer never reaches for global state on its own; it
//! is handed a `LanguageResources` value, so tests can inject degraded variants
//! (no stopword list, whitespace splitting).

use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Standard English stopword list.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

pub type StopwordSet = HashSet<&'static str>;

/// How a normalized string is cut into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSplitter {
    /// Unicode (UAX #29) word boundaries.
    UnicodeWords,
    /// Naive whitespace splitting, used when no word tokenizer is available.
    Whitespace,
}

pub struct LanguageResources {
    splitter: WordSplitter,
    stopwords: Option<StopwordSet>,
    stemmer: Stemmer,
}

impl LanguageResources {
    /// Builds a resource bundle. `stopwords = None` means the stopword list is
    /// unavailable and filtering will be skipped.
    pub fn new(splitter: WordSplitter, stopwords: Option<StopwordSet>) -> Self {
        Self {
            splitter,
            stopwords,
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Fresh English resources: Unicode word splitting, the full stopword list
    /// and the Snowball English stemmer.
    pub fn english() -> Self {
        Self::new(
            WordSplitter::UnicodeWords,
            Some(ENGLISH_STOPWORDS.iter().copied().collect()),
        )
    }

    pub fn splitter(&self) -> WordSplitter {
        self.splitter
    }

    pub fn stopwords(&self) -> Option<&StopwordSet> {
        self.stopwords.as_ref()
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords
            .as_ref()
            .map(|set| set.contains(word))
            .unwrap_or(false)
    }

    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }
}

impl fmt::Debug for LanguageResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageResources")
            .field("splitter", &self.splitter)
            .field("stopwords", &self.stopwords.as_ref().map(|s| s.len()))
            .field("stemmer", &"snowball-english")
            .finish()
    }
}

static ENGLISH: OnceLock<Arc<LanguageResources>> = OnceLock::new();

/// Sets up the shared English resources.
///
/// Safe to call any number of times; only the first call builds anything and
/// every call returns the same instance.
pub fn setup() -> Arc<LanguageResources> {
    ENGLISH
        .get_or_init(|| {
            tracing::debug!(
                "Loading English language resources ({} stopwords)",
                ENGLISH_STOPWORDS.len()
            );
            Arc::new(LanguageResources::english())
        })
        .clone()
}
