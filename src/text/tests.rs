//! Text Module Tests
//!
//! Validates normalization and the similarity metric.
//!
//! ## Test Scopes
//! - **Normalizer**: Lowercasing, punctuation stripping, stopword removal and stemming.
//! - **Degraded resources**: Missing stopword list and whitespace fallback.
//! - **Jaccard**: Symmetry, identity and the empty-union rule.

#[cfg(test)]
mod tests {
    use crate::text::resources::{self, LanguageResources, WordSplitter};
    use crate::text::similarity::{jaccard, jaccard_iter};
    use crate::text::tokenizer::{normalize, Tokenizer};
    use std::collections::HashSet;
    use std::sync::Arc;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    // ============================================================
    // NORMALIZER TESTS
    // ============================================================

    #[test]
    fn test_normalize_drops_stopwords() {
        let tokens = Tokenizer::english().normalize("The cat sat on the mat");

        assert!(!tokens.is_degraded());
        assert_eq!(tokens.value(), &vec!["cat", "sat", "mat"]);
    }

    #[test]
    fn test_normalize_lowercases() {
        let tokens = Tokenizer::english().normalize("RUST Compiler");

        assert_eq!(tokens.into_value(), vec!["rust", "compil"]);
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        let tokens = Tokenizer::english().normalize("Hello, world! Dog-house?");

        // Hyphen is stripped before splitting, so the compound is glued.
        assert_eq!(tokens.into_value(), vec!["hello", "world", "doghous"]);
    }

    #[test]
    fn test_normalize_stems_words() {
        let tokens = Tokenizer::english().normalize("cats running jumps");

        assert_eq!(tokens.into_value(), vec!["cat", "run", "jump"]);
    }

    #[test]
    fn test_normalize_keeps_numbers_and_underscores() {
        let tokens = Tokenizer::english().normalize("chapter 42 snake_case");
        let tokens = tokens.into_value();

        assert!(tokens.contains(&"42".to_string()));
        assert!(tokens.iter().any(|t| t.starts_with("snake_")));
    }

    #[test]
    fn test_normalize_keeps_unicode_letters() {
        let tokens = Tokenizer::english().normalize("Książka o programowaniu");

        assert!(tokens.value().iter().any(|t| t.starts_with("książk")));
    }

    #[test]
    fn test_normalize_empty_string() {
        let tokens = Tokenizer::english().normalize("");

        assert!(!tokens.is_degraded());
        assert!(tokens.value().is_empty());
    }

    #[test]
    fn test_normalize_only_stopwords_and_punctuation() {
        let tokens = Tokenizer::english().normalize("... and the, of it!!!");

        assert!(tokens.value().is_empty());
    }

    #[test]
    fn test_normalize_deterministic() {
        let tokenizer = Tokenizer::english();
        let text = "Distributed systems process documents in partitions.";

        assert_eq!(tokenizer.normalize(text), tokenizer.normalize(text));
    }

    #[test]
    fn test_token_set_collapses_duplicates() {
        let tokens = Tokenizer::english().token_set("rust rust rusty rust");

        assert_eq!(tokens.value().iter().filter(|t| *t == "rust").count(), 1);
    }

    // ============================================================
    // RESOURCE TESTS
    // ============================================================

    #[test]
    fn test_setup_is_idempotent() {
        let first = resources::setup();
        let second = resources::setup();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_missing_stopwords_degrades_without_failing() {
        let res = LanguageResources::new(WordSplitter::UnicodeWords, None);
        let tokens = normalize("The cat sat on the mat", &res);

        assert!(tokens.is_degraded());
        assert!(tokens.reason().unwrap().contains("stopword"));
        // Stopwords survive, stemming still applies.
        assert!(tokens.value().contains(&"the".to_string()));
        assert!(tokens.value().contains(&"cat".to_string()));
    }

    #[test]
    fn test_whitespace_fallback_degrades() {
        let res = LanguageResources::new(
            WordSplitter::Whitespace,
            Some(resources::ENGLISH_STOPWORDS.iter().copied().collect()),
        );
        let tokens = normalize("The  cat\tsat\non the mat", &res);

        assert!(tokens.is_degraded());
        assert_eq!(tokens.value(), &vec!["cat", "sat", "mat"]);
    }

    #[test]
    fn test_stopword_lookup() {
        let res = LanguageResources::english();

        assert!(res.is_stopword("the"));
        assert!(res.is_stopword("ourselves"));
        assert!(!res.is_stopword("plagiarism"));
    }

    // ============================================================
    // JACCARD TESTS
    // ============================================================

    #[test]
    fn test_jaccard_identical_sets() {
        let a = set(&["cat", "sat", "mat"]);

        assert_eq!(jaccard(&a, &a), 1.0);
    }

    #[test]
    fn test_jaccard_both_empty_is_zero() {
        let empty: HashSet<String> = HashSet::new();

        assert_eq!(jaccard(&empty, &empty), 0.0);
    }

    #[test]
    fn test_jaccard_one_empty_is_zero() {
        let a = set(&["cat"]);
        let empty: HashSet<String> = HashSet::new();

        assert_eq!(jaccard(&a, &empty), 0.0);
        assert_eq!(jaccard(&empty, &a), 0.0);
    }

    #[test]
    fn test_jaccard_partial_overlap() {
        let a = set(&["a", "b", "c"]);
        let b = set(&["b", "c", "d"]);

        // |{b,c}| / |{a,b,c,d}|
        assert_eq!(jaccard(&a, &b), 0.5);
    }

    #[test]
    fn test_jaccard_symmetric() {
        let samples = [
            set(&[]),
            set(&["x"]),
            set(&["x", "y", "z"]),
            set(&["y", "q"]),
            set(&["a", "b", "c", "d", "e"]),
        ];

        for a in &samples {
            for b in &samples {
                assert_eq!(jaccard(a, b), jaccard(b, a));
            }
        }
    }

    #[test]
    fn test_jaccard_iter_coerces_sequences() {
        let score = jaccard_iter(vec!["a", "a", "b"], vec!["b", "b", "c"]);

        assert!((score - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_reference_examples() {
        let tokenizer = Tokenizer::english();

        let reference = tokenizer.token_set("The cat sat on the mat").into_value();
        let same = tokenizer.token_set("The cat sat on the mat").into_value();
        assert_eq!(jaccard(&reference, &same), 1.0);

        let fruit = tokenizer.token_set("apple banana cherry").into_value();
        let animals = tokenizer.token_set("dog elephant fox").into_value();
        assert_eq!(jaccard(&fruit, &animals), 0.0);
    }
}
