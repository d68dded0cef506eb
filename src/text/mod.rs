//! Text Analysis Module
//!
//! Turns raw document text into comparable token sets and scores them.
//!
//! ## Pipeline
//! 1. **Resources**: stopword list, stemmer and word splitter, set up once and injected.
//! 2. **Normalization**: lowercase, strip punctuation, split, drop stopwords, stem.
//! 3. **Scoring**: Jaccard similarity between the reference set and a candidate set.
//!
//! ## Submodules
//! - **`resources`**: Language resources and their idempotent process-wide setup.
//! - **`tokenizer`**: The normalizer producing stemmed, stopword-free tokens.
//! - **`similarity`**: Set-overlap metric.

pub mod resources;
pub mod similarity;
pub mod tokenizer;

#[cfg(test)]
mod tests;
