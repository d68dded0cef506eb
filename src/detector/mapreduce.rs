//! Map and Reduce Phases
//!
//! - **Map**: scores one document against the reference token set.
//! - **Reduce**: filters scored documents by threshold and ranks them.
//!
//! Neither phase ever returns an error. Failures are logged and reported
//! through [`Outcome::Degraded`] with a zero score or an empty ranking.

use super::error::DetectorError;
use super::types::{Document, ScoredDocument};
use crate::config;
use crate::outcome::Outcome;
use crate::text::similarity::jaccard;
use crate::text::tokenizer::Tokenizer;
use std::collections::HashSet;

/// Scores a single document against the reference tokens.
///
/// A document without content yields `(id or "error", 0.0)` as a degraded
/// outcome; the batch it belongs to carries on.
pub fn map_document(
    reference_tokens: &HashSet<String>,
    document: &Document,
    tokenizer: &Tokenizer,
) -> Outcome<ScoredDocument> {
    let Some(content) = document.content.as_deref() else {
        let id = document.id.as_deref().unwrap_or(config::ERROR_ID);
        let err = DetectorError::MalformedDocument(format!(
            "document {} has no 'content' field",
            id
        ));
        tracing::error!("Error in mapper: {}", err);
        return Outcome::degraded(ScoredDocument::new(id, 0.0), err.to_string());
    };

    let id = document.id.as_deref().unwrap_or(config::UNKNOWN_ID);
    let tokens = tokenizer.token_set(content);
    let similarity = jaccard(reference_tokens, tokens.value());

    tracing::info!("MAP: Document {} - Similarity: {:.2}", id, similarity);

    match tokens.reason() {
        Some(reason) => Outcome::degraded(ScoredDocument::new(id, similarity), reason),
        None => Outcome::Complete(ScoredDocument::new(id, similarity)),
    }
}

/// Rounds a similarity to the reducer's fixed precision.
pub fn round_similarity(similarity: f64) -> f64 {
    let factor = 10f64.powi(config::SIMILARITY_DECIMALS);
    (similarity * factor).round() / factor
}

/// Keeps documents with `similarity >= threshold`, rounds their scores to four
/// decimals and sorts them by similarity, highest first.
///
/// The sort is stable: equal scores keep their order from `scored`. Entries
/// with a non-finite score are dropped one by one and reported in a degraded
/// outcome; the rest of the batch is still ranked.
pub fn reduce(scored: &[ScoredDocument], threshold: f64) -> Outcome<Vec<ScoredDocument>> {
    let mut rejected: Vec<&str> = Vec::new();

    let mut plagiarized: Vec<ScoredDocument> = scored
        .iter()
        .filter(|s| {
            if s.similarity.is_finite() {
                return true;
            }
            tracing::error!(
                "Error in reducer: document {} has non-finite similarity {}",
                s.id,
                s.similarity
            );
            rejected.push(&s.id);
            false
        })
        .filter(|s| s.similarity >= threshold)
        .map(|s| {
            tracing::info!(
                "REDUCE: Document {} exceeds threshold ({:.2} >= {})",
                s.id,
                s.similarity,
                threshold
            );
            ScoredDocument::new(s.id.clone(), round_similarity(s.similarity))
        })
        .collect();

    tracing::info!("REDUCE: {} plagiarized documents found", plagiarized.len());

    plagiarized.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    if rejected.is_empty() {
        Outcome::Complete(plagiarized)
    } else {
        Outcome::degraded(
            plagiarized,
            format!("non-finite similarity for documents: {}", rejected.join(", ")),
        )
    }
}
