//! Plagiarism Detector
//!
//! Owns the reference token set and the threshold, and drives the two-phase
//! pipeline over documents.
//!
//! ## Modes
//! - **Local**: every document in one list, mapped then reduced once.
//! - **Distributed**: documents pre-assigned to simulated servers. Each server's
//!   partition is mapped in order, results are concatenated server by server,
//!   and a single central reduce ranks the combined list.
//!
//! Ties in the ranking keep the order of the concatenated map output, so the
//! same documents partitioned differently may tie-break differently.

use super::error::{DetectorError, Result};
use super::mapreduce::{map_document, reduce};
use super::types::*;
use crate::config;
use crate::outcome::Outcome;
use crate::text::resources::LanguageResources;
use crate::text::tokenizer::Tokenizer;
use std::collections::HashSet;
use std::sync::Arc;

/// Detector bound to one reference document and threshold.
///
/// Immutable after construction; safe to share across threads.
#[derive(Debug, Clone)]
pub struct PlagiarismDetector {
    /// Tokens of the reference document.
    reference_tokens: HashSet<String>,
    /// Similarity threshold in `[0.0, 1.0]`.
    threshold: f64,
    tokenizer: Tokenizer,
}

impl PlagiarismDetector {
    /// Creates a detector using the shared English resources.
    ///
    /// The threshold is clamped into `[0.0, 1.0]`; NaN is rejected.
    pub fn new(reference_content: &str, threshold: f64) -> Result<Self> {
        Self::with_tokenizer(reference_content, threshold, Tokenizer::english())
    }

    /// Creates a detector with explicitly injected language resources.
    pub fn with_resources(
        reference_content: &str,
        threshold: f64,
        resources: Arc<LanguageResources>,
    ) -> Result<Self> {
        Self::with_tokenizer(reference_content, threshold, Tokenizer::new(resources))
    }

    fn with_tokenizer(
        reference_content: &str,
        threshold: f64,
        tokenizer: Tokenizer,
    ) -> Result<Self> {
        if threshold.is_nan() {
            return Err(DetectorError::Initialization(
                "threshold must be a number".to_string(),
            ));
        }

        let reference_tokens = tokenizer.token_set(reference_content).into_value();
        let threshold = config::clamp_threshold(threshold);

        tracing::debug!(
            "Detector ready: {} reference tokens, threshold {}",
            reference_tokens.len(),
            threshold
        );

        Ok(Self {
            reference_tokens,
            threshold,
            tokenizer,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn reference_tokens(&self) -> &HashSet<String> {
        &self.reference_tokens
    }

    /// Map phase for one document, with its outcome tag.
    pub fn mapper_outcome(&self, document: &Document) -> Outcome<ScoredDocument> {
        map_document(&self.reference_tokens, document, &self.tokenizer)
    }

    /// Map phase for one document: `(id, similarity)`.
    pub fn mapper(&self, document: &Document) -> ScoredDocument {
        self.mapper_outcome(document).into_value()
    }

    /// Reduce phase with the detector's threshold, with its outcome tag.
    pub fn reducer_outcome(&self, scored: &[ScoredDocument]) -> Outcome<Vec<ScoredDocument>> {
        reduce(scored, self.threshold)
    }

    /// Reduce phase with the detector's threshold.
    pub fn reducer(&self, scored: &[ScoredDocument]) -> Vec<ScoredDocument> {
        self.reducer_outcome(scored).into_value()
    }

    /// Runs map/reduce with every document on a single server.
    pub fn run_local(&self, documents: &[Document]) -> Vec<ScoredDocument> {
        tracing::info!("Starting LOCAL processing on {} documents", documents.len());

        let mapped: Vec<ScoredDocument> = documents.iter().map(|doc| self.mapper(doc)).collect();
        self.reducer(&mapped)
    }

    /// Runs map/reduce over documents partitioned across simulated servers.
    pub fn run_distributed(&self, partitions: &[Vec<Document>]) -> Vec<ScoredDocument> {
        let map_phase = self.map_partitions(partitions);
        let all_mapped: Vec<ScoredDocument> = map_phase
            .into_iter()
            .flat_map(|server| server.scored)
            .collect();

        self.reducer(&all_mapped)
    }

    /// Like [`run_distributed`](Self::run_distributed), but also keeps the
    /// per-server map output and attributes each retained document to the
    /// server that scored it.
    pub fn run_distributed_report(&self, partitions: &[Vec<Document>]) -> DistributedReport {
        let map_phase = self.map_partitions(partitions);
        let all_mapped: Vec<(usize, ScoredDocument)> = map_phase
            .iter()
            .flat_map(|server| server.scored.iter().map(|s| (server.server, s.clone())))
            .collect();

        let scored: Vec<ScoredDocument> = all_mapped.iter().map(|(_, s)| s.clone()).collect();
        let ranked = self.reducer(&scored);

        let plagiarized = ranked
            .iter()
            .map(|result| AttributedResult {
                id: result.id.clone(),
                similarity: result.similarity,
                server: all_mapped
                    .iter()
                    .find(|(_, s)| s.id == result.id)
                    .map(|(server, _)| *server),
            })
            .collect();

        DistributedReport {
            servers: partitions.len(),
            total_documents: scored.len(),
            map_phase,
            plagiarized,
            stats: self.analyze_results(&ranked),
        }
    }

    fn map_partitions(&self, partitions: &[Vec<Document>]) -> Vec<ServerMapResult> {
        tracing::info!(
            "Starting DISTRIBUTED processing on {} servers",
            partitions.len()
        );

        partitions
            .iter()
            .enumerate()
            .map(|(index, chunk)| {
                let server = index + 1;
                tracing::info!("MAP on server {} - {} documents", server, chunk.len());

                let mut degraded = 0;
                let scored = chunk
                    .iter()
                    .map(|doc| {
                        let outcome = self.mapper_outcome(doc);
                        if outcome.is_degraded() {
                            degraded += 1;
                        }
                        outcome.into_value()
                    })
                    .collect();

                ServerMapResult {
                    server,
                    scored,
                    degraded,
                }
            })
            .collect()
    }

    /// Summary statistics over a ranked result list.
    pub fn analyze_results(&self, results: &[ScoredDocument]) -> AnalysisStats {
        let mut stats = AnalysisStats {
            total_docs: results.len(),
            threshold: self.threshold,
            plagiarized: Vec::new(),
            max_similarity: 0.0,
            min_similarity: 0.0,
            average: 0.0,
        };

        if results.is_empty() {
            return stats;
        }

        let similarities = results.iter().map(|r| r.similarity);
        stats.max_similarity = similarities.clone().fold(f64::NEG_INFINITY, f64::max);
        stats.min_similarity = similarities.clone().fold(f64::INFINITY, f64::min);
        stats.average = similarities.sum::<f64>() / results.len() as f64;
        stats.plagiarized = results.to_vec();

        stats
    }
}
