//! MapReduce Plagiarism Detection Library
//!
//! Flags candidate documents that are too similar to a reference document.
//! Similarity is computed with a map/reduce decomposition over simulated servers.
//!
//! ## Architecture Modules
//! - **`text`**: Normalization (stopwords, stemming) and the Jaccard similarity metric.
//! - **`detector`**: The map and reduce phases, the `PlagiarismDetector` runners and
//!   the result summarizer.
//! - **`cluster`**: Assignment of documents to in-process "servers".
//! - **`ingestion`**: Reading source files into documents.
//! - **`api`**: HTTP endpoints wrapping a single detection run.
//! - **`config`**: Defaults and limits.
//! - **`outcome`**: Tagged complete/degraded results shared by the pipeline stages.

pub mod api;
pub mod cluster;
pub mod config;
pub mod detector;
pub mod ingestion;
pub mod outcome;
pub mod text;

pub use detector::detector::PlagiarismDetector;
pub use detector::error::DetectorError;
pub use detector::types::{AnalysisStats, Document, ScoredDocument};
pub use outcome::Outcome;
