//! Plagiarism Detection Module
//!
//! The map/reduce core of the crate.
//!
//! ## Architecture Overview
//! 1. **Construction**: the reference document is normalized once into a token set.
//! 2. **Map**: each candidate document is normalized and scored against that set
//!    with Jaccard similarity, producing an `(id, similarity)` pair.
//! 3. **Reduce**: all pairs are filtered by the threshold and ranked, once, centrally.
//!
//! Documents can be spread across simulated servers (in-process partitions).
//! There is no network or threading involved; a partition only changes the order
//! in which map results reach the reducer.
//!
//! ## Submodules
//! - **`detector`**: `PlagiarismDetector`, the local and distributed runners and the summarizer.
//! - **`mapreduce`**: The map and reduce phase functions.
//! - **`types`**: Documents, scored results, statistics and reports.
//! - **`error`**: Error taxonomy.

pub mod detector;
pub mod error;
pub mod mapreduce;
pub mod types;
