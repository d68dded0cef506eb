//! Ingestion Module
//!
//! Reads source files into documents for the detector.
//!
//! ## Workflow
//! 1. **Read**: Loads raw text from a supported file format.
//! 2. **Wrap**: Turns each file into a `Document` identified by its file name.
//!
//! Read failures are the one error that reaches the caller of a batch: without
//! content there is nothing to score.

pub mod reader;
