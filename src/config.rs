//! Global configuration constants for the plagiarism detector.
//!
//! Runtime overrides (threshold, server count, bind address) come from CLI
//! arguments and environment variables in `main.rs`.

/// Similarity threshold used when none is given.
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Default number of simulated servers the documents are spread over.
pub const DEFAULT_SERVERS: usize = 3;

/// Upper bound on simulated servers accepted from the outer surfaces.
pub const MAX_SERVERS: usize = 64;

/// Decimal places retained similarities are rounded to by the reducer.
pub const SIMILARITY_DECIMALS: i32 = 4;

/// Identifier given to a well-formed document that carries no id.
pub const UNKNOWN_ID: &str = "unknown";

/// Identifier given to a malformed document that carries no id.
pub const ERROR_ID: &str = "error";

/// Default address for the HTTP API.
pub const DEFAULT_BIND: &str = "127.0.0.1:6000";

/// Clamps a threshold into `[0.0, 1.0]`. NaN stays NaN and is rejected by the detector.
pub fn clamp_threshold(threshold: f64) -> f64 {
    threshold.clamp(0.0, 1.0)
}
