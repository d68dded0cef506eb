use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A candidate document handed to the mapper.
///
/// Both fields are optional so that input coming from loosely typed sources
/// (JSON bodies, partially filled forms) can still be represented. A document
/// without `content` is malformed and scores `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: Option<String>,
    pub content: Option<String>,
    /// 1-based simulated server this document was assigned to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<usize>,
}

impl Document {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            content: Some(content.into()),
            server: None,
        }
    }

    /// Builds a document from an arbitrary JSON value.
    ///
    /// Anything that is not an object, or an object without a `content` key,
    /// becomes a document with no content. A `content` that is present but not
    /// a string (number, `null`, ...) is read as empty text. Scalar ids are
    /// kept in their JSON text form; `null` or structured ids are dropped.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self {
                id: None,
                content: None,
                server: None,
            };
        };

        Self {
            id: object.get("id").and_then(id_from_value),
            content: object
                .get("content")
                .map(|content| content.as_str().unwrap_or_default().to_string()),
            server: object
                .get("server")
                .and_then(Value::as_u64)
                .map(|s| s as usize),
        }
    }

    pub fn with_server(mut self, server: usize) -> Self {
        self.server = Some(server);
        self
    }
}

fn id_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        Value::Bool(id) => Some(id.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// An `(id, similarity)` pair produced by the map phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub id: String,
    /// Jaccard similarity against the reference, in `[0.0, 1.0]`.
    pub similarity: f64,
}

impl ScoredDocument {
    pub fn new(id: impl Into<String>, similarity: f64) -> Self {
        Self {
            id: id.into(),
            similarity,
        }
    }
}

impl From<(&str, f64)> for ScoredDocument {
    fn from((id, similarity): (&str, f64)) -> Self {
        Self::new(id, similarity)
    }
}

/// Summary of a ranked result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisStats {
    pub total_docs: usize,
    pub threshold: f64,
    pub plagiarized: Vec<ScoredDocument>,
    pub max_similarity: f64,
    pub min_similarity: f64,
    pub average: f64,
}

/// Map-phase output of one simulated server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerMapResult {
    /// 1-based server number.
    pub server: usize,
    pub scored: Vec<ScoredDocument>,
    /// Documents whose mapping was degraded (malformed input, fallback normalization).
    pub degraded: usize,
}

/// A retained document together with the server that scored it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributedResult {
    pub id: String,
    pub similarity: f64,
    pub server: Option<usize>,
}

/// Full account of a partitioned run: what each server mapped, what the
/// central reduce kept, and summary statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributedReport {
    pub servers: usize,
    pub total_documents: usize,
    pub map_phase: Vec<ServerMapResult>,
    pub plagiarized: Vec<AttributedResult>,
    pub stats: AnalysisStats,
}
