use crate::cluster::partitioner::split_documents;
use crate::config;
use crate::detector::detector::PlagiarismDetector;
use crate::detector::types::{DistributedReport, Document};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    pub reference: String,
    pub threshold: Option<f64>,
    /// Documents to split round robin across `servers`.
    #[serde(default)]
    pub documents: Vec<Value>,
    /// Explicit assignment of documents to servers. Takes precedence over `documents`.
    pub partitions: Option<Vec<Vec<Value>>>,
    pub servers: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Error returned to HTTP clients as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}

pub async fn handle_detect(
    Json(req): Json<DetectRequest>,
) -> Result<Json<DistributedReport>, ApiError> {
    let threshold = req.threshold.unwrap_or(config::DEFAULT_THRESHOLD);
    let detector = PlagiarismDetector::new(&req.reference, threshold).map_err(|e| {
        tracing::warn!("Rejected detection request: {}", e);
        ApiError::BadRequest(e.to_string())
    })?;

    let partitions: Vec<Vec<Document>> = match req.partitions {
        Some(partitions) => partitions
            .iter()
            .map(|chunk| chunk.iter().map(Document::from_value).collect())
            .collect(),
        None => {
            let servers = req
                .servers
                .unwrap_or(config::DEFAULT_SERVERS)
                .clamp(1, config::MAX_SERVERS);
            let documents: Vec<Document> =
                req.documents.iter().map(Document::from_value).collect();
            split_documents(&documents, servers)
        }
    };

    if partitions.len() > config::MAX_SERVERS {
        return Err(ApiError::BadRequest(format!(
            "at most {} servers are supported",
            config::MAX_SERVERS
        )));
    }

    let report = detector.run_distributed_report(&partitions);
    tracing::info!(
        "Detection finished: {}/{} documents flagged",
        report.plagiarized.len(),
        report.total_documents
    );

    Ok(Json(report))
}

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
