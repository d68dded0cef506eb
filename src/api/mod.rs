//! HTTP API Module
//!
//! Exposes one-shot detection over HTTP. Each request carries its own reference
//! document and candidates; the server keeps no state between requests.
//!
//! ## Endpoints
//! - `POST /detect`: run a partitioned detection and return the full report.
//! - `GET /health`: liveness check.

pub mod handlers;

use axum::routing::{get, post};
use axum::Router;

pub fn create_router() -> Router {
    Router::new()
        .route("/detect", post(handlers::handle_detect))
        .route("/health", get(handlers::handle_health))
}

#[cfg(test)]
mod tests {
    use super::handlers::{handle_detect, handle_health, DetectRequest};
    use axum::response::IntoResponse;
    use axum::Json;
    use serde_json::json;

    fn request(body: serde_json::Value) -> Json<DetectRequest> {
        Json(serde_json::from_value(body).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let Json(body) = handle_health().await;
        assert_eq!(body.status, "ok");
    }

    #[tokio::test]
    async fn test_detect_with_documents() {
        let body = json!({
            "reference": "The cat sat on the mat",
            "threshold": 0.5,
            "servers": 2,
            "documents": [
                { "id": "copy.txt", "content": "The cat sat on the mat" },
                { "id": "other.txt", "content": "dog elephant fox" },
                { "id": "broken.txt" }
            ]
        });

        let Json(report) = handle_detect(request(body)).await.unwrap();

        assert_eq!(report.servers, 2);
        assert_eq!(report.total_documents, 3);
        assert_eq!(report.plagiarized.len(), 1);
        assert_eq!(report.plagiarized[0].id, "copy.txt");
        assert_eq!(report.plagiarized[0].server, Some(1));
    }

    #[tokio::test]
    async fn test_detect_with_explicit_partitions() {
        let body = json!({
            "reference": "apple banana cherry",
            "threshold": 0.1,
            "partitions": [
                [{ "id": "a", "content": "dog elephant fox" }],
                [{ "id": "b", "content": "apple banana" }]
            ]
        });

        let Json(report) = handle_detect(request(body)).await.unwrap();

        assert_eq!(report.map_phase.len(), 2);
        assert_eq!(report.plagiarized[0].id, "b");
        assert_eq!(report.plagiarized[0].server, Some(2));
    }

    #[tokio::test]
    async fn test_detect_zero_servers_uses_one() {
        let body = json!({
            "reference": "The cat sat on the mat",
            "threshold": 0.5,
            "servers": 0,
            "documents": [{ "id": "copy.txt", "content": "The cat sat on the mat" }]
        });

        let Json(report) = handle_detect(request(body)).await.unwrap();

        assert_eq!(report.servers, 1);
        assert_eq!(report.total_documents, 1);
        assert_eq!(report.plagiarized.len(), 1);
        assert_eq!(report.plagiarized[0].id, "copy.txt");
    }

    #[tokio::test]
    async fn test_detect_rejects_too_many_partitions() {
        let partitions: Vec<serde_json::Value> = (0..100).map(|_| json!([])).collect();
        let body = json!({ "reference": "text", "partitions": partitions });

        let err = handle_detect(request(body)).await.unwrap_err();
        let response = err.into_response();

        assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
    }
}
