pub mod health;
pub mod interviews;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::matching::handlers as matching;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume ingestion
        .route(
            "/api/v1/resumes",
            post(resume::handle_upload_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Job matching
        .route("/api/v1/match", post(matching::handle_match))
        // Chat
        .route("/api/v1/chat", post(chat::handle_chat))
        .route("/api/v1/chat/greeting", get(chat::handle_greeting))
        // Interview scheduling
        .route(
            "/api/v1/interviews",
            post(interviews::handle_schedule_interview),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::chat::rules::{ChatRouter, OPENING_GREETING};
    use crate::config::Config;
    use crate::matching::matcher::StemIntersectionMatcher;
    use crate::resume::text::fixtures::{docx_with_body, paragraph, pdf_with_pages};
    use crate::resume::text::{DOCX_MIME, PDF_MIME};
    use crate::store::memory::MemoryStore;

    const BOUNDARY: &str = "recruitbot-test-boundary";

    fn test_state(store: Arc<MemoryStore>) -> AppState {
        let matcher = Arc::new(StemIntersectionMatcher);
        AppState {
            store,
            config: Config {
                database_url: "sqlite::memory:".to_string(),
                port: 0,
                rust_log: "debug".to_string(),
                max_upload_bytes: 1024 * 1024,
            },
            matcher: matcher.clone(),
            chat: Arc::new(ChatRouter::new(matcher)),
        }
    }

    fn multipart_upload(file_name: &str, content_type: &str, bytes: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/v1/resumes")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state(Arc::default()));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_docx_upload_is_parsed_and_stored() {
        let store = Arc::new(MemoryStore::default());
        let app = build_router(test_state(store.clone()));
        let body = format!(
            "{}{}{}",
            paragraph("Jane Doe"),
            paragraph("jane.doe@example.com"),
            paragraph("Skills: Python, Docker, Kubernetes")
        );

        let response = app
            .oneshot(multipart_upload("jane.docx", DOCX_MIME, &docx_with_body(&body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = read_json(response).await;
        assert_eq!(json["candidate_id"], 1);
        assert_eq!(json["candidate"]["name"], "Jane Doe");
        assert_eq!(json["candidate"]["email"], "jane.doe@example.com");

        let stored = store.candidates.lock().unwrap();
        assert_eq!(stored.len(), 1);
        assert!(stored[0].skills.contains("python"));
        assert!(stored[0].parsed_resume.starts_with("Jane Doe\njane.doe@example.com"));
    }

    #[tokio::test]
    async fn test_pdf_upload_is_parsed() {
        let store = Arc::new(MemoryStore::default());
        let app = build_router(test_state(store.clone()));
        let pdf = pdf_with_pages(&[Some("John Smith john@smith.io SQL")]);

        let response = app
            .oneshot(multipart_upload("cv.pdf", PDF_MIME, &pdf))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = read_json(response).await;
        assert_eq!(json["candidate"]["name"], "John Smith");
        assert_eq!(store.candidates.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_upload_is_unprocessable() {
        let store = Arc::new(MemoryStore::default());
        let app = build_router(test_state(store.clone()));

        let response = app
            .oneshot(multipart_upload("cv.pdf", PDF_MIME, b"not really a pdf"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = read_json(response).await;
        assert_eq!(json["error"]["message"], "could not read resume");
        assert!(store.candidates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_upload_type() {
        let app = build_router(test_state(Arc::default()));
        let response = app
            .oneshot(multipart_upload("notes.txt", "text/plain", b"Python"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_match_endpoint() {
        let app = build_router(test_state(Arc::default()));
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/match",
                json!({
                    "candidate_skills": "python, sql",
                    "jd_text": "Looking for a Python developer with Docker experience"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        assert_eq!(json["matched_skills"], json!(["python"]));
        assert_eq!(json["match_count"], 1);
    }

    #[tokio::test]
    async fn test_upload_over_body_limit_is_payload_too_large() {
        let store = Arc::new(MemoryStore::default());
        let app = build_router(test_state(store.clone()));
        let oversized = vec![b'x'; 2 * 1024 * 1024];

        let response = app
            .oneshot(multipart_upload("cv.pdf", PDF_MIME, &oversized))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let json = read_json(response).await;
        assert_eq!(json["error"]["code"], "UPLOAD_ERROR");
        assert!(store.candidates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_match_requires_resume_before_job_description() {
        let app = build_router(test_state(Arc::default()));
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/match",
                json!({ "candidate_skills": "  ", "jd_text": "" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = read_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["message"], "Please upload your resume first.");
    }

    #[tokio::test]
    async fn test_match_requires_job_description() {
        let app = build_router(test_state(Arc::default()));
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/match",
                json!({ "candidate_skills": "python", "jd_text": "   " }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = read_json(response).await;
        assert_eq!(
            json["error"]["message"],
            "Please paste a job description to check for matches."
        );
    }

    #[tokio::test]
    async fn test_chat_endpoint_uses_faq() {
        let app = build_router(test_state(Arc::default()));
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/chat",
                json!({ "message": "what is the pay range?" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = read_json(response).await;
        assert_eq!(
            json["reply"],
            crate::chat::faq::respond("pay range").unwrap()
        );
    }

    #[tokio::test]
    async fn test_greeting() {
        let app = build_router(test_state(Arc::default()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/chat/greeting")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(read_json(response).await["reply"], OPENING_GREETING);
    }

    #[tokio::test]
    async fn test_interview_is_stored() {
        let store = Arc::new(MemoryStore::default());
        let app = build_router(test_state(store.clone()));
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/interviews",
                json!({
                    "candidate_email": "jane.doe@example.com",
                    "interview_date": "2026-10-20",
                    "interview_time": "14:30"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(read_json(response).await["interview_id"], 1);

        let stored = store.interviews.lock().unwrap();
        assert_eq!(stored[0].interview_time, "14:30");
    }
}
