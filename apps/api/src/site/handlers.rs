//! Axum route handler for the site builder.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::site::renderer::{current_year, render_site};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateSiteResponse {
    pub success: bool,
    pub url: String,
}

/// POST /api/generate-site
///
/// Body: `{"prompt": "<free text about the practice>"}`.
/// Pipeline: extract → render → publish. Returns the live URL.
pub async fn handle_generate_site(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateSiteResponse>, AppError> {
    let Json(body) = body.map_err(|e| AppError::Validation(e.body_text()))?;
    let prompt = require_prompt(&body)?;

    info!("Generating site from prompt ({} chars)", prompt.len());
    let record = state.extractor.extract(prompt).await?;

    let html = render_site(&record, current_year())?;
    info!("Rendered site for {:?} ({} bytes)", record.doctor_details.name, html.len());

    let url = state.publisher.publish(&html).await?;
    info!("Site published at {url}");

    Ok(Json(GenerateSiteResponse { success: true, url }))
}

fn require_prompt(body: &Value) -> Result<&str, AppError> {
    match body.get("prompt").and_then(Value::as_str) {
        Some(prompt) if !prompt.trim().is_empty() => Ok(prompt),
        _ => Err(AppError::Validation("prompt is required".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use tower::ServiceExt;

    use crate::publish::{PublishError, Publisher};
    use crate::routes::build_router;
    use crate::site::extractor::tests::ScriptedModel;
    use crate::site::extractor::SiteExtractor;
    use crate::state::AppState;

    /// Remembers every page it was asked to publish.
    struct RecordingPublisher {
        result: Result<String, &'static str>,
        pages: Mutex<Vec<String>>,
    }

    impl RecordingPublisher {
        fn ok(url: &str) -> Self {
            Self {
                result: Ok(url.to_string()),
                pages: Mutex::new(Vec::new()),
            }
        }

        fn missing_config() -> Self {
            Self {
                result: Err("NETLIFY_AUTH_TOKEN"),
                pages: Mutex::new(Vec::new()),
            }
        }

        fn page_count(&self) -> usize {
            self.pages.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Publisher for RecordingPublisher {
        async fn publish(&self, html: &str) -> Result<String, PublishError> {
            self.pages.lock().unwrap().push(html.to_string());
            self.result.clone().map_err(PublishError::MissingConfig)
        }
    }

    const VALID_REPLY: &str = r#"{
        "websiteNiche": "Cardiology",
        "doctorDetails": {"name": "Dr. Asha Rao", "specialization": ["Heart Failure"]},
        "pageLinks": ["about-us"],
        "faqs": [{"question": "Q1", "answer": "A1"}]
    }"#;

    fn app(model: Arc<ScriptedModel>, publisher: Arc<RecordingPublisher>) -> Router {
        build_router(AppState {
            extractor: Arc::new(SiteExtractor::new(model)),
            publisher,
        })
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/generate-site")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_successful_run_returns_url() {
        let model = Arc::new(ScriptedModel::new(VALID_REPLY));
        let publisher = Arc::new(RecordingPublisher::ok("https://abc--site.netlify.app"));

        let response = app(model.clone(), publisher.clone())
            .oneshot(post_json(r#"{"prompt": "Dr. Asha Rao is a cardiologist"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["url"], "https://abc--site.netlify.app");

        assert_eq!(model.call_count(), 1);
        let pages = publisher.pages.lock().unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].contains("Dr. Asha Rao"));
        assert!(pages[0].contains(r#"<a href="/about-us">about us</a>"#));
    }

    #[tokio::test]
    async fn test_missing_prompt_is_rejected_before_upstream_calls() {
        let model = Arc::new(ScriptedModel::new(VALID_REPLY));
        let publisher = Arc::new(RecordingPublisher::ok("https://x"));

        for body in [r#"{}"#, r#"{"prompt": ""}"#, r#"{"prompt": 42}"#, "not json"] {
            let response = app(model.clone(), publisher.clone())
                .oneshot(post_json(body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
            let json: serde_json::Value =
                serde_json::from_str(&body_string(response).await).unwrap();
            assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        }

        assert_eq!(model.call_count(), 0);
        assert_eq!(publisher.page_count(), 0);
    }

    #[tokio::test]
    async fn test_unparseable_reply_returns_raw_text() {
        let reply = "Here is your website JSON: {oops";
        let model = Arc::new(ScriptedModel::new(reply));
        let publisher = Arc::new(RecordingPublisher::ok("https://x"));

        let response = app(model, publisher.clone())
            .oneshot(post_json(r#"{"prompt": "Dr. Rao"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        assert_eq!(body_string(response).await, reply);
        assert_eq!(publisher.page_count(), 0);
    }

    #[tokio::test]
    async fn test_record_without_required_fields_is_internal_error() {
        let model = Arc::new(ScriptedModel::new(r#"{"doctorDetails": {"name": "Dr. Rao"}}"#));
        let publisher = Arc::new(RecordingPublisher::ok("https://x"));

        let response = app(model, publisher.clone())
            .oneshot(post_json(r#"{"prompt": "Dr. Rao"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["error"]["code"], "INVALID_SITE_RECORD");
        assert_eq!(publisher.page_count(), 0);
    }

    #[tokio::test]
    async fn test_wrong_shape_reply_is_json_record_error() {
        let replies = [
            r#"{"websiteNiche": "ENT", "doctorDetails": {"name": "Dr. Rao"}, "pageLinks": "x"}"#,
            r#"{"websiteNiche": 5, "doctorDetails": {"name": "Dr. Rao"}}"#,
            "[]",
        ];

        for reply in replies {
            let model = Arc::new(ScriptedModel::new(reply));
            let publisher = Arc::new(RecordingPublisher::ok("https://x"));

            let response = app(model, publisher.clone())
                .oneshot(post_json(r#"{"prompt": "Dr. Rao"}"#))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "reply: {reply}");
            assert!(response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("application/json"));
            let json: serde_json::Value =
                serde_json::from_str(&body_string(response).await).unwrap();
            assert_eq!(json["error"]["code"], "INVALID_SITE_RECORD", "reply: {reply}");
            assert_eq!(publisher.page_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_publish_failure_is_generic_internal_error() {
        let model = Arc::new(ScriptedModel::new(VALID_REPLY));
        let publisher = Arc::new(RecordingPublisher::missing_config());

        let response = app(model, publisher)
            .oneshot(post_json(r#"{"prompt": "Dr. Rao"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["error"]["code"], "PUBLISH_ERROR");
        assert_eq!(json["error"]["message"], "Failed to publish the website");
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let model = Arc::new(ScriptedModel::new(VALID_REPLY));
        let publisher = Arc::new(RecordingPublisher::ok("https://x"));

        let response = app(model, publisher)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "medsite");
    }
}
