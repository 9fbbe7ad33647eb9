pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Letters API
        .route("/api/v1/letters/generate", post(handlers::handle_generate))
        .route("/api/v1/letters/analyze", post(handlers::handle_analyze))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{LlmError, TextGenerator};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt; // for oneshot

    const LETTER: &str = "Dear Hiring Manager,\n\nI developed React dashboards used by 200 \
        customers.\n\nI managed Docker rollouts.\n\nBest regards,\nJordan";

    struct CannedGenerator(Result<&'static str, u16>);

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            match self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(status) => Err(LlmError::Api {
                    status,
                    code: Some("model_not_found".to_string()),
                    message: "The model `gpt-4` does not exist".to_string(),
                }),
            }
        }
    }

    fn app(generator: CannedGenerator) -> Router {
        build_router(AppState {
            llm: Arc::new(generator),
        })
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app(CannedGenerator(Ok(LETTER))).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_generate_returns_letter_and_analysis() {
        let body = r#"{"jobDescription": "Frontend role: React, Docker, TypeScript. React is key.", "tone": "Friendly & Conversational", "keyStrength": "Shipped a design system"}"#;
        let response = app(CannedGenerator(Ok(LETTER)))
            .oneshot(post_json("/api/v1/letters/generate", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["letterContent"], LETTER);
        let score = json["impactScore"].as_u64().unwrap();
        assert!((60..=95).contains(&score));
        assert!(json["keywords"]
            .as_array()
            .unwrap()
            .iter()
            .any(|k| k == "react"));
        assert_eq!(json["metadata"]["tone"], "Friendly & Conversational");
    }

    #[tokio::test]
    async fn test_generate_missing_description_is_400() {
        let response = app(CannedGenerator(Ok(LETTER)))
            .oneshot(post_json("/api/v1/letters/generate", r#"{"tone": "Bold & Assertive"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = json_body(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["message"], "Valid job description is required");
    }

    #[tokio::test]
    async fn test_generate_short_description_is_400() {
        let response = app(CannedGenerator(Ok(LETTER)))
            .oneshot(post_json("/api/v1/letters/generate", r#"{"jobDescription": "dev"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_maps_missing_model_to_503() {
        let body = r#"{"jobDescription": "A perfectly long job description."}"#;
        let response = app(CannedGenerator(Err(404)))
            .oneshot(post_json("/api/v1/letters/generate", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = json_body(response).await;
        assert_eq!(json["error"]["message"], "Requested AI model is not available.");
    }

    #[tokio::test]
    async fn test_analyze_scores_without_calling_provider() {
        let body = serde_json::json!({
            "jobDescription": "Frontend role: React, Docker, TypeScript.",
            "letterContent": LETTER,
        })
        .to_string();
        // A failing generator proves the provider is never touched.
        let response = app(CannedGenerator(Err(500)))
            .oneshot(post_json("/api/v1/letters/analyze", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        let score = json["impactScore"].as_u64().unwrap();
        assert!((60..=95).contains(&score));
        assert!(json["rating"].is_string());
        assert!(!json["refinementSuggestion"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_requires_letter() {
        let body = r#"{"jobDescription": "Frontend role: React, Docker.", "letterContent": "  "}"#;
        let response = app(CannedGenerator(Ok(LETTER)))
            .oneshot(post_json("/api/v1/letters/analyze", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
