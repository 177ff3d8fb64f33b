//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Application routes are nested under `/api/`.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the API router.
///
/// CORS is permissive: the web front end is served from another origin.
pub fn api_router(ctx: ApiContext) -> Router {
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/agent/ask", post(endpoints::agent::ask))
        .route("/doctors", get(endpoints::doctors::list))
        .with_state(ctx);

    Router::new()
        .route("/", get(endpoints::health::banner))
        .nest("/api", api)
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::pipeline::triage::{
        DoctorRecord, MockLlmClient, StaticDirectory, TriageOrchestrator,
    };

    fn doctor(name: &str, specialization: &str) -> DoctorRecord {
        DoctorRecord {
            name: name.into(),
            specialization: specialization.into(),
            hospital: "Apollo".into(),
            available: true,
            availability_time: vec![],
        }
    }

    fn test_ctx(llm: MockLlmClient) -> ApiContext {
        let directory = StaticDirectory::new(vec![
            doctor("Dr. Mehta", "Cardiologist"),
            doctor("Dr. A", "General Physician"),
        ]);
        ApiContext::new(TriageOrchestrator::new(Arc::new(llm), Arc::new(directory)))
    }

    fn ask_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/agent/ask")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn response_json(response: axum::http::Response<Body>) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 65536)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn root_banner() {
        let app = api_router(test_ctx(MockLlmClient::unavailable()));
        let response = app.oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"AutoMediCare Backend is running!");
    }

    #[tokio::test]
    async fn health_response_shape() {
        let app = api_router(test_ctx(MockLlmClient::unavailable()));
        let response = app.oneshot(get_request("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["ok"], true);
        assert!(json["version"].is_string());
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn ask_rejects_empty_text() {
        let app = api_router(test_ctx(MockLlmClient::unavailable()));
        let response = app.oneshot(ask_request(r#"{"text": ""}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
        assert_eq!(json["error"]["message"], "No text provided");
    }

    #[tokio::test]
    async fn ask_rejects_missing_fields() {
        let app = api_router(test_ctx(MockLlmClient::unavailable()));
        let response = app.oneshot(ask_request("{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn ask_accepts_prompt_alias() {
        let app = api_router(test_ctx(MockLlmClient::unavailable()));
        let response = app
            .oneshot(ask_request(r#"{"prompt": "mild headache since morning"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Model down: generic triage, never an error.
        let json = response_json(response).await;
        assert_eq!(json["category"], "General");
        assert_eq!(json["urgency"], "Low");
        assert_eq!(json["isEmergency"], false);
        assert_eq!(json["suggestedDoctor"]["name"], "Dr. A");
        assert_eq!(json["medicalAdvice"], "");
    }

    #[tokio::test]
    async fn ask_response_shape() {
        let app = api_router(test_ctx(MockLlmClient::unavailable()));
        let response = app
            .oneshot(ask_request(r#"{"message": "cough"}"#))
            .await
            .unwrap();
        let json = response_json(response).await;

        for key in [
            "category",
            "urgency",
            "precaution",
            "precautions",
            "medicalAdvice",
            "suggestedDoctor",
            "isEmergency",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        for key in ["name", "specialty", "hospital", "available"] {
            assert!(json["suggestedDoctor"].get(key).is_some(), "missing doctor key {key}");
        }
        assert!(json.get("reasoning").is_none());
    }

    #[tokio::test]
    async fn ask_chest_pain_is_emergency() {
        let llm = MockLlmClient::with_texts(&[
            r#"{"category": "Emergency", "urgencyLevel": "High", "precautions": "Sit down and stay calm",
                "symptoms": ["chest pain", "shortness of breath"], "doctorType": "Cardiologist",
                "reasoning": "Cardiac warning signs"}"#,
            "Call emergency services now.",
        ]);
        let app = api_router(test_ctx(llm));
        let response = app
            .oneshot(ask_request(
                r#"{"text": "I have chest pain and shortness of breath"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["isEmergency"], true);
        assert_eq!(json["suggestedDoctor"]["specialty"], "Cardiologist");
        assert_eq!(json["suggestedDoctor"]["name"], "Dr. Mehta");
        assert_eq!(json["precaution"], "Sit down and stay calm");
        assert_eq!(json["medicalAdvice"], "Call emergency services now.");
    }

    #[tokio::test]
    async fn doctors_lists_directory() {
        let app = api_router(test_ctx(MockLlmClient::unavailable()));
        let response = app.oneshot(get_request("/api/doctors")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        let doctors = json.as_array().unwrap();
        assert_eq!(doctors.len(), 2);
        assert_eq!(doctors[0]["specialization"], "Cardiologist");
        assert_eq!(doctors[1]["name"], "Dr. A");
    }

    #[tokio::test]
    async fn not_found_for_unknown_route() {
        let app = api_router(test_ctx(MockLlmClient::unavailable()));
        let response = app.oneshot(get_request("/api/appointments")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let app = api_router(test_ctx(MockLlmClient::unavailable()));
        let req = Request::builder()
            .method("GET")
            .uri("/api/health")
            .header("Origin", "http://localhost:5173")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }
}
