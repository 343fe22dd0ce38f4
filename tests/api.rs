//! In-process router tests with a mock completion provider.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use resort_search_api::api::AppState;
use resort_search_api::app;
use resort_search_api::config::{AppConfig, Environment};
use resort_search_api::provider::{CompletionProvider, MockProvider};
use resort_search_api::storage::StaticResortStore;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const ADMIN_TOKEN: &str = "test-admin-token";

fn test_app(provider: MockProvider, environment: Environment) -> Router {
    let config = AppConfig {
        openai_api_key: "test-key".to_string(),
        openai_base_url: "http://localhost:1".to_string(),
        openai_model: "gpt-3.5-turbo".to_string(),
        admin_token: ADMIN_TOKEN.to_string(),
        port: 0,
        environment,
    };

    let provider: Arc<dyn CompletionProvider> = Arc::new(provider);

    app(AppState {
        config: Arc::new(config),
        store: Arc::new(StaticResortStore::new()),
        provider,
    })
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn empty_query_returns_400_without_calling_provider() {
    // A failing provider would turn any call into a 500, so a 400 proves
    // the provider was never reached.
    let app = test_app(MockProvider::failing(), Environment::Production);

    let (status, body) = send(
        app,
        json_request("POST", "/api/search", json!({"query": "   "})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Query cannot be empty");
}

#[tokio::test]
async fn out_of_domain_query_returns_400_without_calling_provider() {
    let app = test_app(MockProvider::failing(), Environment::Production);

    let (status, body) = send(
        app,
        json_request("POST", "/api/search", json!({"query": "hotels in Sochi"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("East Kazakhstan"));
}

#[tokio::test]
async fn in_domain_query_returns_provider_result() {
    let app = test_app(
        MockProvider::with_response("Zaisan has four resorts"),
        Environment::Production,
    );

    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/search",
            json!({"query": "resorts on lake Zaisan", "context": "all resort info"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["result"], "Zaisan has four resorts");
    assert_eq!(body["query"], "resorts on lake Zaisan");
}

#[tokio::test]
async fn provider_failure_suppresses_detail_in_production() {
    let app = test_app(MockProvider::failing(), Environment::Production);

    let (status, body) = send(
        app,
        json_request("POST", "/api/search", json!({"query": "fishing on Irtysh"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error processing the request");
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn provider_failure_exposes_detail_in_development() {
    let app = test_app(MockProvider::failing(), Environment::Development);

    let (status, body) = send(
        app,
        json_request("POST", "/api/search", json!({"query": "fishing on Irtysh"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].as_str().unwrap().contains("network error"));
}

#[tokio::test]
async fn listing_is_idempotent() {
    let app = test_app(MockProvider::failing(), Environment::Production);

    let (status_a, body_a) = send(
        app.clone(),
        Request::builder()
            .uri("/api/resorts")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    let (status_b, body_b) = send(
        app,
        Request::builder()
            .uri("/api/resorts")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_b, StatusCode::OK);
    assert_eq!(body_a, body_b);
    assert_eq!(body_a["success"], true);
    assert_eq!(
        body_a["count"].as_u64().unwrap() as usize,
        body_a["resorts"].as_array().unwrap().len()
    );
}

#[tokio::test]
async fn add_resort_without_token_returns_401_regardless_of_body() {
    let app = test_app(MockProvider::failing(), Environment::Production);

    // Garbage body: the token check must win over body validation.
    let request = Request::builder()
        .method("POST")
        .uri("/api/resorts")
        .header("content-type", "application/json")
        .body(Body::from("not even json"))
        .unwrap();

    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized access");
}

#[tokio::test]
async fn add_resort_with_wrong_token_returns_401() {
    let app = test_app(MockProvider::failing(), Environment::Production);

    let request = Request::builder()
        .method("POST")
        .uri("/api/resorts")
        .header("content-type", "application/json")
        .header("x-admin-token", "wrong")
        .body(Body::from(valid_resort_payload().to_string()))
        .unwrap();

    let (status, _) = send(app, request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn add_resort_with_non_numeric_coordinates_returns_400() {
    let app = test_app(MockProvider::failing(), Environment::Production);

    let mut payload = valid_resort_payload();
    payload["lat"] = json!("47.48");

    let request = Request::builder()
        .method("POST")
        .uri("/api/resorts")
        .header("content-type", "application/json")
        .header("x-admin-token", ADMIN_TOKEN)
        .body(Body::from(payload.to_string()))
        .unwrap();

    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn add_resort_with_valid_payload_returns_201_and_echoes_fields() {
    let app = test_app(MockProvider::failing(), Environment::Production);

    let request = Request::builder()
        .method("POST")
        .uri("/api/resorts")
        .header("content-type", "application/json")
        .header("x-admin-token", ADMIN_TOKEN)
        .body(Body::from(valid_resort_payload().to_string()))
        .unwrap();

    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Resort added successfully");

    let resort = &body["resort"];
    assert_eq!(resort["name"], "Alakol Beach Resort");
    assert_eq!(resort["type"], "Resort complex");
    assert_eq!(resort["location"], "Lake Alakol, East Kazakhstan Region");
    assert_eq!(resort["lat"], 46.12);
    assert_eq!(resort["lng"], 81.55);
    assert_eq!(resort["services"], json!(["Hotel", "Beach"]));
    assert!(resort["id"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn writes_are_not_observable_by_reads() {
    let app = test_app(MockProvider::failing(), Environment::Production);

    let (_, before) = send(
        app.clone(),
        Request::builder()
            .uri("/api/resorts")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/resorts")
        .header("content-type", "application/json")
        .header("x-admin-token", ADMIN_TOKEN)
        .body(Body::from(valid_resort_payload().to_string()))
        .unwrap();
    let (status, _) = send(app.clone(), request).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, after) = send(
        app,
        Request::builder()
            .uri("/api/resorts")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(before, after);
}

#[tokio::test]
async fn unmatched_route_returns_404() {
    let app = test_app(MockProvider::failing(), Environment::Production);

    let (status, body) = send(
        app,
        Request::builder()
            .uri("/api/unknown")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Route not found");
}

#[tokio::test]
async fn health_reports_catalog_size() {
    let app = test_app(MockProvider::failing(), Environment::Production);

    let (status, body) = send(
        app,
        Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["resorts"].as_u64().unwrap() > 0);
}

fn valid_resort_payload() -> Value {
    json!({
        "name": "Alakol Beach Resort",
        "type": "Resort complex",
        "location": "Lake Alakol, East Kazakhstan Region",
        "lat": 46.12,
        "lng": 81.55,
        "description": "Beach resort on the northern shore of Lake Alakol",
        "water": "Lake Alakol",
        "services": ["Hotel", "Beach"],
        "season": "June - August"
    })
}
