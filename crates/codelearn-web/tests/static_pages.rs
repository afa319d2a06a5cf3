//! Integration tests for static page serving.

use axum_test::TestServer;
use codelearn_web::create_router;
use serde_json::Value;

fn test_server() -> TestServer {
    TestServer::new(create_router()).unwrap()
}

#[tokio::test]
async fn test_home_page() {
    let server = test_server();

    let response = server.get("/").await;
    response.assert_status_ok();
    assert!(response.text().contains("Welcome to Learn to Code!"));
}

#[tokio::test]
async fn test_stylesheet_content_type() {
    let server = test_server();

    let response = server.get("/styles.css").await;
    response.assert_status_ok();

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/css"), "got {content_type}");
}

#[tokio::test]
async fn test_topic_route_serves_study_guide() {
    let server = test_server();

    let response = server.get("/topic/react").await;
    response.assert_status_ok();
    assert!(response.text().contains("Study Guide"));
}

#[tokio::test]
async fn test_unknown_path_falls_back_to_home() {
    let server = test_server();

    let response = server.get("/about").await;
    response.assert_status_ok();
    assert!(response.text().contains("Welcome to Learn to Code!"));
}

#[tokio::test]
async fn test_health_check() {
    let server = test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "codelearn-web");
}
