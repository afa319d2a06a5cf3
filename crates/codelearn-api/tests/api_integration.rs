//! Integration tests for the REST API surface.

use axum::http::StatusCode;
use axum_test::TestServer;
use codelearn_api::error::TOPIC_NOT_FOUND_BODY;
use codelearn_api::{create_router, AppState};
use codelearn_core::{Topic, TopicDirectory};
use serde_json::json;

fn test_server() -> TestServer {
    let state = AppState::new(TopicDirectory::builtin());
    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn test_list_topics_returns_builtin_set() {
    let server = test_server();

    let response = server.get("/api/topics").await;
    response.assert_status_ok();

    let topics: Vec<Topic> = response.json();
    assert_eq!(topics.len(), 2);
    assert_eq!(topics[0].id, 1);
    assert_eq!(topics[0].name, "C++");
    assert_eq!(topics[1].id, 2);
    assert_eq!(topics[1].name, "React");
}

#[tokio::test]
async fn test_list_topics_is_a_raw_array() {
    let server = test_server();

    let response = server.get("/api/topics").await;
    response.assert_status_ok();
    response.assert_json(&json!([
        {
            "id": 1,
            "name": "C++",
            "description": "Learn C++ from basics to advanced.",
        },
        {
            "id": 2,
            "name": "React",
            "description": "Learn React for building UIs.",
        },
    ]));
}

#[tokio::test]
async fn test_get_topic_found() {
    let server = test_server();

    let response = server.get("/api/topics/1").await;
    response.assert_status_ok();

    let topic: Topic = response.json();
    assert_eq!(topic.id, 1);
    assert_eq!(topic.name, "C++");
    assert_eq!(topic.description, "Learn C++ from basics to advanced.");
}

#[tokio::test]
async fn test_get_topic_unknown_id_is_404() {
    let server = test_server();

    let response = server.get("/api/topics/9999").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.text(), TOPIC_NOT_FOUND_BODY);
}

#[tokio::test]
async fn test_get_topic_non_numeric_id_is_404() {
    let server = test_server();

    let response = server.get("/api/topics/abc").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.text(), TOPIC_NOT_FOUND_BODY);
}

#[tokio::test]
async fn test_every_listed_topic_resolves() {
    let server = test_server();

    let topics: Vec<Topic> = server.get("/api/topics").await.json();
    for topic in topics {
        let response = server.get(&format!("/api/topics/{}", topic.id)).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Topic>(), topic);
    }
}

#[tokio::test]
async fn test_health_stub() {
    let server = test_server();

    let response = server.get("/api/test").await;
    response.assert_status_ok();
    response.assert_json(&json!({
        "message": "Backend server is running!",
    }));
}

#[tokio::test]
async fn test_repeated_calls_are_idempotent() {
    let server = test_server();

    let first = server.get("/api/topics").await.json::<Vec<Topic>>();
    let second = server.get("/api/topics").await.json::<Vec<Topic>>();
    assert_eq!(first, second);
}
