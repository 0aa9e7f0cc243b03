//! Client tests against a wiremock server.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{ChatClient, ChatError, reply_text};
use crate::core::config::Config;

fn config_for(uri: &str) -> Config {
    Config {
        endpoint: format!("{}/chat", uri).parse().expect("server url"),
        show_timestamps: true,
    }
}

#[tokio::test]
async fn posts_json_message_and_returns_response_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(header("content-type", "application/json"))
        .and(header("x-requested-with", "XMLHttpRequest"))
        .and(body_json(json!({"message": "hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "Hi **there**"})))
        .expect(1)
        .mount(&server)
        .await;
    let client = ChatClient::new(&config_for(&server.uri())).unwrap();

    let reply = client.send("hello").await.unwrap();

    assert_eq!(reply, "Hi **there**");
}

#[tokio::test]
async fn non_json_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;
    let client = ChatClient::new(&config_for(&server.uri())).unwrap();

    let err = client.send("hello").await.unwrap_err();

    assert!(matches!(err, ChatError::InvalidResponse));
    assert_eq!(err.to_string(), "Invalid JSON response");
}

#[tokio::test]
async fn error_status_body_is_still_displayed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Message cannot be empty."})),
        )
        .mount(&server)
        .await;
    let client = ChatClient::new(&config_for(&server.uri())).unwrap();

    let reply = client.send(" ").await.unwrap();

    assert_eq!(reply, "{\n  \"detail\": \"Message cannot be empty.\"\n}");
}

#[tokio::test]
async fn unreachable_endpoint_is_transport_error() {
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };
    let client = ChatClient::new(&config_for(&uri)).unwrap();

    let err = client.send("hello").await.unwrap_err();

    assert!(matches!(err, ChatError::Transport(_)));
}

#[test]
fn reply_without_response_field_is_pretty_json() {
    let text = reply_text(r#"{"answer": 42}"#).unwrap();
    assert_eq!(text, "{\n  \"answer\": 42\n}");
}

#[test]
fn non_string_response_field_is_pretty_json() {
    let text = reply_text(r#"{"response": ["a"]}"#).unwrap();
    assert_eq!(text, "{\n  \"response\": [\n    \"a\"\n  ]\n}");
}
