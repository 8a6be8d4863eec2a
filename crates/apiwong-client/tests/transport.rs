//! Transport-level tests for the core `request` operation with mocked HTTP:
//! URL/query construction on the wire, headers, and response normalization.

use apiwong_client::{ApiwongClient, ApiwongError, Config, RequestOptions};
use reqwest::Method;
use serde_json::{json, Value};
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiwongClient {
    ApiwongClient::with_config(Config::default().with_base_url(server.uri()))
}

#[tokio::test]
async fn resolves_to_data_field_on_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/thing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "success",
            "data": {"id": 1},
            "timestamp": 1700000000
        })))
        .mount(&server)
        .await;

    let out = client_for(&server)
        .request("/api/thing", RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(out, json!({"id": 1}));
}

#[tokio::test]
async fn returns_whole_payload_when_data_is_absent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "ok"
        })))
        .mount(&server)
        .await;

    let out = client_for(&server)
        .request("/api/thing", RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(out, json!({"code": 200, "message": "ok"}));
}

#[tokio::test]
async fn non_json_success_body_resolves_to_null() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
        .mount(&server)
        .await;

    let out = client_for(&server)
        .request("/api/ping", RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(out, Value::Null);
}

#[tokio::test]
async fn envelope_code_failure_rejects_with_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 500,
            "message": "bad"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .request("/api/thing", RequestOptions::default())
        .await
        .unwrap_err();
    match err {
        ApiwongError::Api { code, ref message } => {
            assert_eq!(code, 500);
            assert_eq!(message, "bad");
        }
        ref other => panic!("expected api error, got {other:?}"),
    }
    assert!(err.to_string().contains("bad"));
}

#[tokio::test]
async fn transport_failure_without_json_uses_status_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .request("/api/thing", RequestOptions::default())
        .await
        .unwrap_err();
    match err {
        ApiwongError::Transport { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn transport_failure_prefers_envelope_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 400,
            "message": "missing name"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .request("/api/thing", RequestOptions::default())
        .await
        .unwrap_err();
    match err {
        ApiwongError::Transport { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "missing name");
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn bearer_token_is_attached_when_given() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/secure"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .request("/api/secure", RequestOptions::default().token("abc"))
        .await
        .unwrap();
}

#[tokio::test]
async fn no_token_means_no_authorization_header() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
        .mount(&server)
        .await;

    client_for(&server)
        .request("/api/open", RequestOptions::default())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn per_request_token_overrides_client_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("authorization", "Bearer override"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .with_token("default")
        .request("/api/secure", RequestOptions::default().token("override"))
        .await
        .unwrap();
}

#[tokio::test]
async fn null_and_empty_params_are_omitted_on_the_wire() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
        .mount(&server)
        .await;

    client_for(&server)
        .request(
            "/api/items",
            RequestOptions::default()
                .param("a", 1)
                .param("b", Value::Null)
                .param("c", "")
                .param("d", "x"),
        )
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("a=1&d=x"));
}

#[tokio::test]
async fn absent_params_leave_no_query_string() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
        .mount(&server)
        .await;

    client_for(&server)
        .request("/api/items", RequestOptions::default())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
    assert_eq!(requests[0].url.path(), "/api/items");
}

#[tokio::test]
async fn method_defaults_to_get_and_body_is_sent_as_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/items"))
        .and(body_json(json!({"name": "nightly"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .request("/api/items", RequestOptions::default())
        .await
        .unwrap();
    client
        .request(
            "/api/items",
            RequestOptions::default()
                .method(Method::POST)
                .body(json!({"name": "nightly"})),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn content_type_is_always_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .request("/api/items", RequestOptions::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn identical_calls_each_hit_the_server() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "data": [1, 2, 3]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client
        .request("/api/items", RequestOptions::default())
        .await
        .unwrap();
    let second = client
        .request("/api/items", RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn base_url_trailing_slash_is_tolerated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        ApiwongClient::with_config(Config::default().with_base_url(format!("{}/", server.uri())));
    client
        .request("/api/items", RequestOptions::default())
        .await
        .unwrap();
}
