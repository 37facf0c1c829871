//! End-to-end tests for the `Dashserv` entry point.

use dashserv::{ClientConfig, Dashserv, ErrorKind};
use serde_json::json;
use wiremock::matchers::{bearer_token, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> Dashserv {
    Dashserv::builder("integration-token")
        .with_base_url(format!("{}/v1/product", server.uri()))
        .with_http_config(ClientConfig::new().with_user_agent("dashserv-tests/1.0"))
        .build()
        .unwrap()
}

#[tokio::test]
async fn requests_carry_credentials_and_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/product/vserver/abc-123/status"))
        .and(bearer_token("integration-token"))
        .and(header("accept", "application/json"))
        .and(header("user-agent", "dashserv-tests/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"status": "running", "locked": false}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let status = api.vserver().get_status("abc-123").await.unwrap();
    assert_eq!(status["status"], "running");
    assert_eq!(status["locked"], false);
}

#[tokio::test]
async fn rejected_token_surfaces_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/product/vserver"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "data": "Unauthenticated."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let err = api.vserver().list_servers().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Provider);
    assert_eq!(err.cause(), Some(&json!("Unauthenticated.")));
}

#[tokio::test]
async fn find_server_by_name_then_start_it() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/product/vserver"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                {"uuid": "11111111-aaaa", "name": "web-01"},
                {"uuid": "22222222-bbbb", "name": "milrato"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/product/vserver/22222222-bbbb/actions/start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": "task-7f3a"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let servers = api.vserver().list_servers().await.unwrap();
    let uuid = servers
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["name"] == "milrato")
        .map(|s| s["uuid"].clone())
        .unwrap();

    let task = api.vserver().start(uuid).await.unwrap();
    assert_eq!(task, json!("task-7f3a"));
}

#[tokio::test]
async fn validation_happens_before_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let err = api
        .vserver()
        .get_usage_graphs("abc-123", "fortnight")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}
