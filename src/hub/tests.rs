//! Tests for the LangSmith client against a mock hub.

use super::client::host_url;
use super::*;
use crate::config::{API_KEY_VAR, ENDPOINT_VAR, HubConfig, WORKSPACE_ID_VAR};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(endpoint: &str, workspace: Option<&str>) -> HubConfig {
    let endpoint = endpoint.to_string();
    let workspace = workspace.map(str::to_string);
    HubConfig::from_lookup(move |key| match key {
        API_KEY_VAR => Some("lsv2_sk_test".to_string()),
        ENDPOINT_VAR => Some(endpoint.clone()),
        WORKSPACE_ID_VAR => workspace.clone(),
        _ => None,
    })
    .unwrap()
}

fn options(description: &str) -> PushOptions {
    PushOptions {
        description: Some(description.to_string()),
    }
}

/// Run the blocking client off the async test runtime.
async fn push(
    config: HubConfig,
    name: &str,
    prompt: PromptTemplate,
    options: PushOptions,
) -> Result<PushReceipt, HubError> {
    let name = name.to_string();
    tokio::task::spawn_blocking(move || {
        let client = LangSmithClient::new(&config)?;
        client.push_prompt(&name, &prompt, &options)
    })
    .await
    .unwrap()
}

async fn mount_settings(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "org-1"})))
        .mount(server)
        .await;
}

#[tokio::test]
async fn creates_missing_prompt_and_commits() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/-/demo"))
        .and(header("x-api-key", "lsv2_sk_test"))
        .and(header("X-Tenant-Id", "ws-1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/"))
        .and(body_partial_json(json!({
            "repo_handle": "demo",
            "description": "A demo prompt",
            "readme": "",
            "tags": [],
            "is_public": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/commits/-/demo/"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"commits": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/commits/-/demo"))
        .and(body_partial_json(json!({
            "manifest": {
                "type": "constructor",
                "kwargs": {"template": "Hi {name}", "input_variables": ["name"]}
            }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"commit": {"commit_hash": "0123456789abcdef"}})),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_settings(&server).await;

    let prompt = PromptTemplate::new("Hi {name}", ["name"]).unwrap();
    let receipt = push(
        config_for(&server.uri(), Some("ws-1")),
        "demo",
        prompt,
        options("A demo prompt"),
    )
    .await
    .unwrap();

    assert_eq!(receipt.status, PushStatus::Committed);
    assert_eq!(receipt.commit_hash.as_deref(), Some("0123456789abcdef"));
    assert_eq!(
        receipt.url,
        format!("{}/prompts/demo/01234567?organizationId=org-1", server.uri())
    );
}

#[tokio::test]
async fn existing_prompt_is_updated_and_parented_on_latest() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/-/demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"repo_handle": "demo"})))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/repos/-/demo"))
        .and(body_partial_json(json!({"description": "Updated"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/commits/-/demo/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"commits": [{"commit_hash": "aaaaaaaaaaaa"}]})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/commits/-/demo"))
        .and(body_partial_json(json!({"parent_commit": "aaaaaaaaaaaa"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"commit": {"commit_hash": "bbbbbbbbbbbb"}})),
        )
        .expect(1)
        .mount(&server)
        .await;
    mount_settings(&server).await;

    let prompt = PromptTemplate::new("static text", Vec::<String>::new()).unwrap();
    let receipt = push(config_for(&server.uri(), None), "demo", prompt, options("Updated"))
        .await
        .unwrap();

    assert_eq!(receipt.commit_hash.as_deref(), Some("bbbbbbbbbbbb"));
    assert!(receipt.url.contains("/prompts/demo/bbbbbbbb?"));
}

#[tokio::test]
async fn conflict_on_commit_is_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/-/demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/commits/-/demo/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"commits": [{"commit_hash": "cafebabe0000"}]})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/commits/-/demo"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"detail": "Nothing to commit"})),
        )
        .mount(&server)
        .await;
    mount_settings(&server).await;

    let prompt = PromptTemplate::new("static text", Vec::<String>::new()).unwrap();
    let receipt = push(
        config_for(&server.uri(), None),
        "demo",
        prompt,
        PushOptions::default(),
    )
    .await
    .unwrap();

    assert_eq!(receipt.status, PushStatus::Unchanged);
    assert_eq!(receipt.commit_hash.as_deref(), Some("cafebabe0000"));
    assert_eq!(
        receipt.url,
        format!("{}/prompts/demo/cafebabe?organizationId=org-1", server.uri())
    );
}

#[tokio::test]
async fn empty_workspace_id_sends_no_tenant_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/-/demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/repos/-/demo"))
        .and(body_partial_json(json!({"description": "Kept"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/commits/-/demo/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"commits": []})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/commits/-/demo"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"commit": {"commit_hash": "feedface0000"}})),
        )
        .mount(&server)
        .await;
    mount_settings(&server).await;

    let prompt = PromptTemplate::new("static text", Vec::<String>::new()).unwrap();
    push(config_for(&server.uri(), Some("")), "demo", prompt, options("Kept"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(!requests.is_empty());
    for req in &requests {
        assert!(req.headers.get("x-tenant-id").is_none(), "{} {}", req.method, req.url);
        assert_eq!(req.headers.get("x-api-key").unwrap(), "lsv2_sk_test");
    }
}

#[tokio::test]
async fn auth_failure_surfaces_detail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/-/demo"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid token"})))
        .mount(&server)
        .await;

    let prompt = PromptTemplate::new("static text", Vec::<String>::new()).unwrap();
    let err = push(
        config_for(&server.uri(), None),
        "demo",
        prompt,
        PushOptions::default(),
    )
    .await
    .unwrap_err();

    match err {
        HubError::Status { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid token");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn malformed_commit_response_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/-/demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/commits/-/demo/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"commits": []})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/commits/-/demo"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let prompt = PromptTemplate::new("static text", Vec::<String>::new()).unwrap();
    let err = push(
        config_for(&server.uri(), None),
        "demo",
        prompt,
        PushOptions::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, HubError::Decode(ref msg) if msg.contains("not json")));
}

#[test]
fn unreachable_endpoint_is_transport_error() {
    let client = LangSmithClient::new(&config_for("http://127.0.0.1:1", None)).unwrap();
    let prompt = PromptTemplate::new("static text", Vec::<String>::new()).unwrap();
    let err = client
        .push_prompt("demo", &prompt, &PushOptions::default())
        .unwrap_err();
    assert!(matches!(err, HubError::Transport(_)));
}

#[test]
fn host_url_drops_api_label_and_path() {
    assert_eq!(
        host_url("https://api.smith.langchain.com"),
        "https://smith.langchain.com"
    );
    assert_eq!(
        host_url("https://eu.api.smith.langchain.com/"),
        "https://eu.smith.langchain.com"
    );
    assert_eq!(
        host_url("https://langsmith.internal.example.com/api/v1"),
        "https://langsmith.internal.example.com"
    );
    assert_eq!(host_url("http://localhost:1984/api"), "http://localhost:1984");
    assert_eq!(host_url("http://127.0.0.1:8080"), "http://127.0.0.1:8080");
}

#[test]
fn status_display() {
    assert_eq!(PushStatus::Committed.to_string(), "committed");
    assert_eq!(PushStatus::Unchanged.to_string(), "unchanged");

    let err = HubError::Status {
        status: 403,
        message: "Forbidden".to_string(),
    };
    assert_eq!(err.to_string(), "HTTP 403: Forbidden");
}
