//! End-to-end tests of the facade over the HTTP transport, against a mock server.

mod integration;

use integration::mock_server::MockServerFixture;
use luxiq_sdk::transport::{AgentTransport, HttpTransport, TransportError};
use luxiq_sdk::{Agent, CreateAgentRequest, ResolvedConfig, SdkConfig};
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_create_agent_returns_service_object_unchanged() {
    let mut fixture = MockServerFixture::new().await;
    let returned = r#"{"name":"bot1","id":"agt_1","description":"helper","createdAt":"2024-05-01T00:00:00Z","status":"active"}"#;
    let mock = fixture
        .mock_json_with_body(
            "POST",
            "/api/agents",
            json!({"name": "bot1", "description": "helper"}),
            201,
            returned,
        )
        .await;

    let agent = fixture
        .sdk()
        .create_agent(&CreateAgentRequest::new("bot1").description("helper"))
        .await
        .expect("create should succeed");

    mock.assert_async().await;
    let expected: Agent = serde_json::from_str(returned).unwrap();
    assert_eq!(agent, expected);
    assert_eq!(agent.field("status"), Some(&json!("active")));
}

#[tokio::test]
async fn test_invalid_create_payload_is_not_sent() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_never_called("POST", "/api/agents").await;

    let err = fixture
        .sdk()
        .create_agent(&CreateAgentRequest::new(""))
        .await
        .unwrap_err();

    assert!(err.is_operation());
    assert!(err.to_string().starts_with("Failed to create agent: "));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_agents_is_repeatable() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("GET", "/api/agents")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"name":"bot1"},{"name":"bot2","model":"gpt-4o"}]"#)
        .expect(2)
        .create_async()
        .await;

    let sdk = fixture.sdk();
    let first = sdk.list_agents().await.unwrap();
    let second = sdk.list_agents().await.unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(first[1].str_field("model"), Some("gpt-4o"));
    assert_eq!(first, second);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_agents_accepts_wrapped_body() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("GET", "/api/agents", 200, r#"{"agents":[{"name":"bot1"}]}"#)
        .await;

    let agents = fixture.sdk().list_agents().await.unwrap();
    assert_eq!(agents, vec![Agent::new("bot1")]);
}

#[tokio::test]
async fn test_get_missing_agent_is_none() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("GET", "/api/agents/missing", 404, r#"{"error":"Agent not found"}"#)
        .await;

    let agent = fixture.sdk().get_agent_by_name("missing").await.unwrap();
    assert_eq!(agent, None);
}

#[tokio::test]
async fn test_get_agent_by_name() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("GET", "/api/agents/bot1", 200, r#"{"name":"bot1","personality":"calm"}"#)
        .await;

    let agent = fixture.sdk().get_agent_by_name("bot1").await.unwrap();
    assert_eq!(
        agent.as_ref().and_then(|a| a.str_field("personality")),
        Some("calm")
    );
}

#[tokio::test]
async fn test_get_agent_with_empty_name_fails_without_request() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_never_called("GET", Matcher::Any).await;

    let err = fixture.sdk().get_agent_by_name("").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to get agent: Agent name must be a non-empty string"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_chat_with_empty_fields_fails_without_request() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_never_called("POST", Matcher::Any).await;
    let sdk = fixture.sdk();

    for (agent_name, message) in [("", "hi"), ("bot1", "")] {
        let err = sdk.chat_with_agent(agent_name, message).await.unwrap_err();
        assert!(err.is_operation());
        assert!(err.to_string().starts_with("Failed to chat with agent: "));
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_agent_passes_untyped_fields_through() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(
            "POST",
            "/api/agents",
            201,
            r#"{"name":"bot1","id":7,"description":null}"#,
        )
        .await;

    let agent = fixture
        .sdk()
        .create_agent(&CreateAgentRequest::new("bot1"))
        .await
        .expect("non-string service fields must not fail the call");

    assert_eq!(agent.field("id"), Some(&json!(7)));
    assert_eq!(agent.field("description"), Some(&serde_json::Value::Null));
    assert_eq!(
        serde_json::to_value(&agent).unwrap(),
        json!({"name": "bot1", "id": 7, "description": null})
    );
}

#[tokio::test]
async fn test_chat_with_agent() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_json_with_body(
            "POST",
            "/api/agents/bot1/chat",
            json!({"message": "Hello"}),
            200,
            r#"{"response":"Hi there!"}"#,
        )
        .await;

    let reply = fixture.sdk().chat_with_agent("bot1", "Hello").await.unwrap();
    assert_eq!(reply, "Hi there!");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_message_is_wrapped() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("POST", "/api/agents/bot1/chat", 500, r#"{"error":"boom"}"#)
        .await;

    let err = fixture
        .sdk()
        .chat_with_agent("bot1", "Hello")
        .await
        .unwrap_err();
    assert!(err.is_operation());
    assert_eq!(err.to_string(), "Failed to chat with agent: boom");
}

#[tokio::test]
async fn test_unauthorized_list() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json("GET", "/api/agents", 401, r#"{"message":"Invalid API key"}"#)
        .await;

    let err = fixture.sdk().list_agents().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to list agents: Invalid API key");
}

#[tokio::test]
async fn test_transport_reports_status_and_decode_errors() {
    let mut fixture = MockServerFixture::new().await;
    let _bad_gateway = fixture
        .mock_json("GET", "/api/agents", 502, "")
        .await;
    let _garbage = fixture
        .mock_json("GET", "/api/agents/bot1", 200, "not json")
        .await;

    let config = ResolvedConfig::resolve_with(
        Some(
            &SdkConfig::new()
                .api_key(integration::mock_server::TEST_API_KEY)
                .api_url(&fixture.base_url),
        ),
        |_| None,
    )
    .unwrap();
    let transport = HttpTransport::new(&config).unwrap();

    match transport.list_agents().await {
        Err(TransportError::Status { status, message }) => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("expected status error, got {:?}", other),
    }

    assert!(matches!(
        transport.get_agent_by_name("bot1").await,
        Err(TransportError::Decode(_))
    ));
}
