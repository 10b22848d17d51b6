//! HTTP-level tests for provider backends against a wiremock server.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shortscript::{LlmConfig, LlmError, LlmRouter, ProviderError, ProviderFamily};

fn chat_reply(content: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}
        ]
    }))
}

/// Router whose every family points at the mock server.
fn router_for(server: &MockServer) -> LlmRouter {
    let mut config = LlmConfig::default();
    for family in ProviderFamily::ALL {
        config = config
            .with_base_url(family, server.uri())
            .with_api_key(family, format!("key-{}", family.as_str().to_lowercase()));
    }
    LlmRouter::from_config(&config).expect("router should build")
}

#[tokio::test]
async fn test_openai_request_shape_and_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer key-openai"))
        .and(body_json(json!({
            "model": "gpt-4-1106-preview",
            "messages": [{"role": "user", "content": "Write about owls"}]
        })))
        .respond_with(chat_reply(json!("Owls are birds.")))
        .expect(1)
        .mount(&server)
        .await;

    let text = router_for(&server).dispatch("Write about owls", "gpt4").await.unwrap();
    assert_eq!(text, "Owls are birds.");
}

#[tokio::test]
async fn test_mistral_and_groq_use_tag_models() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer key-mistral"))
        .and(body_json(json!({
            "model": "mistral-small-latest",
            "messages": [{"role": "user", "content": "p"}]
        })))
        .respond_with(chat_reply(json!("from mistral")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer key-groq"))
        .and(body_json(json!({
            "model": "llama3-70b-8192",
            "messages": [{"role": "user", "content": "p"}]
        })))
        .respond_with(chat_reply(json!("from groq")))
        .expect(1)
        .mount(&server)
        .await;

    let router = router_for(&server);
    assert_eq!(router.dispatch("p", "mistral-small-latest").await.unwrap(), "from mistral");
    assert_eq!(router.dispatch("p", "groq-llama3-70b-8192").await.unwrap(), "from groq");
}

#[tokio::test]
async fn test_g4f_sends_no_auth_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(chat_reply(json!("free text")))
        .expect(1)
        .mount(&server)
        .await;

    let config = LlmConfig::default().with_base_url(ProviderFamily::G4f, server.uri());
    let router = LlmRouter::from_config(&config).unwrap();

    assert_eq!(router.dispatch("p", "g4f").await.unwrap(), "free text");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_null_content_is_empty_string() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(chat_reply(serde_json::Value::Null))
        .mount(&server)
        .await;

    let text = router_for(&server).dispatch("p", "gpt3.5-turbo").await.unwrap();
    assert_eq!(text, "");
}

#[tokio::test]
async fn test_error_status_propagates_as_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .expect(1)
        .mount(&server)
        .await;

    let result = router_for(&server).dispatch("p", "groq-llama3-8b-8192").await;
    match result {
        Err(LlmError::Provider {
            provider: ProviderFamily::Groq,
            source: ProviderError::Api { status, body, .. },
        }) => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("expected Groq API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_choices_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let result = router_for(&server).dispatch("p", "mistral-large-latest").await;
    assert!(matches!(
        result,
        Err(LlmError::Provider {
            source: ProviderError::MalformedResponse { .. },
            ..
        })
    ));
}

#[tokio::test]
async fn test_missing_key_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(chat_reply(json!("should not be reached")))
        .expect(0)
        .mount(&server)
        .await;

    let config = LlmConfig::default().with_base_url(ProviderFamily::OpenAi, server.uri());
    let router = LlmRouter::from_config(&config).unwrap();

    let result = router.dispatch("p", "gpt4").await;
    assert!(matches!(
        result,
        Err(LlmError::Provider {
            source: ProviderError::MissingApiKey {
                env_var: "OPENAI_API_KEY",
                ..
            },
            ..
        })
    ));
}

#[tokio::test]
async fn test_gemini_request_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-pro:generateContent"))
        .and(query_param("key", "key-gemini"))
        .and(body_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "Write about owls"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Owls "}, {"text": "hoot."}]}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = router_for(&server).dispatch("Write about owls", "gemmini").await.unwrap();
    assert_eq!(text, "Owls hoot.");
}

#[tokio::test]
async fn test_gemini_blocked_prompt_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-pro:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        })))
        .mount(&server)
        .await;

    let result = router_for(&server).dispatch("p", "gemmini").await;
    assert!(matches!(
        result,
        Err(LlmError::Provider {
            provider: ProviderFamily::Gemini,
            source: ProviderError::MalformedResponse { .. },
        })
    ));
}

#[tokio::test]
async fn test_gemini_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let result = router_for(&server).dispatch("p", "gemmini").await;
    assert!(matches!(
        result,
        Err(LlmError::Provider {
            source: ProviderError::Api { status: 400, .. },
            ..
        })
    ));
}
