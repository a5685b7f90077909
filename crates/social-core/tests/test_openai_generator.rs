//! External generator against a mocked chat-completions endpoint

use serde_json::json;
use social_core::config::OpenAIConfig;
use social_core::{CampaignInput, DraftGenerator, DraftOrchestrator, OpenAIDraftGenerator, Platform};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> OpenAIConfig {
    let mut config = OpenAIConfig::new("sk-test-key");
    config.base_url = Some(server.uri());
    config.timeout_secs = 5;
    config
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

fn input() -> CampaignInput {
    let mut input = CampaignInput::new("Neon Nights", vec![Platform::Youtube, Platform::Tiktok]);
    input.artist = Some("DJ Nova".to_string());
    input
}

#[tokio::test]
async fn test_valid_response_becomes_draft() {
    let server = MockServer::start().await;
    let content = json!({
        "platform": "instagram",
        "title": "Neon Nights is coming",
        "hook": "Lights down, volume up",
        "caption": "Full set drops Friday",
        "hashtags": "#NeonNights neon #NeonNights",
        "publishing_notes": "Pin the teaser"
    })
    .to_string();

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(&content)))
        .expect(1)
        .mount(&server)
        .await;

    let generator = OpenAIDraftGenerator::new(config_for(&server)).unwrap();
    let draft = generator.generate(Platform::Youtube, &input()).await.expect("draft expected");

    assert_eq!(draft.platform, Platform::Youtube, "platform is forced to the requested one");
    assert_eq!(draft.guide, Platform::Youtube.guide());
    assert_eq!(draft.title, "Neon Nights is coming");
    assert_eq!(draft.hashtags, "#NeonNights #neon");
}

#[tokio::test]
async fn test_request_carries_model_and_prompt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(r#"{"platform":"tiktok"}"#)))
        .mount(&server)
        .await;

    let generator = OpenAIDraftGenerator::new(config_for(&server)).unwrap();
    generator.generate(Platform::Tiktok, &input()).await.expect("draft expected");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["messages"][0]["role"], "system");
    let prompt = body["messages"][1]["content"].as_str().unwrap();
    assert!(prompt.contains("Topic: Neon Nights"));
    assert!(prompt.contains("Platform: tiktok"));
}

#[tokio::test]
async fn test_non_json_content_yields_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Here is a great post idea!")))
        .mount(&server)
        .await;

    let generator = OpenAIDraftGenerator::new(config_for(&server)).unwrap();
    assert!(generator.generate(Platform::Youtube, &input()).await.is_none());
}

#[tokio::test]
async fn test_missing_platform_yields_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(r#"{"title":"No platform"}"#)))
        .mount(&server)
        .await;

    let generator = OpenAIDraftGenerator::new(config_for(&server)).unwrap();
    assert!(generator.generate(Platform::Youtube, &input()).await.is_none());
}

#[tokio::test]
async fn test_server_error_yields_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let generator = OpenAIDraftGenerator::new(config_for(&server)).unwrap();
    assert!(generator.generate(Platform::Youtube, &input()).await.is_none());
}

#[tokio::test]
async fn test_unreachable_service_yields_nothing() {
    let mut config = OpenAIConfig::new("sk-test-key");
    config.base_url = Some("http://127.0.0.1:9".to_string());
    config.timeout_secs = 2;

    let generator = OpenAIDraftGenerator::new(config).unwrap();
    assert!(generator.generate(Platform::Youtube, &input()).await.is_none());
}

#[tokio::test]
async fn test_orchestrator_falls_back_with_one_call_per_platform() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("not json at all")))
        .expect(2)
        .mount(&server)
        .await;

    let generator = OpenAIDraftGenerator::new(config_for(&server)).unwrap();
    let orchestrator = DraftOrchestrator::new(Some(Box::new(generator)));
    let input = input();

    let drafts = orchestrator.build_drafts(&input.platforms, &input, true).await;

    assert_eq!(drafts.len(), 2);
    assert_eq!(drafts[0].platform, Platform::Youtube);
    assert_eq!(drafts[0].title, "DJ Nova - Neon Nights | immersive EDM #CompassEnt");
    assert_eq!(drafts[1].platform, Platform::Tiktok);
    assert_eq!(drafts[1].title, "Neon Nights · DJ Nova");
}
