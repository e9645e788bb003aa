//! ElevenLabs client tests against a local mock of the HTTP API

use serde_json::json;
use voicegen_core::{
    Credential, ElevenLabs, ElevenLabsConfig, SynthesisRequest, Synthesizer, Voice, VoiceAdmin,
    VoiceDirectory, VoiceError,
};
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "sk_test_key";

fn client_for(server: &MockServer) -> ElevenLabs {
    let credential = Credential::new(API_KEY).unwrap();
    ElevenLabs::new(ElevenLabsConfig::new(credential).with_base_url(server.uri()))
}

#[tokio::test]
async fn test_list_voices_parses_provider_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/voices"))
        .and(header("xi-api-key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "voices": [
                {"voice_id": "v1", "name": "Rachel", "category": "premade", "labels": {"accent": "american"}},
                {"voice_id": "v2", "name": "Adam"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let voices = client_for(&server).list_voices().await.unwrap();

    assert_eq!(
        voices,
        vec![
            Voice {
                id: "v1".to_string(),
                name: "Rachel".to_string(),
                category: Some("premade".to_string()),
            },
            Voice {
                id: "v2".to_string(),
                name: "Adam".to_string(),
                category: None,
            },
        ]
    );
}

#[tokio::test]
async fn test_list_voices_maps_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/voices"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid_api_key"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_voices().await.unwrap_err();

    match err {
        VoiceError::Api { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid_api_key");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_voices_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/voices"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_voices().await.unwrap_err();

    assert!(matches!(err, VoiceError::Decode(_)));
}

#[tokio::test]
async fn test_synthesize_returns_bytes_verbatim() {
    let server = MockServer::start().await;
    let audio = vec![0x49, 0x44, 0x33, 0x04, 0x00, 0x00, 0xFF, 0xFB, 0x90];
    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/v2"))
        .and(header("xi-api-key", API_KEY))
        .and(header("accept", "audio/mpeg"))
        .and(body_json(json!({
            "text": "Hello world",
            "model_id": "eleven_monolingual_v1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(audio.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let request = SynthesisRequest {
        voice_id: "v2".to_string(),
        text: "Hello world".to_string(),
    };
    let buffer = client_for(&server).synthesize(&request).await.unwrap();

    assert_eq!(buffer.bytes, audio);
}

#[tokio::test]
async fn test_synthesize_uses_configured_model() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/v1"))
        .and(body_json(json!({"text": "Hi", "model_id": "eleven_turbo_v2"})))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3]))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = ElevenLabsConfig::new(Credential::new(API_KEY).unwrap())
        .with_base_url(format!("{}/", server.uri()));
    config.model_id = "eleven_turbo_v2".to_string();
    let client = ElevenLabs::new(config);

    let request = SynthesisRequest {
        voice_id: "v1".to_string(),
        text: "Hi".to_string(),
    };
    assert_eq!(client.synthesize(&request).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_synthesize_empty_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/v1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let request = SynthesisRequest {
        voice_id: "v1".to_string(),
        text: "Hi".to_string(),
    };
    let err = client_for(&server).synthesize(&request).await.unwrap_err();

    assert!(matches!(err, VoiceError::EmptyAudio));
}

#[tokio::test]
async fn test_synthesize_maps_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/text-to-speech/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"detail":"voice_not_found"}"#),
        )
        .mount(&server)
        .await;

    let request = SynthesisRequest {
        voice_id: "missing".to_string(),
        text: "Hi".to_string(),
    };
    let err = client_for(&server).synthesize(&request).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        r#"ElevenLabs API error 404: {"detail":"voice_not_found"}"#
    );
}

#[tokio::test]
async fn test_rename_voice_posts_multipart_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/voices/v1/edit"))
        .and(header("xi-api-key", API_KEY))
        .and(body_string_contains("name=\"name\""))
        .and(body_string_contains("Narrator"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .rename_voice("v1", "Narrator")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_rename_voice_rejects_empty_name_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .rename_voice("v1", "  ")
        .await
        .unwrap_err();

    assert!(matches!(err, VoiceError::EmptyName));
}

#[tokio::test]
async fn test_rename_voice_maps_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/voices/v1/edit"))
        .respond_with(ResponseTemplate::new(422).set_body_string("bad name"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .rename_voice("v1", "Narrator")
        .await
        .unwrap_err();

    assert!(matches!(err, VoiceError::Api { status: 422, .. }));
}
