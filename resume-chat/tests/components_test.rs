//! Component factory tests: config in, routable AppState out.

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use llm_client::EnvLlmConfig;
use resume_chat::{build_components, build_router, AppConfig, BaseAppExtensions, BaseConfig};
use serde_json::{json, Value};
use speech_client::EnvSpeechConfig;
use storage::{MessageStore, TurnRole};
use tower::ServiceExt;

fn memory_config() -> AppConfig {
    AppConfig {
        base: BaseConfig {
            bind_address: "127.0.0.1:0".to_string(),
            database_url: "sqlite::memory:".to_string(),
            log_file: "logs/test.log".to_string(),
            knowledge_dir: "./knowledge-does-not-exist".to_string(),
            owner_name: "李伟".to_string(),
            max_upload_bytes: 1024,
        },
        extensions: BaseAppExtensions {
            llm: EnvLlmConfig {
                openai_api_key: "sk-test-key-000000".to_string(),
                openai_base_url: "http://127.0.0.1:1/v1".to_string(),
                llm_model: "test-model".to_string(),
            },
            speech: EnvSpeechConfig::default(),
        },
    }
}

/// **Test: Built components share one store between repo handle and routes**
#[tokio::test]
async fn test_build_components_wires_store_into_routes() {
    let components = build_components(&memory_config()).await.unwrap();
    components
        .repo
        .append("wired", TurnRole::User, "你好")
        .await
        .unwrap();
    assert_eq!(components.state.max_upload_bytes, 1024);

    let router = build_router(components.state);
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/chat/history/wired")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "success": true }));
    assert_eq!(components.repo.count("wired").await.unwrap(), 0);
}

/// **Test: Transcription without a Deepgram key answers 500 through the built state**
#[tokio::test]
async fn test_build_components_without_speech_key() {
    let components = build_components(&memory_config()).await.unwrap();
    let router = build_router(components.state);

    let boundary = "components-boundary";
    let body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"a.wav\"\r\nContent-Type: audio/wav\r\n\r\nRIFF\r\n--{boundary}--\r\n"
    );
    let request = Request::builder()
        .method(Method::POST)
        .uri("/voice/transcribe")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "DEEPGRAM_API_KEY not found" }));
}
