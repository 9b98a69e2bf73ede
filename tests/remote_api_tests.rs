//! Integration Tests for the HTTP Transport
//!
//! Runs the reqwest-backed provider against a local axum stand-in for the
//! DeepL `/v2/translate` endpoint.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;
use translation_gateway::{
    api::create_router,
    cache::InMemoryCache,
    error::RemoteCallError,
    provider::{DeepLProvider, HttpRemoteApi, RetryPolicy, TranslationProvider},
    AppState, TranslationService, TranslatorError,
};

// == Stub Server ==

#[derive(Clone, Copy)]
enum Behaviour {
    /// Answers `<text>-<target_lang>`
    Echo,
    /// Answers 503 for the first `n` calls, then echoes
    FailFirst(usize),
    /// Always answers 500
    AlwaysFail,
    /// 200 with a body lacking `translations`
    Malformed,
    /// Sleeps before echoing
    Slow(Duration),
}

#[derive(Clone)]
struct Stub {
    behaviour: Behaviour,
    calls: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

impl Stub {
    fn new(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            calls: Arc::new(AtomicUsize::new(0)),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn echo(body: &Value) -> Value {
    let text = body["text"][0].as_str().unwrap_or_default();
    let target = body["target_lang"].as_str().unwrap_or_default();
    json!({
        "translations": [
            {"detected_source_language": "EN", "text": format!("{}-{}", text, target)}
        ]
    })
}

async fn stub_handler(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let call = stub.calls.fetch_add(1, Ordering::SeqCst);
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    stub.seen.lock().unwrap().push((auth, body.clone()));

    match stub.behaviour {
        Behaviour::Echo => (StatusCode::OK, Json(echo(&body))),
        Behaviour::FailFirst(n) if call < n => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"message": "busy"})),
        ),
        Behaviour::FailFirst(_) => (StatusCode::OK, Json(echo(&body))),
        Behaviour::AlwaysFail => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"message": "boom"})),
        ),
        Behaviour::Malformed => (StatusCode::OK, Json(json!({"unexpected": true}))),
        Behaviour::Slow(delay) => {
            tokio::time::sleep(delay).await;
            (StatusCode::OK, Json(echo(&body)))
        }
    }
}

/// Serves the stub on an ephemeral port and returns its translate URL.
async fn spawn_stub(stub: Stub) -> String {
    let app = Router::new()
        .route("/v2/translate", post(stub_handler))
        .with_state(stub);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/v2/translate", addr)
}

// == Helper Functions ==

fn fast_retry(max_attempts: u32) -> RetryPolicy {
    RetryPolicy {
        max_attempts,
        initial_delay: Duration::from_millis(10),
        exponential_base: 2.0,
        max_delay: Duration::from_millis(50),
    }
}

fn provider_for(url: &str, max_attempts: u32, timeout: Duration) -> DeepLProvider {
    let remote = HttpRemoteApi::new(url, "test-key", timeout).unwrap();
    DeepLProvider::new(remote, fast_retry(max_attempts))
}

// == Transport Tests ==

#[tokio::test]
async fn test_request_carries_auth_header_and_uppercased_codes() {
    let stub = Stub::new(Behaviour::Echo);
    let url = spawn_stub(stub.clone()).await;
    let provider = provider_for(&url, 3, Duration::from_secs(5));

    let translated = provider.translate("hello", "en", "es").await.unwrap();

    assert_eq!(translated, "hello-ES");
    let seen = stub.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0.as_deref(), Some("DeepL-Auth-Key test-key"));
    assert_eq!(
        seen[0].1,
        json!({"text": ["hello"], "source_lang": "EN", "target_lang": "ES"})
    );
}

#[tokio::test]
async fn test_retries_server_errors_until_success() {
    let stub = Stub::new(Behaviour::FailFirst(2));
    let url = spawn_stub(stub.clone()).await;
    let provider = provider_for(&url, 3, Duration::from_secs(5));

    let translated = provider.translate("hello", "AUTO", "RU").await.unwrap();

    assert_eq!(translated, "hello-RU");
    assert_eq!(stub.calls(), 3);
}

#[tokio::test]
async fn test_exhaustion_reports_last_status() {
    let stub = Stub::new(Behaviour::AlwaysFail);
    let url = spawn_stub(stub.clone()).await;
    let provider = provider_for(&url, 2, Duration::from_secs(5));

    let err = provider.translate("hello", "EN", "ES").await.unwrap_err();

    match err {
        TranslatorError::ProviderExhausted { attempts, source } => {
            assert_eq!(attempts, 2);
            assert!(matches!(
                source,
                RemoteCallError::Status { status: 500, .. }
            ));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(stub.calls(), 2);
}

#[tokio::test]
async fn test_malformed_body_is_retried_then_reported() {
    let stub = Stub::new(Behaviour::Malformed);
    let url = spawn_stub(stub.clone()).await;
    let provider = provider_for(&url, 3, Duration::from_secs(5));

    let err = provider.translate("hello", "EN", "ES").await.unwrap_err();

    assert!(matches!(
        err,
        TranslatorError::ProviderExhausted {
            attempts: 3,
            source: RemoteCallError::InvalidResponse(_)
        }
    ));
    assert_eq!(stub.calls(), 3);
}

#[tokio::test]
async fn test_request_timeout_is_a_transport_failure() {
    let stub = Stub::new(Behaviour::Slow(Duration::from_secs(2)));
    let url = spawn_stub(stub.clone()).await;
    let provider = provider_for(&url, 1, Duration::from_millis(100));

    let err = provider.translate("hello", "EN", "ES").await.unwrap_err();

    assert!(matches!(
        err,
        TranslatorError::ProviderExhausted {
            attempts: 1,
            source: RemoteCallError::Http(_)
        }
    ));
}

#[tokio::test]
async fn test_batch_sends_one_request_per_text() {
    let stub = Stub::new(Behaviour::Echo);
    let url = spawn_stub(stub.clone()).await;
    let provider = provider_for(&url, 3, Duration::from_secs(5));
    let texts = vec!["one".to_string(), "two".to_string(), "three".to_string()];

    let translated = provider.translate_batch(&texts, "EN", "RU").await.unwrap();

    assert_eq!(translated, vec!["one-RU", "two-RU", "three-RU"]);
    assert_eq!(stub.calls(), 3);
}

#[tokio::test]
async fn test_unsupported_language_never_reaches_remote() {
    let stub = Stub::new(Behaviour::Echo);
    let url = spawn_stub(stub.clone()).await;
    let provider = provider_for(&url, 3, Duration::from_secs(5));

    let err = provider.translate("hello", "EN", "DE").await.unwrap_err();

    assert!(matches!(err, TranslatorError::UnsupportedLanguage { .. }));
    assert_eq!(stub.calls(), 0);
}

// == Full Stack Test ==

#[tokio::test]
async fn test_gateway_answers_repeat_request_from_cache() {
    let stub = Stub::new(Behaviour::Echo);
    let url = spawn_stub(stub.clone()).await;
    let provider = provider_for(&url, 3, Duration::from_secs(5));
    let service = TranslationService::new(Box::new(provider), Box::new(InMemoryCache::new()));
    let app = create_router(AppState::new(service));

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/translate")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"text":"hello","source_language":"EN","target_language":"ES"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["translated_text"], "hello-ES");
    }

    assert_eq!(stub.calls(), 1);
}
