//! Integration tests driving the real HTTP backend against a local fake of
//! the generative-image service.

#![cfg(feature = "gemini")]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as Base64Engine;

use bookforge::images::gemini::GeminiBackend;
use bookforge::images::{
    resolve_description, FailureReason, ImageState, ResolverConfig,
};

/// A single-purpose stand-in for the image service: answers every request
/// with a fixed status and body, and records what it saw.
struct FakeService {
    url: String,
    hits: Arc<AtomicUsize>,
    last_path: Arc<Mutex<Option<String>>>,
    last_api_key: Arc<Mutex<Option<String>>>,
    shutdown: Arc<AtomicBool>,
    worker: Option<thread::JoinHandle<()>>,
}

impl FakeService {
    fn start(status: u16, body: &str) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let url = format!("http://{}", server.server_addr());
        let hits = Arc::new(AtomicUsize::new(0));
        let last_path = Arc::new(Mutex::new(None));
        let last_api_key = Arc::new(Mutex::new(None));
        let shutdown = Arc::new(AtomicBool::new(false));

        let body = body.to_string();
        let (hits2, path2, key2, shutdown2) = (
            hits.clone(),
            last_path.clone(),
            last_api_key.clone(),
            shutdown.clone(),
        );
        let worker = thread::spawn(move || {
            while !shutdown2.load(Ordering::SeqCst) {
                match server.recv_timeout(Duration::from_millis(25)) {
                    Ok(Some(request)) => {
                        hits2.fetch_add(1, Ordering::SeqCst);
                        *path2.lock().unwrap() = Some(request.url().to_string());
                        *key2.lock().unwrap() = request
                            .headers()
                            .iter()
                            .find(|h| h.field.equiv("x-goog-api-key"))
                            .map(|h| h.value.as_str().to_string());
                        let response =
                            tiny_http::Response::from_string(body.clone()).with_status_code(status);
                        let _ = request.respond(response);
                    }
                    Ok(None) => {}
                    Err(_) => break,
                }
            }
        });

        Self {
            url,
            hits,
            last_path,
            last_api_key,
            shutdown,
            worker: Some(worker),
        }
    }

    fn config(&self, credential: Option<&str>) -> ResolverConfig {
        ResolverConfig {
            credential: credential.map(str::to_string),
            endpoint: self.url.clone(),
            timeout_ms: 5000,
            ..ResolverConfig::default()
        }
    }

    fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for FakeService {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn image_response_json(bytes: &[u8]) -> String {
    format!(
        r#"{{"candidates":[{{"content":{{"parts":[{{"text":"here you go"}},{{"inlineData":{{"mimeType":"image/png","data":"{}"}}}}]}}}}]}}"#,
        BASE64.encode(bytes)
    )
}

#[test]
fn backend_resolves_inline_image_from_the_service() {
    let service = FakeService::start(200, &image_response_json(b"fake-png-bytes"));
    let config = service.config(Some("secret-key"));
    let backend = GeminiBackend::new(&config).unwrap();

    let state = resolve_description(&backend, &config, "a steaming bowl of soup");

    match state {
        ImageState::Resolved(image) => {
            assert_eq!(image.mime_type, "image/png");
            assert_eq!(image.bytes, b"fake-png-bytes");
        }
        other => panic!("expected Resolved, got {:?}", other),
    }
    assert_eq!(service.hit_count(), 1);
    assert_eq!(
        service.last_path.lock().unwrap().as_deref(),
        Some("/v1beta/models/gemini-2.5-flash-image:generateContent")
    );
    assert_eq!(
        service.last_api_key.lock().unwrap().as_deref(),
        Some("secret-key")
    );
}

#[test]
fn response_without_inline_image_fails() {
    let body = r#"{"candidates":[{"content":{"parts":[{"text":"no image, sorry"}]}}]}"#;
    let service = FakeService::start(200, body);
    let config = service.config(Some("secret-key"));
    let backend = GeminiBackend::new(&config).unwrap();

    let state = resolve_description(&backend, &config, "soup");
    assert_eq!(state, ImageState::Failed(FailureReason::NoImageInResponse));
}

#[test]
fn empty_candidate_list_fails() {
    let service = FakeService::start(200, r#"{"candidates":[]}"#);
    let config = service.config(Some("secret-key"));
    let backend = GeminiBackend::new(&config).unwrap();

    let state = resolve_description(&backend, &config, "soup");
    assert_eq!(state, ImageState::Failed(FailureReason::NoImageInResponse));
}

#[test]
fn server_error_fails_generically() {
    let service = FakeService::start(500, r#"{"error":{"message":"quota exceeded"}}"#);
    let config = service.config(Some("secret-key"));
    let backend = GeminiBackend::new(&config).unwrap();

    let state = resolve_description(&backend, &config, "soup");
    assert_eq!(state, ImageState::Failed(FailureReason::RequestFailure));
    assert_eq!(service.hit_count(), 1);
}

#[test]
fn unreachable_service_fails_without_panicking() {
    // Nothing listens here; the connection is refused immediately.
    let config = ResolverConfig {
        credential: Some("secret-key".into()),
        endpoint: "http://127.0.0.1:9".into(),
        timeout_ms: 1000,
        ..ResolverConfig::default()
    };
    let backend = GeminiBackend::new(&config).unwrap();

    let state = resolve_description(&backend, &config, "soup");
    assert_eq!(state, ImageState::Failed(FailureReason::RequestFailure));
}

#[test]
fn missing_credential_never_reaches_the_network() {
    let service = FakeService::start(200, &image_response_json(b"unused"));
    let config = service.config(None);
    let backend = GeminiBackend::new(&config).unwrap();

    let state = resolve_description(&backend, &config, "soup");
    assert_eq!(state, ImageState::Failed(FailureReason::MissingCredential));

    // Give a hypothetical stray request time to land before asserting.
    thread::sleep(Duration::from_millis(100));
    assert_eq!(service.hit_count(), 0);
}
