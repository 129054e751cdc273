//! Image resolution: turn a textual scene description into a displayable
//! image, asynchronously, with a visible three-state lifecycle per request.
//!
//! Each request is an independent unit of work: no deduplication, no cache,
//! no retry. The lifecycle is `Pending -> Resolved | Failed`, both terminal;
//! a new description requires a brand-new request. The one correctness-
//! sensitive contract is the teardown guard: once a request's consumer is
//! gone, a late-arriving result must be discarded rather than committed.

use std::collections::HashMap;
use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as Base64Engine;

use crate::error::Result;

#[cfg(feature = "gemini")]
pub mod gemini;

/// Fixed stylistic preamble applied to every description before submission,
/// keeping generated imagery visually consistent across the document.
pub fn styled_prompt(description: &str) -> String {
    format!(
        "A high-definition documentary-style photograph for a travel book. {}. Soft natural lighting, 4k resolution.",
        description
    )
}

/// Why a request failed. Collapsed to one generic placeholder in the page;
/// the distinction exists for diagnostics and tests only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// No credential was configured; no outbound call was attempted
    MissingCredential,
    /// The outbound call errored (network, auth, quota, malformed payload)
    RequestFailure,
    /// The service answered, but no part carried inline image data
    NoImageInResponse,
}

/// A successfully decoded image: raw bytes plus their MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ResolvedImage {
    /// Encode as a `data:` URI suitable for an `<img src>` attribute.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, BASE64.encode(&self.bytes))
    }
}

/// The per-request lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageState {
    Pending,
    Resolved(ResolvedImage),
    Failed(FailureReason),
}

impl ImageState {
    /// Resolved and Failed are terminal; Pending is not.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ImageState::Pending)
    }
}

/// One content part of a backend response. Parts are scanned in order and
/// the first one carrying inline image data wins; everything else is ignored.
#[derive(Debug, Clone, Default)]
pub struct ContentPart {
    pub text: Option<String>,
    pub inline_data: Option<InlineData>,
}

/// Base64-encoded image bytes plus their MIME type, as returned inline by
/// the generative service.
#[derive(Debug, Clone)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Resolver configuration. The credential is an explicit option; absence is
/// a normal, handled condition, not an environment lookup buried in the call.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// API key for the generative-image service
    pub credential: Option<String>,
    /// Model identifier submitted with each request
    pub model: String,
    /// Service base URL (tests point this at a local server)
    pub endpoint: String,
    /// Socket timeout for one outbound call, in milliseconds
    pub timeout_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            credential: None,
            model: "gemini-2.5-flash-image".to_string(),
            endpoint: "https://generativelanguage.googleapis.com".to_string(),
            timeout_ms: 30000,
        }
    }
}

/// The outbound-call boundary. Backends issue exactly one generate call per
/// invocation and return the content parts of the first candidate.
pub trait ImageBackend: Send + Sync {
    fn generate(&self, prompt: &str, credential: &str) -> Result<Vec<ContentPart>>;
}

/// A backend that refuses every call. Used when no credential is configured
/// (the resolver never reaches it) and as a safe default in tests.
#[derive(Debug, Default)]
pub struct UnavailableBackend;

impl UnavailableBackend {
    pub fn new() -> Self {
        UnavailableBackend
    }
}

impl ImageBackend for UnavailableBackend {
    fn generate(&self, _prompt: &str, _credential: &str) -> Result<Vec<ContentPart>> {
        Err(crate::error::Error::Backend(
            "no image backend configured".to_string(),
        ))
    }
}

/// Resolve one description to a terminal state.
///
/// With no credential configured this settles `Failed(MissingCredential)`
/// without touching the backend. Otherwise the backend is invoked exactly
/// once and the first image-bearing part wins. All backend errors collapse
/// to `Failed(RequestFailure)`.
pub fn resolve_description(
    backend: &dyn ImageBackend,
    config: &ResolverConfig,
    description: &str,
) -> ImageState {
    let Some(credential) = config.credential.as_deref() else {
        log::debug!("image request skipped: no credential configured");
        return ImageState::Failed(FailureReason::MissingCredential);
    };

    let prompt = styled_prompt(description);
    let parts = match backend.generate(&prompt, credential) {
        Ok(parts) => parts,
        Err(e) => {
            log::warn!("image request failed: {}", e);
            return ImageState::Failed(FailureReason::RequestFailure);
        }
    };

    for part in parts {
        if let Some(inline) = part.inline_data {
            match BASE64.decode(inline.data.as_bytes()) {
                Ok(bytes) => {
                    return ImageState::Resolved(ResolvedImage {
                        mime_type: inline.mime_type,
                        bytes,
                    })
                }
                Err(e) => {
                    log::warn!("inline image data is not valid base64: {}", e);
                    return ImageState::Failed(FailureReason::RequestFailure);
                }
            }
        }
    }

    ImageState::Failed(FailureReason::NoImageInResponse)
}

struct SlotState {
    active: bool,
    image: ImageState,
}

struct SlotInner {
    state: Mutex<SlotState>,
    settled: Condvar,
}

/// The shared cell behind one request: the observable state plus the
/// teardown flag. `commit` refuses to mutate a torn-down or already-settled
/// slot, which is what keeps a stale response from racing its consumer's
/// teardown.
#[derive(Clone)]
pub struct ImageSlot {
    inner: Arc<SlotInner>,
}

impl ImageSlot {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SlotInner {
                state: Mutex::new(SlotState {
                    active: true,
                    image: ImageState::Pending,
                }),
                settled: Condvar::new(),
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ImageState {
        self.inner.state.lock().unwrap().image.clone()
    }

    pub fn is_active(&self) -> bool {
        self.inner.state.lock().unwrap().active
    }

    /// Mark the consumer as gone. Results arriving after this are discarded.
    pub fn teardown(&self) {
        let mut state = self.inner.state.lock().unwrap();
        state.active = false;
        // Wake waiters so they can observe the teardown instead of blocking
        // out the full timeout.
        self.inner.settled.notify_all();
    }

    /// Apply a terminal outcome. Returns whether the outcome was committed:
    /// false when the slot was torn down or had already settled.
    pub fn commit(&self, outcome: ImageState) -> bool {
        debug_assert!(outcome.is_terminal());
        let mut state = self.inner.state.lock().unwrap();
        if !state.active {
            log::debug!("discarding image result that arrived after teardown");
            return false;
        }
        if state.image.is_terminal() {
            return false;
        }
        state.image = outcome;
        self.inner.settled.notify_all();
        true
    }

    /// Block until the slot settles, is torn down, or the timeout elapses.
    /// Returns the state observed on exit (possibly still Pending).
    pub fn wait_settled(&self, timeout: Duration) -> ImageState {
        let mut state = self.inner.state.lock().unwrap();
        while !state.image.is_terminal() && state.active {
            let (next, res) = self
                .inner
                .settled
                .wait_timeout(state, timeout)
                .unwrap();
            state = next;
            if res.timed_out() {
                break;
            }
        }
        state.image.clone()
    }
}

impl Default for ImageSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// One in-flight image request: a slot plus the worker thread performing the
/// blocking round trip. Dropping the request tears the slot down, so a
/// worker finishing afterwards cannot mutate state its consumer no longer
/// observes. The underlying HTTP call itself is not cancelled, only its
/// effect is suppressed.
pub struct ImageRequest {
    slot: ImageSlot,
    worker: Option<thread::JoinHandle<()>>,
}

impl ImageRequest {
    /// Start resolving `description` on a dedicated worker thread.
    pub fn spawn(
        backend: Arc<dyn ImageBackend>,
        config: ResolverConfig,
        description: &str,
    ) -> Self {
        Self::spawn_inner(backend, config, description, None)
    }

    /// Like [`ImageRequest::spawn`], additionally sending the terminal
    /// outcome over `notify` once the worker settles. The outcome is sent
    /// even when the slot discarded it, so async consumers always observe
    /// completion.
    pub fn spawn_notify(
        backend: Arc<dyn ImageBackend>,
        config: ResolverConfig,
        description: &str,
        notify: tokio::sync::oneshot::Sender<ImageState>,
    ) -> Self {
        Self::spawn_inner(backend, config, description, Some(notify))
    }

    fn spawn_inner(
        backend: Arc<dyn ImageBackend>,
        config: ResolverConfig,
        description: &str,
        notify: Option<tokio::sync::oneshot::Sender<ImageState>>,
    ) -> Self {
        let slot = ImageSlot::new();
        let worker_slot = slot.clone();
        let description = description.to_string();
        let worker = thread::spawn(move || {
            let outcome = resolve_description(backend.as_ref(), &config, &description);
            worker_slot.commit(outcome.clone());
            if let Some(tx) = notify {
                let _ = tx.send(outcome);
            }
        });
        Self {
            slot,
            worker: Some(worker),
        }
    }

    pub fn state(&self) -> ImageState {
        self.slot.state()
    }

    pub fn slot(&self) -> &ImageSlot {
        &self.slot
    }

    /// Detach from the outcome. The worker keeps running but its result will
    /// be discarded at commit time.
    pub fn teardown(&self) {
        self.slot.teardown();
    }

    /// Block until the worker finishes and return the final slot state.
    pub fn join(mut self) -> ImageState {
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
        self.slot.state()
    }

    /// Block until the request settles or the timeout elapses.
    pub fn wait(&self, timeout: Duration) -> ImageState {
        self.slot.wait_settled(timeout)
    }
}

impl Drop for ImageRequest {
    fn drop(&mut self) {
        // The worker is detached, not joined: a hung round trip must not
        // block the consumer's teardown.
        self.slot.teardown();
    }
}

/// Resolver outcomes keyed by image site (the cover anchor or a section id).
/// Sites with no entry are treated as Pending.
#[derive(Default)]
pub struct Illustrations {
    sites: HashMap<String, ImageState>,
}

static PENDING: ImageState = ImageState::Pending;

impl Illustrations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, site: impl Into<String>, state: ImageState) {
        self.sites.insert(site.into(), state);
    }

    pub fn state_for(&self, site: &str) -> &ImageState {
        self.sites.get(site).unwrap_or(&PENDING)
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}
