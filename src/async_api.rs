//! Async facade for illustrating a whole document.
//!
//! Each image site gets its own worker-backed request; workers report back
//! over a oneshot channel so async callers can await many outstanding round
//! trips together without the backend needing to be async itself.

use std::sync::Arc;

use futures::future::join_all;

use crate::content::Document;
use crate::images::{ImageBackend, ImageRequest, ImageState, Illustrations, ResolverConfig};

/// Resolve one image site, bridging the blocking worker to async.
async fn resolve_site(
    backend: Arc<dyn ImageBackend>,
    config: ResolverConfig,
    description: String,
) -> ImageState {
    let (tx, rx) = tokio::sync::oneshot::channel();
    let request = ImageRequest::spawn_notify(backend, config, &description, tx);
    match rx.await {
        Ok(state) => state,
        // Worker died without reporting; whatever the slot holds stands.
        Err(_) => request.state(),
    }
}

/// Resolve every image site of `document` concurrently and collect the
/// outcomes keyed by site.
///
/// Sites are fully independent: no ordering is guaranteed between their
/// resolutions, and one site's failure never affects another. With no
/// credential configured every site settles `Failed` immediately, without
/// any outbound call.
pub async fn illustrate_document(
    document: &Document,
    backend: Arc<dyn ImageBackend>,
    config: &ResolverConfig,
) -> Illustrations {
    let pending = document.image_sites().into_iter().map(|(site, description)| {
        let backend = Arc::clone(&backend);
        let config = config.clone();
        let site = site.to_string();
        let description = description.to_string();
        async move {
            let state = resolve_site(backend, config, description).await;
            (site, state)
        }
    });

    let mut illustrations = Illustrations::new();
    for (site, state) in join_all(pending).await {
        illustrations.insert(site, state);
    }
    illustrations
}
