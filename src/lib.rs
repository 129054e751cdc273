//! Bookforge
//!
//! Builds an illustrated "digital book" as one self-contained HTML page:
//! a statically-defined document tree (cover, preface, chapters, author
//! page) where the cover and every chapter carry an AI-generated
//! illustration fetched from a generative-image service.
//!
//! # Design
//!
//! - **Content Store** ([`content`]): an immutable document passed down
//!   explicitly; tests substitute their own.
//! - **Image Resolver** ([`images`]): one independent request per image
//!   site with a `Pending -> Resolved | Failed` lifecycle, a swappable
//!   [`images::ImageBackend`] seam, and a teardown guard so a stale result
//!   can never mutate released state.
//! - **Renderer** ([`rendering`]): walks the document and emits the page,
//!   substituting each site's outcome or a captioned placeholder.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use bookforge::images::ResolverConfig;
//!
//! # async fn build() -> bookforge::Result<()> {
//! let book = bookforge::content::sample_book();
//! book.validate()?;
//!
//! let config = ResolverConfig {
//!     credential: Some("api-key".to_string()),
//!     ..ResolverConfig::default()
//! };
//! let backend = Arc::new(bookforge::default_backend(&config)?);
//! let illustrations = bookforge::illustrate_document(&book, backend, &config).await;
//! let page = bookforge::render_page(&book, &illustrations);
//! std::fs::write("book.html", &page.html)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod content;

pub mod images;

// Async-friendly facade (worker-backed requests awaited together)
pub mod async_api;
pub use async_api::illustrate_document;

pub mod rendering;
pub use rendering::{render_page, RenderedPage};

pub use content::Document;
pub use images::{ImageState, Illustrations, ResolverConfig};

/// Create the default production backend for the given configuration.
#[cfg(feature = "gemini")]
pub fn default_backend(config: &ResolverConfig) -> Result<images::gemini::GeminiBackend> {
    images::gemini::GeminiBackend::new(config)
}
