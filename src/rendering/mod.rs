//! Page rendering: walk a document and produce the complete book page.

pub mod nav;
pub mod page;

pub use nav::{build_nav, NavEntry, NavKind};
pub use page::render_page;

use sha2::{Digest, Sha256};

/// A fully rendered book page.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// The complete HTML document
    pub html: String,
    /// Anchors actually emitted, in page order
    pub anchors: Vec<String>,
    /// Page title (book title plus subtitle)
    pub title: String,
}

impl RenderedPage {
    /// Hex SHA-256 of the page markup. Stable for a fixed document and
    /// illustration set; used by the golden page test and CLI diagnostics.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(self.html.as_bytes()))
    }
}
