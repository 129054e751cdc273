//! Core content model: an immutable book document consumed read-only by the
//! renderer.
//!
//! A [`Document`] is constructed once at startup and passed down explicitly;
//! there is no ambient global, so tests can substitute alternate documents.
//! There is no load or parse step; the only runtime check is the section-id
//! uniqueness invariant enforced by [`Document::validate`].

use std::collections::HashSet;

use crate::error::{Error, Result};

mod sample;

pub use sample::sample_book;

/// Anchor id of the cover page
pub const COVER_ANCHOR: &str = "cover";
/// Anchor id of the preface
pub const INTRO_ANCHOR: &str = "intro";
/// Anchor id of the closing author page
pub const ABOUT_ANCHOR: &str = "about";

/// A complete book: front matter, chapters, and closing pages.
#[derive(Debug, Clone)]
pub struct Document {
    /// Book title, shown on the cover
    pub title: String,
    /// Subtitle shown under the title
    pub subtitle: String,
    /// Author credit
    pub author: String,
    /// Preface paragraphs, in reading order
    pub introduction: Vec<String>,
    /// Visual description for the cover illustration
    pub cover_image: String,
    /// Chapters, in reading order
    pub sections: Vec<Section>,
    /// Closing blurb about the book itself
    pub about_book: String,
    /// Closing blurb about the author
    pub about_author: String,
}

/// One chapter of the document, covering one dish and country.
#[derive(Debug, Clone)]
pub struct Section {
    /// Unique, stable identifier used as the chapter's navigation anchor
    pub id: String,
    /// Chapter title
    pub title: String,
    /// Country label shown in the chapter heading
    pub country: String,
    /// Visual description handed to the image resolver
    pub image: String,
    /// Optional "Did you know?" aside
    pub did_you_know: Option<String>,
    /// Origin-story paragraphs
    pub history: Vec<String>,
    /// Cultural-significance paragraphs
    pub significance: Vec<String>,
    /// Optional variations panel
    pub variations: Option<Variations>,
    /// Captions for the chapter illustration (the first one is shown)
    pub captions: Vec<String>,
}

/// A titled block of variant paragraphs inside a chapter.
#[derive(Debug, Clone)]
pub struct Variations {
    pub title: String,
    pub content: Vec<String>,
}

impl Document {
    /// Check the one structural invariant: section ids are pairwise distinct.
    ///
    /// Ids double as navigation anchors and as image-site keys, so a
    /// duplicate would silently merge two chapters' navigation and imagery.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                return Err(Error::Content(format!(
                    "duplicate section id: {}",
                    section.id
                )));
            }
        }
        Ok(())
    }

    /// All navigable anchors in page order: cover, preface, one per chapter,
    /// author page.
    pub fn anchor_ids(&self) -> Vec<&str> {
        let mut ids = Vec::with_capacity(self.sections.len() + 3);
        ids.push(COVER_ANCHOR);
        ids.push(INTRO_ANCHOR);
        ids.extend(self.sections.iter().map(|s| s.id.as_str()));
        ids.push(ABOUT_ANCHOR);
        ids
    }

    /// Every place in the page that owns an independent image request,
    /// as `(site key, visual description)` pairs. The cover is keyed by its
    /// anchor; chapters are keyed by their section id.
    pub fn image_sites(&self) -> Vec<(&str, &str)> {
        let mut sites = Vec::with_capacity(self.sections.len() + 1);
        sites.push((COVER_ANCHOR, self.cover_image.as_str()));
        sites.extend(
            self.sections
                .iter()
                .map(|s| (s.id.as_str(), s.image.as_str())),
        );
        sites
    }
}
