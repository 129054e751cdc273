//! Navigation sidebar plan: one entry per navigable anchor.

use crate::content::{Document, ABOUT_ANCHOR, COVER_ANCHOR, INTRO_ANCHOR};

/// What kind of page an entry points at. Chapters carry their 1-based
/// number, which also drives the `01.`-style label prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavKind {
    Cover,
    Preface,
    Chapter(usize),
    Author,
}

/// One sidebar entry.
#[derive(Debug, Clone)]
pub struct NavEntry {
    pub anchor: String,
    pub label: String,
    pub kind: NavKind,
}

/// Build the sidebar plan for a document: cover, preface, numbered chapter
/// entries, author page. Anchors match [`Document::anchor_ids`] exactly.
pub fn build_nav(document: &Document) -> Vec<NavEntry> {
    let mut entries = Vec::with_capacity(document.sections.len() + 3);
    entries.push(NavEntry {
        anchor: COVER_ANCHOR.to_string(),
        label: "Cover".to_string(),
        kind: NavKind::Cover,
    });
    entries.push(NavEntry {
        anchor: INTRO_ANCHOR.to_string(),
        label: "Preface".to_string(),
        kind: NavKind::Preface,
    });
    for (i, section) in document.sections.iter().enumerate() {
        let number = i + 1;
        entries.push(NavEntry {
            anchor: section.id.clone(),
            label: format!("{:02}. {}", number, section.title),
            kind: NavKind::Chapter(number),
        });
    }
    entries.push(NavEntry {
        anchor: ABOUT_ANCHOR.to_string(),
        label: "Author".to_string(),
        kind: NavKind::Author,
    });
    entries
}
