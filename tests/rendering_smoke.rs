//! End-to-end rendering checks over the shipped sample book.

use std::collections::HashSet;

use bookforge::content::sample_book;
use bookforge::images::{FailureReason, Illustrations, ImageState, ResolvedImage};
use bookforge::render_page;
use scraper::{Html, Selector};

#[test]
fn full_page_has_thirteen_unique_anchors() {
    let book = sample_book();
    let page = render_page(&book, &Illustrations::new());

    let doc = Html::parse_document(&page.html);
    let section_sel = Selector::parse("section[id]").unwrap();
    let ids: Vec<String> = doc
        .select(&section_sel)
        .filter_map(|el| el.value().attr("id").map(str::to_string))
        .collect();

    assert_eq!(ids.len(), 13, "expected 10 chapters plus cover/intro/about");
    let unique: HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), 13, "anchors must be pairwise distinct");
    assert!(ids.contains(&"cover".to_string()));
    assert!(ids.contains(&"intro".to_string()));
    assert!(ids.contains(&"about".to_string()));
    assert_eq!(ids, page.anchors);
}

#[test]
fn every_anchor_is_reachable_from_the_sidebar() {
    let book = sample_book();
    let page = render_page(&book, &Illustrations::new());

    let doc = Html::parse_document(&page.html);
    let link_sel = Selector::parse("nav a").unwrap();
    let hrefs: Vec<&str> = doc
        .select(&link_sel)
        .filter_map(|a| a.value().attr("href"))
        .collect();

    assert_eq!(hrefs.len(), 13);
    for anchor in &page.anchors {
        let href = format!("#{}", anchor);
        assert!(hrefs.contains(&href.as_str()), "no sidebar link for {}", anchor);
    }
}

#[test]
fn unresolved_book_renders_one_placeholder_per_image_site() {
    let book = sample_book();
    let page = render_page(&book, &Illustrations::new());

    let doc = Html::parse_document(&page.html);
    let plate_sel = Selector::parse(".plate").unwrap();
    assert_eq!(doc.select(&plate_sel).count(), 11);

    let img_sel = Selector::parse(".plate img").unwrap();
    assert_eq!(doc.select(&img_sel).count(), 0);
}

#[test]
fn mixed_outcomes_render_independently() {
    let book = sample_book();
    let mut illustrations = Illustrations::new();
    illustrations.insert(
        "um-ali",
        ImageState::Resolved(ResolvedImage {
            mime_type: "image/png".into(),
            bytes: b"png".to_vec(),
        }),
    );
    illustrations.insert("sushi", ImageState::Failed(FailureReason::RequestFailure));
    // Everything else stays pending.

    let page = render_page(&book, &illustrations);
    let doc = Html::parse_document(&page.html);

    let resolved_sel = Selector::parse("figure[data-site=\"um-ali\"] img").unwrap();
    assert_eq!(doc.select(&resolved_sel).count(), 1);

    let failed_sel = Selector::parse("div[data-site=\"sushi\"].plate-missing").unwrap();
    assert_eq!(doc.select(&failed_sel).count(), 1);

    let pending_sel = Selector::parse(".plate-pending").unwrap();
    assert_eq!(doc.select(&pending_sel).count(), 9);
}

#[test]
fn chapter_content_survives_into_markup() {
    let book = sample_book();
    let page = render_page(&book, &Illustrations::new());

    // Spot-check a chapter body, a fun fact, and a variations panel.
    assert!(page.html.contains("UM ALI"));
    assert!(page.html.contains("Did you know?"));
    assert!(page.html.contains("Regional Variations"));
    assert!(page.html.contains("The Origin"));
    assert!(page.html.contains("Heritage"));
    assert!(page.html.contains("First Digital Edition"));
}
