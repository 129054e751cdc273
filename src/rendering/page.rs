//! HTML writer for the book page.
//!
//! The page is one self-contained document: embedded stylesheet, sidebar
//! navigation, cover, preface, one chapter per section, author page. Image
//! sites render whatever state their request reached: a data URI when
//! resolved, otherwise a captioned placeholder.

use std::fmt::Write;

use crate::content::{Document, Section, ABOUT_ANCHOR, COVER_ANCHOR, INTRO_ANCHOR};
use crate::images::{Illustrations, ImageState};
use crate::rendering::{build_nav, NavKind, RenderedPage};

/// Status caption shown while a request is still pending.
const PENDING_CAPTION: &str = "Consulting Archives...";
/// Status caption shown when a request failed, whatever the reason.
const FAILED_CAPTION: &str = "Visual archive unavailable";
/// Colophon line on the author page.
const EDITION_LINE: &str = "First Digital Edition &bull; 2026";

const STYLESHEET: &str = r#"
:root { --ink: #2b211a; --paper: #fffcf5; --parchment: #f4e4bc; --leather: #1c1917; --accent: #92400e; --accent-soft: #fde68a; }
* { box-sizing: border-box; margin: 0; }
body { display: flex; font-family: Georgia, 'Times New Roman', serif; color: var(--ink); background: var(--paper); }
.toc { position: sticky; top: 0; align-self: flex-start; height: 100vh; width: 16rem; flex-shrink: 0; overflow-y: auto; padding: 1.5rem; background: var(--leather); color: #d6d3d1; }
.toc h2 { font-size: 0.95rem; letter-spacing: 0.3em; text-transform: uppercase; color: var(--accent-soft); margin-bottom: 2rem; }
.toc nav { display: flex; flex-direction: column; gap: 0.25rem; }
.toc a { color: #a8a29e; text-decoration: none; font-size: 0.85rem; padding: 0.4rem 0.6rem; border-radius: 4px; }
.toc a:hover { color: #f5f5f4; background: rgba(146, 64, 14, 0.2); }
.toc .toc-front { font-size: 0.72rem; letter-spacing: 0.2em; text-transform: uppercase; }
.toc .toc-heading { font-size: 0.6rem; letter-spacing: 0.3em; text-transform: uppercase; color: #57534e; padding: 1rem 0.6rem 0.25rem; }
main { flex: 1; min-width: 0; }
section { min-height: 100vh; padding: 5rem 2.5rem; border-bottom: 1px solid #e7e5e4; }
.cover { display: flex; align-items: center; justify-content: center; background: var(--leather); }
.cover-plate { max-width: 44rem; width: 100%; background: var(--parchment); border: 12px solid #451a03; padding: 4rem 3rem; text-align: center; }
.cover-plate h1 { font-size: 3.2rem; letter-spacing: 0.08em; color: #451a03; margin-bottom: 0.75rem; }
.cover-plate .subtitle { font-style: italic; font-size: 1.3rem; color: var(--accent); margin-bottom: 2.5rem; }
.cover-plate .credit-label { font-size: 0.65rem; letter-spacing: 0.4em; text-transform: uppercase; color: var(--accent); margin-top: 2.5rem; }
.cover-plate .credit { font-size: 1.5rem; letter-spacing: 0.15em; text-transform: uppercase; color: #451a03; font-weight: bold; }
.preface { display: flex; align-items: center; justify-content: center; }
.preface > div { max-width: 38rem; }
.preface h2 { font-size: 2.2rem; color: #451a03; border-bottom: 2px solid rgba(146, 64, 14, 0.15); padding-bottom: 1rem; margin-bottom: 2.5rem; }
.preface p { font-size: 1.15rem; line-height: 1.8; margin-bottom: 1.6rem; }
.chapter > div { max-width: 62rem; margin: 0 auto; }
.chapter header { text-align: center; margin-bottom: 3.5rem; }
.chapter .kicker { font-size: 0.7rem; letter-spacing: 0.5em; text-transform: uppercase; color: var(--accent); font-weight: bold; }
.chapter h2 { font-size: 3.4rem; letter-spacing: 0.05em; text-transform: uppercase; color: #451a03; margin-top: 0.5rem; }
.chapter-body { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: start; }
.chapter-text h3 { font-size: 1.35rem; letter-spacing: 0.15em; text-transform: uppercase; color: var(--accent); margin: 2rem 0 1rem; }
.chapter-text h3:first-child { margin-top: 0; }
.chapter-text p { line-height: 1.9; margin-bottom: 1rem; font-size: 1.05rem; }
.plate { width: 100%; aspect-ratio: 4 / 3; border-radius: 8px; overflow: hidden; box-shadow: 0 12px 30px rgba(0, 0, 0, 0.25); }
.plate img { width: 100%; height: 100%; object-fit: cover; display: block; }
.plate-pending, .plate-missing { display: flex; align-items: center; justify-content: center; box-shadow: none; }
.plate-pending { background: #e7e5e4; }
.plate-missing { background: #d6d3d1; }
.plate-status { font-size: 0.7rem; letter-spacing: 0.25em; text-transform: uppercase; color: rgba(69, 26, 3, 0.45); }
.caption { font-size: 0.9rem; font-style: italic; color: #78716c; border-left: 2px solid var(--accent-soft); padding-left: 1rem; margin-top: 1rem; }
.fun-fact { background: rgba(253, 230, 138, 0.25); border: 1px solid var(--accent-soft); padding: 1.5rem; margin-top: 1.5rem; border-radius: 2px; }
.fun-fact h4 { font-size: 0.7rem; letter-spacing: 0.25em; text-transform: uppercase; color: var(--accent); margin-bottom: 0.75rem; }
.fun-fact p { font-style: italic; line-height: 1.7; }
.variations { margin-top: 4rem; padding: 3rem; background: var(--leather); color: #e7e5e4; border-radius: 8px; }
.variations h3 { font-size: 1.8rem; letter-spacing: 0.15em; text-transform: uppercase; color: var(--accent-soft); border-bottom: 1px solid #292524; padding-bottom: 1rem; margin-bottom: 2rem; }
.variations .variations-body { display: grid; grid-template-columns: 1fr 1fr; gap: 2.5rem; }
.variations p { line-height: 1.8; font-size: 1.05rem; }
.author { display: flex; align-items: center; justify-content: center; background: var(--leather); color: #e7e5e4; text-align: center; }
.author > div { max-width: 34rem; }
.author h2 { font-size: 1.6rem; letter-spacing: 0.4em; text-transform: uppercase; color: var(--accent); margin-bottom: 2.5rem; }
.author .author-name { font-size: 2.6rem; letter-spacing: 0.15em; text-transform: uppercase; color: var(--accent-soft); margin-bottom: 2rem; }
.author .about-book { font-size: 1.05rem; line-height: 1.8; color: #a8a29e; margin-bottom: 2rem; }
.author blockquote { font-size: 1.3rem; font-style: italic; line-height: 1.8; color: #d6d3d1; }
.author .edition { font-size: 0.6rem; letter-spacing: 0.6em; text-transform: uppercase; color: #57534e; margin-top: 4rem; }
"#;

/// Escape text for interpolation into element content or attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn push_paragraphs(html: &mut String, paragraphs: &[String]) {
    for p in paragraphs {
        let _ = writeln!(html, "<p>{}</p>", escape_html(p));
    }
}

/// Emit one image site in whatever state its request reached.
fn push_image_site(html: &mut String, site: &str, alt: &str, state: &ImageState) {
    match state {
        ImageState::Resolved(image) => {
            let _ = writeln!(
                html,
                "<figure class=\"plate\" data-site=\"{}\"><img src=\"{}\" alt=\"{}\"></figure>",
                escape_html(site),
                image.data_uri(),
                escape_html(alt)
            );
        }
        ImageState::Pending => {
            let _ = writeln!(
                html,
                "<div class=\"plate plate-pending\" data-site=\"{}\"><span class=\"plate-status\">{}</span></div>",
                escape_html(site),
                PENDING_CAPTION
            );
        }
        ImageState::Failed(reason) => {
            log::debug!("rendering failure placeholder for site {}: {:?}", site, reason);
            let _ = writeln!(
                html,
                "<div class=\"plate plate-missing\" data-site=\"{}\"><span class=\"plate-status\">{}</span></div>",
                escape_html(site),
                FAILED_CAPTION
            );
        }
    }
}

fn push_nav(html: &mut String, document: &Document) {
    html.push_str("<aside class=\"toc\">\n");
    let _ = writeln!(html, "<h2>{}</h2>", escape_html(&document.title));
    html.push_str("<nav>\n");
    for entry in build_nav(document) {
        // Front/back matter gets the small-caps treatment; chapters don't.
        let class = if matches!(entry.kind, NavKind::Chapter(_)) {
            ""
        } else {
            " class=\"toc-front\""
        };
        let _ = writeln!(
            html,
            "<a{} href=\"#{}\">{}</a>",
            class,
            escape_html(&entry.anchor),
            escape_html(&entry.label)
        );
        if entry.kind == NavKind::Preface {
            html.push_str("<div class=\"toc-heading\">Chapters</div>\n");
        }
    }
    html.push_str("</nav>\n</aside>\n");
}

fn push_cover(html: &mut String, document: &Document, illustrations: &Illustrations) {
    let _ = writeln!(html, "<section id=\"{}\" class=\"cover\">", COVER_ANCHOR);
    html.push_str("<div class=\"cover-plate\">\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape_html(&document.title));
    let _ = writeln!(
        html,
        "<p class=\"subtitle\">{}</p>",
        escape_html(&document.subtitle)
    );
    push_image_site(
        html,
        COVER_ANCHOR,
        "Cover",
        illustrations.state_for(COVER_ANCHOR),
    );
    html.push_str("<p class=\"credit-label\">Authored By</p>\n");
    let _ = writeln!(
        html,
        "<p class=\"credit\">{}</p>",
        escape_html(&document.author)
    );
    html.push_str("</div>\n</section>\n");
}

fn push_preface(html: &mut String, document: &Document) {
    let _ = writeln!(html, "<section id=\"{}\" class=\"preface\">", INTRO_ANCHOR);
    html.push_str("<div>\n<h2>Preface</h2>\n");
    push_paragraphs(html, &document.introduction);
    html.push_str("</div>\n</section>\n");
}

fn push_chapter(
    html: &mut String,
    section: &Section,
    number: usize,
    illustrations: &Illustrations,
) {
    let _ = writeln!(
        html,
        "<section id=\"{}\" class=\"chapter\">",
        escape_html(&section.id)
    );
    html.push_str("<div>\n<header>\n");
    let _ = writeln!(
        html,
        "<span class=\"kicker\">Chapter {} &bull; {}</span>",
        number,
        escape_html(&section.country)
    );
    let _ = writeln!(html, "<h2>{}</h2>", escape_html(&section.title));
    html.push_str("</header>\n<div class=\"chapter-body\">\n<div class=\"chapter-visual\">\n");

    push_image_site(
        html,
        &section.id,
        &section.title,
        illustrations.state_for(&section.id),
    );
    if let Some(caption) = section.captions.first() {
        let _ = writeln!(html, "<p class=\"caption\">{}</p>", escape_html(caption));
    }
    if let Some(fact) = &section.did_you_know {
        html.push_str("<div class=\"fun-fact\">\n<h4>Did you know?</h4>\n");
        let _ = writeln!(html, "<p>&quot;{}&quot;</p>", escape_html(fact));
        html.push_str("</div>\n");
    }

    html.push_str("</div>\n<div class=\"chapter-text\">\n<h3>The Origin</h3>\n");
    push_paragraphs(html, &section.history);
    html.push_str("<h3>Heritage</h3>\n");
    push_paragraphs(html, &section.significance);
    html.push_str("</div>\n</div>\n");

    if let Some(variations) = &section.variations {
        html.push_str("<div class=\"variations\">\n");
        let _ = writeln!(html, "<h3>{}</h3>", escape_html(&variations.title));
        html.push_str("<div class=\"variations-body\">\n");
        push_paragraphs(html, &variations.content);
        html.push_str("</div>\n</div>\n");
    }

    html.push_str("</div>\n</section>\n");
}

fn push_author(html: &mut String, document: &Document) {
    let _ = writeln!(html, "<section id=\"{}\" class=\"author\">", ABOUT_ANCHOR);
    html.push_str("<div>\n<h2>The Author</h2>\n");
    let _ = writeln!(
        html,
        "<p class=\"author-name\">{}</p>",
        escape_html(&document.author)
    );
    let _ = writeln!(
        html,
        "<p class=\"about-book\">{}</p>",
        escape_html(&document.about_book)
    );
    let _ = writeln!(
        html,
        "<blockquote>&quot;{}&quot;</blockquote>",
        escape_html(&document.about_author)
    );
    let _ = writeln!(html, "<p class=\"edition\">{}</p>", EDITION_LINE);
    html.push_str("</div>\n</section>\n");
}

/// Render the whole page for `document`, substituting each image site's
/// resolver outcome. Rendering never fails; missing illustrations simply
/// fall back to the pending placeholder.
pub fn render_page(document: &Document, illustrations: &Illustrations) -> RenderedPage {
    let title = format!("{} - {}", document.title, document.subtitle);
    let mut html = String::with_capacity(64 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(&title));
    let _ = writeln!(html, "<style>{}</style>", STYLESHEET);
    html.push_str("</head>\n<body>\n");

    push_nav(&mut html, document);

    html.push_str("<main>\n");
    push_cover(&mut html, document, illustrations);
    push_preface(&mut html, document);
    for (i, section) in document.sections.iter().enumerate() {
        push_chapter(&mut html, section, i + 1, illustrations);
    }
    push_author(&mut html, document);
    html.push_str("</main>\n</body>\n</html>\n");

    let anchors = document
        .anchor_ids()
        .into_iter()
        .map(|s| s.to_string())
        .collect();

    RenderedPage {
        html,
        anchors,
        title,
    }
}
