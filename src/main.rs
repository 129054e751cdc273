use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use bookforge::images::{ImageBackend, ImageState, ResolverConfig, UnavailableBackend};

/// Render the illustrated book to a self-contained HTML page.
#[derive(Parser, Debug)]
#[command(name = "bookforge", version, about)]
struct Args {
    /// Output path for the rendered page
    #[arg(short, long, default_value = "book.html")]
    output: PathBuf,

    /// API key for the image service; falls back to $GEMINI_API_KEY.
    /// Without a key the page renders with placeholder imagery.
    #[arg(long)]
    api_key: Option<String>,

    /// Model identifier submitted with each image request
    #[arg(long, default_value = "gemini-2.5-flash-image")]
    model: String,

    /// Image service base URL
    #[arg(long, default_value = "https://generativelanguage.googleapis.com")]
    endpoint: String,

    /// Socket timeout per image request, in milliseconds
    #[arg(long, default_value_t = 30000)]
    timeout_ms: u64,

    /// Skip image generation entirely
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let book = bookforge::content::sample_book();
    book.validate().context("shipped book is invalid")?;

    // The credential is resolved once, here at the edge; the resolver only
    // ever sees an explicit Option.
    let credential = if args.offline {
        None
    } else {
        args.api_key
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
    };
    let config = ResolverConfig {
        credential,
        model: args.model,
        endpoint: args.endpoint,
        timeout_ms: args.timeout_ms,
    };

    let backend: Arc<dyn ImageBackend> = if config.credential.is_some() {
        new_backend(&config)?
    } else {
        Arc::new(UnavailableBackend::new())
    };

    let illustrations = bookforge::illustrate_document(&book, backend, &config).await;
    let resolved = book
        .image_sites()
        .iter()
        .filter(|(site, _)| matches!(illustrations.state_for(site), ImageState::Resolved(_)))
        .count();

    let page = bookforge::render_page(&book, &illustrations);
    std::fs::write(&args.output, &page.html)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!(
        "Wrote {} ({} anchors, {}/{} images, digest {})",
        args.output.display(),
        page.anchors.len(),
        resolved,
        book.image_sites().len(),
        &page.digest()[..12]
    );
    Ok(())
}

#[cfg(feature = "gemini")]
fn new_backend(config: &ResolverConfig) -> anyhow::Result<Arc<dyn ImageBackend>> {
    Ok(Arc::new(bookforge::default_backend(config)?))
}

#[cfg(not(feature = "gemini"))]
fn new_backend(_config: &ResolverConfig) -> anyhow::Result<Arc<dyn ImageBackend>> {
    // Built without the HTTP backend; render with placeholders instead.
    Ok(Arc::new(UnavailableBackend::new()))
}
