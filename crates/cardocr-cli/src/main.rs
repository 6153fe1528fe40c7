//! Command-line OCR upload client.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cardocr_client::OcrClient;
use cardocr_form::OcrForm;
use cardocr_models::{DocumentImage, DocumentSide};

#[derive(Parser)]
#[command(name = "cardocr")]
#[command(about = "Upload both sides of an identity document to the OCR service")]
#[command(version)]
struct Cli {
    /// Path to the front-side image
    front: PathBuf,

    /// Path to the back-side image
    back: PathBuf,

    /// Print the scan as compact JSON instead of pretty-printed
    #[arg(long)]
    raw: bool,
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for TLS/HTTPS)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("cardocr_cli=info".parse().unwrap())
        .add_directive("cardocr_client=info".parse().unwrap())
        .add_directive("cardocr_form=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("OCR submission failed: {e:#}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = OcrClient::from_env()?;
    info!(base_url = client.base_url(), "Submitting document for OCR");

    let mut form = OcrForm::new(client);
    form.select(DocumentSide::Front, load_image(&cli.front).await?)?;
    form.select(DocumentSide::Back, load_image(&cli.back).await?)?;

    let scan = form
        .submit()
        .await
        .map_err(|notice| anyhow::anyhow!("{notice}"))?;

    if cli.raw {
        println!("{scan}");
    } else {
        println!("{}", scan.to_pretty());
    }

    Ok(())
}

async fn load_image(path: &Path) -> anyhow::Result<DocumentImage> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload")
        .to_string();

    Ok(DocumentImage::new(file_name, content_type_for(path), bytes)?)
}

/// Advisory content-type inference from the file extension.
///
/// Covers the types the picker accepted; anything else goes up as an opaque
/// blob and the form logs the mismatch.
fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
