use std::path::{Path, PathBuf};

use tracing::info;
use tracing_subscriber::EnvFilter;

mod browser;
mod error;
mod pdf;
mod server;

use crate::error::ExportError;

/// Use a local Chrome/Chromium-based browser to print a saved HTML page to a
/// PDF file. The page's directory is served over a loopback HTTP server so
/// its relative asset paths resolve.
#[derive(Debug, clap::Parser)]
struct Options {
    /// Path to the saved HTML file.
    html_file: PathBuf,
    /// Destination PDF path (defaults to the HTML path with a `.pdf` extension).
    output_pdf: Option<PathBuf>,
    /// Path to a Chrome/Chromium executable if it is not on your PATH.
    #[arg(long)]
    browser: Option<PathBuf>,
    /// Virtual time budget in milliseconds before printing.
    #[arg(long, default_value_t = 10000)]
    wait: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let opts: Options = clap::Parser::parse();

    let html_path = opts
        .html_file
        .canonicalize()
        .map_err(|_| ExportError::HtmlNotFound(opts.html_file.clone()))?;
    if !html_path.is_file() {
        return Err(ExportError::HtmlNotFound(html_path).into());
    }

    let output_pdf = resolve_output_path(&html_path, opts.output_pdf);
    let browser = browser::find_browser(opts.browser.as_deref())?;

    pdf::export_to_pdf(&html_path, &output_pdf, opts.wait, &browser).await?;
    info!("wrote {}", output_pdf.display());

    Ok(())
}

fn resolve_output_path(html_path: &Path, output_pdf: Option<PathBuf>) -> PathBuf {
    output_pdf.unwrap_or_else(|| html_path.with_extension("pdf"))
}
