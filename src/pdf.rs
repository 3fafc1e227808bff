use std::net::SocketAddr;
use std::path::Path;

use tokio::process::Command;
use tracing::info;
use url::Url;

use crate::error::ExportError;
use crate::server::StaticServer;

/// Construct the command used to print a page to PDF via headless Chrome.
pub fn build_print_command(
    browser: &Path,
    url: &str,
    output_pdf: &Path,
    wait_ms: u64,
) -> Vec<String> {
    vec![
        browser.display().to_string(),
        "--headless=new".to_string(),
        "--disable-gpu".to_string(),
        "--no-sandbox".to_string(),
        format!("--virtual-time-budget={wait_ms}"),
        format!("--print-to-pdf={}", output_pdf.display()),
        url.to_string(),
    ]
}

/// Serve the directory containing `html_path` and ask a headless browser to
/// print the page to `output_pdf`. The server is torn down on the failure
/// path as well.
pub async fn export_to_pdf(
    html_path: &Path,
    output_pdf: &Path,
    wait_ms: u64,
    browser: &Path,
) -> Result<(), ExportError> {
    let root = html_path.parent().unwrap_or_else(|| Path::new("."));
    let server = StaticServer::start(root).await?;

    let result = print_page(&server, html_path, output_pdf, wait_ms, browser).await;

    server.shutdown().await;
    result
}

async fn print_page(
    server: &StaticServer,
    html_path: &Path,
    output_pdf: &Path,
    wait_ms: u64,
    browser: &Path,
) -> Result<(), ExportError> {
    let file_name = html_path
        .file_name()
        .ok_or_else(|| ExportError::HtmlNotFound(html_path.to_path_buf()))?;
    let url = page_url(server.addr(), &file_name.to_string_lossy())?;

    let command = build_print_command(browser, url.as_str(), output_pdf, wait_ms);
    info!("running {}", command.join(" "));

    let output = Command::new(&command[0]).args(&command[1..]).output().await?;
    if !output.status.success() {
        return Err(ExportError::BrowserFailed {
            command: command.join(" "),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(())
}

fn page_url(addr: SocketAddr, file_name: &str) -> Result<Url, ExportError> {
    let mut url = Url::parse(&format!("http://{addr}/"))?;
    url.set_path(file_name);
    Ok(url)
}
