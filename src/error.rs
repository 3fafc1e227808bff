use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("HTML file not found: {0}")]
    HtmlNotFound(PathBuf),

    #[error("Browser binary not found at provided path: {0}")]
    BrowserNotFound(PathBuf),

    #[error("No Chrome/Chromium executable found. Use --browser to point to an existing binary.")]
    NoBrowserFound,

    #[error("Browser failed to generate PDF.\nCommand: {command}\nstdout: {stdout}\nstderr: {stderr}")]
    BrowserFailed {
        command: String,
        stdout: String,
        stderr: String,
    },

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
