//! Publisher: ships a rendered page to static hosting and returns its public URL.
//!
//! `AppState` holds an `Arc<dyn Publisher>`; production uses `NetlifyPublisher`.

use async_trait::async_trait;
use thiserror::Error;

pub mod archive;
pub mod netlify;

pub use netlify::NetlifyPublisher;

/// Name of the single file inside every deploy archive.
pub const INDEX_FILE: &str = "index.html";

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("missing hosting configuration: {0}")]
    MissingConfig(&'static str),

    #[error("failed to build deploy archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("failed to write deploy archive: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("hosting API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("deploy response contained no URL")]
    MissingUrl,
}

#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publishes `html` as a one-page site and returns its live URL.
    async fn publish(&self, html: &str) -> Result<String, PublishError>;
}
