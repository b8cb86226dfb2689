//! Resource transfer: download-or-write a single extracted resource.

use std::path::Path;

use futures::StreamExt;

use crate::api::RedditApi;
use crate::error::{Error, Result};
use crate::media::Resource;

/// What happened to a resource at its target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferOutcome {
    /// The resource was fetched or written to disk.
    Written,
    /// A file was already present at the target path; nothing was touched.
    AlreadyExisted,
}

/// Strip HTML-entity-escaped ampersands (`&amp;`) the listing API leaves in
/// media URLs.
pub fn clean_media_url(url: &str) -> String {
    url.replace("amp;", "")
}

/// Materialize one resource at `path`.
///
/// An existing file wins before any network traffic. Remote bodies are
/// buffered completely before the file is created, so a failed transfer
/// never leaves a partial file behind.
pub async fn materialize(
    api: &RedditApi,
    resource: &Resource,
    path: &Path,
) -> Result<TransferOutcome> {
    if path.exists() {
        return Ok(TransferOutcome::AlreadyExisted);
    }

    match resource {
        Resource::Remote(url) => {
            let url = clean_media_url(url);
            let response = api.download_file(&url).await?;

            let mut body = Vec::new();
            let mut stream = response.bytes_stream();
            while let Some(chunk) = stream.next().await {
                let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
                body.extend_from_slice(&chunk);
            }

            tokio::fs::write(path, &body).await?;
        }
        Resource::Inline(content) => {
            if content.is_empty() {
                return Err(Error::EmptyContent);
            }
            tokio::fs::write(path, content).await?;
        }
    }

    Ok(TransferOutcome::Written)
}
