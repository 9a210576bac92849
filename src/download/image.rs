//! Single image downloading.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::error::{Error, Result};

/// Derive the filename for an image from its 1-based ordinal position
/// and the extension of the URL's last path segment.
///
/// The query string never contributes to the extension; path segments
/// without a period fall back to `jpg`.
pub fn image_filename(url: &Url, ordinal: usize) -> String {
    format!("image_{}.{}", ordinal, file_extension(url))
}

fn file_extension(url: &Url) -> String {
    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or("");

    match segment.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_ascii_lowercase(),
        _ => "jpg".to_string(),
    }
}

/// Download one image into `target_dir`, streaming the body to disk.
///
/// Failures stay local to the image: the caller logs them and moves on
/// to the next image rather than aborting the chapter. A failed
/// download never leaves a partial file behind.
pub async fn download_image(
    client: &Client,
    image_url: &Url,
    target_dir: &Path,
    ordinal: usize,
) -> Result<PathBuf> {
    let response = client.get(image_url.clone()).send().await?;

    if !response.status().is_success() {
        return Err(Error::Download(format!(
            "HTTP {} for {}",
            response.status(),
            image_url
        )));
    }

    let output_path = target_dir.join(image_filename(image_url, ordinal));

    let mut file = File::create(&output_path).await?;

    if let Err(e) = write_body(response, &mut file).await {
        // Close the handle before removing the partial file; cleanup
        // only tracks completed downloads.
        drop(file);
        let _ = tokio::fs::remove_file(&output_path).await;
        return Err(e);
    }

    Ok(output_path)
}

/// Stream the response body into the open file.
async fn write_body(response: reqwest::Response, file: &mut File) -> Result<()> {
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
    }

    file.flush().await?;

    Ok(())
}
