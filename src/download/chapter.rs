//! Chapter aggregation: extract image URLs, download each image,
//! collect the successes.

use std::collections::BTreeMap;
use std::path::PathBuf;

use reqwest::Client;
use url::Url;

use crate::config::RunConfig;
use crate::download::image::download_image;
use crate::download::state::RunStats;
use crate::error::Result;
use crate::fs::paths::chapter_folder;
use crate::output::progress::create_item_bar;
use crate::scrape::fetch_image_urls;

/// One successfully downloaded image, positioned for PDF assembly.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    pub source_url: Url,
    pub local_path: PathBuf,
    /// Chapter the image belongs to.
    pub chapter: u32,
    /// 1-based position of the image within its chapter's listing.
    pub ordinal: usize,
}

/// Mapping from chapter number to that chapter's downloaded images.
///
/// The BTreeMap iterates chapters in ascending order, which is the
/// page order the assembled PDF requires; the Vec preserves the order
/// of appearance on the page.
pub type ChapterImageSet = BTreeMap<u32, Vec<ImageRecord>>;

/// Substitute a chapter number into a URL template containing a single
/// `{}` placeholder.
pub fn expand_template(template: &str, chapter: u32) -> Result<Url> {
    let expanded = template.replacen("{}", &chapter.to_string(), 1);
    Ok(Url::parse(&expanded)?)
}

/// Scrape one chapter page and download every image it lists, in
/// document order.
///
/// Individual image failures are logged and skipped; only successful
/// downloads are returned. A page-fetch failure propagates to the
/// caller, which treats the chapter as empty.
pub async fn download_chapter(
    client: &Client,
    config: &RunConfig,
    chapter: u32,
    page_url: &Url,
    stats: &mut RunStats,
) -> Result<Vec<ImageRecord>> {
    let image_urls = fetch_image_urls(client, page_url).await?;
    stats.images_found += image_urls.len() as u64;

    if image_urls.is_empty() {
        tracing::warn!("No images found on {}", page_url);
        return Ok(Vec::new());
    }

    // Per-chapter subfolder keeps ordinal-based filenames from
    // colliding across chapters.
    let folder = chapter_folder(&config.work_dir, chapter);
    tokio::fs::create_dir_all(&folder).await?;

    let bar = if config.show_progress {
        Some(create_item_bar(
            image_urls.len() as u64,
            &format!("Chapter {}", chapter),
        ))
    } else {
        None
    };

    let mut records = Vec::new();
    for (index, image_url) in image_urls.iter().enumerate() {
        let ordinal = index + 1;

        match download_image(client, image_url, &folder, ordinal).await {
            Ok(local_path) => {
                stats.images_downloaded += 1;
                records.push(ImageRecord {
                    source_url: image_url.clone(),
                    local_path,
                    chapter,
                    ordinal,
                });
            }
            Err(e) => {
                stats.images_failed += 1;
                tracing::warn!("Failed to download {}: {}", image_url, e);
            }
        }

        if let Some(ref bar) = bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    Ok(records)
}
