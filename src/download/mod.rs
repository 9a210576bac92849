//! Download module for the scrape-and-fetch phase.
//!
//! This module provides:
//! - HTTP client construction
//! - Per-image downloading
//! - Chapter aggregation over a range
//! - Run statistics tracking

pub mod chapter;
pub mod image;
pub mod state;

pub use chapter::{download_chapter, expand_template, ChapterImageSet, ImageRecord};
pub use image::download_image;
pub use state::RunStats;

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::config::{Mode, RunConfig};
use crate::error::Result;

/// Browser-like user agent; some manga hosts reject the reqwest
/// default.
const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:140.0) Gecko/20100101 Firefox/140.0";

/// Build the HTTP client for a run. No timeout is set unless the
/// configuration asks for one.
pub fn build_client(config: &RunConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);

    if let Some(seconds) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(seconds));
    }

    Ok(builder.build()?)
}

/// Run the extraction + download phase for the configured mode and
/// collect successful downloads keyed by chapter number.
///
/// Chapters are processed strictly one at a time, images one at a
/// time. Chapters that yield zero images are absent from the result;
/// whether the run as a whole produced anything is decided later, at
/// assembly time.
pub async fn download_chapters(
    client: &Client,
    config: &RunConfig,
    stats: &mut RunStats,
) -> Result<ChapterImageSet> {
    let mut set = ChapterImageSet::new();

    match &config.mode {
        Mode::Single { url } => {
            let page_url = Url::parse(url)?;
            tracing::info!("Scraping {}", page_url);
            collect_chapter(client, config, 1, &page_url, stats, &mut set).await;
        }
        Mode::Multi {
            template,
            start,
            end,
        } => {
            for chapter in *start..=*end {
                let page_url = expand_template(template, chapter)?;
                tracing::info!("Scraping chapter {} ...", chapter);
                collect_chapter(client, config, chapter, &page_url, stats, &mut set).await;
            }
        }
    }

    Ok(set)
}

/// Download one chapter and record the outcome. Failures are reported
/// and leave the chapter absent from the set; the run continues.
async fn collect_chapter(
    client: &Client,
    config: &RunConfig,
    chapter: u32,
    page_url: &Url,
    stats: &mut RunStats,
    set: &mut ChapterImageSet,
) {
    stats.chapters_processed += 1;

    match download_chapter(client, config, chapter, page_url, stats).await {
        Ok(records) if !records.is_empty() => {
            set.insert(chapter, records);
        }
        Ok(_) => {
            stats.chapters_empty += 1;
        }
        Err(e) => {
            stats.chapters_empty += 1;
            tracing::warn!("Chapter {}: {}", chapter, e);
        }
    }
}
