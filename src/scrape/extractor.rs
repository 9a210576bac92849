//! Image URL extraction from chapter pages.

use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::error::{Error, Result};

/// Fetch a chapter page and return the absolute URLs of every image on
/// it, in document order.
///
/// A non-success HTTP status is an error; the caller decides whether
/// the run continues. Nothing is retried.
pub async fn fetch_image_urls(client: &Client, page_url: &Url) -> Result<Vec<Url>> {
    let response = client.get(page_url.clone()).send().await?;

    if !response.status().is_success() {
        return Err(Error::PageFetch {
            url: page_url.to_string(),
            status: response.status(),
        });
    }

    let body = response.text().await?;
    Ok(extract_image_urls(&body, page_url))
}

/// Extract `<img src>` URLs from an HTML document, resolving relative
/// sources against the page URL.
///
/// Tags without a `src` attribute are skipped, as are sources that
/// cannot be resolved to a valid URL.
pub fn extract_image_urls(html: &str, page_url: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("img").unwrap();

    let mut urls = Vec::new();
    for element in document.select(&selector) {
        let Some(src) = element.value().attr("src") else {
            continue;
        };

        match page_url.join(src) {
            Ok(absolute) => urls.push(absolute),
            Err(e) => {
                tracing::warn!("Skipping unresolvable image URL '{}': {}", src, e);
            }
        }
    }

    urls
}
