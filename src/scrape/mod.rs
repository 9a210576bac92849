//! Chapter page scraping.

pub mod extractor;

pub use extractor::{extract_image_urls, fetch_image_urls};
