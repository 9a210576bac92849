//! Manga Gari - manga chapter scraper and PDF bundler.
//!
//! This library provides the scrape-download-assemble pipeline behind
//! the `manga-gari` CLI:
//!
//! - Extract image URLs from a chapter page
//! - Download each image, skipping individual failures
//! - Aggregate chapters over an inclusive range
//! - Concatenate everything into a single PDF
//! - Clean up the intermediate images
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use manga_gari::config::{validate_config, RunConfig};
//! use manga_gari::download::{build_client, download_chapters, RunStats};
//! use manga_gari::{assemble_pdf, cleanup_images};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RunConfig::single("https://example.com/ch1", "chapter");
//!     validate_config(&config)?;
//!
//!     let client = build_client(&config)?;
//!     let mut stats = RunStats::default();
//!     let set = download_chapters(&client, &config, &mut stats).await?;
//!
//!     let pages = assemble_pdf(&set, Path::new("chapter.pdf"))?;
//!     println!("wrote {} pages", pages);
//!     cleanup_images(&set);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;
pub mod pdf;
pub mod scrape;

// Re-exports for convenience
pub use config::{Mode, RunConfig};
pub use download::{download_chapters, ChapterImageSet, ImageRecord, RunStats};
pub use error::{Error, Result};
pub use fs::cleanup_images;
pub use pdf::assemble_pdf;
