//! Run configuration for the manga-gari pipeline.
//!
//! This module handles:
//! - The mode selector (single chapter vs. chapter range)
//! - Per-run options resolved from CLI arguments
//! - Configuration validation

pub mod validation;

pub use validation::validate_config;

use std::path::PathBuf;

/// Default ceiling on chapters per invocation.
pub const DEFAULT_CHAPTER_LIMIT: u32 = 15;

/// Default directory for intermediate image downloads.
pub const DEFAULT_WORK_DIR: &str = "images";

/// Pipeline mode, passed explicitly into the pipeline entry point.
#[derive(Debug, Clone)]
pub enum Mode {
    /// Scrape one chapter page.
    Single { url: String },
    /// Scrape an inclusive chapter range via a URL template containing
    /// a single `{}` placeholder.
    Multi {
        template: String,
        start: u32,
        end: u32,
    },
}

/// Everything one pipeline run needs. There is no persisted
/// configuration; a run is a single interactive session.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub mode: Mode,

    /// User-supplied output name; ".pdf" is appended when missing.
    pub output_name: String,

    /// Directory holding the per-chapter image subfolders.
    pub work_dir: PathBuf,

    /// Maximum chapters allowed per invocation.
    pub chapter_limit: u32,

    /// Request timeout in seconds; no timeout when unset.
    pub timeout_seconds: Option<u64>,

    /// Keep intermediate images instead of cleaning them up.
    pub keep_images: bool,

    /// Show progress bars during downloads.
    pub show_progress: bool,

    /// Enable debug logging.
    pub debug: bool,
}

impl RunConfig {
    /// Single-chapter configuration with default options.
    pub fn single(url: impl Into<String>, output_name: impl Into<String>) -> Self {
        Self::with_mode(Mode::Single { url: url.into() }, output_name)
    }

    /// Multi-chapter configuration with default options.
    pub fn multi(
        template: impl Into<String>,
        start: u32,
        end: u32,
        output_name: impl Into<String>,
    ) -> Self {
        Self::with_mode(
            Mode::Multi {
                template: template.into(),
                start,
                end,
            },
            output_name,
        )
    }

    fn with_mode(mode: Mode, output_name: impl Into<String>) -> Self {
        Self {
            mode,
            output_name: output_name.into(),
            work_dir: PathBuf::from(DEFAULT_WORK_DIR),
            chapter_limit: DEFAULT_CHAPTER_LIMIT,
            timeout_seconds: None,
            keep_images: false,
            show_progress: true,
            debug: false,
        }
    }
}
