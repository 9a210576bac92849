//! Error types for the manga-gari application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Chapter range spans {requested} chapters, limit is {limit}")]
    ChapterLimit { requested: u32, limit: u32 },

    // Scraping errors
    #[error("Failed to retrieve page {url}: HTTP {status}")]
    PageFetch {
        url: String,
        status: reqwest::StatusCode,
    },

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    // Assembly errors
    #[error("No valid images to create PDF")]
    EmptyDocument,

    // File system errors
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Image decoding errors
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    // PDF construction errors
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes by failure category.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 2;
    pub const DOWNLOAD_ERROR: i32 = 3;
    pub const EMPTY_DOCUMENT: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
