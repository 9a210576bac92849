//! Configuration validation logic.
//!
//! Admission rules run here, before any network call: a chapter range
//! that exceeds the configured ceiling is rejected without a single
//! page being fetched.

use url::Url;

use crate::config::{Mode, RunConfig};
use crate::error::{Error, Result};

/// Validate the entire run configuration.
pub fn validate_config(config: &RunConfig) -> Result<()> {
    if config.output_name.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "output".to_string(),
            message: "Output name cannot be empty".to_string(),
        });
    }

    match &config.mode {
        Mode::Single { url } => validate_page_url(url),
        Mode::Multi {
            template,
            start,
            end,
        } => {
            validate_template(template)?;
            validate_range(*start, *end, config.chapter_limit)
        }
    }
}

/// Validate that a chapter page URL parses and uses HTTP(S).
pub fn validate_page_url(url: &str) -> Result<()> {
    let parsed = Url::parse(url)?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::ConfigValidation {
            field: "url".to_string(),
            message: format!("Unsupported URL scheme '{}', expected http or https", other),
        }),
    }
}

/// Validate that a URL template carries exactly one `{}` placeholder
/// and expands to a valid HTTP(S) URL.
pub fn validate_template(template: &str) -> Result<()> {
    let placeholders = template.matches("{}").count();

    if placeholders != 1 {
        return Err(Error::ConfigValidation {
            field: "template".to_string(),
            message: format!(
                "Template must contain exactly one '{{}}' placeholder for the chapter number (found {})",
                placeholders
            ),
        });
    }

    // Substitute a sample chapter number so a malformed template fails
    // here rather than mid-run, after earlier chapters have already
    // been downloaded.
    let expanded = template.replacen("{}", "1", 1);
    validate_page_url(&expanded).map_err(|_| Error::ConfigValidation {
        field: "template".to_string(),
        message: format!("Template does not expand to a valid HTTP(S) URL: '{}'", expanded),
    })
}

/// Validate an inclusive chapter range against the configured ceiling.
pub fn validate_range(start: u32, end: u32, limit: u32) -> Result<()> {
    if start == 0 {
        return Err(Error::ConfigValidation {
            field: "start".to_string(),
            message: "Chapter numbers start at 1".to_string(),
        });
    }

    if start > end {
        return Err(Error::ConfigValidation {
            field: "end".to_string(),
            message: format!(
                "End chapter {} is before start chapter {}",
                end, start
            ),
        });
    }

    let requested = end - start + 1;
    if requested > limit {
        return Err(Error::ChapterLimit { requested, limit });
    }

    Ok(())
}
