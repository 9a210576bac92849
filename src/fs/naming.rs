//! Output filename handling.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Resolve the user-supplied output name to a `.pdf` path.
///
/// The name is sanitized first; the extension is appended when the
/// name does not already end in `.pdf`.
pub fn output_pdf_path(name: &str) -> Result<PathBuf> {
    let sanitized = sanitize_output_name(name)?;

    let with_ext = if sanitized.to_ascii_lowercase().ends_with(".pdf") {
        sanitized
    } else {
        format!("{}.pdf", sanitized)
    };

    Ok(PathBuf::from(with_ext))
}

/// Validate and sanitize an output name.
///
/// Path traversal, separators, and null bytes are rejected outright;
/// other problematic characters are replaced with underscores.
fn sanitize_output_name(name: &str) -> Result<String> {
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in output name: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in output name: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Output name cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}
