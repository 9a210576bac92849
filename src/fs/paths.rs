//! Path layout for intermediate downloads.

use std::path::{Path, PathBuf};

/// Per-chapter subfolder under the working directory.
pub fn chapter_folder(work_dir: &Path, chapter: u32) -> PathBuf {
    work_dir.join(format!("chapter_{}", chapter))
}
