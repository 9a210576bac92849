//! Run statistics tracking.

/// Counters accumulated over one pipeline run.
#[derive(Debug, Default)]
pub struct RunStats {
    pub chapters_processed: u64,
    /// Chapters that produced no usable images (fetch failure or an
    /// image-free page).
    pub chapters_empty: u64,
    pub images_found: u64,
    pub images_downloaded: u64,
    pub images_failed: u64,
    pub pages_written: u64,
}

impl RunStats {
    /// Chapters that contributed at least one image to the document.
    pub fn chapters_with_images(&self) -> u64 {
        self.chapters_processed - self.chapters_empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapters_with_images() {
        let stats = RunStats {
            chapters_processed: 5,
            chapters_empty: 2,
            ..Default::default()
        };
        assert_eq!(stats.chapters_with_images(), 3);
    }
}
