//! Intermediate file cleanup.

use std::path::Path;

use crate::download::ChapterImageSet;

/// Delete every downloaded image referenced by the set, then try to
/// remove the per-chapter folders.
///
/// Best-effort: failures are never surfaced to the user, only traced
/// at debug level.
pub fn cleanup_images(set: &ChapterImageSet) {
    for records in set.values() {
        for record in records {
            remove_quietly(&record.local_path);
        }

        // Removing the folder only succeeds once it is empty.
        if let Some(folder) = records.first().and_then(|r| r.local_path.parent()) {
            let _ = std::fs::remove_dir(folder);
        }
    }
}

fn remove_quietly(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        tracing::debug!("Could not remove {}: {}", path.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::ImageRecord;
    use url::Url;

    fn record(path: std::path::PathBuf, chapter: u32, ordinal: usize) -> ImageRecord {
        ImageRecord {
            source_url: Url::parse("https://example.com/p.jpg").unwrap(),
            local_path: path,
            chapter,
            ordinal,
        }
    }

    #[test]
    fn test_removes_all_files_and_empty_folders() {
        let dir = tempfile::tempdir().unwrap();

        let mut set = ChapterImageSet::new();
        for chapter in 1..=2 {
            let folder = dir.path().join(format!("chapter_{}", chapter));
            std::fs::create_dir_all(&folder).unwrap();

            let mut records = Vec::new();
            for ordinal in 1..=3 {
                let path = folder.join(format!("image_{}.jpg", ordinal));
                std::fs::write(&path, b"fake image data").unwrap();
                records.push(record(path, chapter, ordinal));
            }
            set.insert(chapter, records);
        }

        cleanup_images(&set);

        for records in set.values() {
            for r in records {
                assert!(!r.local_path.exists());
            }
        }
        assert!(!dir.path().join("chapter_1").exists());
        assert!(!dir.path().join("chapter_2").exists());
    }

    #[test]
    fn test_missing_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut set = ChapterImageSet::new();
        set.insert(
            1,
            vec![record(dir.path().join("never_written.jpg"), 1, 1)],
        );

        // Must not panic or report anything.
        cleanup_images(&set);
    }

    #[test]
    fn test_nonempty_folder_survives() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("chapter_1");
        std::fs::create_dir_all(&folder).unwrap();

        let tracked = folder.join("image_1.jpg");
        std::fs::write(&tracked, b"tracked").unwrap();
        let untracked = folder.join("unrelated.txt");
        std::fs::write(&untracked, b"keep me").unwrap();

        let mut set = ChapterImageSet::new();
        set.insert(1, vec![record(tracked.clone(), 1, 1)]);

        cleanup_images(&set);

        assert!(!tracked.exists());
        assert!(untracked.exists());
        assert!(folder.exists());
    }
}
