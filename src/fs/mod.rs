//! Filesystem helpers: output naming, chapter paths, cleanup.

pub mod cleanup;
pub mod naming;
pub mod paths;

pub use cleanup::cleanup_images;
pub use naming::output_pdf_path;
pub use paths::chapter_folder;
