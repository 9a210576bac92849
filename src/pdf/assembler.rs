//! PDF assembly from downloaded chapter images.

use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::download::ChapterImageSet;
use crate::error::{Error, Result};

/// JPEG quality used when re-encoding normalized pages.
const JPEG_QUALITY: u8 = 90;

/// One decoded image, normalized and ready for embedding.
struct PageImage {
    jpeg_data: Vec<u8>,
    width: u32,
    height: u32,
}

/// Concatenate every downloaded image into a single PDF at `output`
/// and return the number of pages written.
///
/// Chapters are taken in ascending order and images within a chapter
/// in ordinal order. Each image is normalized to 8-bit RGB (an
/// intentionally lossy step that drops alpha and color-profile
/// metadata) and becomes one full-bleed page sized to its pixel
/// dimensions. Images that fail to load are skipped with a warning;
/// if nothing remains, no file is written and `Error::EmptyDocument`
/// is returned.
pub fn assemble_pdf(set: &ChapterImageSet, output: &Path) -> Result<u64> {
    let mut pages = Vec::new();

    for (chapter, records) in set {
        for record in records {
            match load_page(&record.local_path) {
                Ok(page) => pages.push(page),
                Err(e) => {
                    tracing::warn!(
                        "Skipping {} (chapter {}): {}",
                        record.local_path.display(),
                        chapter,
                        e
                    );
                }
            }
        }
    }

    if pages.is_empty() {
        return Err(Error::EmptyDocument);
    }

    let page_count = pages.len() as u64;
    let mut doc = build_document(pages)?;
    doc.save(output)?;

    Ok(page_count)
}

/// Decode an image file and re-encode it as an RGB JPEG.
fn load_page(path: &Path) -> Result<PageImage> {
    let decoded = image::open(path)?;
    let rgb = decoded.to_rgb8();

    let mut jpeg_data = Vec::new();
    rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut jpeg_data, JPEG_QUALITY))?;

    Ok(PageImage {
        jpeg_data,
        width: rgb.width(),
        height: rgb.height(),
    })
}

/// Build the document: one page per image, each a DCTDecode image
/// XObject drawn full-bleed on a page whose size in points equals the
/// pixel size.
fn build_document(pages: Vec<PageImage>) -> Result<Document> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::new();
    for page in pages {
        let width = page.width as i64;
        let height = page.height as i64;

        let image_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width,
                "Height" => height,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            },
            page.jpeg_data,
        ));

        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        width.into(),
                        0.into(),
                        0.into(),
                        height.into(),
                        0.into(),
                        0.into(),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(b"Im0".to_vec())]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => dictionary! { "Im0" => image_id },
            },
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::ImageRecord;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use std::path::PathBuf;
    use url::Url;

    fn record(path: PathBuf, chapter: u32, ordinal: usize) -> ImageRecord {
        ImageRecord {
            source_url: Url::parse("https://example.com/p.png").unwrap(),
            local_path: path,
            chapter,
            ordinal,
        }
    }

    fn write_test_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbImage::from_pixel(width, height, Rgb([200, 40, 40]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_page_count_matches_image_count() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.pdf");

        let mut set = ChapterImageSet::new();
        set.insert(
            1,
            vec![
                record(write_test_image(dir.path(), "a.png", 8, 12), 1, 1),
                record(write_test_image(dir.path(), "b.png", 8, 12), 1, 2),
                record(write_test_image(dir.path(), "c.png", 8, 12), 1, 3),
            ],
        );

        let pages = assemble_pdf(&set, &output).unwrap();
        assert_eq!(pages, 3);

        let doc = Document::load(&output).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
    }

    #[test]
    fn test_pages_follow_chapter_then_ordinal_order() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.pdf");

        // Distinct widths encode the expected order; chapters are
        // inserted out of order on purpose.
        let mut set = ChapterImageSet::new();
        set.insert(
            2,
            vec![record(write_test_image(dir.path(), "c2.png", 30, 10), 2, 1)],
        );
        set.insert(
            1,
            vec![
                record(write_test_image(dir.path(), "c1a.png", 10, 10), 1, 1),
                record(write_test_image(dir.path(), "c1b.png", 20, 10), 1, 2),
            ],
        );

        assemble_pdf(&set, &output).unwrap();

        let doc = Document::load(&output).unwrap();
        let mut widths = Vec::new();
        for (_number, page_id) in doc.get_pages() {
            let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
            let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
            widths.push(media_box[2].as_i64().unwrap());
        }
        assert_eq!(widths, vec![10, 20, 30]);
    }

    #[test]
    fn test_empty_set_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.pdf");

        let set = ChapterImageSet::new();
        assert!(matches!(
            assemble_pdf(&set, &output),
            Err(Error::EmptyDocument)
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_all_images_unreadable_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.pdf");

        let mut set = ChapterImageSet::new();
        set.insert(1, vec![record(dir.path().join("missing.png"), 1, 1)]);

        assert!(matches!(
            assemble_pdf(&set, &output),
            Err(Error::EmptyDocument)
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_undecodable_image_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.pdf");

        let broken = dir.path().join("broken.png");
        std::fs::write(&broken, b"not an image").unwrap();

        let mut set = ChapterImageSet::new();
        set.insert(
            1,
            vec![
                record(write_test_image(dir.path(), "ok.png", 8, 8), 1, 1),
                record(broken, 1, 2),
            ],
        );

        let pages = assemble_pdf(&set, &output).unwrap();
        assert_eq!(pages, 1);
    }

    #[test]
    fn test_alpha_images_are_flattened_to_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.pdf");

        let path = dir.path().join("alpha.png");
        RgbaImage::from_pixel(6, 6, Rgba([0, 0, 0, 0]))
            .save(&path)
            .unwrap();

        let mut set = ChapterImageSet::new();
        set.insert(1, vec![record(path, 1, 1)]);

        let pages = assemble_pdf(&set, &output).unwrap();
        assert_eq!(pages, 1);
    }
}
