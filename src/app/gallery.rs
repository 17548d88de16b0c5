// SPDX-License-Identifier: MPL-2.0
//! Directory-backed image collection with a cursor.
//!
//! The gallery is the provider side of the viewer: it owns the ordered list
//! of records and moves the cursor when the viewer asks for the previous or
//! next image. Movement never wraps.

use crate::config::SortOrder;
use crate::domain::gallery::{ImageId, ImageRecord, OrderedCollection};
use crate::error::{Error, Result};
use crate::viewer::Direction;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// File extensions the gallery picks up (compared case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "tif", "tiff", "webp", "ico",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    directory: PathBuf,
    collection: OrderedCollection,
    cursor: Option<usize>,
}

impl Gallery {
    /// Scans `directory` for supported images and sorts them.
    ///
    /// Returns an error if the directory cannot be read.
    pub fn scan(directory: &Path, sort_order: SortOrder) -> Result<Self> {
        let mut files = Vec::new();

        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_supported_image(&path) {
                files.push(path);
            }
        }

        sort_image_files(&mut files, sort_order);

        let records = files.iter().filter_map(|path| record_for_path(path)).collect();
        let collection = OrderedCollection::new(records)?;
        log::debug!(
            "scanned {}: {} image(s)",
            directory.display(),
            collection.len()
        );

        Ok(Self {
            directory: directory.to_path_buf(),
            collection,
            cursor: None,
        })
    }

    /// Builds a gallery over an existing collection.
    #[must_use]
    pub fn from_collection(directory: PathBuf, collection: OrderedCollection) -> Self {
        Self {
            directory,
            collection,
            cursor: None,
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    #[must_use]
    pub fn collection(&self) -> &OrderedCollection {
        &self.collection
    }

    #[must_use]
    pub fn current(&self) -> Option<&ImageRecord> {
        self.cursor.and_then(|index| self.collection.get(index))
    }

    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Moves the cursor onto `id`.
    pub fn select(&mut self, id: &ImageId) -> Option<ImageRecord> {
        let index = self.collection.position(id)?;
        self.cursor = Some(index);
        self.current().cloned()
    }

    /// Moves the cursor one step. Returns `None` at a boundary.
    pub fn step(&mut self, direction: Direction) -> Option<ImageRecord> {
        let index = self.cursor?;
        let target = match direction {
            Direction::Previous => index.checked_sub(1)?,
            Direction::Next => index + 1,
        };
        if target >= self.collection.len() {
            return None;
        }
        self.cursor = Some(target);
        self.current().cloned()
    }
}

/// Scans on the blocking pool so EXIF parsing does not stall the UI.
pub async fn scan_async(directory: PathBuf, sort_order: SortOrder) -> Result<Gallery> {
    tokio::task::spawn_blocking(move || Gallery::scan(&directory, sort_order))
        .await
        .unwrap_or_else(|e| Err(Error::Io(format!("Scan task failed: {e}"))))
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

fn sort_image_files(files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH)
            });
        }
    }
}

fn record_for_path(path: &Path) -> Option<ImageRecord> {
    let file_name = path.file_name()?.to_str()?;
    let display_name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name);
    let author = read_artist(path).unwrap_or_default();

    Some(ImageRecord::new(
        file_name,
        display_name,
        path.to_string_lossy(),
        author,
    ))
}

/// Reads the EXIF `Artist` tag, if the file carries one.
fn read_artist(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut reader).ok()?;
    let field = exif.get_field(exif::Tag::Artist, exif::In::PRIMARY)?;

    let artist = field
        .display_value()
        .to_string()
        .trim_matches('"')
        .trim()
        .to_string();
    (!artist.is_empty()).then_some(artist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    fn ids(gallery: &Gallery) -> Vec<String> {
        gallery
            .collection()
            .iter()
            .map(|record| record.id().to_string())
            .collect()
    }

    #[test]
    fn scan_finds_images_and_skips_other_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "b.png");
        create_test_image(temp_dir.path(), "a.JPG");
        create_test_image(temp_dir.path(), "notes.txt");
        fs::create_dir(temp_dir.path().join("nested.png")).expect("failed to create dir");

        let gallery =
            Gallery::scan(temp_dir.path(), SortOrder::Alphabetical).expect("scan failed");

        assert_eq!(ids(&gallery), vec!["a.JPG", "b.png"]);
        assert!(gallery.current().is_none());
    }

    #[test]
    fn records_use_file_stem_and_path() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = create_test_image(temp_dir.path(), "sunset.webp");

        let gallery =
            Gallery::scan(temp_dir.path(), SortOrder::Alphabetical).expect("scan failed");
        let record = gallery.collection().first().expect("one record");

        assert_eq!(record.display_name(), "sunset");
        assert_eq!(record.source_url(), path.to_string_lossy());
        // Fake bytes carry no EXIF.
        assert_eq!(record.author_name(), "");
    }

    #[test]
    fn scan_missing_directory_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("missing");
        assert!(matches!(
            Gallery::scan(&missing, SortOrder::Alphabetical),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn step_stops_at_boundaries() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        for name in ["a.png", "b.png", "c.png"] {
            create_test_image(temp_dir.path(), name);
        }
        let mut gallery =
            Gallery::scan(temp_dir.path(), SortOrder::Alphabetical).expect("scan failed");

        assert!(gallery.step(Direction::Next).is_none());

        gallery.select(&ImageId::new("a.png")).expect("a.png exists");
        assert!(gallery.step(Direction::Previous).is_none());
        assert_eq!(gallery.cursor(), Some(0));

        assert_eq!(
            gallery.step(Direction::Next).map(|r| r.id().to_string()),
            Some("b.png".to_string())
        );
        assert_eq!(
            gallery.step(Direction::Next).map(|r| r.id().to_string()),
            Some("c.png".to_string())
        );
        assert!(gallery.step(Direction::Next).is_none());
        assert_eq!(gallery.cursor(), Some(2));
    }

    #[test]
    fn select_unknown_id_keeps_cursor() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_image(temp_dir.path(), "a.png");
        let mut gallery =
            Gallery::scan(temp_dir.path(), SortOrder::Alphabetical).expect("scan failed");

        gallery.select(&ImageId::new("a.png"));
        assert!(gallery.select(&ImageId::new("zzz.png")).is_none());
        assert_eq!(gallery.cursor(), Some(0));
    }

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported_image(Path::new("x.PNG")));
        assert!(is_supported_image(Path::new("x.tiff")));
        assert!(!is_supported_image(Path::new("x.svg")));
        assert!(!is_supported_image(Path::new("noext")));
    }
}
