//! ZIP archive access for presentation packages.
//!
//! The whole archive is held in memory: presentation packages are bounded
//! in size (tens of MB), so a streaming design buys nothing here.

use deck_core::{Error, Result};
use std::io::{Cursor, Read};
use zip::result::ZipError;
use zip::ZipArchive;

/// An opened presentation package.
pub struct Archive {
    inner: ZipArchive<Cursor<Vec<u8>>>,
}

impl Archive {
    /// Open a byte buffer as a ZIP container.
    ///
    /// Fails with [`Error::Archive`] if the bytes are not a valid ZIP
    /// container (corrupt, truncated, or encrypted).
    pub fn open(bytes: Vec<u8>) -> Result<Self> {
        let inner = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| Error::Archive(format!("Failed to open ZIP: {}", e)))?;
        Ok(Self { inner })
    }

    /// Names of all entries matching the given name prefix and suffix,
    /// in lexicographic order.
    pub fn entry_names(&self, prefix: &str, suffix: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .inner
            .file_names()
            .filter(|name| name.starts_with(prefix) && name.ends_with(suffix))
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }

    /// Whether the archive contains an entry with this exact name.
    pub fn has_entry(&self, name: &str) -> bool {
        self.inner.file_names().any(|n| n == name)
    }

    /// Read an entry and decode it as UTF-8 text (lossy on invalid bytes).
    ///
    /// Fails with [`Error::EntryNotFound`] if the entry is absent.
    pub fn read_text(&mut self, name: &str) -> Result<String> {
        let mut file = self.inner.by_name(name).map_err(|e| match e {
            ZipError::FileNotFound => Error::EntryNotFound(name.to_string()),
            other => Error::Archive(format!("Failed to read '{}': {}", name, other)),
        })?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|e| Error::Archive(format!("Failed to read '{}': {}", name, e)))?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in entries {
            writer.start_file(*name, FileOptions::default()).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_open_rejects_non_zip_bytes() {
        let result = Archive::open(b"definitely not a zip".to_vec());
        assert!(matches!(result, Err(Error::Archive(_))));
    }

    #[test]
    fn test_entry_names_filters_by_prefix_and_suffix() {
        let bytes = build_zip(&[
            ("ppt/slides/slide1.xml", "<a/>"),
            ("ppt/slides/_rels/slide1.xml.rels", "<b/>"),
            ("ppt/notesSlides/notesSlide1.xml", "<c/>"),
            ("docProps/core.xml", "<d/>"),
        ]);
        let archive = Archive::open(bytes).unwrap();

        let names = archive.entry_names("ppt/slides/slide", ".xml");
        assert_eq!(names, vec!["ppt/slides/slide1.xml"]);
    }

    #[test]
    fn test_read_text_missing_entry() {
        let archive_bytes = build_zip(&[("ppt/slides/slide1.xml", "<a/>")]);
        let mut archive = Archive::open(archive_bytes).unwrap();

        let result = archive.read_text("ppt/slides/slide2.xml");
        assert!(matches!(result, Err(Error::EntryNotFound(_))));
    }

    #[test]
    fn test_read_text_returns_content() {
        let archive_bytes = build_zip(&[("ppt/slides/slide1.xml", "<p:sld/>")]);
        let mut archive = Archive::open(archive_bytes).unwrap();

        assert_eq!(archive.read_text("ppt/slides/slide1.xml").unwrap(), "<p:sld/>");
        assert!(archive.has_entry("ppt/slides/slide1.xml"));
        assert!(!archive.has_entry("ppt/slides/slide9.xml"));
    }
}
