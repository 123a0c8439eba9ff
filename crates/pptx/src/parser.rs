//! Slide and presentation assembly.
//!
//! The extractor enumerates slide parts in the archive, assembles one
//! [`Slide`] per part, and collects them into a [`Presentation`]. A single
//! malformed part degrades to an error slide instead of failing the whole
//! extraction; only an unreadable archive is fatal.

use crate::archive::Archive;
use crate::{walk, xml};
use deck_core::{Presentation, Result, Slide};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Slide parts live under this entry-name prefix.
const SLIDE_PREFIX: &str = "ppt/slides/slide";
const SLIDE_SUFFIX: &str = ".xml";

/// Regex capturing the 1-based slide number from an entry name.
static SLIDE_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"slide(\d+)\.xml$").unwrap());

/// Extractor for OOXML presentation packages.
pub struct PptxExtractor;

impl PptxExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract a presentation document from archive bytes.
    ///
    /// `filename` is the original archive name, carried into the output for
    /// display only. Fails with [`Error::Archive`] when the bytes are not a
    /// valid ZIP container; per-slide failures yield degraded slide records
    /// instead of an error.
    pub fn extract(&self, bytes: Vec<u8>, filename: &str) -> Result<Presentation> {
        let mut archive = Archive::open(bytes)?;

        let entries = ordered_slide_entries(&archive);
        log::debug!("Found {} slide entries in {}", entries.len(), filename);

        let mut slides = Vec::new();
        let mut unnumbered_seen = false;
        for (number, entry) in entries {
            match number {
                Some(index) => slides.push(self.assemble_slide(&mut archive, &entry, index)),
                // An entry with no slide number cannot be given a real
                // index. Report the first one as an error slide at index 0
                // (legitimate numbering is 1-based); skip any further ones
                // so indices stay unique.
                None if !unnumbered_seen => {
                    unnumbered_seen = true;
                    slides.push(Slide::degraded(
                        0,
                        &format!("slide entry has no slide number: {}", entry),
                    ));
                }
                None => log::warn!("Skipping additional unnumbered slide entry: {}", entry),
            }
        }

        if slides.is_empty() {
            slides.push(Slide::placeholder());
        }

        let mut presentation = Presentation::new(filename);
        presentation.set_slides(slides);
        Ok(presentation)
    }

    /// Extract a presentation from a file on disk.
    pub fn extract_path(&self, path: impl AsRef<Path>) -> Result<Presentation> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("presentation.pptx");
        self.extract(bytes, filename)
    }

    /// Assemble one slide, degrading to an error record on failure so
    /// sibling slides are unaffected.
    fn assemble_slide(&self, archive: &mut Archive, entry: &str, index: usize) -> Slide {
        match self.try_assemble_slide(archive, entry, index) {
            Ok(slide) => slide,
            Err(e) => {
                log::warn!("Slide {} failed to process: {}", index, e);
                Slide::degraded(index, &e.to_string())
            }
        }
    }

    fn try_assemble_slide(&self, archive: &mut Archive, entry: &str, index: usize) -> Result<Slide> {
        let xml_text = archive.read_text(entry)?;
        let tree = xml::parse(&xml_text)?;

        let mut title = walk::find_title(&tree);
        if title.is_empty() {
            title = format!("Slide {}", index);
        }

        // The title is reported once, as the title. All exact occurrences
        // are removed from the body so it cannot leak in as a duplicate.
        let content: Vec<String> = walk::extract_all_text(&tree)
            .into_iter()
            .filter(|text| *text != title)
            .collect();

        let mut slide = Slide::new(index);
        slide.title = title;
        slide.content = content;
        slide.shapes = walk::find_shapes(&tree);
        slide.notes = self.read_notes(archive, index);
        Ok(slide)
    }

    /// Speaker notes for a slide, or an empty list when the notes part is
    /// absent. A malformed notes part is logged and treated as empty rather
    /// than erasing a readable slide.
    fn read_notes(&self, archive: &mut Archive, index: usize) -> Vec<String> {
        let entry = format!("ppt/notesSlides/notesSlide{}.xml", index);
        if !archive.has_entry(&entry) {
            return Vec::new();
        }

        match archive
            .read_text(&entry)
            .and_then(|xml_text| xml::parse(&xml_text))
        {
            Ok(tree) => walk::extract_all_text(&tree),
            Err(e) => {
                log::warn!("Notes part for slide {} could not be processed: {}", index, e);
                Vec::new()
            }
        }
    }
}

impl Default for PptxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Slide entries paired with their parsed numbers, sorted numerically:
/// `slide2.xml` before `slide10.xml`, never lexicographic. Unnumbered
/// entries sort first.
fn ordered_slide_entries(archive: &Archive) -> Vec<(Option<usize>, String)> {
    let mut entries: Vec<(Option<usize>, String)> = archive
        .entry_names(SLIDE_PREFIX, SLIDE_SUFFIX)
        .into_iter()
        .map(|name| (slide_number(&name), name))
        .collect();
    entries.sort_by_key(|entry| entry.0.unwrap_or(0));
    entries
}

/// Parse the slide number from an entry name like `ppt/slides/slide12.xml`.
fn slide_number(name: &str) -> Option<usize> {
    SLIDE_NUMBER_REGEX
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::Error;

    #[test]
    fn test_extract_path_missing_file() {
        let result = PptxExtractor::new().extract_path("/nonexistent/deck.pptx");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_slide_number() {
        assert_eq!(slide_number("ppt/slides/slide1.xml"), Some(1));
        assert_eq!(slide_number("ppt/slides/slide123.xml"), Some(123));
        assert_eq!(slide_number("ppt/slides/slideNotes.xml"), None);
        assert_eq!(slide_number("ppt/slides/slide.xml"), None);
    }

    #[test]
    fn test_slide_number_ignores_directory_digits() {
        assert_eq!(slide_number("ppt2/slides/slide7.xml"), Some(7));
    }
}
