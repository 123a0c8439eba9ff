//! Domain types for representing extracted presentation content.
//!
//! These types are the output contract of the extraction pipeline: they are
//! fully populated by the assembler, then handed read-only to the renderers.
//! Serialized field names use the camelCase keys of the JSON artifact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents an entire presentation with its extracted content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    /// Timestamp of extraction (informational only).
    pub processed_at: DateTime<Utc>,

    /// Original archive filename (without path).
    pub filename: String,

    /// Number of slides in `slides`.
    pub slide_count: usize,

    /// Slides ordered ascending by `index`.
    pub slides: Vec<Slide>,
}

impl Presentation {
    /// Create a new, empty presentation stamped with the current time.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            processed_at: Utc::now(),
            filename: filename.into(),
            slide_count: 0,
            slides: Vec::new(),
        }
    }

    /// Install the final slide sequence: sort ascending by index and
    /// populate `slide_count`.
    ///
    /// Assembly order and index order should already coincide; the sort is
    /// a deterministic guarantee, not an expectation of disorder.
    pub fn set_slides(&mut self, mut slides: Vec<Slide>) {
        slides.sort_by_key(|s| s.index);
        self.slide_count = slides.len();
        self.slides = slides;
    }
}

/// A single extracted slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// 1-based slide number taken from the archive entry name.
    pub index: usize,

    /// Best-effort slide title. Never empty; the assembler substitutes
    /// `"Slide N"` when no title text is found.
    pub title: String,

    /// Non-title body text, in document order.
    pub content: Vec<String>,

    /// Speaker-note text, in document order. Empty if no notes part exists.
    pub notes: Vec<String>,

    /// Recognized shapes that carry non-empty text.
    pub shapes: Vec<Shape>,
}

impl Slide {
    /// Create an empty slide with the given number.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            title: String::new(),
            content: Vec::new(),
            notes: Vec::new(),
            shapes: Vec::new(),
        }
    }

    /// Create the degraded slide that stands in for a part that failed to
    /// process. Sibling slides are unaffected.
    pub fn degraded(index: usize, message: &str) -> Self {
        Self {
            index,
            title: format!("Slide {} (Error)", index),
            content: vec![format!("Error processing slide: {}", message)],
            notes: Vec::new(),
            shapes: Vec::new(),
        }
    }

    /// Create the placeholder slide returned when an archive yields no
    /// slide parts at all. Callers always receive at least one slide.
    pub fn placeholder() -> Self {
        Self {
            index: 1,
            title: "Slide 1".to_string(),
            content: vec!["No content could be extracted from this presentation".to_string()],
            notes: Vec::new(),
            shapes: Vec::new(),
        }
    }
}

/// Text content attributed to one shape on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Placeholder type if declared, otherwise the shape element's own name.
    #[serde(rename = "type")]
    pub kind: String,

    /// Space-joined text extracted from the shape's subtree. Never empty:
    /// shapes without text are not recorded.
    pub text: String,
}

impl Shape {
    /// Create a shape record.
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
        }
    }
}
