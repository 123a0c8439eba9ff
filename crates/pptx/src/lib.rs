//! OOXML presentation package extraction engine.
//!
//! A `.pptx` file is a ZIP archive containing one XML part per slide plus
//! optional per-slide notes parts. This crate opens the archive, parses the
//! slide parts into generic XML trees, and walks those trees to reconstruct
//! an ordered, typed [`deck_core::Presentation`] document.
//!
//! Pipeline: bytes → [`archive::Archive`] → [`xml::parse`] → [`walk`]
//! traversals → [`parser::PptxExtractor`] assembly.

pub mod archive;
pub mod parser;
pub mod walk;
pub mod xml;

pub use archive::Archive;
pub use parser::PptxExtractor;
pub use xml::Node;
