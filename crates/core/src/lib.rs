//! Core domain types, error taxonomy, and JSON/Markdown rendering
//! for presentation text extraction.

pub mod error;
pub mod json;
pub mod markdown;
pub mod types;

pub use error::{Error, Result};
pub use json::{from_json, to_json};
pub use markdown::to_markdown;
pub use types::{Presentation, Shape, Slide};
