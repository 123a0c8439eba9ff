//! Markdown rendering of extracted presentations.
//!
//! Output layout: a top-level header with the source filename, then one
//! `## Slide N: title` section per slide with its body paragraphs, followed
//! by optional `### Notes` (block quotes) and `### Shapes` (bullet list)
//! subsections. Rendering is deterministic for a given presentation; the
//! timestamp comes from `processed_at`, never from the clock.

use crate::types::Presentation;

/// Render a presentation to the canonical Markdown artifact.
pub fn to_markdown(presentation: &Presentation) -> String {
    let mut md = String::new();
    md.push_str(&format!("# {}\n\n", presentation.filename));

    for slide in &presentation.slides {
        md.push_str(&format!("## Slide {}: {}\n\n", slide.index, slide.title));

        for text in &slide.content {
            if !text.trim().is_empty() {
                md.push_str(&format!("{}\n\n", text));
            }
        }

        if !slide.notes.is_empty() {
            md.push_str("### Notes\n\n");
            for note in &slide.notes {
                md.push_str(&format!("> {}\n", note));
            }
            md.push('\n');
        }

        if !slide.shapes.is_empty() {
            md.push_str("### Shapes\n\n");
            for shape in &slide.shapes {
                md.push_str(&format!("- {}: {}\n", shape.kind, shape.text));
            }
            md.push('\n');
        }
    }

    md
}
