//! Typed traversals over parsed slide XML trees.
//!
//! Three pure depth-first pre-order walks: collect every text run, find the
//! slide title, and collect text-bearing shapes. Each returns a freshly
//! constructed value; nothing here mutates the tree or shares accumulators.

use crate::xml::Node;
use deck_core::Shape;

/// Literal OOXML tag and attribute names the walker matches on.
///
/// Centralized so a format-version difference is a one-place change.
mod tags {
    /// Leaf element carrying a literal span of slide text.
    pub const TEXT_RUN: &str = "a:t";
    /// Shape element.
    pub const SHAPE: &str = "p:sp";
    /// Embedded-object containers that may also carry text.
    pub const GRAPHIC_FRAME: &str = "p:graphicFrame";
    pub const PICTURE: &str = "p:pic";
    /// Placeholder element nested inside a shape.
    pub const PLACEHOLDER: &str = "p:ph";
    /// Placeholder type attribute, and the value marking a title.
    pub const TYPE_ATTR: &str = "type";
    pub const TITLE_TYPE: &str = "title";
}

/// Collect every text-run payload in document order.
///
/// Payloads are trimmed; empty runs are dropped. Repeated identical strings
/// are preserved as separate entries — no deduplication.
pub fn extract_all_text(node: &Node) -> Vec<String> {
    let mut texts = Vec::new();

    if node.name() == Some(tags::TEXT_RUN) {
        if let Some(text) = text_run_content(node) {
            texts.push(text);
        }
    }

    for child in node.children() {
        texts.extend(extract_all_text(child));
    }
    texts
}

/// Find the slide title.
///
/// A shape marked as a title placeholder always wins, regardless of document
/// order. Failing that, the first shape's text is used, then the first text
/// run anywhere in the tree. Returns an empty string when the slide has no
/// text at all; the caller substitutes the default title.
pub fn find_title(node: &Node) -> String {
    if let Some(shape) = find_title_shape(node) {
        let texts = extract_all_text(shape);
        if !texts.is_empty() {
            return texts.join(" ");
        }
    }

    if let Some(shape) = find_first_shape(node) {
        let texts = extract_all_text(shape);
        if !texts.is_empty() {
            return texts.join(" ");
        }
    }

    extract_all_text(node).into_iter().next().unwrap_or_default()
}

/// Collect every text-bearing shape in document order.
///
/// The shape's type label is its placeholder type when declared, otherwise
/// the element's own name. Shapes whose subtree has no text are omitted.
pub fn find_shapes(node: &Node) -> Vec<Shape> {
    let mut shapes = Vec::new();

    if let Some(name) = node.name() {
        if is_shape_element(name) {
            let text = extract_all_text(node).join(" ");
            if !text.is_empty() {
                let kind = placeholder_type(node).unwrap_or(name);
                shapes.push(Shape::new(kind, text));
            }
        }
    }

    // Shapes nest inside group shapes; keep walking below a match
    for child in node.children() {
        shapes.extend(find_shapes(child));
    }
    shapes
}

/// Text payload of one `a:t` element: direct text children, trimmed,
/// space-joined. `None` if nothing remains.
fn text_run_content(node: &Node) -> Option<String> {
    let text = node
        .children()
        .iter()
        .filter_map(Node::text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn is_shape_element(name: &str) -> bool {
    name == tags::SHAPE || name == tags::GRAPHIC_FRAME || name == tags::PICTURE
}

/// Depth-first search for a shape whose placeholder marks it as a title.
fn find_title_shape(node: &Node) -> Option<&Node> {
    if node.name() == Some(tags::SHAPE) && placeholder_type(node) == Some(tags::TITLE_TYPE) {
        return Some(node);
    }
    node.children().iter().find_map(find_title_shape)
}

/// Depth-first search for the first shape element.
fn find_first_shape(node: &Node) -> Option<&Node> {
    if node.name() == Some(tags::SHAPE) {
        return Some(node);
    }
    node.children().iter().find_map(find_first_shape)
}

/// Placeholder type attribute of the `p:ph` element nested in this shape.
fn placeholder_type(shape: &Node) -> Option<&str> {
    find_first(shape, tags::PLACEHOLDER)?.attr(tags::TYPE_ATTR)
}

/// Depth-first search for the first element with the given name.
fn find_first<'a>(node: &'a Node, name: &str) -> Option<&'a Node> {
    if node.name() == Some(name) {
        return Some(node);
    }
    node.children().iter().find_map(|child| find_first(child, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml;

    fn tree(src: &str) -> Node {
        xml::parse(src).unwrap()
    }

    #[test]
    fn test_extract_all_text_document_order() {
        let node = tree("<p:sld><a:t> first </a:t><p:sp><a:t>second</a:t></p:sp><a:t>third</a:t></p:sld>");
        assert_eq!(extract_all_text(&node), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_extract_all_text_preserves_duplicates() {
        let node = tree("<p:sld><p:sp><a:t>OK</a:t></p:sp><p:sp><a:t>OK</a:t></p:sp></p:sld>");
        assert_eq!(extract_all_text(&node), vec!["OK", "OK"]);
    }

    #[test]
    fn test_extract_all_text_drops_empty_runs() {
        let node = tree("<p:sld><a:t>   </a:t><a:t>kept</a:t></p:sld>");
        assert_eq!(extract_all_text(&node), vec!["kept"]);
    }

    #[test]
    fn test_find_title_placeholder_wins_over_earlier_shape() {
        // The generic shape comes first in document order; the titled
        // placeholder must still win.
        let node = tree(
            "<p:sld>\
               <p:sp><a:t>Body text</a:t></p:sp>\
               <p:sp><p:nvSpPr><p:ph type=\"title\"/></p:nvSpPr><a:t>Q3 Results</a:t></p:sp>\
             </p:sld>",
        );
        assert_eq!(find_title(&node), "Q3 Results");
    }

    #[test]
    fn test_find_title_joins_placeholder_runs() {
        let node = tree(
            "<p:sld><p:sp><p:ph type=\"title\"/><a:t>Q3</a:t><a:t>Results</a:t></p:sp></p:sld>",
        );
        assert_eq!(find_title(&node), "Q3 Results");
    }

    #[test]
    fn test_find_title_falls_back_to_first_shape() {
        let node = tree("<p:sld><p:sp><a:t>Opening line</a:t></p:sp></p:sld>");
        assert_eq!(find_title(&node), "Opening line");
    }

    #[test]
    fn test_find_title_falls_back_to_first_text_run() {
        // Text that lives outside any shape element.
        let node = tree("<p:sld><a:p><a:t>Loose text</a:t></a:p></p:sld>");
        assert_eq!(find_title(&node), "Loose text");
    }

    #[test]
    fn test_find_title_empty_tree() {
        let node = tree("<p:sld><p:sp/></p:sld>");
        assert_eq!(find_title(&node), "");
    }

    #[test]
    fn test_find_shapes_labels_and_omits_empty() {
        let node = tree(
            "<p:sld>\
               <p:sp><p:ph type=\"title\"/><a:t>Heading</a:t></p:sp>\
               <p:sp><a:t>Plain box</a:t></p:sp>\
               <p:sp/>\
             </p:sld>",
        );
        let shapes = find_shapes(&node);
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].kind, "title");
        assert_eq!(shapes[0].text, "Heading");
        assert_eq!(shapes[1].kind, "p:sp");
        assert_eq!(shapes[1].text, "Plain box");
    }

    #[test]
    fn test_find_shapes_recognizes_embedded_objects() {
        let node = tree(
            "<p:sld>\
               <p:graphicFrame><a:t>Chart label</a:t></p:graphicFrame>\
               <p:pic><a:t>Caption</a:t></p:pic>\
             </p:sld>",
        );
        let shapes = find_shapes(&node);
        assert_eq!(shapes[0].kind, "p:graphicFrame");
        assert_eq!(shapes[1].kind, "p:pic");
    }

    #[test]
    fn test_find_shapes_walks_into_groups() {
        let node = tree("<p:sld><p:grpSp><p:sp><a:t>Grouped</a:t></p:sp></p:grpSp></p:sld>");
        let shapes = find_shapes(&node);
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].text, "Grouped");
    }
}
