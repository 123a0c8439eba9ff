//! Generic XML-to-tree parsing.
//!
//! Parses one decoded XML part into a [`Node`] tree that preserves document
//! order. Element names keep their literal namespace prefix (`a:t`, `p:sp`):
//! the extraction logic matches on the prefixed names, mirroring the OOXML
//! convention, so prefixes are never resolved to namespace URIs.
//!
//! This module knows nothing about slides, titles, or shapes.

use deck_core::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;

/// A node in a parsed XML tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An element with its attributes and ordered children.
    Element {
        /// Tag name with its literal namespace prefix, e.g. `"a:t"`.
        name: String,
        /// Attribute name to value.
        attributes: HashMap<String, String>,
        /// Child nodes in document order.
        children: Vec<Node>,
    },
    /// A text leaf.
    Text(String),
}

impl Node {
    /// Element tag name, or `None` for a text leaf.
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Element { name, .. } => Some(name),
            Node::Text(_) => None,
        }
    }

    /// Attribute value by name, or `None` for text leaves and absent keys.
    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            Node::Element { attributes, .. } => attributes.get(key).map(String::as_str),
            Node::Text(_) => None,
        }
    }

    /// Child nodes in document order. Empty for text leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text(_) => &[],
        }
    }

    /// Text payload, or `None` for elements.
    pub fn text(&self) -> Option<&str> {
        match self {
            Node::Text(content) => Some(content),
            Node::Element { .. } => None,
        }
    }
}

/// An element that has been opened but not yet closed during parsing.
struct OpenElement {
    name: String,
    attributes: HashMap<String, String>,
    children: Vec<Node>,
}

impl OpenElement {
    fn into_node(self) -> Node {
        Node::Element {
            name: self.name,
            attributes: self.attributes,
            children: self.children,
        }
    }
}

/// Parse XML text into a node tree.
///
/// Fails with [`Error::Xml`] on malformed input: unterminated or mismatched
/// tags, invalid entity references, or a missing root element.
pub fn parse(xml: &str) -> Result<Node> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut stack: Vec<OpenElement> = Vec::new();
    let mut root: Option<Node> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => stack.push(open_element(e)?),
            Ok(Event::Empty(ref e)) => {
                let node = open_element(e)?.into_node();
                attach(&mut stack, &mut root, node)?;
            }
            Ok(Event::Text(ref t)) => {
                let text = t
                    .unescape()
                    .map_err(|e| Error::Xml(format!("Invalid text content: {}", e)))?;
                if !text.is_empty() {
                    attach(&mut stack, &mut root, Node::Text(text.into_owned()))?;
                }
            }
            Ok(Event::CData(t)) => {
                let text = String::from_utf8_lossy(&t.into_inner()).into_owned();
                if !text.trim().is_empty() {
                    attach(&mut stack, &mut root, Node::Text(text))?;
                }
            }
            // The reader itself rejects mismatched and stray closing tags,
            // so a popped frame always belongs to this end tag.
            Ok(Event::End(_)) => {
                let open = stack
                    .pop()
                    .ok_or_else(|| Error::Xml("Unexpected closing tag".to_string()))?;
                attach(&mut stack, &mut root, open.into_node())?;
            }
            Ok(Event::Eof) => {
                if let Some(open) = stack.last() {
                    return Err(Error::Xml(format!("Unterminated element <{}>", open.name)));
                }
                break;
            }
            // Declarations, comments, and processing instructions carry no content
            Ok(_) => {}
            Err(e) => return Err(Error::Xml(e.to_string())),
        }
    }

    root.ok_or_else(|| Error::Xml("No root element".to_string()))
}

/// Read the tag name and attributes of an opening tag.
fn open_element(e: &BytesStart) -> Result<OpenElement> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();

    let mut attributes = HashMap::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| Error::Xml(format!("Invalid attribute: {}", err)))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = String::from_utf8_lossy(&attr.value).into_owned();
        attributes.insert(key, value);
    }

    Ok(OpenElement {
        name,
        attributes,
        children: Vec::new(),
    })
}

/// Hand a completed node to its parent, or make it the tree root.
fn attach(stack: &mut Vec<OpenElement>, root: &mut Option<Node>, node: Node) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        return Ok(());
    }

    match node {
        Node::Element { .. } => {
            if root.is_some() {
                return Err(Error::Xml("Multiple root elements".to_string()));
            }
            *root = Some(node);
        }
        // Stray top-level text cannot belong to the tree
        Node::Text(_) => {}
    }
    Ok(())
}
