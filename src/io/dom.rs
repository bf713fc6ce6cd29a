//! Document handle: an event tree parsed from XML text and serialized
//! back to it. The patch engine mutates this tree in place; nothing in
//! here knows about patch semantics.
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use thiserror::Error;

/// Errors encountered while parsing or serializing a document
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("malformed attribute: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),
    #[error("unclosed element <{0}>")]
    Unclosed(String),
    #[error("unexpected closing tag </{0}>")]
    UnexpectedClose(String),
    #[error("document is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A single node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
    CData(String),
    /// XML declaration content, e.g. `xml version="1.0"`
    Decl(String),
    /// Processing instruction content
    Pi(String),
    /// DOCTYPE content
    DocType(String),
}

/// An element with its name as written (prefix included), attributes in
/// document order, and child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
    pub self_closing: bool,
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Replace an attribute value, or append the attribute if absent.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        match self.attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.into(),
            None => self.attributes.push((name.to_string(), value.into())),
        }
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let index = self.attributes.iter().position(|(k, _)| k == name)?;
        Some(self.attributes.remove(index).1)
    }

    /// Namespace prefix of the element name, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(p, _)| p)
    }

    /// Element name with any namespace prefix stripped.
    pub fn local_name(&self) -> &str {
        self.name.split_once(':').map_or(&self.name, |(_, n)| n)
    }
}

/// A parsed document: the ordered top-level nodes (declaration,
/// comments, and the root element for well-formed SVG).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    /// Parse XML text into a document tree.
    pub fn parse(input: &str) -> Result<Document, ParseError> {
        let mut reader = Reader::from_str(input);
        reader.trim_text(false);

        let mut top: Vec<Node> = Vec::new();
        let mut stack: Vec<Element> = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Start(e) => stack.push(element_from_start(&e, false)?),
                Event::Empty(e) => {
                    let element = element_from_start(&e, true)?;
                    append(&mut stack, &mut top, Node::Element(element));
                }
                Event::End(e) => {
                    let element = stack.pop().ok_or_else(|| {
                        ParseError::UnexpectedClose(
                            String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                        )
                    })?;
                    append(&mut stack, &mut top, Node::Element(element));
                }
                Event::Text(e) => {
                    append(&mut stack, &mut top, Node::Text(e.unescape()?.into_owned()));
                }
                Event::Comment(e) => {
                    append(&mut stack, &mut top, Node::Comment(String::from_utf8(e.to_vec())?));
                }
                Event::CData(e) => {
                    append(&mut stack, &mut top, Node::CData(String::from_utf8(e.to_vec())?));
                }
                Event::Decl(e) => {
                    append(&mut stack, &mut top, Node::Decl(String::from_utf8(e.to_vec())?));
                }
                Event::PI(e) => {
                    append(&mut stack, &mut top, Node::Pi(String::from_utf8(e.to_vec())?));
                }
                Event::DocType(e) => {
                    append(&mut stack, &mut top, Node::DocType(String::from_utf8(e.to_vec())?));
                }
                Event::Eof => break,
            }
        }

        if let Some(element) = stack.pop() {
            return Err(ParseError::Unclosed(element.name));
        }

        Ok(Document { nodes: top })
    }

    /// Serialize the document tree back to XML text.
    pub fn to_xml(&self) -> Result<String, ParseError> {
        let mut writer = Writer::new(Vec::new());
        for node in &self.nodes {
            write_node(&mut writer, node)?;
        }
        Ok(String::from_utf8(writer.into_inner())?)
    }

    /// The root `<svg>` element, prefix-insensitive.
    pub fn root_svg_mut(&mut self) -> Option<&mut Element> {
        self.nodes.iter_mut().find_map(|node| match node {
            Node::Element(el) if el.local_name() == "svg" => Some(el),
            _ => None,
        })
    }
}

fn append(stack: &mut Vec<Element>, top: &mut Vec<Node>, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => top.push(node),
    }
}

fn element_from_start(e: &BytesStart, self_closing: bool) -> Result<Element, ParseError> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        attributes.push((key, value));
    }
    Ok(Element {
        name,
        attributes,
        children: Vec::new(),
        self_closing,
    })
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &Node) -> Result<(), ParseError> {
    match node {
        Node::Element(el) => {
            let mut start = BytesStart::new(el.name.as_str());
            for (key, value) in &el.attributes {
                start.push_attribute((key.as_str(), value.as_str()));
            }
            if el.self_closing && el.children.is_empty() {
                writer.write_event(Event::Empty(start))?;
            } else {
                writer.write_event(Event::Start(start))?;
                for child in &el.children {
                    write_node(writer, child)?;
                }
                writer.write_event(Event::End(BytesEnd::new(el.name.as_str())))?;
            }
        }
        Node::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
        Node::Comment(text) => {
            writer.write_event(Event::Comment(BytesText::from_escaped(text.as_str())))?
        }
        Node::CData(text) => writer.write_event(Event::CData(BytesCData::new(text.as_str())))?,
        Node::Decl(content) => writer.write_event(Event::Decl(BytesDecl::from_start(
            BytesStart::from_content(content.as_str(), 3),
        )))?,
        Node::Pi(content) => {
            writer.write_event(Event::PI(BytesText::from_escaped(content.as_str())))?
        }
        Node::DocType(content) => {
            writer.write_event(Event::DocType(BytesText::from_escaped(content.as_str())))?
        }
    }
    Ok(())
}
