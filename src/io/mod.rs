//! I/O layer: the XML document handle parsed with quick-xml.
//! Filesystem reads and writes live with their callers (`api` for
//! loads, `core::route` for deliveries).
pub mod dom;
pub use dom::{Document, Element, Node, ParseError};
