//! Patch engine: applies the primitive option flags to a parsed
//! document in place. Each concern lives in its own pass module; the
//! order below keeps the passes independent (structural removals first,
//! id rewriting, then styles, then whitespace).
use thiserror::Error;

use crate::core::options::PatchOptions;
use crate::io::{Document, Element, Node};

mod cleanup;
mod ids;
mod styles;

/// Errors raised by the patch passes
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("unterminated url() reference in `{value}`")]
    UnterminatedRef { value: String },
}

/// Apply every enabled primitive flag to `doc`.
///
/// Expects the options to be preset-expanded already; preset fields are
/// never read here.
pub fn apply(doc: &mut Document, options: &PatchOptions) -> Result<(), PatchError> {
    if options.remove_comments {
        cleanup::remove_comments(doc);
    }
    if options.remove_exotic_namespaces {
        cleanup::remove_exotic_namespaces(doc);
    }
    if options.remove_ids {
        ids::remove_ids(doc);
    }
    if let Some(prefix) = &options.prefix_ids {
        ids::prefix_ids(doc, prefix)?;
    }
    if options.remove_default_styles {
        styles::remove_default_styles(doc);
    }
    if options.color_class {
        styles::color_class(doc);
    }
    if options.remove_svg_style {
        styles::remove_svg_style(doc);
    }
    if options.remove_size {
        styles::remove_size(doc);
    }
    if options.remove_white_spaces {
        cleanup::remove_white_spaces(doc);
    }
    if options.remove_white_lines {
        cleanup::remove_white_lines(doc);
    }
    Ok(())
}

/// Depth-first walk over every element in the tree.
fn for_each_element(nodes: &mut [Node], f: &mut impl FnMut(&mut Element)) {
    for node in nodes {
        if let Node::Element(el) = node {
            f(el);
            for_each_element(&mut el.children, f);
        }
    }
}

/// Fallible variant of [`for_each_element`].
fn try_for_each_element<E>(
    nodes: &mut [Node],
    f: &mut impl FnMut(&mut Element) -> Result<(), E>,
) -> Result<(), E> {
    for node in nodes {
        if let Node::Element(el) = node {
            f(el)?;
            try_for_each_element(&mut el.children, f)?;
        }
    }
    Ok(())
}

/// Prune nodes at every depth, recursing into surviving elements.
fn retain_nodes(nodes: &mut Vec<Node>, keep: &mut impl FnMut(&Node) -> bool) {
    nodes.retain(|node| keep(node));
    for node in nodes {
        if let Node::Element(el) = node {
            retain_nodes(&mut el.children, keep);
        }
    }
}
