//! Structural cleanup passes: comments, whitespace, blank lines, and
//! namespace stripping.
use crate::io::{Document, Node};

use super::retain_nodes;

pub fn remove_comments(doc: &mut Document) {
    retain_nodes(&mut doc.nodes, &mut |node| !matches!(node, Node::Comment(_)));
}

/// Drop whitespace-only text nodes. Text with real content is left
/// untouched so rendered `<text>` elements keep their spacing.
pub fn remove_white_spaces(doc: &mut Document) {
    retain_nodes(&mut doc.nodes, &mut |node| match node {
        Node::Text(text) => !text.trim().is_empty(),
        _ => true,
    });
}

/// Collapse empty lines. Adjacent text nodes are coalesced first so
/// that blank lines left behind by removed siblings (comments, exotic
/// elements) collapse as well.
pub fn remove_white_lines(doc: &mut Document) {
    collapse_in(&mut doc.nodes);
}

fn collapse_in(nodes: &mut Vec<Node>) {
    coalesce_text(nodes);
    for node in nodes {
        match node {
            Node::Text(text) => *text = collapse_blank_lines(text),
            Node::Element(el) => collapse_in(&mut el.children),
            _ => {}
        }
    }
}

fn coalesce_text(nodes: &mut Vec<Node>) {
    let mut merged: Vec<Node> = Vec::with_capacity(nodes.len());
    for node in nodes.drain(..) {
        match (merged.last_mut(), node) {
            (Some(Node::Text(prev)), Node::Text(next)) => prev.push_str(&next),
            (_, node) => merged.push(node),
        }
    }
    *nodes = merged;
}

/// Remove whitespace-only lines from a text run. The first line (tail
/// of the preceding content) and the last line (indent of the following
/// content) are kept so surrounding layout survives.
fn collapse_blank_lines(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() <= 2 {
        return text.to_string();
    }
    let last = lines.len() - 1;
    let kept: Vec<&str> = lines
        .iter()
        .enumerate()
        .filter(|(i, line)| *i == 0 || *i == last || !line.trim().is_empty())
        .map(|(_, line)| *line)
        .collect();
    kept.join("\n")
}

/// Strip the svg namespace prefix from tags and attributes; drop every
/// element or attribute carrying any other prefix, along with prefixed
/// `xmlns:` declarations. The bare `xmlns` attribute is kept.
pub fn remove_exotic_namespaces(doc: &mut Document) {
    strip_in(&mut doc.nodes);
}

fn strip_in(nodes: &mut Vec<Node>) {
    nodes.retain(|node| match node {
        Node::Element(el) => matches!(el.prefix(), None | Some("svg")),
        _ => true,
    });
    for node in nodes {
        if let Node::Element(el) = node {
            if el.prefix() == Some("svg") {
                el.name = el.local_name().to_string();
            }
            el.attributes.retain(|(key, _)| match key.split_once(':') {
                None => true,
                Some(("svg", _)) => true,
                Some(_) => false,
            });
            for (key, _) in el.attributes.iter_mut() {
                if let Some(("svg", local)) = key.split_once(':') {
                    *key = local.to_string();
                }
            }
            strip_in(&mut el.children);
        }
    }
}
