//! Style passes: default-value pruning, fill/stroke promotion, and
//! top-level `<svg>` style and size stripping.
use crate::io::{Document, Element};

use super::for_each_element;

/// Style declarations that match the SVG rendering defaults and carry
/// no information.
const DEFAULT_STYLES: &[(&str, &str)] = &[
    ("opacity", "1"),
    ("fill-opacity", "1"),
    ("fill-rule", "nonzero"),
    ("stroke", "none"),
    ("stroke-width", "1"),
    ("stroke-opacity", "1"),
    ("stroke-linecap", "butt"),
    ("stroke-linejoin", "miter"),
    ("stroke-miterlimit", "4"),
    ("stroke-dasharray", "none"),
    ("stroke-dashoffset", "0"),
    ("stop-opacity", "1"),
    ("display", "inline"),
    ("overflow", "visible"),
    ("visibility", "visible"),
    ("isolation", "auto"),
    ("mix-blend-mode", "normal"),
    ("marker", "none"),
    ("enable-background", "accumulate"),
];

/// Shape elements that receive the `primary` class when class-less.
const SHAPE_ELEMENTS: &[&str] = &[
    "rect", "circle", "ellipse", "line", "polyline", "polygon", "path",
];

pub fn remove_default_styles(doc: &mut Document) {
    for_each_element(&mut doc.nodes, &mut |el| {
        let Some(style) = el.attr("style") else {
            return;
        };
        let declarations: Vec<(String, String)> = parse_declarations(style)
            .into_iter()
            .filter(|(property, value)| {
                !DEFAULT_STYLES
                    .iter()
                    .any(|(p, v)| property == p && value.eq_ignore_ascii_case(v))
            })
            .collect();
        set_style(el, &declarations);
    });
}

/// Move inline `fill` and `stroke` styles to their own attributes and
/// tag class-less shape elements with the `primary` class.
pub fn color_class(doc: &mut Document) {
    for_each_element(&mut doc.nodes, &mut |el| {
        if let Some(style) = el.attr("style") {
            let mut kept = Vec::new();
            for (property, value) in parse_declarations(style) {
                if property == "fill" || property == "stroke" {
                    el.set_attr(&property, value);
                } else {
                    kept.push((property, value));
                }
            }
            set_style(el, &kept);
        }
        if SHAPE_ELEMENTS.contains(&el.local_name()) && el.attr("class").is_none() {
            el.set_attr("class", "primary");
        }
    });
}

pub fn remove_svg_style(doc: &mut Document) {
    if let Some(root) = doc.root_svg_mut() {
        root.remove_attr("style");
    }
}

/// Remove the width/height attributes and style declarations from the
/// `<svg>` tag itself; nested elements keep their sizes.
pub fn remove_size(doc: &mut Document) {
    if let Some(root) = doc.root_svg_mut() {
        root.remove_attr("width");
        root.remove_attr("height");
        if let Some(style) = root.attr("style") {
            let declarations: Vec<(String, String)> = parse_declarations(style)
                .into_iter()
                .filter(|(property, _)| property != "width" && property != "height")
                .collect();
            set_style(root, &declarations);
        }
    }
}

fn parse_declarations(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|declaration| {
            let (property, value) = declaration.split_once(':')?;
            let property = property.trim();
            let value = value.trim();
            if property.is_empty() || value.is_empty() {
                None
            } else {
                Some((property.to_string(), value.to_string()))
            }
        })
        .collect()
}

fn set_style(el: &mut Element, declarations: &[(String, String)]) {
    if declarations.is_empty() {
        el.remove_attr("style");
    } else {
        let joined = declarations
            .iter()
            .map(|(p, v)| format!("{p}:{v}"))
            .collect::<Vec<_>>()
            .join(";");
        el.set_attr("style", joined);
    }
}
