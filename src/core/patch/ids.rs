//! Id passes: removal, and prefixing with reference rewriting.
use crate::io::{Document, Element};

use super::{PatchError, for_each_element, try_for_each_element};

pub fn remove_ids(doc: &mut Document) {
    for_each_element(&mut doc.nodes, &mut |el| {
        el.remove_attr("id");
    });
}

/// Prefix every `id` and rewrite the references that point at one:
/// `url(#ref)` occurrences in any attribute value (style included) and
/// `href`/`xlink:href` fragment targets.
pub fn prefix_ids(doc: &mut Document, prefix: &str) -> Result<(), PatchError> {
    try_for_each_element(&mut doc.nodes, &mut |el: &mut Element| {
        for (key, value) in el.attributes.iter_mut() {
            if key == "id" {
                *value = format!("{prefix}{value}");
            } else if (key == "href" || key == "xlink:href") && value.starts_with('#') {
                *value = format!("#{prefix}{}", &value[1..]);
            } else if value.contains("url(") {
                *value = rewrite_url_refs(value, prefix)?;
            }
        }
        Ok(())
    })
}

fn rewrite_url_refs(value: &str, prefix: &str) -> Result<String, PatchError> {
    let mut out = String::with_capacity(value.len() + prefix.len());
    let mut rest = value;
    while let Some(pos) = rest.find("url(") {
        let (head, tail) = rest.split_at(pos + 4);
        out.push_str(head);
        let close = tail.find(')').ok_or_else(|| PatchError::UnterminatedRef {
            value: value.to_string(),
        })?;
        let inner = &tail[..close];
        match inner.strip_prefix('#') {
            Some(fragment) => {
                out.push('#');
                out.push_str(prefix);
                out.push_str(fragment);
            }
            None => out.push_str(inner),
        }
        out.push(')');
        rest = &tail[close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}
