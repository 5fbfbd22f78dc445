//! Element serialization.

use std::fmt::Write;

use crate::attributes::Attributes;

/// Serialize an element: `<tag attrs>content</tag>`.
///
/// Attribute values are escaped; `content` is inserted verbatim since it is
/// usually already-rendered markup.
#[must_use]
pub fn element(tag: &str, attributes: &Attributes, content: &str) -> String {
    let mut out = String::with_capacity(tag.len() * 2 + content.len() + 5);
    out.push('<');
    out.push_str(tag);
    attributes.write_to(&mut out, &[]);
    out.push('>');
    out.push_str(content);
    let _ = write!(out, "</{tag}>");
    out
}

/// Serialize an anchor with an escaped title.
///
/// `href` always comes first; an `href` entry in `attributes` is ignored.
#[must_use]
pub fn link(href: &str, title: &str, attributes: &Attributes) -> String {
    let mut out = String::new();
    let _ = write!(out, r#"<a href="{}""#, escape_html(href));
    attributes.write_to(&mut out, &["href"]);
    let _ = write!(out, ">{}</a>", escape_html(title));
    out
}

/// Check whether `tag` is usable as an element name.
///
/// Accepts an ASCII letter followed by ASCII alphanumerics or `-`.
#[must_use]
pub fn is_valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
        }
        _ => false,
    }
}

/// Check whether `name` is usable as an attribute name.
///
/// Rejects the empty string, whitespace, control characters and the
/// characters that end a name or a tag (`"`, `'`, `<`, `>`, `/`, `=`).
#[must_use]
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| {
            !c.is_whitespace()
                && !c.is_control()
                && !matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
