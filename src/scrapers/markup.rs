//! Clean re-serialization of an article body.
//!
//! The body is written back out element by element, leaving out scripts,
//! styles and the share/related-posts widgets, and rewriting lazy-loaded
//! images so they render without JavaScript.

use scraper::{ElementRef, Node, node::Element};

use crate::utils::escape_html;

const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

const DROPPED_ELEMENTS: [&str; 2] = ["script", "style"];

const DROPPED_DIV_CLASSES: [&str; 2] = ["sharedaddy", "related-posts"];

fn is_dropped(element: &Element) -> bool {
    let name = element.name();
    DROPPED_ELEMENTS.contains(&name)
        || (name == "div" && element.classes().any(|c| DROPPED_DIV_CLASSES.contains(&c)))
}

/// Serialize `root` and its descendants as HTML.
///
/// Attributes are written by local name only, so a namespaced attribute
/// such as `xlink:href` comes out as `href` (which SVG 2 accepts).
pub fn clean_content(root: ElementRef<'_>) -> String {
    let mut out = String::new();
    write_element(&mut out, root);
    out
}

fn write_attr(out: &mut String, key: &str, value: &str) {
    out.push(' ');
    out.push_str(key);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
}

fn write_element(out: &mut String, element: ElementRef<'_>) {
    let value = element.value();
    let name = value.name();
    let is_img = name == "img";
    // Lazy-loading themes keep the real image in data-src.
    let lazy_src = if is_img {
        value.attr("data-src").filter(|src| !src.is_empty())
    } else {
        None
    };

    out.push('<');
    out.push_str(name);
    for (key, attr) in value.attrs() {
        if is_img && matches!(key, "srcset" | "data-srcset") {
            continue;
        }
        if key == "src" && lazy_src.is_some() {
            continue;
        }
        write_attr(out, key, attr);
    }
    if let Some(src) = lazy_src {
        write_attr(out, "src", src);
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&name) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Element(inner) if !is_dropped(inner) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    write_element(out, child_element);
                }
            }
            _ => {}
        }
    }

    out.push_str("</");
    out.push_str(name);
    out.push('>');
}
