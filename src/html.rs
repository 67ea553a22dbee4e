//! HTML to visible text reduction

use scraper::{Html, Node};

/// Elements whose text content is never rendered
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "template", "noscript"];

/// Reduce an HTML fragment or document to its visible text.
///
/// Text nodes are concatenated in document order exactly as they appear in
/// the markup; no separators are inserted between elements. Entities are
/// decoded and comments dropped. Malformed markup is handled best-effort by
/// the HTML5 parser, so this never fails.
#[must_use]
pub fn html_to_text(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let document = Html::parse_document(html);
    let mut text = String::with_capacity(html.len() / 2);

    for node in document.tree.root().descendants() {
        let Node::Text(fragment) = node.value() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
        });

        if !hidden {
            text.push_str(fragment);
        }
    }

    text
}
