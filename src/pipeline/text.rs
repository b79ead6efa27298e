//! HTML-to-text normalization: strip non-content markup, render a clean
//! line-oriented stream.

use ego_tree::NodeRef;
use scraper::{Html, Node};

/// Elements whose text must never appear in normalized output.
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "template", "head", "iframe"];

/// Render an HTML fragment as plain text: skipped/hidden subtrees removed,
/// lines trimmed, blank lines dropped, rejoined with single newlines.
/// Pure function of its input.
pub fn normalize(fragment: &str) -> String {
    let doc = Html::parse_document(fragment);
    let mut raw = String::new();
    collect_visible_text(doc.tree.root(), &mut raw);
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Normalize the extracted fragment, falling back to the original document
/// when the fragment carries no visible text at all.
pub fn normalize_with_fallback(fragment: &str, original: &str) -> String {
    let text = normalize(fragment);
    if !text.is_empty() {
        return text;
    }
    normalize(original)
}

fn collect_visible_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Element(el) => {
            if SKIPPED_ELEMENTS.contains(&el.name()) || el.attr("hidden").is_some() {
                return;
            }
            for child in node.children() {
                collect_visible_text(child, out);
            }
            // Element boundaries become line boundaries.
            out.push('\n');
        }
        Node::Text(t) => out.push_str(&t.text),
        _ => {
            for child in node.children() {
                collect_visible_text(child, out);
            }
        }
    }
}
