//! Main-content extraction via the readability heuristic.

use std::io::Cursor;

use url::Url;

/// Reduce a full HTML document to its main-content fragment. A heuristic
/// miss (error or empty output) falls back to the original document
/// unchanged, so this stage never aborts the pipeline.
pub fn extract(html: &str, url: &str) -> String {
    let parsed = match Url::parse(url) {
        Ok(u) => u,
        Err(e) => {
            tracing::debug!(url, error = %e, "unparseable url, skipping extraction");
            return html.to_string();
        }
    };

    let mut cursor = Cursor::new(html.as_bytes());
    match readability::extractor::extract(&mut cursor, &parsed) {
        Ok(product) if !product.content.trim().is_empty() => product.content,
        Ok(_) => {
            tracing::debug!(url, "extraction yielded empty content, using full document");
            html.to_string()
        }
        Err(e) => {
            tracing::debug!(url, error = %e, "extraction failed, using full document");
            html.to_string()
        }
    }
}
