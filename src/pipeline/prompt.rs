//! Character bound and instruction prompt for the summarization backend.

/// Hard character bound on page text fed to the backend. Truncation is
/// length-based, not word or token aware; content beyond the bound is
/// dropped. Caps worst-case prompt size, cost, and latency.
pub const MAX_PAGE_CHARS: usize = 12_000;

/// Sentinel lines separating instructions from untrusted page content.
/// They reduce, not eliminate, the risk of page text being read as
/// instructions by the backend.
pub const PAGE_START: &str = "--- PAGE START ---";
pub const PAGE_END: &str = "--- PAGE END ---";

/// Take the first `MAX_PAGE_CHARS` characters of the normalized text.
pub fn truncate(text: &str) -> String {
    text.chars().take(MAX_PAGE_CHARS).collect()
}

/// Compose the instruction prompt: word-count hint, optional focus clause,
/// then the bounded page text between the sentinel markers.
pub fn build(page_text: &str, words: u32, focus: &str) -> String {
    let focus_clause = if focus.trim().is_empty() {
        String::new()
    } else {
        format!(" Focus on: {}.", focus.trim())
    };
    format!(
        "Summarize the following web page content in about {words} words. \
         Be accurate and do not fabricate facts. Use bullet points where helpful.\
         {focus_clause}\n\n{PAGE_START}\n{page_text}\n{PAGE_END}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_bounds_long_text() {
        let long = "a".repeat(30_000);
        assert_eq!(truncate(&long).chars().count(), MAX_PAGE_CHARS);
    }

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("short"), "short");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let long = "é".repeat(MAX_PAGE_CHARS + 100);
        let bounded = truncate(&long);
        assert_eq!(bounded.chars().count(), MAX_PAGE_CHARS);
    }

    #[test]
    fn prompt_embeds_words_and_sentinels() {
        let p = build("page body", 150, "");
        assert!(p.contains("about 150 words"));
        assert!(p.contains(PAGE_START));
        assert!(p.contains(PAGE_END));
        assert!(p.contains("page body"));
        // Page text sits between the sentinels.
        let start = p.find(PAGE_START).unwrap();
        let end = p.find(PAGE_END).unwrap();
        let body = p.find("page body").unwrap();
        assert!(start < body && body < end);
    }

    #[test]
    fn focus_clause_only_when_nonempty() {
        assert!(!build("x", 200, "").contains("Focus on"));
        assert!(!build("x", 200, "   ").contains("Focus on"));
        assert!(build("x", 200, "pricing").contains("Focus on: pricing."));
    }
}
