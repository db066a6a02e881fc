//! HTML-to-text extraction
//!
//! Converts fetched HTML into the plain text that gets searched: visible
//! text only (script and style contents excluded), whitespace collapsed
//! to single spaces.

use scraper::Html;

/// Extracts the visible text of an HTML document
///
/// Text nodes inside `<script>` and `<style>` elements are skipped; all
/// remaining text is whitespace-normalized into one space-separated
/// string. Returns an empty string for documents with no visible text.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut words: Vec<&str> = Vec::new();

    for node in document.tree.nodes() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let parent_is_hidden = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .map(|element| matches!(element.name(), "script" | "style"))
            .unwrap_or(false);
        if parent_is_hidden {
            continue;
        }

        words.extend(text.split_whitespace());
    }

    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_body_text() {
        let html = "<html><body><p>the cat sat</p></body></html>";
        assert_eq!(html_to_text(html), "the cat sat");
    }

    #[test]
    fn test_whitespace_collapsed() {
        let html = "<html><body><p>the   cat\n\n  sat</p></body></html>";
        assert_eq!(html_to_text(html), "the cat sat");
    }

    #[test]
    fn test_text_across_elements() {
        let html = "<html><body><h1>Title</h1><p>one</p><p>two</p></body></html>";
        assert_eq!(html_to_text(html), "Title one two");
    }

    #[test]
    fn test_script_excluded() {
        let html = "<html><body><script>var cat = 1;</script><p>dog</p></body></html>";
        assert_eq!(html_to_text(html), "dog");
    }

    #[test]
    fn test_style_excluded() {
        let html = "<html><head><style>.cat { color: red; }</style></head><body>dog</body></html>";
        assert_eq!(html_to_text(html), "dog");
    }

    #[test]
    fn test_title_text_included() {
        let html = "<html><head><title>Home</title></head><body>content</body></html>";
        assert_eq!(html_to_text(html), "Home content");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(html_to_text(""), "");
        assert_eq!(html_to_text("<html><body></body></html>"), "");
    }

    #[test]
    fn test_whitespace_only_document() {
        assert_eq!(html_to_text("<html><body>   \n\t  </body></html>"), "");
    }

    #[test]
    fn test_plain_text_passthrough() {
        // Non-HTML content still parses; its text survives
        assert_eq!(html_to_text("just words"), "just words");
    }
}
