//! Whole-word keyword matching
//!
//! The keyword is treated as literal text: it is regex-escaped and then
//! wrapped in `\b` word-boundary anchors, so a keyword like `c++` matches
//! itself rather than acting as a pattern. Offsets are character
//! positions, ascending, from a single left-to-right scan.

use crate::PagegrepError;
use regex::Regex;

/// Compiled whole-word matcher for one keyword
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    pattern: Regex,
}

impl KeywordMatcher {
    /// Compiles the matcher for a keyword
    ///
    /// The keyword is escaped before compilation; regex metacharacters in
    /// it are matched literally.
    pub fn new(keyword: &str) -> Result<Self, PagegrepError> {
        let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(keyword)))?;
        Ok(Self { pattern })
    }

    /// Returns every non-overlapping match start as a character offset
    pub fn find_offsets(&self, text: &str) -> Vec<usize> {
        let mut offsets = Vec::new();
        let mut chars_seen = 0;
        let mut last_byte = 0;

        for found in self.pattern.find_iter(text) {
            chars_seen += text[last_byte..found.start()].chars().count();
            offsets.push(chars_seen);
            chars_seen += text[found.start()..found.end()].chars().count();
            last_byte = found.end();
        }

        offsets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_offsets() {
        let matcher = KeywordMatcher::new("cat").unwrap();
        assert_eq!(
            matcher.find_offsets("the cat sat on the cat mat"),
            vec![4, 19]
        );
    }

    #[test]
    fn test_no_partial_word_match() {
        let matcher = KeywordMatcher::new("cat").unwrap();
        assert!(matcher.find_offsets("category catalog concatenate").is_empty());
    }

    #[test]
    fn test_no_match() {
        let matcher = KeywordMatcher::new("cat").unwrap();
        assert!(matcher.find_offsets("the dog sat on the mat").is_empty());
    }

    #[test]
    fn test_empty_text() {
        let matcher = KeywordMatcher::new("cat").unwrap();
        assert!(matcher.find_offsets("").is_empty());
    }

    #[test]
    fn test_match_at_start_and_end() {
        let matcher = KeywordMatcher::new("cat").unwrap();
        assert_eq!(matcher.find_offsets("cat and cat"), vec![0, 8]);
    }

    #[test]
    fn test_punctuation_is_a_boundary() {
        let matcher = KeywordMatcher::new("cat").unwrap();
        assert_eq!(matcher.find_offsets("a cat, a cat."), vec![2, 9]);
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let matcher = KeywordMatcher::new("a.b").unwrap();
        assert_eq!(matcher.find_offsets("a.b axb"), vec![0]);
    }

    #[test]
    fn test_offsets_are_character_positions() {
        let matcher = KeywordMatcher::new("cat").unwrap();
        // "café " is 5 characters but 6 bytes
        assert_eq!(matcher.find_offsets("café cat"), vec![5]);
    }

    #[test]
    fn test_case_sensitive() {
        let matcher = KeywordMatcher::new("cat").unwrap();
        assert!(matcher.find_offsets("Cat CAT").is_empty());
    }
}
