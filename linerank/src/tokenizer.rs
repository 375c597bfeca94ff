//! Word tokenizer
//!
//! A word is a maximal run of ASCII letters. Everything else (digits,
//! punctuation, whitespace, newlines and any non-ASCII byte) separates words
//! and is dropped. The same rules apply to document lines and to queries.

use std::collections::BTreeSet;

/// Lazy iterator over the words of a text.
///
/// Yields slices of the input; nothing is copied.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let bytes = self.text.as_bytes();

        // Skip separators
        while self.pos < bytes.len() && !bytes[self.pos].is_ascii_alphabetic() {
            self.pos += 1;
        }
        if self.pos == bytes.len() {
            return None;
        }

        let start = self.pos;
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_alphabetic() {
            self.pos += 1;
        }

        // Both ends sit next to ASCII bytes (or the text bounds), so they are
        // always char boundaries.
        Some(&self.text[start..self.pos])
    }
}

impl std::iter::FusedIterator for Words<'_> {}

/// Split text into words.
///
/// # Example
///
/// ```
/// use linerank::tokenizer::words;
///
/// let found: Vec<&str> = words("Hello, world42again!").collect();
/// assert_eq!(found, vec!["Hello", "world", "again"]);
/// ```
pub fn words(text: &str) -> Words<'_> {
    Words { text, pos: 0 }
}

/// Canonical key for a word: ASCII lowercase.
pub fn normalize(word: &str) -> String {
    word.to_ascii_lowercase()
}

/// Normalized, deduplicated query words in sorted order.
///
/// # Example
///
/// ```
/// use linerank::tokenizer::query_terms;
///
/// let terms: Vec<String> = query_terms("Dog dog, CAT").into_iter().collect();
/// assert_eq!(terms, vec!["cat", "dog"]);
/// ```
pub fn query_terms(query: &str) -> BTreeSet<String> {
    words(query).map(normalize).collect()
}
