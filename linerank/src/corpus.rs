//! Line statistics for one document
//!
//! The corpus is the list of word-bearing lines of a single document together
//! with the number of lines each word appears in. It borrows from the
//! document text and lives for one search.

use crate::tokenizer::{normalize, words};
use std::collections::{HashMap, HashSet};

/// A line that contains at least one word
#[derive(Debug, Clone)]
pub struct CorpusLine<'a> {
    /// Original line text, verbatim
    pub text: &'a str,
    /// 1-based line number in the document (empty lines included)
    pub line_number: usize,
    /// Words of the line in order, original casing
    pub words: Vec<&'a str>,
}

/// Word-bearing lines of a document plus document frequencies
#[derive(Debug, Clone, Default)]
pub struct Corpus<'a> {
    lines: Vec<CorpusLine<'a>>,
    document_frequency: HashMap<String, usize>,
}

impl<'a> Corpus<'a> {
    /// Split `text` on `'\n'` and collect line statistics.
    ///
    /// Lines without words are dropped. No trimming is done, so a trailing
    /// `'\r'` stays part of the line text.
    pub fn build(text: &'a str) -> Self {
        let mut corpus = Corpus::default();

        for (index, line) in text.split('\n').enumerate() {
            let line_words: Vec<&'a str> = words(line).collect();
            if line_words.is_empty() {
                continue;
            }

            let distinct: HashSet<String> = line_words.iter().map(|w| normalize(w)).collect();
            for word in distinct {
                *corpus.document_frequency.entry(word).or_insert(0) += 1;
            }

            corpus.lines.push(CorpusLine {
                text: line,
                line_number: index + 1,
                words: line_words,
            });
        }

        tracing::debug!(
            "Built corpus: {} lines, {} distinct words",
            corpus.lines.len(),
            corpus.document_frequency.len()
        );

        corpus
    }

    /// Corpus lines in document order
    pub fn lines(&self) -> &[CorpusLine<'a>] {
        &self.lines
    }

    /// Number of corpus lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the document has no word-bearing lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines containing `word` (case-insensitive), if any
    pub fn document_frequency(&self, word: &str) -> Option<usize> {
        self.frequency_of_key(&normalize(word))
    }

    /// Document frequency for an already normalized key
    pub(crate) fn frequency_of_key(&self, key: &str) -> Option<usize> {
        self.document_frequency.get(key).copied()
    }
}
