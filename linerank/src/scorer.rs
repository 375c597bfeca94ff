//! TF-IDF relevance scoring of corpus lines
//!
//! For each query term found in a line:
//!
//! ```text
//! tf  = count of term in line / words in line
//! idf = ln(corpus lines / lines containing term)
//! score += tf * idf
//! ```
//!
//! A term that occurs in every line has `idf = 0` and adds nothing.

use crate::corpus::{Corpus, CorpusLine};
use crate::tokenizer::normalize;
use std::collections::{BTreeSet, HashMap};

/// Occurrences of each normalized word
pub fn term_frequencies(words: &[&str]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for word in words {
        *counts.entry(normalize(word)).or_insert(0) += 1;
    }
    counts
}

/// Score one line against normalized query terms.
pub fn score_line(line: &CorpusLine<'_>, corpus: &Corpus<'_>, terms: &BTreeSet<String>) -> f64 {
    let counts = term_frequencies(&line.words);
    let line_len = line.words.len() as f64;
    let corpus_len = corpus.len() as f64;

    let mut score = 0.0;
    for term in terms {
        let Some(&count) = counts.get(term) else {
            continue;
        };
        // Present in this line, so present in the corpus
        let Some(lines_with_term) = corpus.frequency_of_key(term) else {
            continue;
        };

        let tf = count as f64 / line_len;
        let inverse_doc_ratio = lines_with_term as f64 / corpus_len;
        score += tf * (1.0 / inverse_doc_ratio).ln();
    }
    score
}

/// Scores for every corpus line, in corpus order.
pub fn score_corpus(corpus: &Corpus<'_>, terms: &BTreeSet<String>) -> Vec<f64> {
    corpus
        .lines()
        .iter()
        .map(|line| score_line(line, corpus, terms))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::query_terms;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_term_frequencies_case_insensitive() {
        let counts = term_frequencies(&["Dog", "dog", "DOG", "cat"]);
        assert_eq!(counts.get("dog"), Some(&3));
        assert_eq!(counts.get("cat"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_score_corpus_formula() {
        let corpus = Corpus::build("cat dog\ndog dog\nbird");
        let scores = score_corpus(&corpus, &query_terms("dog"));

        let idf = (3.0f64 / 2.0).ln();
        assert!(approx_eq(scores[0], 0.5 * idf));
        assert!(approx_eq(scores[1], 1.0 * idf));
        assert_eq!(scores[2], 0.0);
    }

    #[test]
    fn test_score_sums_over_terms() {
        let corpus = Corpus::build("cat dog\ndog dog\nbird");
        let scores = score_corpus(&corpus, &query_terms("cat dog"));

        let expected = 0.5 * 3.0f64.ln() + 0.5 * (3.0f64 / 2.0).ln();
        assert!(approx_eq(scores[0], expected));
    }

    #[test]
    fn test_term_in_every_line_scores_zero() {
        let corpus = Corpus::build("a\na\na");
        let scores = score_corpus(&corpus, &query_terms("a"));
        assert_eq!(scores, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_single_line_document_scores_zero() {
        let corpus = Corpus::build("one line only");
        let scores = score_corpus(&corpus, &query_terms("line"));
        assert_eq!(scores, vec![0.0]);
    }

    #[test]
    fn test_missing_term_contributes_nothing() {
        let corpus = Corpus::build("alpha beta\ngamma");
        let with_missing = score_corpus(&corpus, &query_terms("alpha missing"));
        let without = score_corpus(&corpus, &query_terms("alpha"));
        assert_eq!(with_missing, without);
    }

    #[test]
    fn test_empty_query_scores_zero() {
        let corpus = Corpus::build("alpha beta\ngamma");
        let scores = score_corpus(&corpus, &BTreeSet::new());
        assert_eq!(scores, vec![0.0, 0.0]);
    }

    #[test]
    fn test_scores_never_negative() {
        let corpus = Corpus::build("x y z\nx x\ny\nz z z z");
        for score in score_corpus(&corpus, &query_terms("x y z w")) {
            assert!(score >= 0.0);
        }
    }
}
