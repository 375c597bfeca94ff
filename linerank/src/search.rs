//! Search over the lines of one document

use crate::corpus::Corpus;
use crate::ranker::rank;
use crate::scorer::score_corpus;
use crate::tokenizer::query_terms;

/// Search options
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum number of results
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions { limit: 10 }
    }
}

/// Search result
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    /// 1-based line number in the document
    pub line_number: usize,
    /// Original line text
    pub text: &'a str,
    /// TF-IDF relevance score (always > 0)
    pub score: f64,
}

/// Searcher for a single document
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    options: SearchOptions,
}

impl Searcher {
    /// Create a new searcher
    pub fn new(options: SearchOptions) -> Self {
        Searcher { options }
    }

    /// Options this searcher was built with
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Rank the lines of `text` against `query`.
    ///
    /// Everything is rebuilt from `text` on every call; results borrow from it.
    pub fn search<'a>(&self, text: &'a str, query: &str) -> Vec<SearchResult<'a>> {
        if self.options.limit == 0 {
            return Vec::new();
        }

        let terms = query_terms(query);
        tracing::debug!("Query {:?}: {} distinct terms", query, terms.len());
        if terms.is_empty() {
            return Vec::new();
        }

        let corpus = Corpus::build(text);
        let scores = score_corpus(&corpus, &terms);

        let results: Vec<SearchResult<'a>> = rank(&scores, self.options.limit)
            .into_iter()
            .map(|index| {
                let line = &corpus.lines()[index];
                tracing::trace!("line {} scored {:.6}", line.line_number, scores[index]);
                SearchResult {
                    line_number: line.line_number,
                    text: line.text,
                    score: scores[index],
                }
            })
            .collect();

        tracing::debug!(
            "{} of {} lines matched (limit {})",
            results.len(),
            corpus.len(),
            self.options.limit
        );

        results
    }
}

/// Return up to `results_count` lines of `text` most relevant to `query`.
///
/// Each returned slice is one full original line of `text`. Lines with zero
/// relevance are never returned, and equally relevant lines keep their
/// document order.
///
/// # Example
///
/// ```
/// let lines = linerank::search("cat dog\ndog dog\nbird", "dog", 3);
/// assert_eq!(lines, vec!["dog dog", "cat dog"]);
/// ```
pub fn search<'a>(text: &'a str, query: &str, results_count: usize) -> Vec<&'a str> {
    Searcher::new(SearchOptions {
        limit: results_count,
    })
    .search(text, query)
    .into_iter()
    .map(|result| result.text)
    .collect()
}
