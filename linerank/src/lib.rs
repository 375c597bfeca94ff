//! # Line Rank
//!
//! Ranks the lines of a text document by TF-IDF relevance to a query.
//!
//! Line Rank provides:
//! - **Tokenizer** splitting text into ASCII-letter words
//! - **Line statistics** treating each word-bearing line as a document
//! - **TF-IDF scoring** of every line against the query words
//! - **Stable ranking** with a zero-score cutoff
//!
//! ## Quick Start
//!
//! ```rust
//! use linerank::{SearchOptions, Searcher};
//!
//! let text = "Rust is fast\nPython is popular\nRust is safe and fast";
//!
//! // Just the lines
//! let lines = linerank::search(text, "rust", 2);
//! assert_eq!(lines, vec!["Rust is fast", "Rust is safe and fast"]);
//!
//! // Lines with their line numbers and scores
//! let searcher = Searcher::new(SearchOptions { limit: 2 });
//! let results = searcher.search(text, "python");
//! assert_eq!(results[0].line_number, 2);
//! ```

pub mod corpus;
pub mod error;
pub mod output;
pub mod ranker;
pub mod scorer;
pub mod search;
pub mod tokenizer;

// Re-exports for convenience
pub use corpus::{Corpus, CorpusLine};
pub use error::{decode_document, Error, Result};
pub use output::{render, OutputFormat};
pub use search::{search, SearchOptions, SearchResult, Searcher};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
