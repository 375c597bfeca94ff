//! Line Rank CLI - rank the lines of a document against a query

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use linerank::{OutputFormat, SearchOptions, Searcher};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "linerank")]
#[command(
    author,
    version,
    about = "Line Rank - rank the lines of a text document by relevance to a query"
)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the most relevant lines of a document
    Search {
        /// Search query
        query: String,

        /// Document to search (default: stdin)
        #[arg(long, short = 'f', env = "LINERANK_FILE")]
        file: Option<PathBuf>,

        /// Maximum number of results
        #[arg(long, short = 'n', default_value = "10", env = "LINERANK_LIMIT")]
        limit: usize,

        /// Prefix text results with line number and score
        #[arg(long, short = 's')]
        scores: bool,

        /// Output format (text, json)
        #[arg(long, short = 'o', default_value = "text")]
        format: String,
    },

    /// Print the words the tokenizer extracts from some text
    Tokens {
        /// Text to tokenize
        text: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Search {
            query,
            file,
            limit,
            scores,
            format,
        } => cmd_search(&query, file.as_deref(), limit, scores, &format),
        Commands::Tokens { text } => cmd_tokens(&text),
    }
}

/// Read the whole document from a file or stdin
fn read_document(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .context("Failed to read stdin")?;
            Ok(bytes)
        }
    }
}

fn cmd_search(
    query: &str,
    file: Option<&Path>,
    limit: usize,
    scores: bool,
    format: &str,
) -> Result<()> {
    let format: OutputFormat = format.parse()?;

    let bytes = read_document(file)?;
    let text = linerank::decode_document(&bytes)?;
    tracing::debug!("Read document: {} bytes", bytes.len());

    let searcher = Searcher::new(SearchOptions { limit });
    let results = searcher.search(text, query);

    if results.is_empty() && format == OutputFormat::Text {
        tracing::info!("No matching lines for {:?}", query);
        return Ok(());
    }

    println!("{}", linerank::render(&results, format, scores)?);
    Ok(())
}

fn cmd_tokens(text: &str) -> Result<()> {
    for word in linerank::tokenizer::words(text) {
        println!("{}", word);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search_arguments() {
        let cli = Cli::try_parse_from([
            "linerank", "search", "dog", "-n", "3", "-f", "doc.txt", "--scores", "-o", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Search {
                query,
                file,
                limit,
                scores,
                format,
            } => {
                assert_eq!(query, "dog");
                assert_eq!(file, Some(PathBuf::from("doc.txt")));
                assert_eq!(limit, 3);
                assert!(scores);
                assert_eq!(format, "json");
            }
            Commands::Tokens { .. } => panic!("expected search command"),
        }
    }

    #[test]
    fn test_parse_rejects_negative_limit() {
        assert!(Cli::try_parse_from(["linerank", "search", "dog", "-n", "-1"]).is_err());
    }
}
