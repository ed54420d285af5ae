use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use okapi_core::{BM25Okapi, BM25Params, QueryTerms, SearchResult};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

mod corpus;

use corpus::{load_corpus, SAMPLE_CORPUS};

const DEMO_QUERIES: [&str; 3] = ["quick brown fox", "stock market", "lazy dog"];

#[derive(Parser)]
#[command(name = "okapi")]
#[command(about = "Rank documents against a query with BM25", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the documents of a corpus file against a query
    Search {
        /// Corpus file: .json array, .jsonl strings, or one document per line
        #[arg(long)]
        corpus: PathBuf,
        /// Free-text query
        #[arg(long, short)]
        query: String,
        /// Number of results to print
        #[arg(short, default_value_t = 5)]
        n: usize,
        /// JSON file with BM25 parameters, e.g. {"k1": 1.2, "b": 0.75}
        #[arg(long)]
        config: Option<PathBuf>,
        /// Term frequency saturation (overrides the config file)
        #[arg(long)]
        k1: Option<f64>,
        /// Length normalization in [0, 1] (overrides the config file)
        #[arg(long)]
        b: Option<f64>,
        /// Score each distinct query word once
        #[arg(long, default_value_t = false)]
        unique_query_terms: bool,
        /// Print results as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Run the example queries over the built-in sample corpus
    Demo {
        /// Print results as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Serialize)]
struct QueryResults<'a> {
    query: &'a str,
    results: Vec<SearchResult<'a>>,
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            corpus,
            query,
            n,
            config,
            k1,
            b,
            unique_query_terms,
            json,
        } => {
            let base = match config {
                Some(path) => load_params(&path)?,
                None => BM25Params::default(),
            };
            let params = merge_params(base, k1, b, unique_query_terms);
            search(&corpus, &query, n, params, json)
        }
        Commands::Demo { json } => demo(json),
    }
}

fn load_params(path: &Path) -> Result<BM25Params> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    BM25Params::from_json(&raw).with_context(|| format!("invalid config {}", path.display()))
}

/// Apply command-line overrides on top of the config file parameters.
///
/// A flag that was not given leaves the config value alone.
fn merge_params(
    mut params: BM25Params,
    k1: Option<f64>,
    b: Option<f64>,
    unique_query_terms: bool,
) -> BM25Params {
    if let Some(k1) = k1 {
        params.k1 = k1;
    }
    if let Some(b) = b {
        params.b = b;
    }
    if unique_query_terms {
        params.query_terms = QueryTerms::Unique;
    }
    params
}

fn search(path: &Path, query: &str, n: usize, params: BM25Params, json: bool) -> Result<()> {
    let docs = load_corpus(path)?;
    let engine = BM25Okapi::with_params(docs, params)?;
    let stats = engine.stats();
    tracing::info!(
        num_docs = stats.num_docs,
        num_terms = stats.num_terms,
        avg_doc_len = stats.avg_doc_len,
        k1 = params.k1,
        b = params.b,
        "index ready"
    );

    let results = engine.get_top_n(query, n);
    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(&results);
    }
    Ok(())
}

fn demo(json: bool) -> Result<()> {
    let engine = BM25Okapi::new(SAMPLE_CORPUS);

    if json {
        let all: Vec<QueryResults<'_>> = DEMO_QUERIES
            .iter()
            .map(|&query| QueryResults {
                query,
                results: engine.get_top_n(query, 3),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&all)?);
        return Ok(());
    }

    for (i, query) in DEMO_QUERIES.iter().enumerate() {
        if i > 0 {
            println!("\n{}\n", "=".repeat(50));
        }
        println!("--- Example {}: Query '{}' ---", i + 1, query);
        print_results(&engine.get_top_n(query, 3));
    }
    Ok(())
}

fn print_results(results: &[SearchResult<'_>]) {
    for result in results {
        println!("Score: {:.4}\tDoc: {}", result.score, result.document);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config_params(json: &str) -> BM25Params {
        let dir = tempdir().unwrap();
        let path = dir.path().join("okapi.json");
        fs::write(&path, json).unwrap();
        load_params(&path).unwrap()
    }

    #[test]
    fn test_no_flags_keep_config() {
        let base = config_params(r#"{"k1": 1.2, "b": 0.5, "query_terms": "unique"}"#);
        let params = merge_params(base, None, None, false);
        assert_eq!(params.k1, 1.2);
        assert_eq!(params.b, 0.5);
        assert_eq!(params.query_terms, QueryTerms::Unique);
    }

    #[test]
    fn test_flags_override_config() {
        let base = config_params(r#"{"k1": 1.2, "b": 0.5}"#);

        let params = merge_params(base, Some(2.0), None, false);
        assert_eq!((params.k1, params.b), (2.0, 0.5));

        let params = merge_params(base, None, Some(0.0), false);
        assert_eq!((params.k1, params.b), (1.2, 0.0));

        let params = merge_params(base, Some(0.9), Some(1.0), true);
        assert_eq!((params.k1, params.b), (0.9, 1.0));
        assert_eq!(params.query_terms, QueryTerms::Unique);
    }

    #[test]
    fn test_flags_without_config() {
        let params = merge_params(BM25Params::default(), None, Some(0.3), false);
        assert_eq!(params.k1, 1.5);
        assert_eq!(params.b, 0.3);
        assert_eq!(params.query_terms, QueryTerms::Repeated);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let params = merge_params(BM25Params::default(), Some(-1.0), None, false);
        assert!(BM25Okapi::with_params(SAMPLE_CORPUS, params).is_err());
    }

    #[test]
    fn test_invalid_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("okapi.json");
        fs::write(&path, r#"{"b": 3.0}"#).unwrap();
        let err = format!("{:#}", load_params(&path).unwrap_err());
        assert!(err.contains("invalid config"), "{err}");
    }
}
