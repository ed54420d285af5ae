//! BM25 scoring and ranking over a fixed corpus

use serde::Serialize;

use crate::error::Result;
use crate::params::{BM25Params, QueryTerms};
use crate::rank;
use crate::stats::{CorpusStats, IndexStats};
use crate::tokenizer::Tokenizer;

/// Smoothed inverse document frequency.
///
/// `ln((N - df + 0.5) / (df + 0.5) + 1)`; the `+ 1` keeps it non-negative
/// even for terms found in every document.
pub fn idf(doc_count: usize, doc_freq: u32) -> f64 {
    let n = doc_count as f64;
    let df = doc_freq as f64;
    ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
}

/// BM25 scorer for calculating relevance scores
#[derive(Debug, Clone, Copy)]
pub struct BM25Scorer {
    params: BM25Params,
    avg_doc_len: f64,
}

impl BM25Scorer {
    /// Create a new BM25 scorer
    pub fn new(params: BM25Params, avg_doc_len: f64) -> Self {
        Self {
            params,
            avg_doc_len,
        }
    }

    /// Saturated, length-normalized term frequency
    pub fn tf_component(&self, term_freq: f64, doc_len: f64) -> f64 {
        let BM25Params { k1, b, .. } = self.params;
        // Only an all-empty corpus has a zero average, and then every tf is 0
        let len_ratio = if self.avg_doc_len > 0.0 {
            doc_len / self.avg_doc_len
        } else {
            0.0
        };
        (term_freq * (k1 + 1.0)) / (term_freq + k1 * (1.0 - b + b * len_ratio))
    }

    /// Calculate BM25 score for a single term
    pub fn score_term(&self, term_freq: f64, doc_len: f64, idf: f64) -> f64 {
        idf * self.tf_component(term_freq, doc_len)
    }
}

/// Search result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<'a> {
    /// 0-based position in the ranking
    pub rank: usize,
    /// Position of the document in the corpus
    pub index: usize,
    pub document: &'a str,
    pub score: f64,
}

/// BM25 (Okapi) ranking engine over an immutable corpus.
///
/// All statistics are computed once in the constructor; queries only read
/// them, so a shared `&BM25Okapi` can serve any number of threads.
#[derive(Debug, Clone)]
pub struct BM25Okapi {
    tokenizer: Tokenizer,
    params: BM25Params,
    corpus: Vec<String>,
    stats: CorpusStats,
}

impl BM25Okapi {
    /// Index `documents` with the default parameters
    pub fn new<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(documents, BM25Params::default())
    }

    /// Index `documents` with custom parameters.
    ///
    /// Fails with [`crate::Error::InvalidParameter`] if `k1` or `b` is out of range.
    pub fn with_params<I, S>(documents: I, params: BM25Params) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        params.validate()?;
        Ok(Self::build(documents, params))
    }

    fn build<I, S>(documents: I, params: BM25Params) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokenizer = Tokenizer::new();
        let corpus: Vec<String> = documents.into_iter().map(Into::into).collect();
        let stats = CorpusStats::build(corpus.as_slice(), &tokenizer);
        Self {
            tokenizer,
            params,
            corpus,
            stats,
        }
    }

    /// BM25 score of every document for `query`, in corpus order
    pub fn get_scores(&self, query: &str) -> Vec<f64> {
        let query_terms = self.query_terms(query);
        let scorer = BM25Scorer::new(self.params, self.stats.avg_doc_len());

        (0..self.corpus.len())
            .map(|doc| self.score_document(doc, &query_terms, &scorer))
            .collect()
    }

    /// The `n` best matching documents with their scores, best first.
    ///
    /// Equal scores keep corpus order.
    pub fn get_top_n(&self, query: &str, n: usize) -> Vec<SearchResult<'_>> {
        let scores = self.get_scores(query);
        rank::top_n(&scores, n)
            .into_iter()
            .enumerate()
            .map(|(rank, (index, score))| SearchResult {
                rank,
                index,
                document: &self.corpus[index],
                score,
            })
            .collect()
    }

    fn query_terms(&self, query: &str) -> Vec<String> {
        match self.params.query_terms {
            QueryTerms::Repeated => self.tokenizer.tokenize(query),
            QueryTerms::Unique => self.tokenizer.tokenize_unique(query),
        }
    }

    /// Score a single document for a query
    fn score_document(&self, doc: usize, query_terms: &[String], scorer: &BM25Scorer) -> f64 {
        let Some(term_freqs) = self.stats.term_freqs(doc) else {
            return 0.0;
        };
        let doc_len = self.stats.doc_len(doc).unwrap_or(0) as f64;

        let mut score = 0.0;
        for term in query_terms {
            let Some(&term_freq) = term_freqs.get(term.as_str()) else {
                continue;
            };
            let idf = self.stats.idf(term).unwrap_or(0.0);
            score += scorer.score_term(term_freq as f64, doc_len, idf);
        }
        score
    }

    pub fn corpus(&self) -> &[String] {
        &self.corpus
    }

    pub fn params(&self) -> &BM25Params {
        &self.params
    }

    pub fn corpus_stats(&self) -> &CorpusStats {
        &self.stats
    }

    /// Get index statistics
    pub fn stats(&self) -> IndexStats {
        self.stats.summary()
    }

    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }
}
