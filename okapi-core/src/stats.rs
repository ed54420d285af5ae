//! Corpus statistics computed once when the engine is built

use ahash::AHashMap;
use serde::Serialize;

use crate::bm25;
use crate::tokenizer::Tokenizer;

/// Per-document and global term statistics for a fixed corpus
#[derive(Debug, Clone, Default)]
pub struct CorpusStats {
    doc_lengths: Vec<usize>,
    term_freqs: Vec<AHashMap<String, u32>>, // doc -> {term: count}
    doc_freqs: AHashMap<String, u32>,       // term -> number of docs containing it
    idf: AHashMap<String, f64>,
    total_doc_len: u64,
    avg_doc_len: f64,
}

impl CorpusStats {
    /// Tokenize every document and derive lengths, term frequencies,
    /// document frequencies and IDF.
    pub fn build<S: AsRef<str>>(documents: &[S], tokenizer: &Tokenizer) -> Self {
        let mut doc_lengths = Vec::with_capacity(documents.len());
        let mut term_freqs = Vec::with_capacity(documents.len());
        let mut doc_freqs: AHashMap<String, u32> = AHashMap::new();
        let mut total_doc_len = 0u64;

        for doc in documents {
            let tokens = tokenizer.tokenize(doc.as_ref());
            doc_lengths.push(tokens.len());
            total_doc_len += tokens.len() as u64;

            let mut counts: AHashMap<String, u32> = AHashMap::new();
            for token in tokens {
                *counts.entry(token).or_insert(0) += 1;
            }

            // Keys are distinct, so each document bumps a term at most once
            for term in counts.keys() {
                *doc_freqs.entry(term.clone()).or_insert(0) += 1;
            }
            term_freqs.push(counts);
        }

        let doc_count = documents.len();
        let avg_doc_len = if doc_count == 0 {
            0.0
        } else {
            total_doc_len as f64 / doc_count as f64
        };

        let idf = doc_freqs
            .iter()
            .map(|(term, &df)| (term.clone(), bm25::idf(doc_count, df)))
            .collect();

        tracing::debug!(
            num_docs = doc_count,
            num_terms = doc_freqs.len(),
            total_doc_len,
            avg_doc_len,
            "built corpus statistics"
        );

        Self {
            doc_lengths,
            term_freqs,
            doc_freqs,
            idf,
            total_doc_len,
            avg_doc_len,
        }
    }

    pub fn num_docs(&self) -> usize {
        self.doc_lengths.len()
    }

    /// Vocabulary size
    pub fn num_terms(&self) -> usize {
        self.idf.len()
    }

    pub fn total_doc_len(&self) -> u64 {
        self.total_doc_len
    }

    pub fn avg_doc_len(&self) -> f64 {
        self.avg_doc_len
    }

    pub fn doc_lengths(&self) -> &[usize] {
        &self.doc_lengths
    }

    /// Token count of document `doc`, or `None` if out of range
    pub fn doc_len(&self, doc: usize) -> Option<usize> {
        self.doc_lengths.get(doc).copied()
    }

    /// Occurrences of `term` in document `doc` (0 when absent)
    pub fn term_freq(&self, doc: usize, term: &str) -> u32 {
        self.term_freqs
            .get(doc)
            .and_then(|tf| tf.get(term))
            .copied()
            .unwrap_or(0)
    }

    /// The term frequency table of document `doc`
    pub fn term_freqs(&self, doc: usize) -> Option<&AHashMap<String, u32>> {
        self.term_freqs.get(doc)
    }

    /// Number of documents containing `term` (0 when unseen)
    pub fn doc_freq(&self, term: &str) -> u32 {
        self.doc_freqs.get(term).copied().unwrap_or(0)
    }

    /// IDF of `term`, `None` when the term never occurs in the corpus
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    pub fn summary(&self) -> IndexStats {
        IndexStats {
            num_docs: self.num_docs(),
            num_terms: self.num_terms(),
            total_doc_len: self.total_doc_len,
            avg_doc_len: self.avg_doc_len,
        }
    }
}

/// Index statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndexStats {
    pub num_docs: usize,
    pub num_terms: usize,
    pub total_doc_len: u64,
    pub avg_doc_len: f64,
}
