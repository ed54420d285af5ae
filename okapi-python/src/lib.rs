//! Python bindings for the Okapi BM25 engine

use okapi_core::{BM25Okapi as CoreBM25Okapi, BM25Params, QueryTerms};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::collections::HashMap;

/// Python-exposed BM25 ranking engine
#[pyclass(frozen)]
pub struct BM25Okapi {
    engine: CoreBM25Okapi,
}

#[pymethods]
impl BM25Okapi {
    /// Build the index over a list of documents
    ///
    /// Raises ValueError if k1 is negative or b is outside [0, 1].
    #[new]
    #[pyo3(signature = (corpus, k1=1.5, b=0.75, unique_query_terms=false))]
    fn new(corpus: Vec<String>, k1: f64, b: f64, unique_query_terms: bool) -> PyResult<Self> {
        let query_terms = if unique_query_terms {
            QueryTerms::Unique
        } else {
            QueryTerms::Repeated
        };
        let params = BM25Params::new(k1, b).with_query_terms(query_terms);
        let engine = CoreBM25Okapi::with_params(corpus, params)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { engine })
    }

    /// BM25 score of every document, in corpus order
    ///
    /// Args:
    ///     query: Search query text
    ///
    /// Returns:
    ///     List of floats, one per document
    fn get_scores(&self, py: Python<'_>, query: &str) -> Vec<f64> {
        py.allow_threads(|| self.engine.get_scores(query))
    }

    /// Get the n most relevant documents for a query
    ///
    /// Args:
    ///     query: Search query text
    ///     n: Number of results to return (default: 5)
    ///
    /// Returns:
    ///     List of (document, score) tuples, best first
    #[pyo3(signature = (query, n=5))]
    fn get_top_n(&self, py: Python<'_>, query: &str, n: usize) -> Vec<(String, f64)> {
        py.allow_threads(|| {
            self.engine
                .get_top_n(query, n)
                .into_iter()
                .map(|r| (r.document.to_owned(), r.score))
                .collect()
        })
    }

    /// Get index statistics
    ///
    /// Returns:
    ///     Dictionary with num_docs, num_terms, total_doc_len, avg_doc_len
    fn stats(&self, py: Python<'_>) -> HashMap<String, PyObject> {
        let stats = self.engine.stats();
        let mut map = HashMap::new();
        map.insert("num_docs".to_string(), stats.num_docs.to_object(py));
        map.insert("num_terms".to_string(), stats.num_terms.to_object(py));
        map.insert("total_doc_len".to_string(), stats.total_doc_len.to_object(py));
        map.insert("avg_doc_len".to_string(), stats.avg_doc_len.to_object(py));
        map
    }

    #[getter]
    fn k1(&self) -> f64 {
        self.engine.params().k1
    }

    #[getter]
    fn b(&self) -> f64 {
        self.engine.params().b
    }

    fn __len__(&self) -> usize {
        self.engine.len()
    }

    fn __repr__(&self) -> String {
        let stats = self.engine.stats();
        let params = self.engine.params();
        format!(
            "BM25Okapi(num_docs={}, num_terms={}, avg_doc_len={:.2}, k1={}, b={})",
            stats.num_docs, stats.num_terms, stats.avg_doc_len, params.k1, params.b
        )
    }
}

/// Python module
#[pymodule]
fn okapi_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<BM25Okapi>()?;
    Ok(())
}
