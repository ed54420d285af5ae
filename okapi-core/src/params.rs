//! BM25 parameters and their JSON configuration

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest accepted `k1`.
///
/// Far past the point where term frequency stops saturating, and small enough
/// that `tf * (k1 + 1)` stays finite for any `u32` term count.
pub const MAX_K1: f64 = 1.0e6;

/// How repeated words in a query are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryTerms {
    /// Every occurrence contributes, so "fox fox" weighs fox twice
    #[default]
    Repeated,
    /// Each distinct query word contributes once
    Unique,
}

/// BM25 parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BM25Params {
    /// Term frequency saturation
    pub k1: f64,
    /// Document length normalization, 0 disables it
    pub b: f64,
    pub query_terms: QueryTerms,
}

impl Default for BM25Params {
    fn default() -> Self {
        Self {
            k1: 1.5,
            b: 0.75,
            query_terms: QueryTerms::Repeated,
        }
    }
}

impl BM25Params {
    pub fn new(k1: f64, b: f64) -> Self {
        Self {
            k1,
            b,
            ..Self::default()
        }
    }

    pub fn with_query_terms(mut self, query_terms: QueryTerms) -> Self {
        self.query_terms = query_terms;
        self
    }

    /// Parse parameters from a JSON object and validate them.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Check that `0 <= k1 <= MAX_K1` and `0 <= b <= 1`.
    ///
    /// Outside these ranges the saturation curve can decrease with term
    /// frequency and rankings become meaningless.
    pub fn validate(&self) -> Result<()> {
        if !self.k1.is_finite() {
            return Err(Error::InvalidParameter {
                name: "k1",
                value: self.k1,
                reason: "must be finite",
            });
        }
        if self.k1 < 0.0 {
            return Err(Error::InvalidParameter {
                name: "k1",
                value: self.k1,
                reason: "must be non-negative",
            });
        }
        if self.k1 > MAX_K1 {
            return Err(Error::InvalidParameter {
                name: "k1",
                value: self.k1,
                reason: "must not exceed 1e6",
            });
        }
        if !(0.0..=1.0).contains(&self.b) {
            return Err(Error::InvalidParameter {
                name: "b",
                value: self.b,
                reason: "must be within [0, 1]",
            });
        }
        Ok(())
    }
}
