//! Top-N selection over a score vector

use std::cmp::Ordering;

/// Indices of the `n` highest scores, descending.
///
/// The sort is stable, so documents with equal scores keep their corpus
/// order. NaN scores rank below every number. `n` larger than
/// `scores.len()` returns every document.
pub fn top_n(scores: &[f64], n: usize) -> Vec<(usize, f64)> {
    if n == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| by_score_desc(a.1, b.1));
    ranked.truncate(n);
    ranked
}

fn by_score_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // 0.0 and -0.0 compare equal here, keeping them a tie
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
