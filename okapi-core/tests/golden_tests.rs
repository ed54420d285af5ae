//! Golden ranking tests over the sample corpus

use okapi_core::{BM25Okapi, BM25Params, Error, QueryTerms};

const SAMPLE_CORPUS: [&str; 8] = [
    "The quick brown fox jumps over the lazy dog",
    "A lazy brown dog naps under the tree",
    "The quick fox is a brown fox",
    "Never underestimate the power of a good book",
    "London is the capital of Great Britain",
    "The quick brown fox and the lazy dog are friends",
    "The stock market is volatile today, with tech stocks leading the decline",
    "Investing in the stock market requires careful research and a long-term strategy",
];

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {expected}, got {actual}"
    );
}

fn ranking(engine: &BM25Okapi, query: &str, n: usize) -> Vec<(usize, f64)> {
    engine
        .get_top_n(query, n)
        .into_iter()
        .map(|r| (r.index, r.score))
        .collect()
}

#[test]
fn quick_brown_fox() {
    let engine = BM25Okapi::new(SAMPLE_CORPUS);
    let top = ranking(&engine, "quick brown fox", 3);

    assert_eq!(top.iter().map(|t| t.0).collect::<Vec<_>>(), vec![2, 0, 5]);
    assert_close(top[0].1, 3.302561278478739);
    assert_close(top[1].1, 2.6138605946632274);
    assert_close(top[2].1, 2.491176133896765);
}

#[test]
fn stock_market_pads_with_zero_scores_in_corpus_order() {
    let engine = BM25Okapi::new(SAMPLE_CORPUS);
    let top = engine.get_top_n("stock market", 3);

    assert_eq!(top[0].index, 6);
    assert_close(top[0].score, 2.2595734103502445);
    assert_eq!(top[1].index, 7);
    assert_close(top[1].score, 2.166608104324406);
    // Every other document scores 0, so the first of them wins the tie
    assert_eq!(top[2].index, 0);
    assert_eq!(top[2].score, 0.0);
    assert_eq!(top[2].document, SAMPLE_CORPUS[0]);
}

#[test]
fn lazy_dog() {
    let engine = BM25Okapi::new(SAMPLE_CORPUS);
    let top = ranking(&engine, "lazy dog", 3);

    assert_eq!(top.iter().map(|t| t.0).collect::<Vec<_>>(), vec![1, 0, 5]);
    assert_close(top[0].1, 2.011227598682676);
    assert_close(top[1].1, 1.9121794542879067);
    assert_close(top[2].1, 1.82242918003189);
}

#[test]
fn sample_corpus_statistics() {
    let engine = BM25Okapi::new(SAMPLE_CORPUS);
    let stats = engine.stats();
    assert_eq!(stats.num_docs, 8);
    assert_eq!(stats.total_doc_len, 74);
    assert_close(stats.avg_doc_len, 9.25);
}

#[test]
fn three_document_scenario() {
    let engine = BM25Okapi::new([
        "the quick brown fox jumps over the lazy dog",
        "a lazy brown dog naps under the tree",
        "the quick fox is a brown fox",
    ]);
    let scores = engine.get_scores("quick brown fox");

    assert!(scores[2] >= scores[0]);
    assert!(scores[1] < scores[0]);
    assert!(scores[1] < scores[2]);

    let lazy_dog = engine.get_scores("lazy dog");
    assert_close(lazy_dog[0], 0.889947700346955);
    assert_close(lazy_dog[1], 0.9400072584914713);
    assert_eq!(lazy_dog[2], 0.0);
}

#[test]
fn query_case_and_punctuation_are_ignored() {
    let engine = BM25Okapi::new(SAMPLE_CORPUS);
    assert_eq!(
        engine.get_scores("Quick, BROWN... fox?!"),
        engine.get_scores("quick brown fox")
    );
}

#[test]
fn unique_query_terms_from_config() {
    let params = BM25Params::from_json(r#"{"query_terms": "unique"}"#).unwrap();
    assert_eq!(params.query_terms, QueryTerms::Unique);

    let unique = BM25Okapi::with_params(SAMPLE_CORPUS, params).unwrap();
    let repeated = BM25Okapi::new(SAMPLE_CORPUS);
    assert_eq!(unique.get_scores("fox fox dog"), repeated.get_scores("fox dog"));
}

#[test]
fn custom_parameters_change_scores() {
    let default = BM25Okapi::new(SAMPLE_CORPUS);
    let no_norm = BM25Okapi::with_params(SAMPLE_CORPUS, BM25Params::new(1.2, 0.0)).unwrap();
    assert_ne!(
        default.get_scores("quick brown fox"),
        no_norm.get_scores("quick brown fox")
    );
}

#[test]
fn invalid_parameters_are_rejected() {
    let result = BM25Okapi::with_params(SAMPLE_CORPUS, BM25Params::new(1.5, -0.25));
    assert!(matches!(result, Err(Error::InvalidParameter { name: "b", .. })));
}

#[test]
fn empty_corpus() {
    let engine = BM25Okapi::new(Vec::<String>::new());
    assert_eq!(engine.stats().avg_doc_len, 0.0);
    assert!(engine.get_scores("quick brown fox").is_empty());
    assert!(engine.get_top_n("quick brown fox", 3).is_empty());
}
